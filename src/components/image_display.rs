use super::Stopwatch;
use crate::utils::{format_duration, format_model_id, ProviderKey, ProviderResult};
use dioxus::prelude::*;

/// What a provider's slide should show right now. `Failed` wins over a
/// leftover image; anything without an image or a failure is pending.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DisplayState {
    Ready(String),
    Failed,
    Pending,
}

pub(crate) fn display_state(result: &ProviderResult) -> DisplayState {
    if result.failed {
        return DisplayState::Failed;
    }
    match &result.image {
        Some(image) => DisplayState::Ready(image.clone()),
        None => DisplayState::Pending,
    }
}

/// Single-item renderer shared by both carousels: the generated image, or a
/// pending/failed placeholder, plus model and timing chips.
#[component]
pub fn ImageDisplay(
    provider: ProviderKey,
    result: ProviderResult,
    #[props(default)] compact: bool,
) -> Element {
    let state = display_state(&result);
    let model_label = format_model_id(&result.model_id);
    let ticking = if result.in_flight() {
        result.timing.start_at
    } else {
        None
    };

    let frame_class = if compact {
        "aspect-square w-full overflow-hidden rounded-lg bg-[var(--color-base-200)] flex items-center justify-center"
    } else {
        "aspect-square w-full max-h-[28rem] overflow-hidden rounded-xl bg-[var(--color-base-200)] flex items-center justify-center"
    };

    rsx! {
        div {
            class: if result.enabled {
                "flex flex-col gap-2 transition-opacity duration-200"
            } else {
                "flex flex-col gap-2 transition-opacity duration-200 opacity-50"
            },

            div {
                class: "{frame_class}",

                match state {
                    DisplayState::Ready(image) => rsx! {
                        img {
                            src: "data:image/png;base64,{image}",
                            alt: "Image generated by {provider.label()}",
                            class: "object-cover w-full h-full",
                        }
                    },
                    DisplayState::Failed => rsx! {
                        div {
                            class: "text-center p-4",
                            div { class: "text-2xl mb-2", "⚠️" }
                            p {
                                class: "text-sm text-red-500 font-medium",
                                "Generation failed"
                            }
                            p {
                                class: "text-xs text-[var(--color-base-content)]/60 mt-1",
                                "{provider.label()} did not return an image"
                            }
                        }
                    },
                    DisplayState::Pending => rsx! {
                        div {
                            class: "text-center p-4",
                            if let Some(start) = ticking {
                                div {
                                    class: "flex flex-col items-center gap-2",
                                    span {
                                        class: "inline-block w-2 h-2 bg-[var(--color-primary)] rounded-full animate-pulse"
                                    }
                                    Stopwatch { start }
                                }
                            } else {
                                p {
                                    class: "text-sm text-[var(--color-base-content)]/50",
                                    "No image yet"
                                }
                            }
                        }
                    },
                }
            }

            div {
                class: "flex items-center justify-between text-xs text-[var(--color-base-content)]/60",
                span {
                    class: "font-mono truncate",
                    "{model_label}"
                }
                if !result.failed {
                    if let Some(elapsed) = result.timing.elapsed {
                        span {
                            class: "font-mono",
                            "{format_duration(elapsed)}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ProviderTiming;
    use std::time::{Duration, Instant};

    fn result() -> ProviderResult {
        ProviderResult {
            image: None,
            model_id: "fal-ai/flux/schnell".to_string(),
            timing: ProviderTiming::default(),
            failed: false,
            enabled: true,
        }
    }

    #[test]
    fn test_pending_before_any_outcome() {
        assert_eq!(display_state(&result()), DisplayState::Pending);
    }

    #[test]
    fn test_ready_once_image_lands() {
        let mut r = result();
        r.image = Some("aW1n".to_string());
        assert_eq!(display_state(&r), DisplayState::Ready("aW1n".to_string()));
    }

    #[test]
    fn test_failed_wins_over_a_leftover_image() {
        let mut r = result();
        r.image = Some("aW1n".to_string());
        r.failed = true;
        assert_eq!(display_state(&r), DisplayState::Failed);
    }

    #[test]
    fn test_in_flight_only_while_running() {
        let mut r = result();
        r.timing = ProviderTiming {
            start_at: Some(Instant::now()),
            elapsed: None,
        };
        assert!(r.in_flight());

        r.timing.elapsed = Some(Duration::from_secs(4));
        assert!(!r.in_flight());

        r.timing.elapsed = None;
        r.failed = true;
        assert!(!r.in_flight());
    }
}
