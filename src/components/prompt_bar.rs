use crate::utils::{base_prompts, styled_suggestions, Suggestion, ART_STYLES, SUGGESTION_COUNT};
use dioxus::prelude::*;
use rand::thread_rng;

/// Text to forward for a submit gesture, or `None` when the gesture should
/// be swallowed: blank input (after trimming) and in-flight generations
/// never submit. The raw, untrimmed text is what gets forwarded.
fn submission(input: &str, is_loading: bool) -> Option<String> {
    if is_loading || input.trim().is_empty() {
        return None;
    }
    Some(input.to_string())
}

fn fresh_suggestions() -> Vec<Suggestion> {
    match styled_suggestions(&base_prompts(), &ART_STYLES, SUGGESTION_COUNT, &mut thread_rng()) {
        Ok(chips) => chips,
        Err(e) => {
            // Unreachable with the built-in style list; keep the bar usable.
            tracing::warn!("suggestion refresh failed: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn PromptBar(is_loading: Signal<bool>, on_submit: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);
    let mut chips = use_signal(fresh_suggestions);

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if let Some(text) = submission(&input.read(), *is_loading.read()) {
                on_submit.call(text);
                chips.set(fresh_suggestions());
            }
        }
    };

    let submit_click = move |_: MouseEvent| {
        if let Some(text) = submission(&input.read(), *is_loading.read()) {
            on_submit.call(text);
            chips.set(fresh_suggestions());
        }
    };

    let loading = *is_loading.read();
    let has_content = !input.read().trim().is_empty();
    let chip_list = chips.read().clone();

    rsx! {
        div {
            class: "w-full mb-8",

            div {
                class: "bg-[var(--color-base-200)] rounded-xl p-4",

                div {
                    class: "flex flex-col gap-3",

                    textarea {
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value().clone()),
                        onkeydown: handle_keydown,
                        placeholder: "Enter your prompt here",
                        rows: "3",
                        class: "w-full text-base bg-transparent border-none p-0 resize-none text-[var(--color-base-content)] placeholder:text-[var(--color-base-content)]/50 focus:outline-none",
                        autofocus: true,
                    }

                    div {
                        class: "flex items-center justify-between pt-1",

                        div {
                            class: "flex items-center gap-2 min-w-0",

                            button {
                                onclick: move |_| chips.set(fresh_suggestions()),
                                class: "px-2 py-1 rounded-lg bg-[var(--color-base-100)] text-sm text-[var(--color-base-content)]/70 hover:opacity-70 transition-opacity duration-200",
                                title: "Refresh suggestions",
                                "⟳"
                            }

                            for (index, chip) in chip_list.into_iter().enumerate() {
                                {
                                    let prompt = chip.prompt.clone();
                                    let label = chip.text.to_lowercase();
                                    rsx! {
                                        button {
                                            key: "{index}",
                                            onclick: move |_| {
                                                // Chips both fill the input and fire the prompt.
                                                input.set(prompt.clone());
                                                on_submit.call(prompt.clone());
                                                chips.set(fresh_suggestions());
                                            },
                                            class: "px-2 py-1 rounded-lg bg-[var(--color-base-100)] text-xs sm:text-sm text-[var(--color-base-content)] hover:opacity-70 transition-opacity duration-200 truncate",
                                            "{label} ↗"
                                        }
                                    }
                                }
                            }
                        }

                        button {
                            onclick: submit_click,
                            disabled: loading || !has_content,
                            class: "h-8 w-8 rounded-full bg-[var(--color-primary)] text-[var(--color-primary-content)] flex items-center justify-center disabled:opacity-50 disabled:cursor-not-allowed",
                            if loading {
                                span {
                                    class: "inline-block w-2 h-2 bg-[var(--color-primary-content)] rounded-full animate-pulse"
                                }
                            } else {
                                span { "↑" }
                            }
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

    #[test]
    fn test_whitespace_only_input_never_submits() {
        assert_eq!(submission("  ", false), None);
        assert_eq!(submission("", false), None);
        assert_eq!(submission("\n\t", false), None);
    }

    #[test]
    fn test_in_flight_generation_blocks_submit() {
        assert_eq!(submission("a cat", true), None);
    }

    #[test]
    fn test_submit_forwards_raw_text() {
        assert_eq!(submission(" a cat ", false), Some(" a cat ".to_string()));
    }

    #[test]
    fn test_fresh_suggestions_fill_the_bar() {
        let chips = fresh_suggestions();
        assert_eq!(chips.len(), SUGGESTION_COUNT);
        for chip in &chips {
            assert!(ART_STYLES
                .iter()
                .any(|style| chip.prompt.ends_with(&format!(", in the style of {}", style))));
        }
    }
}
