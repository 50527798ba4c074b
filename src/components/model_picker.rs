use super::ImageDisplay;
use crate::utils::{
    config_for, format_model_id, CarouselSyncController, ProviderKey, ProviderResultStore,
    SnapPager,
};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Props, Clone)]
pub struct ModelPickerPanelProps {
    pub store: Signal<ProviderResultStore>,
    pub on_model_change: EventHandler<(ProviderKey, String)>,
    pub on_enabled_change: EventHandler<(ProviderKey, bool)>,
}

impl PartialEq for ModelPickerPanelProps {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
        // Skip callback comparison
    }
}

/// Carousel of provider cards: icon link, model dropdown, enable toggle and
/// a compact result preview. A pure view over the store; every change is
/// reported upward through the two callbacks.
#[component]
pub fn ModelPickerPanel(props: ModelPickerPanelProps) -> Element {
    let store = props.store;
    let on_model_change = props.on_model_change;
    let on_enabled_change = props.on_enabled_change;

    let mut current_slide = use_signal(|| 0usize);
    let pager = use_hook(|| Rc::new(RefCell::new(SnapPager::new(store.peek().len(), true))));
    let controller = use_hook(|| Rc::new(RefCell::new(CarouselSyncController::new())));

    // Bind once the pager exists; the controller's latch makes re-runs safe.
    {
        let pager = pager.clone();
        let controller = controller.clone();
        use_effect(move || {
            controller
                .borrow_mut()
                .bind(pager.clone(), move |index| current_slide.set(index));
        });
    }

    // Track provider-set changes.
    {
        let pager = pager.clone();
        use_effect(move || {
            let len = store.read().len();
            pager.borrow_mut().set_len(len);
        });
    }

    {
        let controller = controller.clone();
        use_drop(move || controller.borrow_mut().dispose());
    }

    let providers: Vec<ProviderKey> = store.read().providers().to_vec();
    let total = providers.len();
    if total == 0 {
        return rsx! {
            div {
                class: "text-center text-sm text-[var(--color-base-content)]/70 py-8",
                "No providers configured"
            }
        };
    }

    let index = (*current_slide.read()).min(total - 1);
    let key = providers[index];
    let result = match store.read().result_for(key) {
        Ok(result) => result.clone(),
        Err(e) => {
            tracing::warn!("model picker skipped rendering: {}", e);
            return rsx! { div {} };
        }
    };
    let models: Vec<&'static str> = config_for(key)
        .map(|config| config.models.to_vec())
        .unwrap_or_default();
    let selected_model = result.model_id.clone();
    let position = index + 1;

    let prev = {
        let controller = controller.clone();
        move |_| controller.borrow().prev()
    };
    let next = {
        let controller = controller.clone();
        move |_| controller.borrow().next()
    };

    rsx! {
        div {
            class: "relative w-full mb-8",

            div {
                class: if result.enabled {
                    "w-full rounded-xl border border-[var(--color-base-300)] bg-[var(--color-base-100)] p-4 transition-opacity"
                } else {
                    "w-full rounded-xl border border-[var(--color-base-300)] bg-[var(--color-base-100)] p-4 transition-opacity opacity-50"
                },

                div {
                    class: "flex items-center justify-between gap-2 mb-4",

                    div {
                        class: "flex items-center gap-2 min-w-0",
                        a {
                            href: "{key.docs_url()}",
                            target: "_blank",
                            class: "font-semibold text-lg text-[var(--color-base-content)] hover:opacity-80 truncate",
                            "{key.label()}"
                        }
                    }

                    label {
                        class: "flex items-center gap-1 text-xs text-[var(--color-base-content)]/70 cursor-pointer",
                        input {
                            r#type: "checkbox",
                            checked: result.enabled,
                            oninput: move |evt| on_enabled_change.call((key, evt.checked())),
                        }
                        span { "enabled" }
                    }
                }

                select {
                    value: "{selected_model}",
                    onchange: move |evt| on_model_change.call((key, evt.value().clone())),
                    class: "w-full mb-4 px-2 py-1 text-sm rounded bg-[var(--color-base-100)] text-[var(--color-base-content)] border border-[var(--color-base-300)] focus:outline-none focus:ring-1 focus:ring-[var(--color-primary)]",

                    for model in models.iter() {
                        option {
                            key: "{model}",
                            value: "{model}",
                            selected: *model == result.model_id,
                            "{format_model_id(model)}"
                        }
                    }
                }

                ImageDisplay {
                    provider: key,
                    result: result.clone(),
                    compact: true,
                }

                div {
                    class: "text-center text-sm text-[var(--color-base-content)]/60 mt-4",
                    "{position} of {total}"
                }
            }

            button {
                onclick: prev,
                class: "absolute left-0 top-1/2 -translate-y-1/2 -translate-x-3 h-8 w-8 rounded-full bg-[var(--color-base-100)]/80 border border-[var(--color-base-300)] text-[var(--color-base-content)]",
                span { class: "sr-only", "Previous model" }
                "‹"
            }
            button {
                onclick: next,
                class: "absolute right-0 top-1/2 -translate-y-1/2 translate-x-3 h-8 w-8 rounded-full bg-[var(--color-base-100)]/80 border border-[var(--color-base-300)] text-[var(--color-base-content)]",
                span { class: "sr-only", "Next model" }
                "›"
            }

            // Dot indicators
            div {
                class: "flex justify-center gap-1 mt-3",
                for dot in 0..total {
                    {
                        let controller = controller.clone();
                        let dot_position = dot + 1;
                        rsx! {
                            button {
                                key: "{dot}",
                                onclick: move |_| controller.borrow().scroll_to(dot),
                                class: if dot == index {
                                    "h-1.5 w-4 rounded-full bg-[var(--color-primary)] transition-all"
                                } else {
                                    "h-1.5 w-1.5 rounded-full bg-[var(--color-primary)]/50 transition-all"
                                },
                                span { class: "sr-only", "Go to model {dot_position}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
