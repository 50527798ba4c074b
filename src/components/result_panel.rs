use super::ImageDisplay;
use crate::utils::{CarouselSyncController, ProviderKey, ProviderResultStore, SnapPager};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub store: Signal<ProviderResultStore>,
}

/// Carousel of generated images, one slide per provider. Failed and pending
/// providers keep their slide and dot; a disabled provider's last result
/// stays navigable at reduced emphasis.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let store = props.store;

    let mut current_slide = use_signal(|| 0usize);
    let pager = use_hook(|| Rc::new(RefCell::new(SnapPager::new(store.peek().len(), true))));
    let controller = use_hook(|| Rc::new(RefCell::new(CarouselSyncController::new())));

    {
        let pager = pager.clone();
        let controller = controller.clone();
        use_effect(move || {
            controller
                .borrow_mut()
                .bind(pager.clone(), move |index| current_slide.set(index));
        });
    }

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
            tracing::warn!("result panel skipped rendering: {}", e);
            return rsx! { div {} };
        }
    };

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
            class: "relative w-full",

            div {
                class: "w-full px-10",

                ImageDisplay {
                    provider: key,
                    result: result.clone(),
                }

                div {
                    class: "text-center text-sm text-[var(--color-base-content)]/60 mt-4",
                    "{position} of {total}"
                }
            }

            button {
                onclick: prev,
                class: "absolute left-0 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full bg-[var(--color-base-100)]/80 border border-[var(--color-base-300)] text-[var(--color-base-content)]",
                span { class: "sr-only", "Previous image" }
                "‹"
            }
            button {
                onclick: next,
                class: "absolute right-0 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full bg-[var(--color-base-100)]/80 border border-[var(--color-base-300)] text-[var(--color-base-content)]",
                span { class: "sr-only", "Next image" }
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
                                span { class: "sr-only", "Go to image {dot_position}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
