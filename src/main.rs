use dioxus::prelude::*;

mod components;
mod utils;

use components::{ModelPickerPanel, PromptBar, ResultPanel};
use utils::{
    provider_catalog, GenerationClient, GenerationEvent, GenerationMode, ProviderKey,
    ProviderResultStore, Settings,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use uuid::Uuid;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    tracing_subscriber::fmt().init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let mut app_settings = use_signal(|| {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load settings: {}", e);
            Settings::default()
        })
    });

    // Gateway client; without one the prompt bar still renders but submits go nowhere.
    let client = use_signal(|| {
        let base_url = app_settings.peek().gateway_url().map(str::to_string);
        match GenerationClient::new(base_url) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!("failed to build generation client: {}", e);
                None
            }
        }
    });

    // One result entry per configured provider, seeded with the persisted
    // enable/disable choices.
    let mut store = use_signal(|| {
        let mut store = ProviderResultStore::new(&provider_catalog());
        for key in app_settings.peek().disabled_providers.clone() {
            if let Err(e) = store.set_enabled(key, false) {
                tracing::warn!("settings named a provider outside the catalog: {}", e);
            }
        }
        store
    });

    let mut is_loading = use_signal(|| false);
    let mut show_providers = use_signal(|| true);
    let mut mode = use_signal(|| GenerationMode::Performance);

    // Fan a submitted prompt out to every enabled provider and funnel the
    // results back into the store in arrival order.
    let submit_prompt = move |prompt: String| {
        if *is_loading.read() {
            return;
        }

        let targets: Vec<(ProviderKey, String)> = {
            let snapshot = store.read();
            snapshot
                .enabled_providers()
                .into_iter()
                .filter_map(|key| {
                    snapshot
                        .model_for(key)
                        .map(|model| (key, model.to_string()))
                        .ok()
                })
                .collect()
        };
        if targets.is_empty() {
            return;
        }

        let Some(client) = client.peek().as_ref().map(Arc::clone) else {
            tracing::warn!("no generation client; prompt dropped");
            return;
        };

        let cycle = Uuid::new_v4();
        store.write().begin_cycle(cycle);
        is_loading.set(true);

        spawn(async move {
            let (tx, mut rx) = mpsc::unbounded_channel::<GenerationEvent>();

            // One request per enabled provider, all in flight at once.
            let requests: Vec<_> = targets
                .into_iter()
                .map(|(key, model_id)| {
                    let tx = tx.clone();
                    let client = client.clone();
                    let prompt = prompt.clone();
                    async move {
                        let started = Instant::now();
                        let _ = tx.send(GenerationEvent::Started {
                            key,
                            cycle,
                            at: started,
                        });
                        match client.generate_image(key, model_id, prompt).await {
                            Ok(image) => {
                                let _ = tx.send(GenerationEvent::Completed {
                                    key,
                                    cycle,
                                    image,
                                    elapsed: started.elapsed(),
                                });
                            }
                            Err(e) => {
                                tracing::warn!("generation failed for {}: {}", key, e);
                                let _ = tx.send(GenerationEvent::Failed { key, cycle });
                            }
                        }
                    }
                })
                .collect();
            drop(tx);

            // Ingest events in arrival order while the requests run; the
            // channel closes once every request has reported.
            let ingest = async {
                while let Some(event) = rx.recv().await {
                    if let Err(e) = store.write().apply_event(event) {
                        tracing::warn!("dropping generation event: {}", e);
                    }
                }
            };
            futures::join!(join_all(requests), ingest);

            is_loading.set(false);
        });
    };

    // Picker callbacks; the panels never touch the store themselves.
    let on_model_change = move |(key, model_id): (ProviderKey, String)| {
        if let Err(e) = store.write().set_model(key, model_id) {
            tracing::warn!("model change ignored: {}", e);
        }
    };

    let on_enabled_change = move |(key, enabled): (ProviderKey, bool)| {
        if let Err(e) = store.write().set_enabled(key, enabled) {
            tracing::warn!("enable change ignored: {}", e);
            return;
        }
        let mut settings = app_settings.write();
        settings.set_disabled(key, !enabled);
        if let Err(e) = settings.save() {
            tracing::warn!("failed to save settings: {}", e);
        }
    };

    let current_mode = *mode.read();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div {
            class: "font-inter antialiased min-h-screen bg-[var(--color-base-100)] text-[var(--color-base-content)]",

            div {
                class: "max-w-3xl mx-auto px-4 py-8 flex flex-col",

                // Header
                div {
                    class: "flex items-center justify-between mb-6",
                    div {
                        h1 {
                            class: "text-2xl font-bold",
                            "imgarena"
                        }
                        p {
                            class: "text-sm text-[var(--color-base-content)]/70",
                            "One prompt, every image model at once"
                        }
                    }

                    div {
                        class: "flex items-center gap-2",

                        for mode_option in [GenerationMode::Performance, GenerationMode::Quality] {
                            button {
                                key: "{mode_option.name()}",
                                onclick: move |_| {
                                    mode.set(mode_option);
                                    store.write().set_mode_models(&provider_catalog(), mode_option);
                                },
                                class: if mode_option == current_mode {
                                    "px-3 py-1 text-xs rounded bg-[var(--color-primary)] text-[var(--color-primary-content)] font-medium"
                                } else {
                                    "px-3 py-1 text-xs rounded border border-[var(--color-base-300)] bg-[var(--color-base-200)] text-[var(--color-base-content)]/70 hover:border-[var(--color-primary)]/50"
                                },
                                "{mode_option.name()}"
                            }
                        }

                        button {
                            onclick: move |_| {
                                let showing = *show_providers.read();
                                show_providers.set(!showing);
                            },
                            class: "px-3 py-1 text-xs rounded border border-[var(--color-base-300)] bg-[var(--color-base-200)] text-[var(--color-base-content)]/70 hover:border-[var(--color-primary)]/50",
                            if *show_providers.read() {
                                "Hide providers"
                            } else {
                                "Show providers"
                            }
                        }
                    }
                }

                PromptBar {
                    is_loading,
                    on_submit: submit_prompt,
                }

                if *show_providers.read() {
                    ModelPickerPanel {
                        store,
                        on_model_change,
                        on_enabled_change,
                    }
                }

                ResultPanel { store }
            }
        }
    }
}
