use crate::utils::format_elapsed_secs;
use dioxus::prelude::*;
use std::time::{Duration, Instant};

const TICK_MS: u64 = 100;

/// Live elapsed-time readout for an in-flight generation. The ticking task
/// is scoped to the component, so unmounting stops the clock deterministically.
#[component]
pub fn Stopwatch(start: Instant) -> Element {
    let mut start_at = use_signal(|| start);
    if *start_at.peek() != start {
        start_at.set(start);
    }

    let mut elapsed = use_signal(|| Duration::ZERO);

    use_hook(move || {
        spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
            loop {
                ticker.tick().await;
                elapsed.set(start_at.peek().elapsed());
            }
        })
    });

    let readout = format_elapsed_secs(elapsed());

    rsx! {
        div {
            class: "text-lg text-[var(--color-base-content)]/60 font-mono",
            "{readout}"
        }
    }
}
