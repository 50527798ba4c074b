use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::providers::{GenerationMode, ProviderConfig, ProviderKey};
use super::types::{GenerationEvent, ProviderResult, ProviderTiming, UnknownProviderError};

/// Shared state for every provider's latest result. Owned by the app root
/// inside a signal; panels read it, only the generation plumbing and the
/// handlers in `main.rs` write it.
///
/// Retry policy: a `Started` event clears the previous attempt's `failed`
/// flag and stale image for that provider, so a retry after a failure starts
/// from a clean pending state without the collaborator having to reset
/// anything explicitly. A `Completed` event also clears `failed`, keeping
/// `image` and `failed` mutually exclusive within a cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderResultStore {
    order: Vec<ProviderKey>,
    entries: HashMap<ProviderKey, ProviderResult>,
    cycle: Option<Uuid>,
}

impl ProviderResultStore {
    pub fn new(catalog: &[ProviderConfig]) -> Self {
        let order: Vec<ProviderKey> = catalog.iter().map(|c| c.key).collect();
        let entries = catalog
            .iter()
            .map(|c| {
                (
                    c.key,
                    ProviderResult {
                        image: None,
                        model_id: c.performance_model.to_string(),
                        timing: ProviderTiming::default(),
                        failed: false,
                        enabled: true,
                    },
                )
            })
            .collect();

        Self {
            order,
            entries,
            cycle: None,
        }
    }

    /// Configured providers in display order.
    pub fn providers(&self) -> &[ProviderKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn enabled_providers(&self) -> Vec<ProviderKey> {
        self.order
            .iter()
            .copied()
            .filter(|key| self.entries.get(key).map(|r| r.enabled).unwrap_or(false))
            .collect()
    }

    pub fn result_for(&self, key: ProviderKey) -> Result<&ProviderResult, UnknownProviderError> {
        self.entries.get(&key).ok_or(UnknownProviderError { key })
    }

    pub fn is_enabled(&self, key: ProviderKey) -> Result<bool, UnknownProviderError> {
        self.result_for(key).map(|r| r.enabled)
    }

    pub fn model_for(&self, key: ProviderKey) -> Result<&str, UnknownProviderError> {
        self.result_for(key).map(|r| r.model_id.as_str())
    }

    fn entry_mut(
        &mut self,
        key: ProviderKey,
    ) -> Result<&mut ProviderResult, UnknownProviderError> {
        self.entries.get_mut(&key).ok_or(UnknownProviderError { key })
    }

    pub fn set_result(
        &mut self,
        key: ProviderKey,
        image: String,
        elapsed: Duration,
    ) -> Result<(), UnknownProviderError> {
        let entry = self.entry_mut(key)?;
        entry.image = Some(image);
        entry.timing.elapsed = Some(elapsed);
        entry.failed = false;
        Ok(())
    }

    pub fn set_failed(&mut self, key: ProviderKey) -> Result<(), UnknownProviderError> {
        let entry = self.entry_mut(key)?;
        entry.failed = true;
        entry.image = None;
        entry.timing.elapsed = None;
        Ok(())
    }

    pub fn set_enabled(
        &mut self,
        key: ProviderKey,
        enabled: bool,
    ) -> Result<(), UnknownProviderError> {
        self.entry_mut(key)?.enabled = enabled;
        Ok(())
    }

    pub fn set_model(
        &mut self,
        key: ProviderKey,
        model_id: String,
    ) -> Result<(), UnknownProviderError> {
        self.entry_mut(key)?.model_id = model_id;
        Ok(())
    }

    /// Snap every provider back to its default model for the given mode.
    pub fn set_mode_models(&mut self, catalog: &[ProviderConfig], mode: GenerationMode) {
        for config in catalog {
            if let Some(entry) = self.entries.get_mut(&config.key) {
                entry.model_id = config.default_model(mode).to_string();
            }
        }
    }

    pub fn mark_started(
        &mut self,
        key: ProviderKey,
        at: Instant,
    ) -> Result<(), UnknownProviderError> {
        let entry = self.entry_mut(key)?;
        entry.failed = false;
        entry.image = None;
        entry.timing = ProviderTiming {
            start_at: Some(at),
            elapsed: None,
        };
        Ok(())
    }

    /// Opens a new generation cycle. Per-provider state is untouched here;
    /// each provider is reset by its own `Started` event, so disabled
    /// providers keep their last result.
    pub fn begin_cycle(&mut self, cycle: Uuid) {
        self.cycle = Some(cycle);
    }

    pub fn current_cycle(&self) -> Option<Uuid> {
        self.cycle
    }

    /// Applies one collaborator event. Events from any cycle other than the
    /// current one are dropped, so a straggler from an abandoned cycle can
    /// never clobber a fresh result.
    pub fn apply_event(&mut self, event: GenerationEvent) -> Result<(), UnknownProviderError> {
        if self.cycle != Some(event.cycle()) {
            tracing::debug!(provider = %event.key(), "dropping stale generation event");
            return Ok(());
        }

        match event {
            GenerationEvent::Started { key, at, .. } => self.mark_started(key, at),
            GenerationEvent::Completed {
                key, image, elapsed, ..
            } => self.set_result(key, image, elapsed),
            GenerationEvent::Failed { key, .. } => self.set_failed(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::providers::provider_catalog;

    fn store() -> ProviderResultStore {
        ProviderResultStore::new(&provider_catalog())
    }

    #[test]
    fn test_one_entry_per_configured_provider() {
        let store = store();
        assert_eq!(store.len(), provider_catalog().len());
        for config in provider_catalog() {
            let result = store.result_for(config.key).unwrap();
            assert_eq!(result.model_id, config.performance_model);
            assert!(result.enabled);
            assert!(!result.failed);
            assert!(result.image.is_none());
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let catalog: Vec<_> = provider_catalog()
            .into_iter()
            .filter(|c| c.key != ProviderKey::Flux)
            .collect();
        let mut store = ProviderResultStore::new(&catalog);

        let err = store.set_failed(ProviderKey::Flux).unwrap_err();
        assert_eq!(err, UnknownProviderError { key: ProviderKey::Flux });
        assert!(store.result_for(ProviderKey::Flux).is_err());
        assert!(store.is_enabled(ProviderKey::Flux).is_err());
        assert!(store.model_for(ProviderKey::Flux).is_err());
    }

    #[test]
    fn test_set_failed_marks_provider_failed() {
        let mut store = store();
        store.set_failed(ProviderKey::Fal).unwrap();

        let result = store.result_for(ProviderKey::Fal).unwrap();
        assert!(result.failed);
        assert!(result.image.is_none());
        assert!(!result.in_flight());
    }

    #[test]
    fn test_result_clears_failed_flag() {
        let mut store = store();
        store.set_failed(ProviderKey::Fal).unwrap();
        store
            .set_result(ProviderKey::Fal, "aGk=".to_string(), Duration::from_secs(3))
            .unwrap();

        let result = store.result_for(ProviderKey::Fal).unwrap();
        assert!(!result.failed);
        assert_eq!(result.image.as_deref(), Some("aGk="));
        assert_eq!(result.timing.elapsed, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_retry_start_clears_failure_and_stale_image() {
        let mut store = store();
        store
            .set_result(ProviderKey::OpenAi, "b2xk".to_string(), Duration::from_secs(5))
            .unwrap();
        store.set_failed(ProviderKey::OpenAi).unwrap();

        store.mark_started(ProviderKey::OpenAi, Instant::now()).unwrap();

        let result = store.result_for(ProviderKey::OpenAi).unwrap();
        assert!(!result.failed);
        assert!(result.image.is_none());
        assert!(result.in_flight());
    }

    #[test]
    fn test_disabling_retains_last_result() {
        let mut store = store();
        store
            .set_result(ProviderKey::Gemini, "aW1n".to_string(), Duration::from_secs(2))
            .unwrap();
        store.set_enabled(ProviderKey::Gemini, false).unwrap();

        let result = store.result_for(ProviderKey::Gemini).unwrap();
        assert!(!result.enabled);
        assert_eq!(result.image.as_deref(), Some("aW1n"));
        assert!(!store.enabled_providers().contains(&ProviderKey::Gemini));
    }

    #[test]
    fn test_stale_cycle_events_are_dropped() {
        let mut store = store();
        let old = Uuid::new_v4();
        let current = Uuid::new_v4();
        store.begin_cycle(current);

        store
            .apply_event(GenerationEvent::Completed {
                key: ProviderKey::Fal,
                cycle: current,
                image: "bmV3".to_string(),
                elapsed: Duration::from_secs(1),
            })
            .unwrap();

        // A failure straggling in from an abandoned cycle must not clobber
        // the fresh result.
        store
            .apply_event(GenerationEvent::Failed {
                key: ProviderKey::Fal,
                cycle: old,
            })
            .unwrap();

        let result = store.result_for(ProviderKey::Fal).unwrap();
        assert!(!result.failed);
        assert_eq!(result.image.as_deref(), Some("bmV3"));
    }

    #[test]
    fn test_events_apply_in_any_order() {
        let mut store = store();
        let cycle = Uuid::new_v4();
        store.begin_cycle(cycle);

        // Failure without a preceding start is legal.
        store
            .apply_event(GenerationEvent::Failed {
                key: ProviderKey::Flux,
                cycle,
            })
            .unwrap();
        assert!(store.result_for(ProviderKey::Flux).unwrap().failed);

        // Other providers are unaffected by one provider's failure.
        assert!(!store.result_for(ProviderKey::Fal).unwrap().failed);
    }

    #[test]
    fn test_mode_switch_resets_models() {
        let catalog = provider_catalog();
        let mut store = ProviderResultStore::new(&catalog);
        store
            .set_model(ProviderKey::Fal, "fal-ai/recraft/v3".to_string())
            .unwrap();

        store.set_mode_models(&catalog, GenerationMode::Quality);
        for config in &catalog {
            assert_eq!(
                store.model_for(config.key).unwrap(),
                config.quality_model
            );
        }
    }
}
