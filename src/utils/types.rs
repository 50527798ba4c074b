use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

use super::providers::ProviderKey;

/// Wall-clock bookkeeping for one provider's generation attempt.
/// `start_at` is stamped when the request goes out; `elapsed` lands once the
/// attempt finishes successfully.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProviderTiming {
    pub start_at: Option<Instant>,
    pub elapsed: Option<Duration>,
}

/// Latest known state for one provider. One of these exists per configured
/// provider for the whole session; entries are overwritten, never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderResult {
    /// Base64 image payload, present once generation succeeds.
    pub image: Option<String>,
    pub model_id: String,
    pub timing: ProviderTiming,
    pub failed: bool,
    /// Disabled providers sit out the next generation cycle but keep their
    /// last result on screen.
    pub enabled: bool,
}

impl ProviderResult {
    pub fn in_flight(&self) -> bool {
        !self.failed && self.timing.start_at.is_some() && self.timing.elapsed.is_none()
    }
}

/// A prompt chip: short display text plus the full prompt it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub prompt: String,
}

/// Events emitted by the generation collaborator. They may arrive in any
/// order and any subset per provider; the store is total over all of them.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationEvent {
    Started {
        key: ProviderKey,
        cycle: Uuid,
        at: Instant,
    },
    Completed {
        key: ProviderKey,
        cycle: Uuid,
        image: String,
        elapsed: Duration,
    },
    Failed {
        key: ProviderKey,
        cycle: Uuid,
    },
}

impl GenerationEvent {
    pub fn key(&self) -> ProviderKey {
        match self {
            GenerationEvent::Started { key, .. }
            | GenerationEvent::Completed { key, .. }
            | GenerationEvent::Failed { key, .. } => *key,
        }
    }

    pub fn cycle(&self) -> Uuid {
        match self {
            GenerationEvent::Started { cycle, .. }
            | GenerationEvent::Completed { cycle, .. }
            | GenerationEvent::Failed { cycle, .. } => *cycle,
        }
    }
}

/// A store access named a provider outside the configured set. Programmer
/// error; callers log it and drop the mutation instead of crashing the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown provider: {key}")]
pub struct UnknownProviderError {
    pub key: ProviderKey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid configuration: {reason}")]
pub struct InvalidConfigurationError {
    pub reason: &'static str,
}
