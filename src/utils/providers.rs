use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    Fal,
    OpenAi,
    Gemini,
    Flux,
}

impl ProviderKey {
    pub fn all() -> Vec<ProviderKey> {
        vec![
            ProviderKey::Fal,
            ProviderKey::OpenAi,
            ProviderKey::Gemini,
            ProviderKey::Flux,
        ]
    }

    /// Stable lowercase identifier used on the wire and in settings files.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKey::Fal => "fal",
            ProviderKey::OpenAi => "openai",
            ProviderKey::Gemini => "gemini",
            ProviderKey::Flux => "flux",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderKey::Fal => "fal.ai",
            ProviderKey::OpenAi => "OpenAI",
            ProviderKey::Gemini => "Google Gemini",
            ProviderKey::Flux => "Black Forest Labs",
        }
    }

    pub fn docs_url(&self) -> &'static str {
        match self {
            ProviderKey::Fal => "https://fal.ai/models",
            ProviderKey::OpenAi => "https://platform.openai.com/docs/guides/image-generation",
            ProviderKey::Gemini => "https://ai.google.dev/gemini-api/docs/image-generation",
            ProviderKey::Flux => "https://docs.bfl.ml",
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Performance,
    Quality,
}

impl GenerationMode {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationMode::Performance => "Performance",
            GenerationMode::Quality => "Quality",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProviderConfig {
    pub key: ProviderKey,
    pub models: &'static [&'static str],
    pub performance_model: &'static str,
    pub quality_model: &'static str,
}

impl ProviderConfig {
    pub fn default_model(&self, mode: GenerationMode) -> &'static str {
        match mode {
            GenerationMode::Performance => self.performance_model,
            GenerationMode::Quality => self.quality_model,
        }
    }
}

/// The provider set for a session. Fixed at startup; enable/disable state
/// lives in the result store, not here.
pub fn provider_catalog() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            key: ProviderKey::Fal,
            models: &[
                "fal-ai/flux/schnell",
                "fal-ai/flux-pro/v1.1",
                "fal-ai/flux-pro/v1.1-ultra",
                "fal-ai/recraft/v3",
                "fal-ai/ideogram/v3",
            ],
            performance_model: "fal-ai/flux/schnell",
            quality_model: "fal-ai/flux-pro/v1.1",
        },
        ProviderConfig {
            key: ProviderKey::OpenAi,
            models: &["dall-e-3", "gpt-image-1"],
            performance_model: "dall-e-3",
            quality_model: "gpt-image-1",
        },
        ProviderConfig {
            key: ProviderKey::Gemini,
            models: &["gemini-2.5-flash-image", "imagen-4.0-generate-001"],
            performance_model: "gemini-2.5-flash-image",
            quality_model: "imagen-4.0-generate-001",
        },
        ProviderConfig {
            key: ProviderKey::Flux,
            models: &["flux-dev", "flux-pro", "flux-pro-1.1"],
            performance_model: "flux-dev",
            quality_model: "flux-pro-1.1",
        },
    ]
}

pub fn config_for(key: ProviderKey) -> Option<ProviderConfig> {
    provider_catalog().into_iter().find(|c| c.key == key)
}
