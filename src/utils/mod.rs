mod formatting;
mod generation;
mod pager;
mod providers;
mod settings;
mod store;
mod suggestions;
mod types;

pub use formatting::{format_duration, format_elapsed_secs, format_model_id};
pub use generation::{ApiError, GenerateImageRequest, GenerateImageResponse, GenerationClient};
pub use pager::{CarouselSyncController, Pager, SnapPager, SubscriptionId};
pub use providers::{config_for, provider_catalog, GenerationMode, ProviderConfig, ProviderKey};
pub use settings::Settings;
pub use store::ProviderResultStore;
pub use suggestions::{base_prompts, styled_suggestions, ART_STYLES, SUGGESTION_COUNT};
pub use types::{
    GenerationEvent, InvalidConfigurationError, ProviderResult, ProviderTiming, Suggestion,
    UnknownProviderError,
};
