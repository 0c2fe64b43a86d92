// Normalized gamification events and their catalog
pub mod event;

// Host-supplied plugin and user configuration
pub mod config;

pub use config::{load_config, AdapterConfig, PluginConfig, UserConfig};
pub use event::{EventType, EventTypeCatalog, EventTypeInfo, NormalizedEvent};
