//! Configuration file management and merged-settings resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_MODULE, FiletrConfig, LanguagesConfig, LimitsConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
