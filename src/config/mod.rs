//! Configuration loading and management for the severance engine.
//!
//! This module loads the statutory parameters (FGTS rates, notice scaling,
//! month-counting threshold, predicted-value band) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded rules: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualRules, JurisdictionMetadata, NoticeRules, PredictedValueRules, SeveranceConfig,
    SeveranceFundRules, SeverancePolicy,
};
