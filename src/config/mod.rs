//! Configuration loading and management for the InHand engine.
//!
//! Tax regimes are data: slab tables, rebate threshold, cess, standard
//! deduction and the statutory deduction rules are loaded from YAML so that a
//! regime change is a file change.
//!
//! # Example
//!
//! ```no_run
//! use inhand_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/inhand").unwrap();
//! println!("Default regime: {}", config.default_regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdvisorSettings, EngineConfig, EngineMetadata, ProvidentFundRule, RegimeConfig, SlabBand,
    SlabTable,
};
