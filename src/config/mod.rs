//! Profile configuration for the fantasy scoring engine.
//!
//! This module provides the default profile catalog, loading of custom
//! profiles from YAML files, and JSON export/import of rule sets.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use fantasy_scoring::config::ProfileLoader;
//!
//! let loader = ProfileLoader::load_with_defaults("./config/profiles", Utc::now()).unwrap();
//! for profile in loader.public_profiles() {
//!     println!("{}", profile.name);
//! }
//! ```

mod defaults;
mod export;
mod loader;
mod types;

pub use defaults::{DEFAULT_PROFILE_NAMES, defaults, seed_default_profiles};
pub use export::{IMPORT_SOURCE, export_profile, export_rules, import_profile, import_rules};
pub use loader::ProfileLoader;
pub use types::ProfileFile;
