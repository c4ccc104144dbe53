pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::adults::{adult_names, format_adult_names, DEFAULT_MESSAGE};
pub use core::grades::filter_by_min_grade;
pub use core::loader::{load_records, load_users};
pub use domain::model::{Record, UserRecord, ADULT_AGE};
pub use domain::ports::Storage;
pub use utils::error::{ReportError, Result};
