pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{handle_request, ApiResponse};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig, Settings};
pub use core::chart::{calculate_chart, ChartEngine};
pub use domain::model::{BirthInput, Branch, Chart, Element, ElementTally, Pillar, Pillars, Stem};
pub use utils::error::{BaziError, Result};
