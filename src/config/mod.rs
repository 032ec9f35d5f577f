pub mod lambda;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, DEFAULT_HOUR};
use crate::utils::error::Result;
use crate::utils::validation::{validate_log_level, validate_range, Validate};

/// Settings after CLI flags have been laid over the optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_hour: i64,
    pub strict_ranges: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_hour: DEFAULT_HOUR,
            strict_ranges: false,
            log_level: "info".to_string(),
        }
    }
}

impl ConfigProvider for Settings {
    fn default_hour(&self) -> i64 {
        self.default_hour
    }

    fn strict_ranges(&self) -> bool {
        self.strict_ranges
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("default_hour", self.default_hour, 0, 23)?;
        validate_log_level("log_level", &self.log_level)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use super::Settings;
    use crate::domain::model::BirthInput;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "bazi-chart")]
    #[command(about = "Compute a Four Pillars (BaZi) chart and its five-element balance")]
    pub struct CliConfig {
        #[arg(long, allow_negative_numbers = true)]
        pub year: i64,

        #[arg(long, allow_negative_numbers = true)]
        pub month: i64,

        #[arg(long, allow_negative_numbers = true)]
        pub day: i64,

        #[arg(long, allow_negative_numbers = true, help = "Hour of day (0-23)")]
        pub hour: Option<i64>,

        #[arg(long, help = "Hour used when --hour is omitted [default: 12]")]
        pub default_hour: Option<i64>,

        #[arg(long, help = "Reject month outside 1-12 and hour outside 0-23")]
        pub strict: bool,

        #[arg(long, help = "Print the chart as JSON")]
        pub json: bool,

        #[arg(long, help = "TOML config file")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn birth_input(&self) -> BirthInput {
            BirthInput::new(self.year, self.month, self.day, self.hour)
        }

        pub fn load_file(&self) -> Result<Option<TomlConfig>> {
            self.config.as_ref().map(TomlConfig::from_file).transpose()
        }

        /// Flags win over the file, the file wins over built-in defaults.
        pub fn settings(&self, file: Option<&TomlConfig>) -> Result<Settings> {
            let base = Settings::default();
            let settings = Settings {
                default_hour: self
                    .default_hour
                    .or_else(|| file.and_then(|f| f.chart.default_hour))
                    .unwrap_or(base.default_hour),
                strict_ranges: self.strict || file.is_some_and(|f| f.strict_ranges()),
                log_level: if self.verbose {
                    "debug".to_string()
                } else {
                    file.and_then(|f| f.log_level())
                        .map(str::to_string)
                        .unwrap_or(base.log_level)
                },
            };
            settings.validate()?;
            Ok(settings)
        }
    }

}
