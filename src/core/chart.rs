use crate::core::elements::analyze_five_elements;
use crate::core::pillars::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::domain::model::{BirthInput, Chart, Pillars};
use crate::domain::ports::{ConfigProvider, DEFAULT_HOUR};
use crate::utils::error::Result;
use crate::utils::validation::ensure_input_range;

/// Assembles the four pillars and the element analysis into a [`Chart`].
///
/// The engine carries only immutable settings, so one instance can serve any
/// number of concurrent calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEngine {
    default_hour: i64,
    strict_ranges: bool,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngine {
    pub fn new() -> Self {
        Self {
            default_hour: DEFAULT_HOUR,
            strict_ranges: false,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            default_hour: config.default_hour(),
            strict_ranges: config.strict_ranges(),
        }
    }

    pub fn with_default_hour(mut self, hour: i64) -> Self {
        self.default_hour = hour;
        self
    }

    /// Reject month outside 1..=12 and hour outside 0..=23 instead of
    /// computing a wrapped pillar for them.
    pub fn with_strict_ranges(mut self, strict: bool) -> Self {
        self.strict_ranges = strict;
        self
    }

    pub fn default_hour(&self) -> i64 {
        self.default_hour
    }

    pub fn strict_ranges(&self) -> bool {
        self.strict_ranges
    }

    pub fn calculate(&self, input: &BirthInput) -> Result<Chart> {
        let hour = input.hour.unwrap_or(self.default_hour);

        if self.strict_ranges {
            ensure_input_range("month", input.month, 1, 12)?;
            ensure_input_range("hour", hour, 0, 23)?;
        }

        // Day first: it is the only fallible pillar and seeds the hour pillar.
        let day = day_pillar(input.year, input.month, input.day)?;
        let pillars = Pillars {
            year: year_pillar(input.year),
            month: month_pillar(input.year, input.month),
            day,
            hour: hour_pillar(day.stem, hour),
        };

        let (five_elements, missing_element) = analyze_five_elements(&pillars);

        tracing::debug!(
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            missing = %missing_element,
            "Computed chart for {}-{}-{} {}h",
            input.year,
            input.month,
            input.day,
            hour
        );

        Ok(Chart {
            pillars,
            day_master: day.stem,
            day_master_element: day.stem.element(),
            five_elements,
            missing_element,
        })
    }
}

/// Chart with the default engine settings.
pub fn calculate_chart(year: i64, month: i64, day: i64, hour: Option<i64>) -> Result<Chart> {
    ChartEngine::new().calculate(&BirthInput::new(year, month, day, hour))
}
