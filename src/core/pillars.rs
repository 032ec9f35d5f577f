//! Year, month, day and hour pillar calculators.
//!
//! Every operand is reduced with `rem_euclid` before it is combined, so the
//! calculators accept any `i64` without overflow and always return in-range
//! indices, including for years before the epochs.

use crate::domain::model::{Pillar, Stem};
use crate::utils::error::{BaziError, Result};
use chrono::{Datelike, NaiveDate};

/// Year whose pillar is 甲子.
pub const YEAR_EPOCH: i64 = 1984;
/// Epoch of the year-stem index that seeds the month-stem cycle.
pub const MONTH_STEM_EPOCH: i64 = 4;
/// Offset of the day-branch cycle; 1900-01-01 is a 辰 (Chen) day.
pub const DAY_BRANCH_OFFSET: i64 = 4;

/// Range the calendar accepts for day pillars.
pub const MIN_YEAR: i64 = 1;
pub const MAX_YEAR: i64 = 9999;

/// `num_days_from_ce` of 1900-01-01, the day-pillar epoch (甲辰).
const DAY_EPOCH_FROM_CE: i64 = 693_596;

/// `(value - epoch) mod n`, non-negative, without forming `value - epoch`.
fn cycle_index(value: i64, epoch: i64, n: i64) -> i64 {
    (value.rem_euclid(n) - epoch.rem_euclid(n)).rem_euclid(n)
}

pub fn year_pillar(year: i64) -> Pillar {
    Pillar::from_indices(
        cycle_index(year, YEAR_EPOCH, 10),
        cycle_index(year, YEAR_EPOCH, 12),
    )
}

/// Month pillar from the Gregorian month number. No solar-term correction.
pub fn month_pillar(year: i64, month: i64) -> Pillar {
    let year_stem_index = cycle_index(year, MONTH_STEM_EPOCH, 10);
    let month_stem_base = (year_stem_index % 5) * 2;
    let month_stem_index = (month_stem_base + month.rem_euclid(10) - 1).rem_euclid(10);
    let month_branch_index = (month.rem_euclid(12) + 1).rem_euclid(12);
    Pillar::from_indices(month_stem_index, month_branch_index)
}

/// Signed number of days from 1900-01-01 to the given date.
pub fn days_since_epoch(year: i64, month: i64, day: i64) -> Result<i64> {
    let invalid = || BaziError::InvalidDate { year, month, day };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid());
    }
    let y = i32::try_from(year).map_err(|_| invalid())?;
    let m = u32::try_from(month).map_err(|_| invalid())?;
    let d = u32::try_from(day).map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)?;

    Ok(i64::from(date.num_days_from_ce()) - DAY_EPOCH_FROM_CE)
}

pub fn day_pillar(year: i64, month: i64, day: i64) -> Result<Pillar> {
    let days_diff = days_since_epoch(year, month, day)?;
    Ok(Pillar::from_indices(
        days_diff.rem_euclid(10),
        (DAY_BRANCH_OFFSET + days_diff.rem_euclid(12)).rem_euclid(12),
    ))
}

/// Branch index of a two-hour block: `floor((hour + 1) / 2) mod 12`.
/// 23:00 and 00:00 both fall in Zi (index 0).
pub fn hour_branch_index(hour: i64) -> i64 {
    // floor((h + 1) / 2) == floor(h / 2) + (h mod 2), which cannot overflow
    (hour.div_euclid(2).rem_euclid(12) + hour.rem_euclid(2)).rem_euclid(12)
}

/// Stem of the Zi hour for a given day stem.
pub fn hour_stem_base(day_stem: Stem) -> i64 {
    match day_stem {
        Stem::Jia | Stem::Ji => 0,
        Stem::Yi | Stem::Geng => 2,
        Stem::Bing | Stem::Xin => 4,
        Stem::Ding | Stem::Ren => 6,
        Stem::Wu | Stem::Gui => 8,
    }
}

pub fn hour_pillar(day_stem: Stem, hour: i64) -> Pillar {
    let branch_index = hour_branch_index(hour);
    let stem_index = (hour_stem_base(day_stem) + branch_index).rem_euclid(10);
    Pillar::from_indices(stem_index, branch_index)
}

/// Hour pillar keyed by a raw day-stem index. An index outside 0..=9 has no
/// stem pair and uses base 0, the same base as 甲 and 己.
pub fn hour_pillar_for_index(day_stem_index: i64, hour: i64) -> Pillar {
    match day_stem_index {
        0..=9 => hour_pillar(Stem::from_index(day_stem_index), hour),
        _ => {
            let branch_index = hour_branch_index(hour);
            Pillar::from_indices(branch_index, branch_index)
        }
    }
}
