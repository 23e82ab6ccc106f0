//! Birth record: the resolved lunar birth data a chart is computed from.
//!
//! Calendar conversion happens upstream; this type only carries an already
//! resolved lunar date plus the two-hour time slot and gender.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::ChartError;

/// Accepted lunar year range.
pub const LUNAR_YEAR_MIN: i32 = 1;
pub const LUNAR_YEAR_MAX: i32 = 9999;

/// Gender of the chart subject. Carried through; placement does not use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese label (男/女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Resolved lunar birth data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Lunar year, 1..=9999.
    pub lunar_year: i32,
    /// Lunar month, 1..=12.
    pub lunar_month: u8,
    /// Lunar day, 1..=30.
    pub lunar_day: u8,
    /// Whether the month is an intercalary (leap) month.
    #[serde(default)]
    pub is_leap_month: bool,
    /// Two-hour time slot, 0..=11 (0 = Zi hour).
    pub time_slot: u8,
    pub gender: Gender,
}

impl BirthRecord {
    pub fn new(
        lunar_year: i32,
        lunar_month: u8,
        lunar_day: u8,
        is_leap_month: bool,
        time_slot: u8,
        gender: Gender,
    ) -> Self {
        Self {
            lunar_year,
            lunar_month,
            lunar_day,
            is_leap_month,
            time_slot,
            gender,
        }
    }

    /// Check every field range. Fails on the first out-of-range field.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(LUNAR_YEAR_MIN..=LUNAR_YEAR_MAX).contains(&self.lunar_year) {
            return Err(ChartError::invalid(
                "lunar_year",
                self.lunar_year,
                LUNAR_YEAR_MIN as i64,
                LUNAR_YEAR_MAX as i64,
            ));
        }
        validate_month(self.lunar_month)?;
        if !(1..=30).contains(&self.lunar_day) {
            return Err(ChartError::invalid("lunar_day", self.lunar_day, 1, 30));
        }
        validate_time_slot(self.time_slot)?;
        Ok(())
    }

    /// Branch governing the birth time slot, if the slot is in range.
    pub const fn time_branch(&self) -> Option<EarthlyBranch> {
        EarthlyBranch::from_index(self.time_slot)
    }
}

pub(crate) fn validate_month(month: u8) -> Result<(), ChartError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ChartError::invalid("lunar_month", month, 1, 12))
    }
}

pub(crate) fn validate_time_slot(slot: u8) -> Result<(), ChartError> {
    if slot < 12 {
        Ok(())
    } else {
        Err(ChartError::invalid("time_slot", slot, 0, 11))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BirthRecord {
        BirthRecord::new(1998, 6, 12, false, 2, Gender::Male)
    }

    #[test]
    fn valid_record_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn month_zero_rejected() {
        let rec = BirthRecord {
            lunar_month: 0,
            ..sample()
        };
        assert!(matches!(
            rec.validate(),
            Err(ChartError::InvalidInput { field: "lunar_month", value: 0, .. })
        ));
    }

    #[test]
    fn month_thirteen_rejected() {
        let rec = BirthRecord {
            lunar_month: 13,
            ..sample()
        };
        assert!(rec.validate().is_err());
    }

    #[test]
    fn day_range() {
        for (day, ok) in [(0u8, false), (1, true), (30, true), (31, false)] {
            let rec = BirthRecord {
                lunar_day: day,
                ..sample()
            };
            assert_eq!(rec.validate().is_ok(), ok, "day {day}");
        }
    }

    #[test]
    fn slot_twelve_rejected() {
        let rec = BirthRecord {
            time_slot: 12,
            ..sample()
        };
        assert!(matches!(
            rec.validate(),
            Err(ChartError::InvalidInput { field: "time_slot", value: 12, .. })
        ));
    }

    #[test]
    fn year_range() {
        for (year, ok) in [(0, false), (1, true), (9999, true), (10_000, false), (-5, false)] {
            let rec = BirthRecord {
                lunar_year: year,
                ..sample()
            };
            assert_eq!(rec.validate().is_ok(), ok, "year {year}");
        }
    }

    #[test]
    fn time_branch_lookup() {
        assert_eq!(sample().time_branch(), Some(EarthlyBranch::Yin));
    }

    #[test]
    fn gender_labels() {
        assert_eq!(Gender::Male.name(), "男");
        assert_eq!(Gender::Female.english_name(), "female");
    }
}
