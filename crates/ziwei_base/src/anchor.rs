//! Life-sector (命宫) and body-sector (身宫) anchors.
//!
//! Both anchors depend only on lunar month and time slot:
//! 1. month anchor: start at Yin (2), step forward once per month from month 1
//! 2. life sector: from the month anchor, step back once per time slot
//! 3. body sector: Zi (0) + month + slot - 2
//!
//! The two formulas are independent and may land on the same branch.

use crate::birth::{validate_month, validate_time_slot};
use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::ring::offset;

/// Ring position where month 1 starts counting.
pub const MONTH_ANCHOR_START: i32 = 2;

/// Resolved anchor positions for one birth record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub month_anchor: EarthlyBranch,
    pub life: EarthlyBranch,
    pub body: EarthlyBranch,
}

/// Ring index reached from Yin after `month - 1` forward steps.
pub const fn month_anchor(month: u8) -> u8 {
    offset(MONTH_ANCHOR_START, month as i32 - 1)
}

/// Life-sector ring index. Expects `month` in [1, 12] and `slot` in [0, 11].
pub const fn life_sector(month: u8, slot: u8) -> u8 {
    offset(month_anchor(month) as i32, -(slot as i32))
}

/// Body-sector ring index. Expects `month` in [1, 12] and `slot` in [0, 11].
pub const fn body_sector(month: u8, slot: u8) -> u8 {
    offset(0, month as i32 + slot as i32 - 2)
}

/// Validate month and slot, then resolve both anchors.
pub fn resolve_anchors(month: u8, slot: u8) -> Result<Anchors, ChartError> {
    validate_month(month)?;
    validate_time_slot(slot)?;
    Ok(Anchors {
        month_anchor: branch(month_anchor(month))?,
        life: branch(life_sector(month, slot))?,
        body: branch(body_sector(month, slot))?,
    })
}

fn branch(index: u8) -> Result<EarthlyBranch, ChartError> {
    EarthlyBranch::from_index(index)
        .ok_or(ChartError::InternalInvariantViolation("anchor outside ring"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case_month6_slot2() {
        assert_eq!(month_anchor(6), 7);
        assert_eq!(life_sector(6, 2), 5);
        assert_eq!(body_sector(6, 2), 6);
    }

    #[test]
    fn boundary_month1_slot0() {
        assert_eq!(month_anchor(1), 2);
        assert_eq!(life_sector(1, 0), 2);
        assert_eq!(body_sector(1, 0), 11);
    }

    #[test]
    fn month12_slot11() {
        // month anchor: 2 + 11 = 13 → 1; life: 1 - 11 → 2; body: 12 + 11 - 2 = 21 → 9
        assert_eq!(month_anchor(12), 1);
        assert_eq!(life_sector(12, 11), 2);
        assert_eq!(body_sector(12, 11), 9);
    }

    #[test]
    fn resolve_total_over_valid_inputs() {
        for month in 1..=12 {
            for slot in 0..12 {
                assert!(resolve_anchors(month, slot).is_ok());
            }
        }
    }

    #[test]
    fn life_to_body_distance_is_odd() {
        // body - life = 2*slot - 3 (mod 12), always odd
        for month in 1..=12u8 {
            for slot in 0..12u8 {
                let d = crate::ring::distance(life_sector(month, slot), body_sector(month, slot));
                assert_eq!(d % 2, 1, "month {month} slot {slot}");
            }
        }
    }

    #[test]
    fn all_anchors_in_range() {
        for month in 1..=12u8 {
            for slot in 0..12u8 {
                assert!(life_sector(month, slot) < 12);
                assert!(body_sector(month, slot) < 12);
            }
        }
    }

    #[test]
    fn resolve_reference_case() {
        let a = resolve_anchors(6, 2).unwrap();
        assert_eq!(a.month_anchor, EarthlyBranch::Wei);
        assert_eq!(a.life, EarthlyBranch::Si);
        assert_eq!(a.body, EarthlyBranch::Wu);
    }

    #[test]
    fn resolve_rejects_bad_month() {
        assert!(matches!(
            resolve_anchors(0, 2),
            Err(ChartError::InvalidInput { field: "lunar_month", .. })
        ));
        assert!(resolve_anchors(13, 2).is_err());
    }

    #[test]
    fn resolve_rejects_bad_slot() {
        assert!(matches!(
            resolve_anchors(6, 12),
            Err(ChartError::InvalidInput { field: "time_slot", .. })
        ));
    }
}
