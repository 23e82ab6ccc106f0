//! Star placement rules.
//!
//! Three independent procedures, each returning its catalog's stars in
//! catalog order:
//!
//! - Major stars: two rigid chains. The Ziwei chain starts at
//!   `offset((day - 1) / 3, slot)` and member k sits k steps forward of it.
//!   The Tianfu chain starts 6 steps past the Ziwei anchor, same rule.
//! - Auxiliary stars: one rule per star from month, slot or year stem.
//! - Minor stars: two from the year stem, two from slot + day.
//!
//! Callers must pass a validated [`BirthRecord`]; every rule is then total.

use tracing::trace;

use crate::birth::BirthRecord;
use crate::branch::ALL_BRANCHES;
use crate::ring::offset;
use crate::star::{
    ALL_AUXILIARY_STARS, ALL_MINOR_STARS, AuxiliaryStar, MinorStar, Star, TIANFU_CHAIN,
    ZIWEI_CHAIN,
};
use crate::stem::year_stem_index;

/// Ring steps from the Ziwei anchor to the Tianfu anchor.
pub const TIANFU_ANCHOR_STEP: i32 = 6;

/// Ziwei chain anchor from lunar day and time slot.
pub const fn ziwei_anchor(lunar_day: u8, time_slot: u8) -> u8 {
    offset((lunar_day as i32 - 1) / 3, time_slot as i32)
}

/// Tianfu chain anchor, 6 steps past the Ziwei anchor.
pub const fn tianfu_anchor(ziwei_anchor: u8) -> u8 {
    offset(ziwei_anchor as i32, TIANFU_ANCHOR_STEP)
}

/// Place the 14 major stars: Ziwei chain then Tianfu chain.
pub fn place_major_stars(record: &BirthRecord) -> Vec<Star> {
    let ziwei = ziwei_anchor(record.lunar_day, record.time_slot);
    let tianfu = tianfu_anchor(ziwei);
    trace!(ziwei, tianfu, "major chain anchors");

    let chain_a = ZIWEI_CHAIN
        .iter()
        .enumerate()
        .map(|(k, &s)| Star::new(s, ALL_BRANCHES[offset(ziwei as i32, k as i32) as usize]));
    let chain_b = TIANFU_CHAIN
        .iter()
        .enumerate()
        .map(|(k, &s)| Star::new(s, ALL_BRANCHES[offset(tianfu as i32, k as i32) as usize]));
    chain_a.chain(chain_b).collect()
}

/// Ring index of an auxiliary star.
///
/// Lucun and Tiankui share the same rule, `offset(stem, 1)`.
pub fn auxiliary_position(star: AuxiliaryStar, record: &BirthRecord) -> u8 {
    let month = record.lunar_month as i32;
    let slot = record.time_slot as i32;
    let stem = year_stem_index(record.lunar_year) as i32;
    match star {
        AuxiliaryStar::Zuofu => offset(0, month - 1),
        AuxiliaryStar::Youbi => offset(0, 13 - month),
        AuxiliaryStar::Wenchang => offset(9, slot),
        AuxiliaryStar::Wenqu => offset(0, 15 - slot),
        AuxiliaryStar::Lucun => offset(stem, 1),
        AuxiliaryStar::Tiankui => offset(stem, 1),
        AuxiliaryStar::Tianyue => offset(stem, 7),
    }
}

/// Place the 7 auxiliary stars.
pub fn place_auxiliary_stars(record: &BirthRecord) -> Vec<Star> {
    ALL_AUXILIARY_STARS
        .iter()
        .map(|&s| {
            let pos = auxiliary_position(s, record);
            trace!(star = s.info().id, pos, "auxiliary placed");
            Star::new(s, ALL_BRANCHES[pos as usize])
        })
        .collect()
}

/// Ring index of a minor star.
pub fn minor_position(star: MinorStar, record: &BirthRecord) -> u8 {
    let stem = year_stem_index(record.lunar_year) as i32;
    let slot_day = record.time_slot as i32 + record.lunar_day as i32;
    match star {
        MinorStar::Qingyang => offset(stem, 2),
        MinorStar::Tuoluo => offset(stem, 1),
        MinorStar::Huoxing => offset(0, slot_day),
        MinorStar::Lingxing => offset(0, slot_day + 6),
    }
}

/// Place the 4 minor stars.
pub fn place_minor_stars(record: &BirthRecord) -> Vec<Star> {
    ALL_MINOR_STARS
        .iter()
        .map(|&s| {
            let pos = minor_position(s, record);
            trace!(star = s.info().id, pos, "minor placed");
            Star::new(s, ALL_BRANCHES[pos as usize])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::Gender;
    use crate::branch::EarthlyBranch;
    use crate::star::{MajorStar, StarKind};

    fn reference() -> BirthRecord {
        BirthRecord::new(1998, 6, 12, false, 2, Gender::Male)
    }

    fn index_of(stars: &[Star], id: &str) -> u8 {
        stars
            .iter()
            .find(|s| s.id() == id)
            .map(|s| s.placement_index())
            .unwrap()
    }

    #[test]
    fn ziwei_anchor_reference() {
        // floor(11 / 3) = 3, + slot 2 = 5
        assert_eq!(ziwei_anchor(12, 2), 5);
        assert_eq!(tianfu_anchor(5), 11);
    }

    #[test]
    fn ziwei_anchor_day_one() {
        assert_eq!(ziwei_anchor(1, 0), 0);
        assert_eq!(ziwei_anchor(30, 11), offset(9, 11));
    }

    #[test]
    fn major_reference_positions() {
        let stars = place_major_stars(&reference());
        assert_eq!(stars.len(), 14);
        let expected = [5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6];
        let got: Vec<u8> = stars.iter().map(|s| s.placement_index()).collect();
        assert_eq!(got, expected);
        assert_eq!(stars[0].kind(), StarKind::Major(MajorStar::Ziwei));
        assert_eq!(stars[6].kind(), StarKind::Major(MajorStar::Tianfu));
        assert_eq!(stars[6].placement(), EarthlyBranch::Hai);
    }

    #[test]
    fn auxiliary_reference_positions() {
        let stars = place_auxiliary_stars(&reference());
        assert_eq!(stars.len(), 7);
        assert_eq!(index_of(&stars, "zuofu"), 5);
        assert_eq!(index_of(&stars, "youbi"), 7);
        assert_eq!(index_of(&stars, "wenchang"), 11);
        assert_eq!(index_of(&stars, "wenqu"), 1);
        assert_eq!(index_of(&stars, "lucun"), 5);
        assert_eq!(index_of(&stars, "tiankui"), 5);
        assert_eq!(index_of(&stars, "tianyue"), 11);
    }

    #[test]
    fn lucun_and_tiankui_always_share_position() {
        for year in 1990..2010 {
            let rec = BirthRecord {
                lunar_year: year,
                ..reference()
            };
            assert_eq!(
                auxiliary_position(AuxiliaryStar::Lucun, &rec),
                auxiliary_position(AuxiliaryStar::Tiankui, &rec)
            );
        }
    }

    #[test]
    fn zuofu_youbi_month_boundaries() {
        let jan = BirthRecord {
            lunar_month: 1,
            ..reference()
        };
        assert_eq!(auxiliary_position(AuxiliaryStar::Zuofu, &jan), 0);
        assert_eq!(auxiliary_position(AuxiliaryStar::Youbi, &jan), 0);
        let dec = BirthRecord {
            lunar_month: 12,
            ..reference()
        };
        assert_eq!(auxiliary_position(AuxiliaryStar::Zuofu, &dec), 11);
        assert_eq!(auxiliary_position(AuxiliaryStar::Youbi, &dec), 1);
    }

    #[test]
    fn wenqu_slot_boundaries() {
        let zi = BirthRecord {
            time_slot: 0,
            ..reference()
        };
        assert_eq!(auxiliary_position(AuxiliaryStar::Wenqu, &zi), 3);
        assert_eq!(auxiliary_position(AuxiliaryStar::Wenchang, &zi), 9);
        let hai = BirthRecord {
            time_slot: 11,
            ..reference()
        };
        assert_eq!(auxiliary_position(AuxiliaryStar::Wenqu, &hai), 4);
        assert_eq!(auxiliary_position(AuxiliaryStar::Wenchang, &hai), 8);
    }

    #[test]
    fn minor_reference_positions() {
        let stars = place_minor_stars(&reference());
        assert_eq!(stars.len(), 4);
        assert_eq!(index_of(&stars, "qingyang"), 6);
        assert_eq!(index_of(&stars, "tuoluo"), 5);
        assert_eq!(index_of(&stars, "huoxing"), 2);
        assert_eq!(index_of(&stars, "lingxing"), 8);
    }

    #[test]
    fn huoxing_lingxing_opposite() {
        for day in 1..=30 {
            for slot in 0..12 {
                let rec = BirthRecord {
                    lunar_day: day,
                    time_slot: slot,
                    ..reference()
                };
                let h = minor_position(MinorStar::Huoxing, &rec);
                let l = minor_position(MinorStar::Lingxing, &rec);
                assert_eq!(l, offset(h as i32, 6));
            }
        }
    }
}
