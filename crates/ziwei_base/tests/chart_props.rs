//! Property tests over arbitrary valid and invalid birth records.

use proptest::prelude::*;
use ziwei_base::{
    BirthRecord, ChartError, Gender, LUNAR_YEAR_MAX, LUNAR_YEAR_MIN, StarKind, compute_chart,
    distance, offset,
};

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

prop_compose! {
    fn valid_record()(
        year in LUNAR_YEAR_MIN..=LUNAR_YEAR_MAX,
        month in 1u8..=12,
        day in 1u8..=30,
        leap in any::<bool>(),
        slot in 0u8..12,
        gender in gender(),
    ) -> BirthRecord {
        BirthRecord::new(year, month, day, leap, slot, gender)
    }
}

proptest! {
    #[test]
    fn offset_in_range(base in -10_000i32..10_000, n in -10_000i32..10_000) {
        prop_assert!(offset(base, n) < 12);
    }

    #[test]
    fn offset_matches_rem_euclid(base in -10_000i32..10_000, n in -10_000i32..10_000) {
        prop_assert_eq!(offset(base, n) as i32, (base + n).rem_euclid(12));
    }

    #[test]
    fn valid_records_always_build(rec in valid_record()) {
        let chart = compute_chart(&rec).unwrap();
        prop_assert_eq!(chart.all_stars().count(), 25);
        prop_assert_eq!(chart.birth(), &rec);
    }

    #[test]
    fn deterministic(rec in valid_record()) {
        prop_assert_eq!(compute_chart(&rec).unwrap(), compute_chart(&rec).unwrap());
    }

    #[test]
    fn body_index_is_distance_from_life(rec in valid_record()) {
        let chart = compute_chart(&rec).unwrap();
        let life = chart.life_sector().label().index();
        let body = chart.body_sector().label().index();
        prop_assert_eq!(chart.body_sector_index(), distance(life, body));
    }

    #[test]
    fn every_catalog_star_once(rec in valid_record()) {
        let chart = compute_chart(&rec).unwrap();
        for kind in StarKind::all() {
            let holders = chart
                .sectors()
                .iter()
                .flat_map(|s| s.stars())
                .filter(|s| s.kind() == kind)
                .count();
            prop_assert_eq!(holders, 1);
        }
    }

    #[test]
    fn month_out_of_range_rejected(rec in valid_record(), month in 13u8..) {
        let bad = BirthRecord { lunar_month: month, ..rec };
        let is_month_error = matches!(
            compute_chart(&bad),
            Err(ChartError::InvalidInput { field: "lunar_month", .. })
        );
        prop_assert!(is_month_error);
    }

    #[test]
    fn slot_out_of_range_rejected(rec in valid_record(), slot in 12u8..) {
        let bad = BirthRecord { time_slot: slot, ..rec };
        prop_assert!(compute_chart(&bad).is_err());
    }
}
