//! Deterministic Ziwei natal-chart construction.
//!
//! This crate provides:
//! - Modular arithmetic on the 12-position chart ring
//! - Life-sector and body-sector anchors from lunar month and time slot
//! - The 12-sector ring rotated to the life sector
//! - Placement of 14 major, 7 auxiliary and 4 minor stars
//! - A prompt-facing chart summary
//!
//! The engine is a pure function of a [`BirthRecord`]: no I/O, no global
//! state, no caching.
//!
//! ```
//! use ziwei_base::{BirthRecord, EarthlyBranch, Gender, compute_chart};
//!
//! let birth = BirthRecord::new(1998, 6, 12, false, 2, Gender::Male);
//! let chart = compute_chart(&birth).unwrap();
//! assert_eq!(chart.life_sector().label(), EarthlyBranch::Si);
//! assert_eq!(chart.body_sector().label(), EarthlyBranch::Wu);
//! ```

pub mod anchor;
pub mod birth;
pub mod branch;
pub mod chart;
pub mod error;
pub mod placement;
pub mod ring;
pub mod sector;
pub mod star;
pub mod stem;
pub mod summary;

pub use anchor::{Anchors, body_sector, life_sector, month_anchor, resolve_anchors};
pub use birth::{BirthRecord, Gender, LUNAR_YEAR_MAX, LUNAR_YEAR_MIN};
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use chart::{Chart, compute_chart};
pub use error::ChartError;
pub use placement::{
    auxiliary_position, minor_position, place_auxiliary_stars, place_major_stars,
    place_minor_stars, tianfu_anchor, ziwei_anchor,
};
pub use ring::{RING_SIZE, distance, offset};
pub use sector::{ALL_SECTOR_NAMES, Sector, SectorName, build_ring};
pub use star::{
    ALL_AUXILIARY_STARS, ALL_MAJOR_STARS, ALL_MINOR_STARS, AuxiliaryStar, Brightness, MajorStar,
    MinorStar, Star, StarCategory, StarInfo, StarKind, TIANFU_CHAIN, ZIWEI_CHAIN,
};
pub use stem::{ALL_STEMS, HeavenlyStem, year_stem, year_stem_index};
pub use summary::{ChartSummary, MajorPlacement, SectorRef};
