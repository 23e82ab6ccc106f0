//! Chart assembly: the single entry point [`compute_chart`].
//!
//! Steps:
//! 1. validate the birth record
//! 2. resolve life and body anchors
//! 3. build the 12-sector ring
//! 4. run the three placement procedures
//! 5. drop each star into the sector carrying its branch label
//! 6. verify structural invariants, then hand the chart to the caller
//!
//! Nothing is cached; each call builds a fresh chart.

use serde::Serialize;
use tracing::debug;

use crate::anchor::resolve_anchors;
use crate::birth::BirthRecord;
use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::placement::{place_auxiliary_stars, place_major_stars, place_minor_stars};
use crate::ring::distance;
use crate::sector::{Sector, build_ring};
use crate::star::{ALL_AUXILIARY_STARS, ALL_MAJOR_STARS, ALL_MINOR_STARS, Star, StarKind};
use crate::stem::{HeavenlyStem, year_stem};
use crate::summary::ChartSummary;

/// A fully constructed natal chart. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    birth: BirthRecord,
    sectors: [Sector; 12],
    major_stars: Vec<Star>,
    auxiliary_stars: Vec<Star>,
    minor_stars: Vec<Star>,
    life_sector_index: u8,
    body_sector_index: u8,
}

/// Compute the chart for a birth record.
///
/// Fails with [`ChartError::InvalidInput`] for any out-of-range field, before
/// any placement work.
pub fn compute_chart(birth: &BirthRecord) -> Result<Chart, ChartError> {
    birth.validate()?;
    let anchors = resolve_anchors(birth.lunar_month, birth.time_slot)?;
    debug!(
        month = birth.lunar_month,
        slot = birth.time_slot,
        month_anchor = anchors.month_anchor.index(),
        life = anchors.life.index(),
        body = anchors.body.index(),
        "anchors resolved"
    );

    let mut sectors = build_ring(&anchors);
    let major_stars = place_major_stars(birth);
    let auxiliary_stars = place_auxiliary_stars(birth);
    let minor_stars = place_minor_stars(birth);

    let life = anchors.life.index();
    for star in major_stars
        .iter()
        .chain(auxiliary_stars.iter())
        .chain(minor_stars.iter())
    {
        let ordinal = distance(life, star.placement_index());
        sectors[ordinal as usize].push_star(*star);
    }

    let chart = Chart {
        birth: *birth,
        sectors,
        major_stars,
        auxiliary_stars,
        minor_stars,
        life_sector_index: 0,
        body_sector_index: distance(life, anchors.body.index()),
    };
    chart.verify()?;
    debug!(
        life_sector = chart.life_sector().label().pinyin(),
        body_sector = chart.body_sector().label().pinyin(),
        "chart assembled"
    );
    Ok(chart)
}

impl Chart {
    pub const fn birth(&self) -> &BirthRecord {
        &self.birth
    }

    /// The 12 sectors in ordinal order (0 = Life).
    pub const fn sectors(&self) -> &[Sector; 12] {
        &self.sectors
    }

    /// Sector at an ordinal index. `None` outside [0, 11].
    pub fn sector(&self, ordinal: u8) -> Option<&Sector> {
        self.sectors.get(ordinal as usize)
    }

    /// Sector carrying a branch label. Every label is present exactly once.
    pub fn sector_by_label(&self, label: EarthlyBranch) -> &Sector {
        let ordinal = distance(self.sectors[0].label().index(), label.index());
        &self.sectors[ordinal as usize]
    }

    /// Ordinal index of the life sector (always 0).
    pub const fn life_sector_index(&self) -> u8 {
        self.life_sector_index
    }

    /// Ordinal index of the body sector.
    pub const fn body_sector_index(&self) -> u8 {
        self.body_sector_index
    }

    pub fn life_sector(&self) -> &Sector {
        &self.sectors[self.life_sector_index as usize]
    }

    pub fn body_sector(&self) -> &Sector {
        &self.sectors[self.body_sector_index as usize]
    }

    pub fn major_stars(&self) -> &[Star] {
        &self.major_stars
    }

    pub fn auxiliary_stars(&self) -> &[Star] {
        &self.auxiliary_stars
    }

    pub fn minor_stars(&self) -> &[Star] {
        &self.minor_stars
    }

    /// All 25 placed stars: major, auxiliary, minor.
    pub fn all_stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars
            .iter()
            .chain(self.auxiliary_stars.iter())
            .chain(self.minor_stars.iter())
    }

    /// The placed record for a catalog star.
    pub fn star(&self, kind: StarKind) -> Option<&Star> {
        self.all_stars().find(|s| s.kind() == kind)
    }

    /// Sector holding a catalog star.
    pub fn sector_of(&self, kind: StarKind) -> Option<&Sector> {
        self.star(kind).map(|s| self.sector_by_label(s.placement()))
    }

    /// Heavenly stem of the birth year.
    pub fn year_stem(&self) -> HeavenlyStem {
        year_stem(self.birth.lunar_year)
    }

    /// Prompt-facing summary of this chart.
    pub fn summary(&self) -> ChartSummary {
        ChartSummary::from_chart(self)
    }

    fn verify(&self) -> Result<(), ChartError> {
        let catalog_ok = self
            .major_stars
            .iter()
            .map(Star::kind)
            .eq(ALL_MAJOR_STARS.into_iter().map(StarKind::Major))
            && self
                .auxiliary_stars
                .iter()
                .map(Star::kind)
                .eq(ALL_AUXILIARY_STARS.into_iter().map(StarKind::Auxiliary))
            && self
                .minor_stars
                .iter()
                .map(Star::kind)
                .eq(ALL_MINOR_STARS.into_iter().map(StarKind::Minor));
        if !catalog_ok {
            return Err(ChartError::InternalInvariantViolation(
                "star catalog placed incompletely or out of order",
            ));
        }

        if self.sectors.iter().filter(|s| s.is_life_sector()).count() != 1
            || !self.sectors[self.life_sector_index as usize].is_life_sector()
        {
            return Err(ChartError::InternalInvariantViolation(
                "life sector not unique",
            ));
        }
        if self.sectors.iter().filter(|s| s.is_body_sector()).count() != 1
            || !self.sectors[self.body_sector_index as usize].is_body_sector()
        {
            return Err(ChartError::InternalInvariantViolation(
                "body sector not unique",
            ));
        }

        for star in self.all_stars() {
            let holders = self
                .sectors
                .iter()
                .filter(|s| s.stars().iter().any(|t| t.kind() == star.kind()))
                .count();
            if holders != 1 {
                return Err(ChartError::InternalInvariantViolation(
                    "star not held by exactly one sector",
                ));
            }
            let labelled = self.sector_by_label(star.placement());
            if labelled.stars().iter().all(|t| t.kind() != star.kind()) {
                return Err(ChartError::InternalInvariantViolation(
                    "star held by a sector with a different label",
                ));
            }
        }

        let held: usize = self.sectors.iter().map(|s| s.stars().len()).sum();
        if held != self.all_stars().count() {
            return Err(ChartError::InternalInvariantViolation(
                "sector star count differs from catalog",
            ));
        }
        Ok(())
    }
}
