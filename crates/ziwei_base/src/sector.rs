//! The 12 chart sectors (宫) and the ring builder.
//!
//! Sectors are numbered by ordinal role: ordinal 0 is always the Life
//! sector, then Siblings, Spouse, ... Parents. The ring is rotated so that
//! ordinal `i` carries the branch label `offset(life, i)`.

use serde::{Deserialize, Serialize};

use crate::anchor::Anchors;
use crate::branch::EarthlyBranch;
use crate::ring::offset;
use crate::star::Star;

/// Ordinal role of a sector, counted from the Life sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 sector names in ordinal order (0 = Life, 11 = Parents).
pub const ALL_SECTOR_NAMES: [SectorName; 12] = [
    SectorName::Life,
    SectorName::Siblings,
    SectorName::Spouse,
    SectorName::Children,
    SectorName::Wealth,
    SectorName::Health,
    SectorName::Travel,
    SectorName::Friends,
    SectorName::Career,
    SectorName::Property,
    SectorName::Fortune,
    SectorName::Parents,
];

impl SectorName {
    /// Chinese name, e.g. "命宫".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟宫",
            Self::Spouse => "夫妻宫",
            Self::Children => "子女宫",
            Self::Wealth => "财帛宫",
            Self::Health => "疾厄宫",
            Self::Travel => "迁移宫",
            Self::Friends => "奴仆宫",
            Self::Career => "官禄宫",
            Self::Property => "田宅宫",
            Self::Fortune => "福德宫",
            Self::Parents => "父母宫",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }

    /// 0-based ordinal (Life=0 .. Parents=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    pub const fn all() -> &'static [SectorName; 12] {
        &ALL_SECTOR_NAMES
    }
}

/// One sector of a computed chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sector {
    ring_index: u8,
    name: SectorName,
    label: EarthlyBranch,
    stars: Vec<Star>,
    is_life_sector: bool,
    is_body_sector: bool,
}

impl Sector {
    /// Ordinal position, in [0, 11].
    pub const fn ring_index(&self) -> u8 {
        self.ring_index
    }

    pub const fn name(&self) -> SectorName {
        self.name
    }

    /// Branch label of this sector.
    pub const fn label(&self) -> EarthlyBranch {
        self.label
    }

    /// Stars in this sector: major, then auxiliary, then minor.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub const fn is_life_sector(&self) -> bool {
        self.is_life_sector
    }

    pub const fn is_body_sector(&self) -> bool {
        self.is_body_sector
    }

    pub(crate) fn push_star(&mut self, star: Star) {
        self.stars.push(star);
    }
}

/// Build the 12 empty sectors for the given anchors.
pub fn build_ring(anchors: &Anchors) -> [Sector; 12] {
    let life = anchors.life.index() as i32;
    std::array::from_fn(|i| {
        let label = EarthlyBranch::all()[offset(life, i as i32) as usize];
        Sector {
            ring_index: i as u8,
            name: ALL_SECTOR_NAMES[i],
            label,
            stars: Vec::new(),
            is_life_sector: i == 0,
            is_body_sector: label == anchors.body,
        }
    })
}
