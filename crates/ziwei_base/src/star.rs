//! Star catalogs: 14 major, 7 auxiliary and 4 minor stars.
//!
//! The three catalogs are disjoint. [`StarKind`] is the tagged union over
//! them; each variant resolves to a static [`StarInfo`] record. A [`Star`] is
//! a catalog entry bound to the branch it was placed on.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;

/// Which catalog a star belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCategory {
    Major,
    Auxiliary,
    Minor,
}

impl StarCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Auxiliary => "auxiliary",
            Self::Minor => "minor",
        }
    }
}

/// Display brightness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Bright,
    Normal,
    Dim,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Normal => "normal",
            Self::Dim => "dim",
        }
    }
}

/// Static catalog record for one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StarInfo {
    /// Stable lowercase identifier, e.g. "ziwei".
    pub id: &'static str,
    /// Chinese name.
    pub name: &'static str,
    pub pinyin: &'static str,
    pub category: StarCategory,
    pub brightness: Brightness,
    pub description: &'static str,
}

const fn info(
    id: &'static str,
    name: &'static str,
    pinyin: &'static str,
    category: StarCategory,
    brightness: Brightness,
    description: &'static str,
) -> StarInfo {
    StarInfo {
        id,
        name,
        pinyin,
        category,
        brightness,
        description,
    }
}

// ---------------------------------------------------------------------------
// Major stars
// ---------------------------------------------------------------------------

/// The 14 major stars, in two chains (Ziwei chain, then Tianfu chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorStar {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
}

/// Ziwei chain, in ring-step order from the Ziwei anchor.
pub const ZIWEI_CHAIN: [MajorStar; 6] = [
    MajorStar::Ziwei,
    MajorStar::Tianji,
    MajorStar::Taiyang,
    MajorStar::Wuqu,
    MajorStar::Tiantong,
    MajorStar::Lianzhen,
];

/// Tianfu chain, in ring-step order from the Tianfu anchor.
pub const TIANFU_CHAIN: [MajorStar; 8] = [
    MajorStar::Tianfu,
    MajorStar::Taiyin,
    MajorStar::Tanlang,
    MajorStar::Jumen,
    MajorStar::Tianxiang,
    MajorStar::Tianliang,
    MajorStar::Qisha,
    MajorStar::Pojun,
];

/// All 14 major stars in catalog order.
pub const ALL_MAJOR_STARS: [MajorStar; 14] = [
    MajorStar::Ziwei,
    MajorStar::Tianji,
    MajorStar::Taiyang,
    MajorStar::Wuqu,
    MajorStar::Tiantong,
    MajorStar::Lianzhen,
    MajorStar::Tianfu,
    MajorStar::Taiyin,
    MajorStar::Tanlang,
    MajorStar::Jumen,
    MajorStar::Tianxiang,
    MajorStar::Tianliang,
    MajorStar::Qisha,
    MajorStar::Pojun,
];

static MAJOR_INFO: [StarInfo; 14] = {
    use Brightness::{Bright, Normal};
    use StarCategory::Major;
    [
        info("ziwei", "紫微", "Ziwei", Major, Bright, "Emperor star, first of the major stars; authority and dignity"),
        info("tianji", "天机", "Tianji", Major, Normal, "Wisdom and ingenuity"),
        info("taiyang", "太阳", "Taiyang", Major, Bright, "The sun; openness and uprightness"),
        info("wuqu", "武曲", "Wuqu", Major, Normal, "Principal wealth star"),
        info("tiantong", "天同", "Tiantong", Major, Normal, "Star of blessings and contentment"),
        info("lianzhen", "廉贞", "Lianzhen", Major, Normal, "Secondary romance star"),
        info("tianfu", "天府", "Tianfu", Major, Bright, "Treasury star; stored wealth"),
        info("taiyin", "太阴", "Taiyin", Major, Normal, "The moon; wealth and property"),
        info("tanlang", "贪狼", "Tanlang", Major, Normal, "Romance and wealth"),
        info("jumen", "巨门", "Jumen", Major, Normal, "Speech, disputes and gossip"),
        info("tianxiang", "天相", "Tianxiang", Major, Normal, "Seal star; noble office"),
        info("tianliang", "天梁", "Tianliang", Major, Normal, "Sheltering star; longevity"),
        info("qisha", "七杀", "Qisha", Major, Normal, "General star; severity"),
        info("pojun", "破军", "Pojun", Major, Normal, "Breaking and change"),
    ]
};

impl MajorStar {
    /// 0-based catalog index (Ziwei=0 .. Pojun=13).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ziwei => 0,
            Self::Tianji => 1,
            Self::Taiyang => 2,
            Self::Wuqu => 3,
            Self::Tiantong => 4,
            Self::Lianzhen => 5,
            Self::Tianfu => 6,
            Self::Taiyin => 7,
            Self::Tanlang => 8,
            Self::Jumen => 9,
            Self::Tianxiang => 10,
            Self::Tianliang => 11,
            Self::Qisha => 12,
            Self::Pojun => 13,
        }
    }

    pub fn info(self) -> &'static StarInfo {
        &MAJOR_INFO[self.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Auxiliary stars
// ---------------------------------------------------------------------------

/// The 7 auxiliary stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxiliaryStar {
    Zuofu,
    Youbi,
    Wenchang,
    Wenqu,
    Lucun,
    Tiankui,
    Tianyue,
}

/// All 7 auxiliary stars in catalog order.
pub const ALL_AUXILIARY_STARS: [AuxiliaryStar; 7] = [
    AuxiliaryStar::Zuofu,
    AuxiliaryStar::Youbi,
    AuxiliaryStar::Wenchang,
    AuxiliaryStar::Wenqu,
    AuxiliaryStar::Lucun,
    AuxiliaryStar::Tiankui,
    AuxiliaryStar::Tianyue,
];

static AUXILIARY_INFO: [StarInfo; 7] = {
    use Brightness::Normal;
    use StarCategory::Auxiliary;
    [
        info("zuofu", "左辅", "Zuofu", Auxiliary, Normal, "Left assistant; supporting noble star"),
        info("youbi", "右弼", "Youbi", Auxiliary, Normal, "Right assistant; supporting noble star"),
        info("wenchang", "文昌", "Wenchang", Auxiliary, Normal, "Scholarship and examinations"),
        info("wenqu", "文曲", "Wenqu", Auxiliary, Normal, "Literature and artistic talent"),
        info("lucun", "禄存", "Lucun", Auxiliary, Normal, "Emolument; steady income"),
        info("tiankui", "天魁", "Tiankui", Auxiliary, Normal, "Daytime patron; help from superiors"),
        info("tianyue", "天钺", "Tianyue", Auxiliary, Normal, "Night patron; help from superiors"),
    ]
};

impl AuxiliaryStar {
    /// 0-based catalog index (Zuofu=0 .. Tianyue=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zuofu => 0,
            Self::Youbi => 1,
            Self::Wenchang => 2,
            Self::Wenqu => 3,
            Self::Lucun => 4,
            Self::Tiankui => 5,
            Self::Tianyue => 6,
        }
    }

    pub fn info(self) -> &'static StarInfo {
        &AUXILIARY_INFO[self.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Minor (malefic) stars
// ---------------------------------------------------------------------------

/// The 4 minor malefic stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinorStar {
    Qingyang,
    Tuoluo,
    Huoxing,
    Lingxing,
}

/// All 4 minor stars in catalog order.
pub const ALL_MINOR_STARS: [MinorStar; 4] = [
    MinorStar::Qingyang,
    MinorStar::Tuoluo,
    MinorStar::Huoxing,
    MinorStar::Lingxing,
];

static MINOR_INFO: [StarInfo; 4] = {
    use Brightness::Dim;
    use StarCategory::Minor;
    [
        info("qingyang", "擎羊", "Qingyang", Minor, Dim, "Ram star; injury and conflict"),
        info("tuoluo", "陀罗", "Tuoluo", Minor, Dim, "Spinning star; delay and entanglement"),
        info("huoxing", "火星", "Huoxing", Minor, Dim, "Fire star; rashness"),
        info("lingxing", "铃星", "Lingxing", Minor, Dim, "Bell star; smouldering temper"),
    ]
};

impl MinorStar {
    /// 0-based catalog index (Qingyang=0 .. Lingxing=3).
    pub const fn index(self) -> u8 {
        match self {
            Self::Qingyang => 0,
            Self::Tuoluo => 1,
            Self::Huoxing => 2,
            Self::Lingxing => 3,
        }
    }

    pub fn info(self) -> &'static StarInfo {
        &MINOR_INFO[self.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Tagged union and placed star
// ---------------------------------------------------------------------------

/// Any catalog star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    Major(MajorStar),
    Auxiliary(AuxiliaryStar),
    Minor(MinorStar),
}

impl StarKind {
    pub fn info(self) -> &'static StarInfo {
        match self {
            Self::Major(s) => s.info(),
            Self::Auxiliary(s) => s.info(),
            Self::Minor(s) => s.info(),
        }
    }

    pub const fn category(self) -> StarCategory {
        match self {
            Self::Major(_) => StarCategory::Major,
            Self::Auxiliary(_) => StarCategory::Auxiliary,
            Self::Minor(_) => StarCategory::Minor,
        }
    }

    /// Every catalog star: 14 major, 7 auxiliary, 4 minor, in catalog order.
    pub fn all() -> impl Iterator<Item = StarKind> {
        ALL_MAJOR_STARS
            .into_iter()
            .map(Self::Major)
            .chain(ALL_AUXILIARY_STARS.into_iter().map(Self::Auxiliary))
            .chain(ALL_MINOR_STARS.into_iter().map(Self::Minor))
    }

    /// Look up a star by its catalog id (e.g. "ziwei").
    pub fn from_id(id: &str) -> Option<StarKind> {
        Self::all().find(|k| k.info().id == id)
    }
}

impl From<MajorStar> for StarKind {
    fn from(s: MajorStar) -> Self {
        Self::Major(s)
    }
}

impl From<AuxiliaryStar> for StarKind {
    fn from(s: AuxiliaryStar) -> Self {
        Self::Auxiliary(s)
    }
}

impl From<MinorStar> for StarKind {
    fn from(s: MinorStar) -> Self {
        Self::Minor(s)
    }
}

/// A catalog star placed on a branch of the chart ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Star {
    kind: StarKind,
    info: &'static StarInfo,
    placement: EarthlyBranch,
}

impl Star {
    pub fn new(kind: impl Into<StarKind>, placement: EarthlyBranch) -> Self {
        let kind = kind.into();
        Self {
            kind,
            info: kind.info(),
            placement,
        }
    }

    pub const fn kind(&self) -> StarKind {
        self.kind
    }

    pub const fn info(&self) -> &'static StarInfo {
        self.info
    }

    pub const fn id(&self) -> &'static str {
        self.info.id
    }

    pub const fn name(&self) -> &'static str {
        self.info.name
    }

    pub const fn category(&self) -> StarCategory {
        self.info.category
    }

    pub const fn brightness(&self) -> Brightness {
        self.info.brightness
    }

    pub const fn description(&self) -> &'static str {
        self.info.description
    }

    /// Branch the star sits on.
    pub const fn placement(&self) -> EarthlyBranch {
        self.placement
    }

    /// Ring index of the placement, in [0, 11].
    pub const fn placement_index(&self) -> u8 {
        self.placement.index()
    }
}
