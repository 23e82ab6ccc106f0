//! Heavenly stems (天干) and the year-stem rule.
//!
//! The 10 stems cycle continuously with the lunar year. The epoch is
//! lunar year 4 = Jia (index 0), so 1984 is a Jia year and 1998 a Wu year.

use serde::{Deserialize, Serialize};

use crate::ring::stem_cycle;

/// The 10 heavenly stems, starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

/// Lunar year whose stem is Jia.
pub const STEM_EPOCH_YEAR: i32 = 4;

impl HeavenlyStem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }
}

/// Stem of a lunar year.
pub fn year_stem(lunar_year: i32) -> HeavenlyStem {
    ALL_STEMS[year_stem_index(lunar_year) as usize]
}

/// Position of a lunar year on the stem cycle, in [0, 9].
pub fn year_stem_index(lunar_year: i32) -> u8 {
    stem_cycle(lunar_year - STEM_EPOCH_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn year_1984_is_jia() {
        assert_eq!(year_stem(1984), HeavenlyStem::Jia);
    }

    #[test]
    fn year_1998_is_wu() {
        assert_eq!(year_stem(1998), HeavenlyStem::Wu);
        assert_eq!(year_stem_index(1998), 4);
    }

    #[test]
    fn year_2024_is_jia() {
        assert_eq!(year_stem(2024), HeavenlyStem::Jia);
    }

    #[test]
    fn year_before_epoch_wraps() {
        // 3 - 4 = -1, rem_euclid(10) = 9 → Gui
        assert_eq!(year_stem(3), HeavenlyStem::Gui);
    }
}
