//! Earthly branches: the 12 cyclical labels of the chart ring.
//!
//! Branch index doubles as sector label and as birth time-slot index:
//! time slot 0 is the Zi hour (23:00-01:00), slot 1 the Chou hour, and so on
//! in two-hour steps.

use serde::{Deserialize, Serialize};

/// The 12 earthly branches (地支), starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ring order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based ring index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a ring index. `None` for indices outside [0, 11].
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// All 12 branches in ring order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }

    /// Name of the two-hour birth slot governed by this branch, e.g. "寅时".
    pub const fn hour_name(self) -> &'static str {
        match self {
            Self::Zi => "子时",
            Self::Chou => "丑时",
            Self::Yin => "寅时",
            Self::Mao => "卯时",
            Self::Chen => "辰时",
            Self::Si => "巳时",
            Self::Wu => "午时",
            Self::Wei => "未时",
            Self::Shen => "申时",
            Self::You => "酉时",
            Self::Xu => "戌时",
            Self::Hai => "亥时",
        }
    }

    /// Local clock hours `(start, end)` of the time slot.
    ///
    /// The Zi slot straddles midnight: it starts at 23 and ends at 1.
    pub const fn hour_range(self) -> (u8, u8) {
        let start = (self.index() as u32 * 2 + 23) % 24;
        (start as u8, ((start + 2) % 24) as u8)
    }

    /// Time slot containing a local clock hour (0-23).
    ///
    /// Returns `None` for hours outside [0, 23].
    pub const fn from_clock_hour(hour: u8) -> Option<Self> {
        if hour > 23 {
            return None;
        }
        Self::from_index((((hour as u32 + 1) / 2) % 12) as u8)
    }
}
