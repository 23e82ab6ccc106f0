//! Prompt-facing chart summary.
//!
//! Carries only the fields a narrative layer reads from a chart: who, when,
//! which sectors hold the life and body anchors, and where each major star
//! sits. `Display` renders a plain multi-line text block.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::birth::Gender;
use crate::branch::EarthlyBranch;
use crate::chart::Chart;
use crate::sector::{Sector, SectorName};

/// A sector reference by name and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorRef {
    pub name: SectorName,
    pub label: EarthlyBranch,
}

impl From<&Sector> for SectorRef {
    fn from(s: &Sector) -> Self {
        Self {
            name: s.name(),
            label: s.label(),
        }
    }
}

/// A major star and the sector it landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MajorPlacement {
    pub star: &'static str,
    pub sector: SectorRef,
}

/// Summary of a chart for text generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    pub gender: Gender,
    pub lunar_year: i32,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub is_leap_month: bool,
    pub time_slot: EarthlyBranch,
    pub life_sector: SectorRef,
    pub body_sector: SectorRef,
    pub major_placements: Vec<MajorPlacement>,
}

impl ChartSummary {
    pub fn from_chart(chart: &Chart) -> Self {
        let birth = chart.birth();
        let major_placements = chart
            .major_stars()
            .iter()
            .map(|s| MajorPlacement {
                star: s.name(),
                sector: chart.sector_by_label(s.placement()).into(),
            })
            .collect();
        Self {
            gender: birth.gender,
            lunar_year: birth.lunar_year,
            lunar_month: birth.lunar_month,
            lunar_day: birth.lunar_day,
            is_leap_month: birth.is_leap_month,
            // Validated on chart construction.
            time_slot: EarthlyBranch::all()[birth.time_slot as usize],
            life_sector: chart.life_sector().into(),
            body_sector: chart.body_sector().into(),
            major_placements,
        }
    }
}

impl Display for ChartSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gender: {}", self.gender.english_name())?;
        let leap = if self.is_leap_month { " (leap)" } else { "" };
        writeln!(
            f,
            "Lunar birth date: {}-{:02}{}-{:02}",
            self.lunar_year, self.lunar_month, leap, self.lunar_day
        )?;
        writeln!(f, "Time slot: {}", self.time_slot.hour_name())?;
        writeln!(
            f,
            "Life sector: {} ({})",
            self.life_sector.name.name(),
            self.life_sector.label.name()
        )?;
        writeln!(
            f,
            "Body sector: {} ({}), sector {}",
            self.body_sector.name.name(),
            self.body_sector.label.name(),
            self.body_sector.name.index() + 1
        )?;
        writeln!(f, "Major stars:")?;
        for p in &self.major_placements {
            writeln!(
                f,
                "  {} in {} ({})",
                p.star,
                p.sector.name.name(),
                p.sector.label.name()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::BirthRecord;
    use crate::chart::compute_chart;

    fn reference_summary() -> ChartSummary {
        let rec = BirthRecord::new(1998, 6, 12, false, 2, Gender::Female);
        compute_chart(&rec).unwrap().summary()
    }

    #[test]
    fn summary_fields() {
        let s = reference_summary();
        assert_eq!(s.time_slot, EarthlyBranch::Yin);
        assert_eq!(s.life_sector.name, SectorName::Life);
        assert_eq!(s.life_sector.label, EarthlyBranch::Si);
        assert_eq!(s.body_sector.name, SectorName::Siblings);
        assert_eq!(s.major_placements.len(), 14);
        assert_eq!(s.major_placements[0].star, "紫微");
        assert_eq!(s.major_placements[0].sector.name, SectorName::Life);
    }

    #[test]
    fn summary_text() {
        let text = reference_summary().to_string();
        assert!(text.contains("Gender: female"));
        assert!(text.contains("Lunar birth date: 1998-06-12"));
        assert!(text.contains("Time slot: 寅时"));
        assert!(text.contains("Life sector: 命宫 (巳)"));
        assert!(text.contains("Body sector: 兄弟宫 (午), sector 2"));
        assert!(text.contains("天府 in 迁移宫 (亥)"));
        assert_eq!(text.lines().filter(|l| l.starts_with("  ")).count(), 14);
    }
}
