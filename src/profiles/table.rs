//! Display table of resistance profiles, grouped by surface.

use std::fmt;

use crate::model::SurfaceType;
use crate::profiles::ResistanceProfile;
use crate::profiles::resistance::format2;

const HEADERS: [&str; 9] = [
    "Estimate",
    "Axial Brk (kN/m)",
    "Xbrk (mm)",
    "Axial Res (kN/m)",
    "Xres (mm)",
    "Lat Brk (kN/m)",
    "Ybrk (mm)",
    "Lat Res (kN/m)",
    "Yres (mm)",
];

/// Borrowed view over generated profiles for presentation.
///
/// Values are printed to two decimals; the profiles themselves stay at full
/// precision.
#[derive(Debug, Clone, Copy)]
pub struct ProfileTable<'a> {
    profiles: &'a [ResistanceProfile],
}

impl<'a> ProfileTable<'a> {
    pub fn new(profiles: &'a [ResistanceProfile]) -> Self {
        Self { profiles }
    }

    /// Profiles of one surface, in estimate order
    pub fn surface(&self, surface: SurfaceType) -> impl Iterator<Item = &'a ResistanceProfile> + 'a {
        self.profiles.iter().filter(move |p| p.surface == surface)
    }

    /// Two-decimal cells for one row, matching [`HEADERS`]
    pub fn row(profile: &ResistanceProfile) -> [String; 9] {
        let p = profile;
        [
            p.estimate.label().to_string(),
            format2(p.axial.break_force),
            format2(p.axial.break_displacement),
            format2(p.axial.residual_force),
            format2(p.axial.residual_displacement),
            format2(p.lateral.break_force),
            format2(p.lateral.break_displacement),
            format2(p.lateral.residual_force),
            format2(p.lateral.residual_displacement),
        ]
    }
}

impl fmt::Display for ProfileTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for surface in SurfaceType::ALL {
            let rows: Vec<[String; 9]> = self.surface(surface).map(Self::row).collect();
            if rows.is_empty() {
                continue;
            }

            let mut widths = HEADERS.map(str::len);
            for row in &rows {
                for (w, cell) in widths.iter_mut().zip(row.iter()) {
                    *w = (*w).max(cell.len());
                }
            }

            writeln!(f, "{}", surface)?;
            for (w, header) in widths.iter().zip(HEADERS.iter()) {
                write!(f, " {:>w$}", header, w = *w)?;
            }
            writeln!(f)?;
            for row in &rows {
                for (w, cell) in widths.iter().zip(row.iter()) {
                    write!(f, " {:>w$}", cell, w = *w)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::fixtures::scenario_a;
    use crate::physics::IntermediateCalculator;
    use crate::profiles::ProfileTableGenerator;

    #[test]
    fn test_table_groups_by_surface() {
        let inputs = scenario_a();
        let intermediates = IntermediateCalculator::compute(&inputs).unwrap();
        let profiles = ProfileTableGenerator::generate(&inputs, &intermediates).unwrap();

        let text = ProfileTable::new(&profiles).to_string();
        let concrete = text.find("CONCRETE SURFACE").unwrap();
        let pet = text.find("PET SURFACE").unwrap();
        assert!(concrete < pet);
        assert_eq!(text.matches("P50").count(), 2);
        assert!(text.contains("2.84"));
        assert!(text.contains("600.00"));
    }

    #[test]
    fn test_row_rounds_to_two_decimals() {
        let inputs = scenario_a();
        let intermediates = IntermediateCalculator::compute(&inputs).unwrap();
        let profiles = ProfileTableGenerator::generate(&inputs, &intermediates).unwrap();

        let row = ProfileTable::row(&profiles[1]);
        assert_eq!(row[0], "P50");
        assert_eq!(row[1], "2.84");
        assert_eq!(row[2], "4.00");
        assert_eq!(row[6], "33.00");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(ProfileTable::new(&[]).to_string(), "");
    }
}
