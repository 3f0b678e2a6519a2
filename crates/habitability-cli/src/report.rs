//! Plain-text assessment report

use std::fmt;

use habitability::{HabitabilityAssessment, PlanetConfig};

/// Headline numbers followed by one line per factor
pub struct Report<'a> {
    config: &'a PlanetConfig,
    assessment: &'a HabitabilityAssessment,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a PlanetConfig, assessment: &'a HabitabilityAssessment) -> Self {
        Self { config, assessment }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let assessment = self.assessment;

        writeln!(f, "{}", config.name)?;
        writeln!(
            f,
            "  {} | atmosphere: {} | {} AU | {} star",
            config.planet_type,
            config.atmosphere,
            config.distance,
            config.star_type
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "  Score:        {}/{}",
            assessment.rounded_score(),
            HabitabilityAssessment::max_score()
        )?;
        writeln!(f, "  Verdict:      {}", assessment.verdict)?;
        writeln!(f, "  Temperature:  {:.0}°C", assessment.temperature_celsius)?;
        writeln!(f, "  Gravity:      {:.2} g", assessment.surface_gravity_g)?;
        writeln!(f)?;
        writeln!(f, "  Factors:")?;

        for factor in &assessment.factors {
            writeln!(
                f,
                "    {:<10}  {:>4}/{:<2}  {}",
                factor.category.name(),
                factor.points,
                factor.factor.max_points(),
                factor.description
            )?;
        }

        Ok(())
    }
}
