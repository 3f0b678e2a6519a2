//! Build-a-planet session state
//!
//! A [`Sandbox`] owns the design being edited and keeps its assessment in
//! step: every mutation goes through [`Sandbox::update`], which re-runs
//! [`evaluate`] once the edit is applied.

use crate::assessment::{HabitabilityAssessment, evaluate};
use crate::export::PlanetExport;
use crate::planet_config::PlanetConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Sandbox {
    config: PlanetConfig,
    assessment: HabitabilityAssessment,
}

impl Sandbox {
    pub fn new(config: PlanetConfig) -> Self {
        let assessment = evaluate(&config);
        Self { config, assessment }
    }

    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    pub fn assessment(&self) -> &HabitabilityAssessment {
        &self.assessment
    }

    /// Apply an edit and re-score the planet
    ///
    /// # Examples
    /// ```
    /// use habitability::{Sandbox, Verdict};
    ///
    /// let mut sandbox = Sandbox::default();
    /// sandbox.update(|c| c.distance = 5.2);
    /// assert_eq!(sandbox.assessment().score, 90.0);
    /// assert_eq!(sandbox.assessment().verdict, Verdict::HighlyHabitable);
    /// ```
    pub fn update(&mut self, edit: impl FnOnce(&mut PlanetConfig)) -> &HabitabilityAssessment {
        edit(&mut self.config);
        self.assessment = evaluate(&self.config);
        &self.assessment
    }

    /// Swap in a whole new design
    pub fn replace(&mut self, config: PlanetConfig) -> &HabitabilityAssessment {
        self.update(|c| *c = config)
    }

    /// Return to the Earth-like starting point
    pub fn reset(&mut self) -> &HabitabilityAssessment {
        self.replace(PlanetConfig::earth_like())
    }

    /// Export record for the current design
    pub fn export(&self) -> PlanetExport {
        PlanetExport::new(&self.config, &self.assessment)
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(PlanetConfig::earth_like())
    }
}
