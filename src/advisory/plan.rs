use serde::{Serialize, Serializer};
use crate::advisory::severity::Severity;

/// Wind speed (km/h) at or below which spraying is considered safe.
pub const MAX_SPRAY_WIND_KMH: f64 = 10.0;

/// One Integrated Pest Management step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    OrganicTreatment,
    ChemicalTreatment,
    SprayConditionsOptimal,
    AvoidSpraying,
    CompanionPlanting,
    Monitoring,
}

impl Recommendation {
    pub fn text(self) -> &'static str {
        match self {
            Recommendation::OrganicTreatment =>
                "Apply neem oil spray (3 ml per liter) as organic control.",
            Recommendation::ChemicalTreatment =>
                "Use recommended chemical pesticide with proper safety measures.",
            Recommendation::SprayConditionsOptimal =>
                "Spraying conditions are optimal (low wind speed).",
            Recommendation::AvoidSpraying =>
                "Avoid spraying due to high wind conditions.",
            Recommendation::CompanionPlanting =>
                "Adopt companion planting (e.g., marigold) for pest prevention.",
            Recommendation::Monitoring =>
                "Regular monitoring is advised for early detection.",
        }
    }
}

// Reports carry the display text, not the variant name.
impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// Ordered IPM plan. Order is display order; entries are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdvisoryPlan {
    steps: Vec<Recommendation>,
}

impl AdvisoryPlan {
    pub fn steps(&self) -> &[Recommendation] {
        &self.steps
    }

    pub fn contains(&self, rec: Recommendation) -> bool {
        self.steps.contains(&rec)
    }

    pub fn texts(&self) -> Vec<&'static str> {
        self.steps.iter().map(|r| r.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builds the IPM plan for a severity and the current wind speed.
///
/// Rules, in order:
/// 1. Moderate or worse: organic treatment
/// 2. Severe: chemical treatment as well
/// 3. Spray window: optimal when wind ≤ 10 km/h, otherwise avoid spraying
/// 4. Companion planting
/// 5. Monitoring
pub fn plan(severity: Severity, wind_speed: f64) -> AdvisoryPlan {
    let mut steps = Vec::with_capacity(5);

    if severity >= Severity::Moderate {
        steps.push(Recommendation::OrganicTreatment);
        if severity == Severity::Severe {
            steps.push(Recommendation::ChemicalTreatment);
        }
    }

    if wind_speed <= MAX_SPRAY_WIND_KMH {
        steps.push(Recommendation::SprayConditionsOptimal);
    } else {
        steps.push(Recommendation::AvoidSpraying);
    }

    steps.push(Recommendation::CompanionPlanting);
    steps.push(Recommendation::Monitoring);

    AdvisoryPlan { steps }
}
