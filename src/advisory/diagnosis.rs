use crate::advisory::severity::Severity;

/// Pest / disease reasoning text for a severity level.
pub fn diagnose(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe   => "High likelihood of pest infestation or fungal disease.",
        Severity::Moderate => "Early-stage pest attack or nutrient deficiency detected.",
        Severity::Healthy  => "No visible pest or disease symptoms detected.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_text_is_fixed() {
        let first = diagnose(Severity::Severe);
        for _ in 0..10 {
            assert_eq!(diagnose(Severity::Severe), first);
        }
        assert!(first.contains("fungal"));
    }

    #[test]
    fn every_level_has_distinct_text() {
        let texts = [
            diagnose(Severity::Healthy),
            diagnose(Severity::Moderate),
            diagnose(Severity::Severe),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}
