use super::categories::DryEyeCategory;
use super::config::ClassificationThresholds;
use super::rules::ScoreSignals;

/// First matching rule wins; the order resolves overlapping score ranges.
pub(crate) fn decide_category(
    thresholds: &ClassificationThresholds,
    signals: &ScoreSignals,
) -> DryEyeCategory {
    if signals.neuropathic_indicator
        && signals.total_symptoms >= thresholds.neuropathic_min_symptoms
    {
        return DryEyeCategory::Neuropathic;
    }

    if signals.evaporative >= thresholds.mixed_min_evaporative
        && signals.aqueous_deficit >= thresholds.mixed_min_aqueous
    {
        return DryEyeCategory::Mixed;
    }

    if signals.evaporative > signals.aqueous_deficit
        && signals.evaporative >= thresholds.evaporative_min
    {
        return DryEyeCategory::Evaporative;
    }

    if signals.aqueous_deficit >= thresholds.aqueous_deficit_min {
        return DryEyeCategory::AqueousDeficit;
    }

    DryEyeCategory::Mild
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(evaporative: u32, aqueous_deficit: u32, total: u32, neuro: bool) -> ScoreSignals {
        ScoreSignals {
            evaporative,
            aqueous_deficit,
            total_symptoms: total,
            neuropathic_indicator: neuro,
        }
    }

    #[test]
    fn boundaries_are_inclusive() {
        let thresholds = ClassificationThresholds::default();

        assert_eq!(
            decide_category(&thresholds, &signals(0, 0, 15, true)),
            DryEyeCategory::Neuropathic
        );
        assert_eq!(
            decide_category(&thresholds, &signals(0, 0, 14, true)),
            DryEyeCategory::Mild
        );
        assert_eq!(
            decide_category(&thresholds, &signals(12, 10, 0, false)),
            DryEyeCategory::Mixed
        );
        assert_eq!(
            decide_category(&thresholds, &signals(8, 7, 0, false)),
            DryEyeCategory::Evaporative
        );
        assert_eq!(
            decide_category(&thresholds, &signals(7, 8, 0, false)),
            DryEyeCategory::AqueousDeficit
        );
    }

    #[test]
    fn evaporative_requires_strict_lead_over_aqueous() {
        let thresholds = ClassificationThresholds::default();

        assert_eq!(
            decide_category(&thresholds, &signals(9, 9, 0, false)),
            DryEyeCategory::AqueousDeficit
        );
        assert_eq!(
            decide_category(&thresholds, &signals(11, 11, 0, false)),
            DryEyeCategory::AqueousDeficit
        );
    }

    #[test]
    fn neuropathic_outranks_mixed() {
        let thresholds = ClassificationThresholds::default();

        assert_eq!(
            decide_category(&thresholds, &signals(20, 16, 28, true)),
            DryEyeCategory::Neuropathic
        );
        assert_eq!(
            decide_category(&thresholds, &signals(20, 16, 28, false)),
            DryEyeCategory::Mixed
        );
    }
}
