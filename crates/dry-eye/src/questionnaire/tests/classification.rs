use super::common::*;
use crate::questionnaire::{
    classify, AnswerSet, DryEyeCategory, QuestionId, QuestionnaireCatalog, ScoreBreakdown,
};

#[test]
fn worst_case_answers_classify_as_neuropathic() {
    let result = engine().classify(&neuropathic_answers());

    assert_eq!(result.category, DryEyeCategory::Neuropathic);
    assert_eq!(
        result.scores,
        ScoreBreakdown {
            evaporative: 20,
            aqueous_deficit: 16,
            total_symptoms: 28,
        }
    );
    assert_eq!(result.name(), "Occhio Secco Neuropatico");
    assert_eq!(
        result.recommendations.first().map(String::as_str),
        Some("Considera una valutazione neurologica specializzata")
    );
}

#[test]
fn high_scores_without_neuropathic_indicator_classify_as_mixed() {
    let result = engine().classify(&mixed_answers());

    assert_eq!(result.category, DryEyeCategory::Mixed);
    assert_eq!(result.scores.evaporative, 16);
    assert_eq!(result.scores.aqueous_deficit, 14);
    assert_eq!(result.scores.total_symptoms, 21);
}

#[test]
fn evaporative_lead_classifies_as_evaporative() {
    let result = engine().classify(&evaporative_answers());

    assert_eq!(result.category, DryEyeCategory::Evaporative);
    assert_eq!(result.scores.evaporative, 12);
    assert_eq!(result.scores.aqueous_deficit, 0);
    assert_eq!(result.scores.total_symptoms, 12);
}

#[test]
fn aqueous_items_classify_as_aqueous_deficit() {
    let result = engine().classify(&aqueous_answers());

    assert_eq!(result.category, DryEyeCategory::AqueousDeficit);
    assert_eq!(result.scores.evaporative, 0);
    assert_eq!(result.scores.aqueous_deficit, 12);
    assert_eq!(result.scores.total_symptoms, 8);
}

#[test]
fn quiet_answers_classify_as_mild() {
    let result = engine().classify(&quiet_answers());

    assert_eq!(result.category, DryEyeCategory::Mild);
    assert_eq!(
        result.scores,
        ScoreBreakdown {
            evaporative: 0,
            aqueous_deficit: 0,
            total_symptoms: 0,
        }
    );
}

#[test]
fn neuropathic_indicator_needs_enough_symptoms() {
    // total 14 falls one short of the neuropathic threshold
    let answers = uniform_answers(2, false).with_binary(20, true);

    let result = engine().classify(&answers);

    assert_eq!(result.scores.total_symptoms, 14);
    assert_eq!(result.scores.evaporative, 8);
    assert_eq!(result.scores.aqueous_deficit, 4);
    assert_eq!(result.category, DryEyeCategory::Evaporative);
}

#[test]
fn evaporative_tie_falls_through_to_aqueous_deficit() {
    let answers = quiet_answers()
        .with_grade(2, 4)
        .with_grade(3, 4)
        .with_grade(1, 4)
        .with_grade(6, 4);

    let result = engine().classify(&answers);

    assert_eq!(result.scores.evaporative, 8);
    assert_eq!(result.scores.aqueous_deficit, 8);
    assert_eq!(result.category, DryEyeCategory::AqueousDeficit);
}

#[test]
fn unscored_binary_items_do_not_move_scores() {
    let answers = quiet_answers()
        .with_binary(9, true)
        .with_binary(17, true);

    let result = engine().classify(&answers);

    assert_eq!(result.category, DryEyeCategory::Mild);
    assert_eq!(result.scores.evaporative, 0);
    assert_eq!(result.scores.aqueous_deficit, 0);
}

#[test]
fn missing_answers_score_zero() {
    let result = classify(&AnswerSet::new());
    assert_eq!(result.category, DryEyeCategory::Mild);
    assert_eq!(result.scores.total_symptoms, 0);

    let partial = AnswerSet::new().with_grade(2, 4).with_grade(3, 4);
    let result = classify(&partial);
    assert_eq!(result.scores.evaporative, 8);
    assert_eq!(result.category, DryEyeCategory::Evaporative);
}

#[test]
fn classification_is_deterministic() {
    let answers = mixed_answers();
    let first = engine().classify(&answers);
    let second = engine().classify(&answers);
    assert_eq!(first, second);
}

#[test]
fn scores_stay_within_bounds() {
    for grade in 0..=4 {
        for yes in [false, true] {
            let result = engine().classify(&uniform_answers(grade, yes));
            assert!(result.scores.evaporative <= 20);
            assert!(result.scores.aqueous_deficit <= 16);
            assert!(result.scores.total_symptoms <= 28);
        }
    }
}

#[test]
fn every_category_carries_its_profile_content() {
    for category in DryEyeCategory::ordered() {
        let profile = category.profile();
        assert!(!profile.description.is_empty());
        assert!(!profile.recommendations.is_empty());
        assert_eq!(category.label(), profile.name);
    }
    assert_eq!(
        DryEyeCategory::AqueousDeficit.profile().description,
        "Il tuo profilo è compatibile con un occhio secco da deficit acquoso, caratterizzato da una ridotta produzione della componente acquosa delle lacrime."
    );
}

#[test]
fn catalog_exposes_twenty_questions_in_four_sections() {
    let catalog = QuestionnaireCatalog::standard();

    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.sections().len(), 4);
    let ids: Vec<u8> = catalog.ids().map(QuestionId::get).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<u8>>());
    assert_eq!(catalog.info().total_questions, 20);
}
