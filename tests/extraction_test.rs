use job_assistant_backend::models::profile::Stage;
use job_assistant_backend::services::extractor::ResponseExtractor;
use serde_json::json;

#[test]
fn extract_never_fails_on_empty_or_garbage() {
    let extractor = ResponseExtractor::new();

    assert!(extractor.extract("", Stage::Initial).is_empty());
    assert!(extractor.extract("   \n\t  ", Stage::Skills).is_empty());
    assert!(extractor
        .extract("%$#@!()[]{}<>~~~", Stage::Initial)
        .is_empty());
    // Replacement chars and mixed scripts must not trip the regexes.
    assert!(extractor
        .extract("\u{fffd}\u{fffd} ☃☃☃ \u{200b}", Stage::Complete)
        .is_empty());
}

#[test]
fn extracts_profession_city_and_level_from_russian_reply() {
    let extractor = ResponseExtractor::new();
    let data = extractor.extract("я ищу python developer в Берлине, уровень B1", Stage::Initial);

    assert_eq!(data.get("profession"), Some(&json!("python developer")));
    assert_eq!(data.get("preferred_city"), Some(&json!("Berlin")));
    assert_eq!(data.get("german_level"), Some(&json!("B1")));
    assert_eq!(data.len(), 3);
}

#[test]
fn multiword_profession_wins_over_generic_one() {
    let extractor = ResponseExtractor::new();
    let data = extractor.extract("ich bin frontend developer", Stage::Initial);
    assert_eq!(data.get("profession"), Some(&json!("frontend developer")));
}

#[test]
fn skills_and_preferences_are_mined_after_the_initial_stage() {
    let extractor = ResponseExtractor::new();

    let data = extractor.extract(
        "знаю python и docker, хочу remote, зарплата 55000 евро",
        Stage::Skills,
    );
    assert_eq!(data.get("technical_skills"), Some(&json!(["python", "docker"])));
    assert_eq!(data.get("work_format"), Some(&json!("remote")));
    assert_eq!(data.get("salary_expectations"), Some(&json!(55000)));

    // The same message in the initial stage only yields core fields.
    let data = extractor.extract(
        "знаю python и docker, хочу remote, зарплата 55000 евро",
        Stage::Initial,
    );
    assert!(data.get("technical_skills").is_none());
    assert!(data.get("work_format").is_none());
}

#[test]
fn experience_years_in_russian_and_english() {
    let extractor = ResponseExtractor::new();

    let data = extractor.extract("у меня 5 лет опыта", Stage::Skills);
    assert_eq!(data.get("experience_years"), Some(&json!(5)));

    let data = extractor.extract("I have 12 years of experience", Stage::Skills);
    assert_eq!(data.get("experience_years"), Some(&json!(12)));
}
