use job_assistant_backend::models::profile::{CollectedData, Stage};
use serde_json::json;

fn collected(n: usize) -> CollectedData {
    let mut data = CollectedData::new();
    for i in 0..n {
        data.insert(format!("field_{}", i), json!(i));
    }
    data
}

#[test]
fn initial_advances_to_skills_at_two_fields() {
    assert_eq!(Stage::Initial.next(&collected(0)), Stage::Initial);
    assert_eq!(Stage::Initial.next(&collected(1)), Stage::Initial);
    assert_eq!(Stage::Initial.next(&collected(2)), Stage::Skills);
    assert_eq!(Stage::Initial.next(&collected(7)), Stage::Skills);
}

#[test]
fn resolution_is_idempotent_for_the_same_input() {
    let data = collected(3);
    let first = Stage::Initial.next(&data);
    let second = Stage::Initial.next(&data);
    assert_eq!(first, second);
    assert_eq!(first, Stage::Skills);
}

#[test]
fn skills_completes_at_four_fields() {
    assert_eq!(Stage::Skills.next(&collected(2)), Stage::Skills);
    assert_eq!(Stage::Skills.next(&collected(3)), Stage::Skills);
    assert_eq!(Stage::Skills.next(&collected(4)), Stage::Complete);
}

#[test]
fn preferences_advances_unconditionally() {
    assert_eq!(Stage::Preferences.next(&collected(0)), Stage::Complete);
}

#[test]
fn complete_is_terminal() {
    assert_eq!(Stage::Complete.next(&collected(0)), Stage::Complete);
    assert_eq!(Stage::Complete.next(&collected(20)), Stage::Complete);
}
