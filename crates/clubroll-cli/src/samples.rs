//! Fake registration payloads.
//!
//! Every generated payload passes validation under the rules it was
//! generated from, which makes them handy for exercising a running server.

use clubroll_config::RegistrationRules;
use clubroll_models::fields;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use serde_json::{Map, Value, json};

const TRACKS: [&str; 2] = ["DEG", "DIP"];

fn pick<T: Clone>(items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let idx: usize = (0..items.len()).fake();
    items.get(idx).cloned()
}

/// Letters and digits only, lowercased.
fn email_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn departments(rules: &RegistrationRules) -> Vec<String> {
    let available = rules.departments.len();
    let max = rules.max_departments_per_member.min(available);
    if max == 0 {
        return Vec::new();
    }

    let count: usize = (1..=max).fake();
    let start: usize = (0..available).fake();
    (0..count)
        .map(|offset| rules.departments[(start + offset) % available].clone())
        .collect()
}

pub fn sample_payload(rules: &RegistrationRules) -> Map<String, Value> {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let track = pick(&TRACKS).unwrap_or("DEG");
    let year: u16 = (2019..2027).fake();
    let sequence: u16 = (1..1000).fake();
    let mut local = format!("{}.{}", email_part(&first_name), email_part(&last_name));
    if local.len() < 3 {
        local = format!("member{sequence}");
    }
    let phone_suffix: u32 = (0..100_000_000).fake();

    let mut payload = Map::new();
    payload.insert(
        fields::REG_NUMBER.into(),
        json!(format!("T/{track}/{year}/{sequence:03}")),
    );
    payload.insert(
        fields::FULL_NAME.into(),
        json!(format!("{first_name} {last_name}")),
    );
    payload.insert(
        fields::EMAIL.into(),
        json!(format!("{local}{sequence}@example.com")),
    );
    payload.insert(fields::PHONE.into(), json!(format!("+2557{phone_suffix:08}")));

    if let Some(gender) = pick(&rules.genders) {
        payload.insert(fields::GENDER.into(), json!(gender));
    }
    if let Some(year_of_study) = pick(&rules.years) {
        payload.insert(fields::YEAR_OF_STUDY.into(), json!(year_of_study));
    }
    if let Some(course) = pick(&rules.courses) {
        payload.insert(fields::COURSE.into(), json!(course));
    }
    payload.insert(fields::DEPARTMENTS.into(), json!(departments(rules)));

    payload
}

pub fn sample_payloads(rules: &RegistrationRules, count: usize) -> Vec<Map<String, Value>> {
    (0..count).map(|_| sample_payload(rules)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubroll_core::validate_member;

    #[test]
    fn test_samples_are_valid() {
        let rules = RegistrationRules::default();
        for payload in sample_payloads(&rules, 50) {
            let outcome = validate_member(&payload, &rules);
            assert!(outcome.is_valid(), "{payload:?}: {}", outcome.errors);
        }
    }

    #[test]
    fn test_departments_respect_maximum() {
        let rules = RegistrationRules {
            max_departments_per_member: 1,
            ..RegistrationRules::default()
        };
        for _ in 0..20 {
            assert_eq!(departments(&rules).len(), 1);
        }
    }

    #[test]
    fn test_email_part_strips_punctuation() {
        assert_eq!(email_part("O'Kon-Bahringer"), "okonbahringer");
    }
}
