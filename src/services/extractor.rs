use crate::models::profile::{CollectedData, Stage};
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

/// Multi-word entries come first so that e.g. "python developer" wins over
/// the bare "developer".
const PROFESSIONS: &[&str] = &[
    "python developer",
    "java developer",
    "frontend developer",
    "backend developer",
    "fullstack developer",
    "web developer",
    "software engineer",
    "data scientist",
    "devops engineer",
    "qa engineer",
    "ux designer",
    "developer",
    "designer",
    "программист",
    "разработчик",
    "тестировщик",
    "аналитик",
    "дизайнер",
    "бухгалтер",
    "менеджер",
    "инженер",
    "водитель",
    "продавец",
    "учитель",
    "повар",
    "врач",
    "юрист",
];

/// (substring in lower-cased message, canonical English city name). Russian
/// aliases are stems so that inflected forms ("в Берлине") still match.
const CITIES: &[(&str, &str)] = &[
    ("берлин", "Berlin"),
    ("berlin", "Berlin"),
    ("мюнхен", "Munich"),
    ("münchen", "Munich"),
    ("munich", "Munich"),
    ("гамбург", "Hamburg"),
    ("hamburg", "Hamburg"),
    ("франкфурт", "Frankfurt"),
    ("frankfurt", "Frankfurt"),
    ("кёльн", "Cologne"),
    ("кельн", "Cologne"),
    ("köln", "Cologne"),
    ("cologne", "Cologne"),
    ("штутгарт", "Stuttgart"),
    ("stuttgart", "Stuttgart"),
    ("дюссельдорф", "Dusseldorf"),
    ("düsseldorf", "Dusseldorf"),
    ("dusseldorf", "Dusseldorf"),
    ("лейпциг", "Leipzig"),
    ("leipzig", "Leipzig"),
    ("дрезден", "Dresden"),
    ("dresden", "Dresden"),
    ("ганновер", "Hanover"),
    ("hannover", "Hanover"),
    ("нюрнберг", "Nuremberg"),
    ("nuremberg", "Nuremberg"),
    ("бремен", "Bremen"),
    ("bremen", "Bremen"),
];

const SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "c++",
    "c#",
    "sql",
    "react",
    "angular",
    "vue",
    "docker",
    "kubernetes",
    "linux",
    "excel",
    "sap",
    "aws",
    "git",
];

const WORK_FORMATS: &[(&str, &str)] = &[
    ("удалён", "remote"),
    ("удален", "remote"),
    ("remote", "remote"),
    ("офис", "office"),
    ("office", "office"),
    ("гибрид", "hybrid"),
    ("hybrid", "hybrid"),
];

fn level_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([abc][12])\b").expect("level regex"))
}

fn experience_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{1,2})\s*(?:years?|yrs?|лет|год(?:а|у)?)").expect("experience regex")
    })
}

fn salary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4,6})\s*(?:€|eur|евро|euro)").expect("salary regex"))
}

/// Keyword/regex based best-effort field extraction from free-text replies.
///
/// Total function: returns an empty map when nothing matches, never fails.
/// First match wins per category. Professions are scanned before skills, so
/// "python developer" fills `profession` while "python" still counts as a
/// technical skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseExtractor;

impl ResponseExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, user_message: &str, stage: Stage) -> CollectedData {
        let mut data = CollectedData::new();
        let text = user_message.to_lowercase();
        if text.trim().is_empty() {
            return data;
        }

        if let Some(profession) = PROFESSIONS.iter().find(|p| text.contains(*p)) {
            data.insert("profession".to_string(), json!(profession));
        }

        if let Some((_, city)) = CITIES.iter().find(|(alias, _)| text.contains(alias)) {
            data.insert("preferred_city".to_string(), json!(city));
        }

        if let Some(caps) = level_re().captures(&text) {
            data.insert("german_level".to_string(), json!(caps[1].to_uppercase()));
        }

        if let Some(caps) = experience_re().captures(&text) {
            if let Ok(years) = caps[1].parse::<i64>() {
                data.insert("experience_years".to_string(), json!(years));
            }
        }

        // Skill and preference mining starts once the conversation has moved
        // past the opening questions.
        if stage != Stage::Initial {
            let skills: Vec<&str> = SKILLS
                .iter()
                .filter(|skill| text.contains(*skill))
                .copied()
                .collect();
            if !skills.is_empty() {
                data.insert("technical_skills".to_string(), json!(skills));
            }

            if let Some((_, format)) = WORK_FORMATS
                .iter()
                .find(|(alias, _)| text.contains(alias))
            {
                data.insert("work_format".to_string(), json!(format));
            }

            if let Some(caps) = salary_re().captures(&text) {
                if let Ok(amount) = caps[1].parse::<i64>() {
                    data.insert("salary_expectations".to_string(), json!(amount));
                }
            }
        }

        data
    }
}
