use crate::dto::analysis_dto::DocumentAnalysis;
use crate::models::profile::Language;
use crate::services::llm_service::LlmService;
use crate::services::prompt_builder::PromptBuilder;

/// Document analysis post-processor: one big sectioned prompt, then
/// best-effort slicing of the model's free-text reply by heading keywords.
/// Malformed or reordered output silently yields empty sections; this is
/// text mining, not parsing against a grammar.
#[derive(Clone)]
pub struct AnalysisService {
    llm: LlmService,
    prompts: PromptBuilder,
}

impl AnalysisService {
    pub fn new(llm: LlmService, prompts: PromptBuilder) -> Self {
        Self { llm, prompts }
    }

    pub async fn analyze(
        &self,
        text: &str,
        language: Language,
        filename: Option<&str>,
    ) -> DocumentAnalysis {
        let prompt = self.prompts.analysis_prompt(text, language, filename);
        match self.llm.generate_content(&prompt, 2048).await {
            Ok(reply) => parse_sections(&reply),
            Err(e) => {
                tracing::warn!(error = ?e, "Document analysis LLM call failed, returning demo analysis");
                demo_analysis(language)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Summary,
    DocumentType,
    KeyPoints,
    RequiredActions,
    Deadlines,
    Strengths,
    Weaknesses,
    Suggestions,
}

/// Heading keywords per section across the supported template languages.
const SECTION_HEADINGS: &[(Section, &[&str])] = &[
    (
        Section::Summary,
        &["краткое содержание", "summary", "zusammenfassung"],
    ),
    (
        Section::DocumentType,
        &["тип документа", "document type", "dokumenttyp"],
    ),
    (
        Section::KeyPoints,
        &["ключевые моменты", "key points", "kernpunkte"],
    ),
    (
        Section::RequiredActions,
        &[
            "необходимые действия",
            "required actions",
            "erforderliche schritte",
        ],
    ),
    (Section::Deadlines, &["сроки", "deadlines", "fristen"]),
    (
        Section::Strengths,
        &["сильные стороны", "strengths", "stärken"],
    ),
    (
        Section::Weaknesses,
        &["слабые стороны", "weaknesses", "schwächen"],
    ),
    (
        Section::Suggestions,
        &["рекомендации", "suggestions", "empfehlungen"],
    ),
];

fn heading_for(line: &str) -> Option<Section> {
    let normalized = line
        .trim()
        .trim_start_matches(['#', '*', '-', ' '])
        .trim_end_matches([':', '*', ' '])
        .to_lowercase();
    if normalized.is_empty() || normalized.len() > 60 {
        return None;
    }
    SECTION_HEADINGS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.starts_with(k)))
        .map(|(section, _)| *section)
}

fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let content = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("• "))
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| {
            trimmed
                .chars()
                .next()
                .filter(|c| c.is_ascii_digit())
                .and_then(|_| trimmed.split_once(". ").map(|(_, rest)| rest))
        })?;
    let content = content.trim();
    (!content.is_empty()).then_some(content)
}

/// Slice the LLM's prose reply into the fixed analysis sections. Public so
/// the slicing contract is testable without a provider.
pub fn parse_sections(reply: &str) -> DocumentAnalysis {
    let mut analysis = DocumentAnalysis::default();
    let mut current: Option<Section> = None;

    for line in reply.lines() {
        if let Some(section) = heading_for(line) {
            current = Some(section);
            continue;
        }
        let Some(section) = current else { continue };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match section {
            Section::Summary => {
                if !analysis.summary.is_empty() {
                    analysis.summary.push(' ');
                }
                analysis
                    .summary
                    .push_str(bullet_text(line).unwrap_or(trimmed));
            }
            Section::DocumentType => {
                if analysis.document_type.is_empty() {
                    analysis.document_type = bullet_text(line).unwrap_or(trimmed).to_string();
                }
            }
            _ => {
                let Some(item) = bullet_text(line) else { continue };
                let list = match section {
                    Section::KeyPoints => &mut analysis.key_points,
                    Section::RequiredActions => &mut analysis.required_actions,
                    Section::Deadlines => &mut analysis.deadlines,
                    Section::Strengths => &mut analysis.strengths,
                    Section::Weaknesses => &mut analysis.weaknesses,
                    Section::Suggestions => &mut analysis.suggestions,
                    Section::Summary | Section::DocumentType => unreachable!(),
                };
                list.push(item.to_string());
            }
        }
    }

    analysis
}

/// Placeholder analysis when no provider is reachable.
pub fn demo_analysis(language: Language) -> DocumentAnalysis {
    let (summary, suggestion) = match language.template() {
        Language::En => (
            "Automatic analysis is temporarily unavailable. The document was received \
             but could not be analyzed.",
            "Try again later or consult the document with a person who reads German.",
        ),
        Language::De => (
            "Die automatische Analyse ist vorübergehend nicht verfügbar.",
            "Versuchen Sie es später erneut.",
        ),
        _ => (
            "Автоматический анализ временно недоступен. Документ получен, но не \
             проанализирован.",
            "Попробуйте позже или обратитесь к человеку, читающему по-немецки.",
        ),
    };
    DocumentAnalysis {
        summary: summary.to_string(),
        suggestions: vec![suggestion.to_string()],
        ..DocumentAnalysis::default()
    }
}
