use crate::models::job::JobListing;
use crate::models::profile::{Language, Stage, UserProfile};

/// Builds the per-language, per-stage prompt strings sent verbatim to the LLM
/// provider, plus the canned texts used when no provider is reachable.
///
/// Pure string interpolation. The user message is interpolated as-is; the
/// templates instruct the model to treat it as data, nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn greeting(&self, language: Language) -> String {
        match language.template() {
            Language::En => "Hello! I'm your AI recruiter for the German job market. \
                Tell me about your profession and the city where you'd like to work."
                .to_string(),
            Language::De => "Hallo! Ich bin Ihr KI-Recruiter für den deutschen Arbeitsmarkt. \
                Erzählen Sie mir von Ihrem Beruf und der Stadt, in der Sie arbeiten möchten."
                .to_string(),
            _ => "Здравствуйте! Я ваш AI-рекрутер по немецкому рынку труда. \
                Расскажите, кто вы по профессии и в каком городе хотите работать."
                .to_string(),
        }
    }

    /// Conversation prompt for one turn. Includes the data collected so far
    /// and a stage-specific instruction for what to ask next.
    pub fn conversation_prompt(
        &self,
        profile: &UserProfile,
        stage: Stage,
        user_message: &str,
    ) -> String {
        let collected = serde_json::to_string(&profile.collected_data).unwrap_or_default();
        let goal = self.stage_goal(stage, profile.language);

        match profile.language.template() {
            Language::En => format!(
                "You are a friendly AI recruiter helping a candidate find a job in Germany.\n\
                 Conversation stage: {stage}\n\
                 Data collected so far (JSON): {collected}\n\
                 The candidate just wrote: \"{user_message}\"\n\n\
                 {goal}\n\
                 Reply in English, 2-4 sentences, warm and specific. \
                 Ask at most one question.",
                stage = stage.as_str(),
            ),
            Language::De => format!(
                "Du bist ein freundlicher KI-Recruiter und hilfst bei der Jobsuche in Deutschland.\n\
                 Gesprächsphase: {stage}\n\
                 Bisher gesammelte Daten (JSON): {collected}\n\
                 Der Kandidat schrieb: \"{user_message}\"\n\n\
                 {goal}\n\
                 Antworte auf Deutsch, 2-4 Sätze, maximal eine Frage.",
                stage = stage.as_str(),
            ),
            _ => format!(
                "Ты дружелюбный AI-рекрутер, помогаешь кандидату найти работу в Германии.\n\
                 Этап диалога: {stage}\n\
                 Собранные данные (JSON): {collected}\n\
                 Кандидат написал: \"{user_message}\"\n\n\
                 {goal}\n\
                 Ответь по-русски, 2-4 предложения, тепло и по делу. \
                 Задай не больше одного вопроса.",
                stage = stage.as_str(),
            ),
        }
    }

    fn stage_goal(&self, stage: Stage, language: Language) -> &'static str {
        match (language.template(), stage) {
            (Language::En, Stage::Initial) => {
                "Goal: learn the candidate's profession and preferred city."
            }
            (Language::En, Stage::Skills) => {
                "Goal: learn their technical skills, German level and years of experience."
            }
            (Language::En, Stage::Preferences) => {
                "Goal: learn work format and salary expectations."
            }
            (Language::En, Stage::Complete) => {
                "Goal: the profile is complete. Summarize it and say you are \
                 picking matching vacancies."
            }
            (Language::De, Stage::Initial) => {
                "Ziel: Beruf und Wunschstadt des Kandidaten erfahren."
            }
            (Language::De, Stage::Skills) => {
                "Ziel: technische Fähigkeiten, Deutschniveau und Berufserfahrung erfragen."
            }
            (Language::De, Stage::Preferences) => {
                "Ziel: Arbeitsform und Gehaltsvorstellung erfragen."
            }
            (Language::De, Stage::Complete) => {
                "Ziel: Das Profil ist vollständig. Fasse es zusammen und kündige \
                 passende Stellen an."
            }
            (_, Stage::Initial) => "Цель: узнать профессию кандидата и желаемый город.",
            (_, Stage::Skills) => {
                "Цель: узнать технические навыки, уровень немецкого и опыт работы."
            }
            (_, Stage::Preferences) => "Цель: узнать формат работы и зарплатные ожидания.",
            (_, Stage::Complete) => {
                "Цель: профиль собран. Подведи итог и скажи, что подбираешь вакансии."
            }
        }
    }

    /// Canned per-stage reply used when no LLM provider is configured or the
    /// call failed. The service always degrades to content, never to a 5xx.
    pub fn fallback_reply(&self, stage: Stage, language: Language) -> String {
        match (language.template(), stage) {
            (Language::En, Stage::Initial) => {
                "Thanks! What is your profession, and in which German city would you like to work?"
                    .to_string()
            }
            (Language::En, Stage::Skills) => {
                "Got it. Which technical skills do you have, what's your German level, \
                 and how many years of experience?"
                    .to_string()
            }
            (Language::En, Stage::Preferences) => {
                "Almost done. Do you prefer remote, office or hybrid work, and what salary \
                 are you expecting?"
                    .to_string()
            }
            (Language::En, Stage::Complete) => {
                "Your profile is complete! I've picked vacancies that match it — see the \
                 recommendations below."
                    .to_string()
            }
            (Language::De, Stage::Complete) => {
                "Ihr Profil ist vollständig! Passende Stellen finden Sie unten.".to_string()
            }
            (Language::De, _) => {
                "Danke! Erzählen Sie mir bitte mehr über Ihren Beruf, Ihre Fähigkeiten \
                 und Ihre Wunschstadt."
                    .to_string()
            }
            (_, Stage::Initial) => {
                "Спасибо! Кто вы по профессии и в каком городе Германии хотите работать?"
                    .to_string()
            }
            (_, Stage::Skills) => {
                "Понял. Какие у вас технические навыки, какой уровень немецкого и сколько \
                 лет опыта?"
                    .to_string()
            }
            (_, Stage::Preferences) => {
                "Почти готово. Какой формат работы вам удобен и какие зарплатные ожидания?"
                    .to_string()
            }
            (_, Stage::Complete) => {
                "Ваш профиль собран! Я подобрал подходящие вакансии — они ниже в рекомендациях."
                    .to_string()
            }
        }
    }

    /// Compatibility scoring prompt. Requests JSON-constrained output so the
    /// reply can be parsed instead of mined from prose.
    pub fn compatibility_prompt(&self, profile: &UserProfile, job: &JobListing) -> String {
        let collected = serde_json::to_string(&profile.collected_data).unwrap_or_default();
        format!(
            "You are a strict recruiter. Estimate how well this candidate fits the vacancy.\n\
             Candidate profile (JSON): {collected}\n\
             Vacancy: {title} at {company}, {location}\n\
             Description: {description}\n\
             Requirements: {requirements}\n\n\
             Return ONLY a JSON object:\n\
             {{\"score\": <0-100>, \"strengths\": [..], \"weaknesses\": [..], \
             \"suggestions\": [..]}}\n\
             Write the list items in {answer_language}.",
            title = job.title,
            company = job.company_name,
            location = job.location,
            description = job.description,
            requirements = job.requirements.as_deref().unwrap_or("-"),
            answer_language = profile.language.english_name(),
        )
    }

    pub fn translation_prompt(&self, job: &JobListing, target: Language) -> String {
        format!(
            "Translate this job posting into {language}. Keep the structure \
             (title, company, location, description, requirements) and translate \
             everything else faithfully. Return plain text.\n\n\
             Title: {title}\nCompany: {company}\nLocation: {location}\n\
             Description: {description}\nRequirements: {requirements}",
            language = target.english_name(),
            title = job.title,
            company = job.company_name,
            location = job.location,
            description = job.description,
            requirements = job.requirements.as_deref().unwrap_or("-"),
        )
    }

    /// Plain-text rendition of the posting, used when translation is not
    /// available.
    pub fn fallback_translation(&self, job: &JobListing) -> String {
        format!(
            "{} — {} ({})\n{}\n{}",
            job.title,
            job.company_name,
            job.location,
            job.description,
            job.requirements.as_deref().unwrap_or(""),
        )
        .trim_end()
        .to_string()
    }

    pub fn cover_letter_prompt(&self, profile: &UserProfile, job: &JobListing) -> String {
        let collected = serde_json::to_string(&profile.collected_data).unwrap_or_default();
        format!(
            "Write a formal German cover letter (Anschreiben) for this application.\n\
             Candidate profile (JSON): {collected}\n\
             Vacancy: {title} at {company}, {location}\n\
             Description: {description}\n\n\
             Follow the usual German structure: subject line, salutation, \
             motivation, qualifications, closing. 250-350 words. Return plain text \
             in German only.",
            title = job.title,
            company = job.company_name,
            location = job.location,
            description = job.description,
        )
    }

    pub fn fallback_cover_letter(&self, profile: &UserProfile, job: &JobListing) -> String {
        let profession = profile.collected_str("profession").unwrap_or("candidate");
        format!(
            "Bewerbung um die Stelle als {title}\n\n\
             Sehr geehrte Damen und Herren,\n\n\
             mit großem Interesse habe ich Ihre Ausschreibung für die Position \
             {title} bei {company} gelesen. Als {profession} bringe ich die \
             erforderlichen Kenntnisse mit und würde mich freuen, mein Können in \
             Ihrem Team einzusetzen.\n\n\
             Über die Einladung zu einem persönlichen Gespräch freue ich mich sehr.\n\n\
             Mit freundlichen Grüßen",
            title = job.title,
            company = job.company_name,
        )
    }

    /// The big document-analysis prompt: asks for a fixed set of named
    /// sections so the post-processor can slice the reply by heading.
    pub fn analysis_prompt(&self, text: &str, language: Language, filename: Option<&str>) -> String {
        let file_note = filename
            .map(|name| format!(" (file: {})", name))
            .unwrap_or_default();
        match language.template() {
            Language::En => format!(
                "Analyze this German-language document{file_note} for someone who \
                 does not speak German well. Structure your answer with EXACTLY \
                 these section headings, in this order, each followed by bullet \
                 points or short text:\n\
                 Summary\nDocument type\nKey points\nRequired actions\nDeadlines\n\
                 Strengths\nWeaknesses\nSuggestions\n\n\
                 Document text:\n{text}",
            ),
            Language::De => format!(
                "Analysiere dieses Dokument{file_note}. Gliedere deine Antwort mit GENAU \
                 diesen Überschriften, jeweils mit Stichpunkten oder kurzem Text:\n\
                 Zusammenfassung\nDokumenttyp\nKernpunkte\nErforderliche Schritte\nFristen\n\
                 Stärken\nSchwächen\nEmpfehlungen\n\n\
                 Dokumenttext:\n{text}",
            ),
            _ => format!(
                "Проанализируй этот немецкий документ{file_note} для человека, плохо \
                 знающего немецкий. Оформи ответ СТРОГО с такими заголовками разделов, \
                 в этом порядке, каждый раздел — список пунктов или короткий текст:\n\
                 Краткое содержание\nТип документа\nКлючевые моменты\nНеобходимые действия\n\
                 Сроки\nСильные стороны\nСлабые стороны\nРекомендации\n\n\
                 Текст документа:\n{text}",
            ),
        }
    }
}
