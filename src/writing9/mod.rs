mod scraper;

pub use scraper::Writing9Scraper;

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CATEGORY: &str = "General";
pub const NO_TITLE: &str = "No Title";
pub const TITLE_LEN: usize = 50;
pub const TIPS: [&str; 3] = ["Plan your essay", "Use linking words", "Check grammar"];

/// Raw (question, body) pair pulled off a detail page, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayDraft {
    pub question: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayRecord {
    pub id: String,
    pub category: String,
    pub title: String,
    pub question_text: String,
    pub model_answer: String,
    pub tips: Vec<String>,
}

impl EssayRecord {
    /// `id` is 1-based and assigned by the caller at append time.
    pub fn build(id: usize, draft: EssayDraft) -> Self {
        let title: String = draft.question.chars().take(TITLE_LEN).collect();
        EssayRecord {
            id: id.to_string(),
            category: CATEGORY.to_string(),
            title: format!("{}...", title),
            question_text: draft.question,
            model_answer: draft.body,
            tips: TIPS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl fmt::Display for EssayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id       : {}", self.id)?;
        writeln!(f, "Category : {}", self.category)?;
        writeln!(f, "Title    : {}", self.title)?;
        writeln!(f, "Question : {}", self.question_text)?;
        writeln!(f, "Answer   : {}", self.model_answer.replace('\n', "\n  "))?;
        writeln!(f, "Tips     : {}", self.tips.join(", "))?;
        Ok(())
    }
}
