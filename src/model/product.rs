//! Product records as stored by the backend.

use serde::{Deserialize, Deserializer, Serialize};

use super::metadata::{deserialize_nullable, Metadata};

/// A product submitted for a transparency report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier; numeric ids are accepted and kept as text
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    /// Product display name
    pub name: String,
    /// Identifier of the owning company
    #[serde(default)]
    pub company_id: String,
    /// Disclosure metadata (missing or `null` means empty)
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub metadata: Metadata,
    /// Questionnaire answers collected by the multi-step form
    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,
}

impl Product {
    /// Create a product with empty metadata and no questions
    #[must_use]
    pub fn new(name: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            company_id: company_id.into(),
            metadata: Metadata::new(),
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<QuestionAnswer>) -> Self {
        self.questions = questions;
        self
    }

    /// File name assigned to this product's report.
    #[must_use]
    pub fn report_file_name(&self) -> String {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => format!("report_{id}.pdf"),
            _ => "report.pdf".to_string(),
        }
    }
}

/// One question of the disclosure questionnaire and its answer, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Question identifier from the question service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Question text shown to the user
    pub text: String,
    /// Answer text; `None` when the question was skipped
    #[serde(default)]
    pub answer: Option<String>,
}

impl QuestionAnswer {
    #[must_use]
    pub fn new(text: impl Into<String>, answer: Option<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            answer,
        }
    }

    /// Answer text, if non-blank
    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
