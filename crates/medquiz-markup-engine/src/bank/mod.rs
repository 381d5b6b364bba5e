//! Question banks as handed to the compiler by the quiz front end.
//!
//! Only the text-carrying shape of a bank lives here. Ordering, answer
//! tracking and scoring belong to the session layer and never reach the
//! compiler.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::markup::compile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("Question at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Duplicate question id: {0}")]
    DuplicateId(String),
    #[error("Question {0} has choices but no answer")]
    MissingAnswer(String),
    #[error("Question {id} answer index {answer} is out of range for {choices} choices")]
    AnswerOutOfRange {
        id: String,
        answer: usize,
        choices: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub stem: String,
    #[serde(default)]
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer. Required when `choices` is non-empty.
    #[serde(default)]
    pub answer: Option<usize>,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn render(&self) -> RenderedQuestion {
        RenderedQuestion {
            id: self.id.clone(),
            stem_html: compile(&self.stem),
            choices_html: self.choices.iter().map(|c| compile(c)).collect(),
            explanation_html: compile(&self.explanation),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub title: String,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn validate(&self) -> Result<(), BankError> {
        let mut seen = HashSet::new();
        for (position, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(BankError::EmptyId(position));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(BankError::DuplicateId(question.id.clone()));
            }
            if question.choices.is_empty() {
                continue;
            }
            match question.answer {
                None => return Err(BankError::MissingAnswer(question.id.clone())),
                Some(answer) if answer >= question.choices.len() => {
                    return Err(BankError::AnswerOutOfRange {
                        id: question.id.clone(),
                        answer,
                        choices: question.choices.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Compiles every text field of every question, in bank order.
    pub fn render(&self) -> Vec<RenderedQuestion> {
        self.questions.iter().map(Question::render).collect()
    }
}

/// A question with each text field compiled to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub id: String,
    pub stem_html: String,
    pub choices_html: Vec<String>,
    pub explanation_html: String,
}

impl RenderedQuestion {
    /// A self-contained HTML fragment for the question.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<section class=\"question\" id=\"q-{}\">\n",
            html_escape::encode_double_quoted_attribute(&self.id)
        );
        html.push_str(&format!("  <p class=\"stem\">{}</p>\n", self.stem_html));
        if !self.choices_html.is_empty() {
            html.push_str("  <ol class=\"choices\">\n");
            for choice in &self.choices_html {
                html.push_str(&format!("    <li>{choice}</li>\n"));
            }
            html.push_str("  </ol>\n");
        }
        if !self.explanation_html.is_empty() {
            html.push_str(&format!(
                "  <div class=\"explanation\">{}</div>\n",
                self.explanation_html
            ));
        }
        html.push_str("</section>\n");
        html
    }
}
