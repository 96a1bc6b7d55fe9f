pub mod progress;
pub mod questions;
pub mod scoring;
pub mod validation;

pub use progress::*;
pub use questions::*;
pub use scoring::*;
pub use validation::*;

use serde::{Serialize, Deserialize};
use log::info;
use std::sync::Arc;
use parking_lot::Mutex;
use lazy_static::lazy_static;
use thiserror::Error;

use crate::view::FormView;

/// Number of scored questions on the form.
pub const QUESTION_COUNT: usize = 10;
/// Lowest selectable option value.
pub const MIN_OPTION_VALUE: u8 = 1;
/// Highest selectable option value.
pub const MAX_OPTION_VALUE: u8 = 5;

// Global state for the live form, mirrored into immutable snapshots on demand
lazy_static! {
    static ref ACTIVE_FORM: Arc<Mutex<FormState>> = Arc::new(Mutex::new(FormState::new()));
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question number {0} is out of range (1-{max})", max = QUESTION_COUNT)]
    QuestionOutOfRange(u8),
    #[error("option value {0} is out of range ({min}-{max})", min = MIN_OPTION_VALUE, max = MAX_OPTION_VALUE)]
    ValueOutOfRange(u8),
}

/// Free-form companion fields collected alongside the scored questions.
/// Field names match the collector's wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
    pub self_value: Vec<String>,
    pub self_value_other: String,
    pub beliefs: String,
    pub email: String,
}

/// Point-in-time read of every form field. Logic components only ever see
/// snapshots, never the live store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub answers: [Option<u8>; QUESTION_COUNT],
    pub additional: AdditionalData,
}

impl FormSnapshot {
    /// How many of the scored questions carry a selection.
    pub fn answered_questions(&self) -> u8 {
        self.answers.iter().filter(|answer| answer.is_some()).count() as u8
    }

    /// Whether the email field is non-empty after trimming. Shape validity is
    /// a separate, submit-time concern.
    pub fn email_present(&self) -> bool {
        !self.additional.email.trim().is_empty()
    }

    /// Answered questions plus one unit for a non-empty email.
    pub fn completion_count(&self) -> u8 {
        self.answered_questions() + if self.email_present() { 1 } else { 0 }
    }

    pub fn is_complete(&self) -> bool {
        self.answered_questions() as usize == QUESTION_COUNT
    }
}

/// Live form fields. One instance lives in the global store; adapters mutate
/// it through the helper functions below.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    answers: [Option<u8>; QUESTION_COUNT],
    additional: AdditionalData,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&mut self, question: u8, value: u8) -> Result<(), AnswerError> {
        if question < 1 || question as usize > QUESTION_COUNT {
            return Err(AnswerError::QuestionOutOfRange(question));
        }
        if !(MIN_OPTION_VALUE..=MAX_OPTION_VALUE).contains(&value) {
            return Err(AnswerError::ValueOutOfRange(value));
        }
        self.answers[question as usize - 1] = Some(value);
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) {
        self.additional.email = email.trim().to_string();
    }

    /// Checkbox semantics: add the tag if absent, remove it if present.
    pub fn toggle_self_value(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if let Some(position) = self.additional.self_value.iter().position(|t| t == tag) {
            self.additional.self_value.remove(position);
        } else {
            self.additional.self_value.push(tag.to_string());
        }
    }

    pub fn set_self_value_other(&mut self, text: &str) {
        self.additional.self_value_other = text.trim().to_string();
    }

    pub fn set_beliefs(&mut self, text: &str) {
        self.additional.beliefs = text.trim().to_string();
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            answers: self.answers,
            additional: self.additional.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Helper functions to manage the global form store

pub fn record_answer(question: u8, value: u8) -> Result<(), AnswerError> {
    ACTIVE_FORM.lock().set_answer(question, value)
}

pub fn update_email(email: &str) {
    ACTIVE_FORM.lock().set_email(email);
}

pub fn toggle_self_value(tag: &str) {
    ACTIVE_FORM.lock().toggle_self_value(tag);
}

pub fn update_self_value_other(text: &str) {
    ACTIVE_FORM.lock().set_self_value_other(text);
}

pub fn update_beliefs(text: &str) {
    ACTIVE_FORM.lock().set_beliefs(text);
}

pub fn current_snapshot() -> FormSnapshot {
    ACTIVE_FORM.lock().snapshot()
}

pub fn clear_form() {
    ACTIVE_FORM.lock().clear();
}

/// Restore the initial empty state: wipe every field, drop lingering notices,
/// bring the form view back, and push a fresh 0% progress report.
pub fn reset_form(view: &dyn FormView) {
    clear_form();
    view.clear_notices();
    view.show_form();
    let snapshot = current_snapshot();
    view.set_progress(&ProgressReport::compute(&snapshot));
    view.scroll_to_top();
    info!("🔄 Form reset to initial state");
}
