use serde::Serialize;

use super::{FormSnapshot, QUESTION_COUNT};

/// Completion summary pushed to the view after every answer or email change.
///
/// A non-empty email joins the ten questions as an eleventh answered unit,
/// which also grows the denominator. Submit eligibility only requires the
/// email to be present; whether it is well-formed is checked at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub percent: u8,
    pub answered: u8,
    pub denominator: u8,
    pub submit_enabled: bool,
}

impl ProgressReport {
    pub fn compute(snapshot: &FormSnapshot) -> Self {
        let answered_questions = snapshot.answered_questions();
        let email_present = snapshot.email_present();

        let (answered, denominator) = if email_present {
            (answered_questions + 1, QUESTION_COUNT as u8 + 1)
        } else {
            (answered_questions, QUESTION_COUNT as u8)
        };

        let percent = (100.0 * f64::from(answered) / f64::from(denominator)).round() as u8;
        let submit_enabled = answered_questions as usize >= QUESTION_COUNT && email_present;

        Self {
            percent,
            answered,
            denominator,
            submit_enabled,
        }
    }
}
