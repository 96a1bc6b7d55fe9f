use once_cell::sync::Lazy;
use regex::Regex;

use super::FormSnapshot;

// local@domain.tld shape: no whitespace or extra @ on either side, at least
// one dot in the domain part.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check every required field and report each unmet requirement at once,
/// in form order: questions 1..=10 first, then the email field. An empty
/// result means the snapshot is ready to submit.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (index, answer) in snapshot.answers.iter().enumerate() {
        if answer.is_none() {
            errors.push(format!("Question {} has not been answered", index + 1));
        }
    }

    let email = snapshot.additional.email.trim();
    if email.is_empty() {
        errors.push("Please provide your email address".to_string());
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.push("Please provide a valid email address".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
