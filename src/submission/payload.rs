use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Deserialize};

use crate::assessment::scoring::{FopoLevel, ScoreSummary};
use crate::assessment::{AdditionalData, FormSnapshot, QUESTION_COUNT};

/// Immutable body of one submit attempt, shaped exactly as the collector
/// expects it. Built once per attempt and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub timestamp: DateTime<Utc>,
    pub score: u8,
    pub level: FopoLevel,
    pub level_text: String,
    /// q1..q10 in question order; null for any unanswered slot. Gating makes
    /// nulls unreachable in practice, the wire shape allows them anyway.
    pub answers: IndexMap<String, Option<u8>>,
    pub additional_data: AdditionalData,
    pub browser_info: BrowserInfo,
}

impl SubmissionPayload {
    pub fn assemble(snapshot: &FormSnapshot, summary: ScoreSummary) -> Self {
        let mut answers = IndexMap::with_capacity(QUESTION_COUNT);
        for (index, answer) in snapshot.answers.iter().enumerate() {
            answers.insert(format!("q{}", index + 1), *answer);
        }

        Self {
            timestamp: Utc::now(),
            score: summary.score,
            level: summary.level,
            level_text: summary.level.label().to_string(),
            answers,
            additional_data: snapshot.additional.clone(),
            browser_info: BrowserInfo::capture(),
        }
    }
}

/// Client environment metadata captured at submit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub user_agent: String,
    pub language: String,
    pub timezone: String,
}

impl BrowserInfo {
    pub fn capture() -> Self {
        let user_agent = format!(
            "fopo-assessment/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        let language = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .ok()
            .map(|locale| locale.split('.').next().unwrap_or_default().replace('_', "-"))
            .filter(|locale| !locale.is_empty() && locale != "C" && locale != "POSIX")
            .unwrap_or_else(|| "en-US".to_string());

        let timezone = std::env::var("TZ")
            .unwrap_or_else(|_| format!("UTC{}", chrono::Local::now().format("%:z")));

        Self {
            user_agent,
            language,
            timezone,
        }
    }
}

/// The slice of a successful submission that survives locally: one slot,
/// overwritten on each success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub timestamp: DateTime<Utc>,
    pub score: u8,
    pub level: FopoLevel,
    pub additional_data: AdditionalData,
}

impl From<&SubmissionPayload> for StoredResult {
    fn from(payload: &SubmissionPayload) -> Self {
        Self {
            timestamp: payload.timestamp,
            score: payload.score,
            level: payload.level,
            additional_data: payload.additional_data.clone(),
        }
    }
}
