use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::{FormSnapshot, MAX_OPTION_VALUE, MIN_OPTION_VALUE, QUESTION_COUNT};

/// Highest score a level still counts as low.
pub const LOW_MAX_SCORE: u8 = 20;
/// Highest score a level still counts as moderate.
pub const MEDIUM_MAX_SCORE: u8 = 35;
/// Floor and ceiling of the total score (all ones / all fives).
pub const MIN_SCORE: u8 = QUESTION_COUNT as u8 * MIN_OPTION_VALUE;
pub const MAX_SCORE: u8 = QUESTION_COUNT as u8 * MAX_OPTION_VALUE;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("question {0} has no recorded answer")]
pub struct IncompleteForm(pub u8);

/// A full set of ten answers. Scoring consumes this type, so a total can
/// only ever be computed from a form with every question answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedAnswers([u8; QUESTION_COUNT]);

impl CompletedAnswers {
    pub fn values(&self) -> &[u8; QUESTION_COUNT] {
        &self.0
    }

    /// Plain integer sum of the selected option values.
    pub fn total(&self) -> u8 {
        self.0.iter().map(|value| u16::from(*value)).sum::<u16>() as u8
    }
}

impl TryFrom<&FormSnapshot> for CompletedAnswers {
    type Error = IncompleteForm;

    fn try_from(snapshot: &FormSnapshot) -> Result<Self, Self::Error> {
        let mut values = [0u8; QUESTION_COUNT];
        for (index, answer) in snapshot.answers.iter().enumerate() {
            values[index] = answer.ok_or(IncompleteForm(index as u8 + 1))?;
        }
        Ok(Self(values))
    }
}

/// Classification bucket for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FopoLevel {
    Low,
    Medium,
    High,
}

impl FopoLevel {
    pub fn classify(score: u8) -> Self {
        if score <= LOW_MAX_SCORE {
            FopoLevel::Low
        } else if score <= MEDIUM_MAX_SCORE {
            FopoLevel::Medium
        } else {
            FopoLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FopoLevel::Low => "low",
            FopoLevel::Medium => "medium",
            FopoLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FopoLevel::Low => "Low FOPO",
            FopoLevel::Medium => "Moderate FOPO",
            FopoLevel::High => "High FOPO",
        }
    }

    /// Fixed guidance block shown on the results view.
    pub fn guidance(&self) -> &'static str {
        match self {
            FopoLevel::Low => {
                "You are not strongly swayed by what other people think. You can make \
decisions with confidence and rarely let outside opinions steer you, which points \
to solid inner footing.\n\
  - Keep the balance: stay open to constructive feedback without chasing approval.\n\
  - Use your confidence to take the lead when a group hesitates.\n\
  - Share what works for you with friends who worry more about being judged."
            }
            FopoLevel::Medium => {
                "You care about other people's opinions in some situations, which is \
entirely normal. You balance autonomy against acceptance, though at times an outside \
judgment still tips your choices.\n\
  - Notice the moments you start optimizing for someone else's approval, and pause.\n\
  - Reframe the question from \"what will they think\" to \"does this matter to me\".\n\
  - Build interests that feed your own sense of worth.\n\
  - Spend more time with people who support you and less with habitual critics."
            }
            FopoLevel::High => {
                "Other people's opinions weigh heavily on you, and that can crowd out \
your own voice when it is time to decide. It also means you care deeply about the \
people around you, which is a strength worth keeping.\n\
  - Separate constructive criticism from noise; not every opinion deserves weight.\n\
  - Practice stating a genuine preference in low-stakes settings.\n\
  - Question the assumption that everyone is watching and judging.\n\
  - Talk it through with someone you trust, or with a counselor, if the worry \
interferes with daily life."
            }
        }
    }
}

/// Scored outcome of one completed form, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: u8,
    pub level: FopoLevel,
}

impl ScoreSummary {
    pub fn from_answers(answers: &CompletedAnswers) -> Self {
        let score = answers.total();
        Self {
            score,
            level: FopoLevel::classify(score),
        }
    }
}
