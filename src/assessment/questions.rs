use serde::Serialize;

/// One scored statement on the form. Values are fixed at build time;
/// presentation adapters render from this catalog.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Question {
    pub number: u8,
    pub text: &'static str,
}

pub const QUESTIONS: [Question; super::QUESTION_COUNT] = [
    Question { number: 1, text: "I replay conversations in my head, worrying about how others judged me." },
    Question { number: 2, text: "Before speaking up, I imagine how everyone in the room will react." },
    Question { number: 3, text: "I avoid sharing opinions that might be unpopular." },
    Question { number: 4, text: "Criticism, even minor criticism, stays with me for days." },
    Question { number: 5, text: "I change my plans when I suspect people might disapprove of them." },
    Question { number: 6, text: "I find it hard to say no because people might think less of me." },
    Question { number: 7, text: "I keep checking reactions to gauge whether I did well." },
    Question { number: 8, text: "I downplay my achievements so others will not think I am showing off." },
    Question { number: 9, text: "Decisions feel difficult until I know what others would choose." },
    Question { number: 10, text: "I feel anxious when I do not know what people are saying about me." },
];

/// The five-point agreement scale every question uses.
pub const ANSWER_OPTIONS: [(u8, &str); 5] = [
    (1, "Strongly disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly agree"),
];

/// Choices offered by the "where do you draw your self-worth from" multi-select.
/// Anything else goes into the free-text companion field.
pub const SELF_VALUE_CHOICES: [&str; 6] = [
    "Career achievement",
    "Relationships",
    "Personal growth",
    "Health",
    "Financial security",
    "Creativity",
];
