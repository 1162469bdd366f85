//! Constitution questionnaire: the question bank and answer sheets.
//!
//! The standard bank has ten questions. Each offers three options, one per
//! constitution, all carrying the same weight. Answer sheets are filled in
//! by the caller one question at a time and handed to
//! [`crate::scoring::ScoringEngine`] when done.

use serde::{Deserialize, Serialize};

use crate::constitution::Constitution;
use crate::error::ValidationError;

/// Weight carried by every option of the standard bank.
pub const STANDARD_WEIGHT: u32 = 2;

/// Number of options offered by each question.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub constitution: Constitution,
    pub weight: u32,
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    /// Build a question whose options are listed in vata, pitta, kapha order,
    /// all with [`STANDARD_WEIGHT`].
    pub fn triad(id: u32, prompt: &str, vata: &str, pitta: &str, kapha: &str) -> Self {
        let option = |text: &str, constitution| AnswerOption {
            text: text.to_string(),
            constitution,
            weight: STANDARD_WEIGHT,
        };
        Self {
            id,
            prompt: prompt.to_string(),
            options: [
                option(vata, Constitution::Vata),
                option(pitta, Constitution::Pitta),
                option(kapha, Constitution::Kapha),
            ],
        }
    }

    /// Option at `index`, if any.
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for constitution in Constitution::ALL {
            let count = self
                .options
                .iter()
                .filter(|o| o.constitution == constitution)
                .count();
            if count != 1 {
                return Err(ValidationError::invalid(
                    "question.options",
                    format!(
                        "question {} has {count} options tagged {constitution}, expected exactly 1",
                        self.id
                    ),
                ));
            }
        }
        if let Some(o) = self.options.iter().find(|o| o.weight == 0) {
            return Err(ValidationError::invalid(
                "question.options.weight",
                format!("question {} option '{}' has zero weight", self.id, o.text),
            ));
        }
        Ok(())
    }
}

/// Ordered, fixed list of questions.
///
/// Deserialization goes through [`QuestionBank::new`], so a loaded bank is
/// held to the same rules as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionBank")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct RawQuestionBank {
    questions: Vec<Question>,
}

impl TryFrom<RawQuestionBank> for QuestionBank {
    type Error = ValidationError;

    fn try_from(raw: RawQuestionBank) -> Result<Self, Self::Error> {
        Self::new(raw.questions)
    }
}

impl QuestionBank {
    /// Create a bank from custom questions.
    ///
    /// # Errors
    ///
    /// Returns an error if `questions` is empty, if any question does not
    /// have exactly one option per constitution, or if any weight is zero.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::EmptyCollection("question bank".to_string()));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self { questions })
    }

    /// The standard ten-question constitution assessment.
    pub fn standard() -> Self {
        Self {
            questions: vec![
                Question::triad(
                    1,
                    "What is your body frame?",
                    "Thin, light weight, prominent joints",
                    "Medium build, moderate weight",
                    "Large frame, heavy build, broad shoulders",
                ),
                Question::triad(
                    2,
                    "How is your skin?",
                    "Dry, rough, cool, thin",
                    "Warm, oily, prone to irritation",
                    "Thick, moist, cool, smooth",
                ),
                Question::triad(
                    3,
                    "How is your hair?",
                    "Dry, brittle, thin",
                    "Fine, early graying or baldness",
                    "Thick, oily, wavy, lustrous",
                ),
                Question::triad(
                    4,
                    "How is your appetite?",
                    "Variable, sometimes hungry, sometimes not",
                    "Strong, regular, gets irritable when hungry",
                    "Steady, can skip meals easily",
                ),
                Question::triad(
                    5,
                    "How is your digestion?",
                    "Irregular, gas, bloating",
                    "Quick, strong, sometimes causes heartburn",
                    "Slow but steady, rarely upset",
                ),
                Question::triad(
                    6,
                    "How is your sleep?",
                    "Light, interrupted, 5-7 hours",
                    "Moderate, 6-8 hours, rarely interrupted",
                    "Deep, long, 8+ hours, hard to wake up",
                ),
                Question::triad(
                    7,
                    "How is your energy level?",
                    "Comes in bursts, then fatigue",
                    "Moderate, good stamina",
                    "Steady, strong, good endurance",
                ),
                Question::triad(
                    8,
                    "How do you handle stress?",
                    "Get anxious, worried, restless",
                    "Get irritated, angry, critical",
                    "Stay calm, become withdrawn",
                ),
                Question::triad(
                    9,
                    "What is your weather preference?",
                    "Warm, humid weather",
                    "Cool, well-ventilated places",
                    "Warm, dry weather",
                ),
                Question::triad(
                    10,
                    "How do you learn and remember?",
                    "Learn quickly, forget quickly",
                    "Learn moderately, good retention",
                    "Learn slowly, excellent long-term memory",
                ),
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-question selections, `None` meaning unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    choices: Vec<Option<usize>>,
}

impl AnswerSheet {
    /// An empty sheet sized for `bank`.
    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self {
            choices: vec![None; bank.len()],
        }
    }

    /// Wrap raw selections. Indices are checked when the sheet is scored.
    pub fn from_choices(choices: Vec<Option<usize>>) -> Self {
        Self { choices }
    }

    /// Record the option chosen for `question`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if either index is out of range.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), ValidationError> {
        let len = self.choices.len();
        let slot = self
            .choices
            .get_mut(question)
            .ok_or_else(|| ValidationError::OutOfBounds {
                collection: "questions".to_string(),
                index: question,
                len,
            })?;
        if option >= OPTIONS_PER_QUESTION {
            return Err(ValidationError::OutOfBounds {
                collection: "options".to_string(),
                index: option,
                len: OPTIONS_PER_QUESTION,
            });
        }
        *slot = Some(option);
        Ok(())
    }

    /// Mark `question` unanswered again. Out-of-range indices are ignored.
    pub fn clear(&mut self, question: usize) {
        if let Some(slot) = self.choices.get_mut(question) {
            *slot = None;
        }
    }

    pub fn choice(&self, question: usize) -> Option<usize> {
        self.choices.get(question).copied().flatten()
    }

    pub fn choices(&self) -> &[Option<usize>] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_some()).count()
    }

    /// True when every question has a selection.
    pub fn is_complete(&self) -> bool {
        !self.choices.is_empty() && self.choices.iter().all(Option::is_some)
    }

    pub fn progress(&self) -> AnswerProgress {
        AnswerProgress {
            answered: self.answered_count(),
            total: self.choices.len(),
            next_unanswered: self.choices.iter().position(Option::is_none),
        }
    }
}

/// Progress through an answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerProgress {
    pub answered: usize,
    pub total: usize,
    /// First question still lacking a selection.
    pub next_unanswered: Option<usize>,
}

impl AnswerProgress {
    /// Integer percentage of answered questions.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered * 100) / self.total) as u32
    }
}
