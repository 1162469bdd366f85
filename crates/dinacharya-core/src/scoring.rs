//! Constitution scoring engine.
//!
//! Folds an [`AnswerSheet`] over a [`QuestionBank`] into a per-type tally
//! and picks the dominant constitution.
//!
//! ## Tie-break
//!
//! The dominant type is found by scanning [`Constitution::ALL`] in order
//! (`vata`, `pitta`, `kapha`) and replacing the current best only on a
//! strictly greater weight. On an exact tie the earlier type wins:
//!
//! | tally (v/p/k) | dominant |
//! |---------------|----------|
//! | 8 / 8 / 4     | vata     |
//! | 4 / 8 / 8     | pitta    |
//! | 0 / 0 / 0     | vata     |
//!
//! ## Partial sheets
//!
//! Completeness is not enforced. Unanswered questions contribute nothing and
//! [`ConstitutionResult::is_complete`] tells the caller whether the dominant
//! type can be trusted as final.

use serde::{Deserialize, Serialize};

use crate::constitution::Constitution;
use crate::error::ValidationError;
use crate::questionnaire::{AnswerSheet, QuestionBank};

/// Accumulated weight per constitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl ScoreTally {
    pub fn get(&self, constitution: Constitution) -> u32 {
        match constitution {
            Constitution::Vata => self.vata,
            Constitution::Pitta => self.pitta,
            Constitution::Kapha => self.kapha,
        }
    }

    /// Add `weight` to the bucket for `constitution`.
    pub fn add(&mut self, constitution: Constitution, weight: u32) {
        let bucket = match constitution {
            Constitution::Vata => &mut self.vata,
            Constitution::Pitta => &mut self.pitta,
            Constitution::Kapha => &mut self.kapha,
        };
        *bucket = bucket.saturating_add(weight);
    }

    /// Sum of all buckets, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        Constitution::ALL
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(self.get(*c)))
    }

    /// Highest-weighted type, earliest in [`Constitution::ALL`] on ties.
    pub fn dominant(&self) -> Constitution {
        let mut best = Constitution::ALL[0];
        for candidate in Constitution::ALL.into_iter().skip(1) {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }

    /// Rounded integer share of each type, in canonical order.
    ///
    /// All zeros when nothing has been tallied. Rounding means the three
    /// values need not add up to exactly 100.
    pub fn percentages(&self) -> [(Constitution, u32); 3] {
        let total = self.total();
        Constitution::ALL.map(|c| {
            let pct = if total == 0 {
                0
            } else {
                ((u64::from(self.get(c)) * 100 + u64::from(total) / 2) / u64::from(total)) as u32
            };
            (c, pct)
        })
    }
}

/// Outcome of scoring one questionnaire submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionResult {
    pub dominant: Constitution,
    pub tally: ScoreTally,
    /// Every question had a selection.
    pub is_complete: bool,
    /// Number of questions that contributed to the tally.
    pub answered: usize,
}

impl ConstitutionResult {
    pub fn percentages(&self) -> [(Constitution, u32); 3] {
        self.tally.percentages()
    }
}

/// Stateless scorer bound to a question bank.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    bank: QuestionBank,
}

impl ScoringEngine {
    /// Create an engine over the standard question bank.
    pub fn new() -> Self {
        Self {
            bank: QuestionBank::standard(),
        }
    }

    /// Create an engine over a custom bank.
    pub fn with_bank(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Sum the weights of the chosen options.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet was sized for a different bank or a
    /// selection points past a question's options.
    pub fn tally(&self, sheet: &AnswerSheet) -> Result<ScoreTally, ValidationError> {
        if sheet.len() != self.bank.len() {
            return Err(ValidationError::invalid(
                "answers",
                format!(
                    "answer sheet has {} entries but the question bank has {}",
                    sheet.len(),
                    self.bank.len()
                ),
            ));
        }

        let mut tally = ScoreTally::default();
        for (question, choice) in self.bank.questions().iter().zip(sheet.choices()) {
            let Some(index) = *choice else {
                continue;
            };
            let option = question
                .option(index)
                .ok_or_else(|| ValidationError::OutOfBounds {
                    collection: format!("options of question {}", question.id),
                    index,
                    len: question.options.len(),
                })?;
            tally.add(option.constitution, option.weight);
        }
        Ok(tally)
    }

    /// Score a sheet and resolve the dominant constitution.
    ///
    /// # Errors
    ///
    /// Same as [`ScoringEngine::tally`]. An incomplete sheet is not an error.
    pub fn score(&self, sheet: &AnswerSheet) -> Result<ConstitutionResult, ValidationError> {
        let tally = self.tally(sheet)?;
        let result = ConstitutionResult {
            dominant: tally.dominant(),
            tally,
            is_complete: sheet.is_complete(),
            answered: sheet.answered_count(),
        };
        tracing::debug!(
            dominant = %result.dominant,
            vata = tally.vata,
            pitta = tally.pitta,
            kapha = tally.kapha,
            complete = result.is_complete,
            "scored constitution questionnaire"
        );
        Ok(result)
    }
}
