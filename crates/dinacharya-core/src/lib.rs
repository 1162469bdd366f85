//! # Dinacharya Core Library
//!
//! Core logic for the Dinacharya daily-routine planner. Two pure engines
//! sit at the center, with a thin configuration layer around them:
//!
//! ## Architecture
//!
//! - **Questionnaire**: a fixed bank of weighted questions, one option per
//!   constitution type, and answer sheets filled in by the caller
//! - **Scoring**: folds an answer sheet into a per-type tally and resolves
//!   the dominant constitution with an explicit `vata, pitta, kapha` tie-break
//! - **Planner**: packs a full day of contiguous time slots from a wake
//!   time, a study budget and the constitution's schedule profile
//! - **Storage**: TOML-based configuration for planner defaults
//!
//! Neither engine holds state or performs I/O, so both can be called from
//! any thread without coordination.
//!
//! ## Key Components
//!
//! - [`ScoringEngine`]: questionnaire scoring
//! - [`ScheduleGenerator`]: day plan generation
//! - [`Config`]: application configuration management

pub mod constitution;
pub mod error;
pub mod planner;
pub mod questionnaire;
pub mod scoring;
pub mod storage;
pub mod time_of_day;

pub use constitution::Constitution;
pub use error::{ConfigError, CoreError, ScheduleError, ValidationError};
pub use planner::{
    study_minutes_from_hours, DaySchedule, OverflowPolicy, ScheduleGenerator, ScheduleProfile,
    ScheduleRequest, SlotKind, TimeSlot,
};
pub use questionnaire::{AnswerOption, AnswerProgress, AnswerSheet, Question, QuestionBank};
pub use scoring::{ConstitutionResult, ScoreTally, ScoringEngine};
pub use storage::Config;
