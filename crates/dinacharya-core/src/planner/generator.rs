//! Day plan generation: overflow policy, request and the block packer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::profile::ScheduleProfile;
use super::slot::{DaySchedule, SlotKind, TimeSlot};
use crate::constitution::Constitution;
use crate::error::{ScheduleError, ValidationError};
use crate::time_of_day::{add_minutes, format_hhmm, parse_hhmm, MINUTES_PER_DAY};

/// Study blocks emitted before the overflow policy applies.
pub const MAX_STUDY_BLOCKS: u32 = 10;

/// Largest study load [`OverflowPolicy::Continue`] will schedule.
pub const MAX_CONTINUE_STUDY_MIN: u32 = MINUTES_PER_DAY;

pub const BREAKFAST_MIN: u32 = 30;

/// Fixed blocks appended after the study section, in order.
pub const TRAILING_BLOCKS: [(SlotKind, u32); 7] = [
    (SlotKind::Lunch, 45),
    (SlotKind::Rest, 30),
    (SlotKind::Review, 60),
    (SlotKind::EveningWalk, 60),
    (SlotKind::Dinner, 40),
    (SlotKind::Reflection, 45),
    (SlotKind::Sleep, 8 * 60),
];

/// What to do with study minutes that need more than [`MAX_STUDY_BLOCKS`] blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Stop at the cap and report the leftover as unscheduled.
    #[default]
    Truncate,
    /// Ignore the block cap and schedule every minute, up to
    /// [`MAX_CONTINUE_STUDY_MIN`].
    Continue,
    /// Refuse to generate a plan.
    Reject,
}

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Truncate => "truncate",
            OverflowPolicy::Continue => "continue",
            OverflowPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(OverflowPolicy::Truncate),
            "continue" => Ok(OverflowPolicy::Continue),
            "reject" => Ok(OverflowPolicy::Reject),
            _ => Err(ValidationError::invalid(
                "overflow_policy",
                format!("unknown policy '{s}', expected truncate, continue or reject"),
            )),
        }
    }
}

/// Inputs for one day plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub wake_time: NaiveTime,
    pub study_minutes: u32,
    pub constitution: Constitution,
    pub custom_note: Option<String>,
}

impl ScheduleRequest {
    pub fn new(wake_time: NaiveTime, study_minutes: u32, constitution: Constitution) -> Self {
        Self {
            wake_time,
            study_minutes,
            constitution,
            custom_note: None,
        }
    }

    /// Request using the constitution's suggested wake time.
    pub fn with_default_wake(constitution: Constitution, study_minutes: u32) -> Self {
        Self::new(constitution.default_wake_time(), study_minutes, constitution)
    }

    /// Build a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInput`] if `wake_time` is not `HH:MM`
    /// or `constitution` is not one of the three tags.
    pub fn parse(wake_time: &str, study_minutes: u32, constitution: &str) -> Result<Self, ScheduleError> {
        let constitution: Constitution = constitution.parse()?;
        let wake_time = parse_hhmm(wake_time)?;
        Ok(Self::new(wake_time, study_minutes, constitution))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.custom_note = Some(note.into());
        self
    }
}

/// Convert a study-hours figure to whole minutes, `max(0, round(hours * 60))`.
///
/// NaN maps to zero and very large values saturate at `u32::MAX`.
pub fn study_minutes_from_hours(hours: f64) -> u32 {
    if hours.is_nan() || hours <= 0.0 {
        return 0;
    }
    // float-to-int `as` saturates
    (hours * 60.0).round() as u32
}

/// Deterministic day planner.
///
/// Packs fixed-duration blocks from the wake time onwards. Holds nothing but
/// the overflow policy, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGenerator {
    policy: OverflowPolicy,
}

impl ScheduleGenerator {
    /// Create a generator with the default [`OverflowPolicy::Truncate`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Parse raw input and generate in one step.
    ///
    /// # Errors
    ///
    /// See [`ScheduleRequest::parse`] and [`ScheduleGenerator::generate`].
    pub fn generate_from_input(
        &self,
        wake_time: &str,
        study_minutes: u32,
        constitution: &str,
        custom_note: Option<String>,
    ) -> Result<DaySchedule, ScheduleError> {
        let mut request = ScheduleRequest::parse(wake_time, study_minutes, constitution)?;
        request.custom_note = custom_note;
        self.generate(&request)
    }

    /// Generate the day plan.
    ///
    /// Order: morning routine, exercise, breakfast, study blocks separated
    /// by breaks, then [`TRAILING_BLOCKS`]. Each slot starts where the
    /// previous one ended; clock times wrap at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::StudyOverflow`] under
    /// [`OverflowPolicy::Reject`] when the study load needs more than
    /// [`MAX_STUDY_BLOCKS`] blocks, and under [`OverflowPolicy::Continue`]
    /// when it exceeds [`MAX_CONTINUE_STUDY_MIN`].
    pub fn generate(&self, request: &ScheduleRequest) -> Result<DaySchedule, ScheduleError> {
        let profile = request.constitution.schedule_profile();
        let capacity = match self.policy {
            OverflowPolicy::Reject => Some(MAX_STUDY_BLOCKS.saturating_mul(profile.study_block_min)),
            OverflowPolicy::Continue => Some(MAX_CONTINUE_STUDY_MIN),
            OverflowPolicy::Truncate => None,
        };

        if let Some(capacity) = capacity.filter(|&c| request.study_minutes > c) {
            return Err(ScheduleError::StudyOverflow {
                requested: request.study_minutes,
                capacity,
            });
        }

        let mut cursor = SlotCursor::new(request.wake_time);

        cursor.push(
            SlotKind::MorningRoutine,
            profile.morning_routine_min,
            "Hydration, tongue cleaning, light oil massage, gratitude journaling".to_string(),
        );
        cursor.push(SlotKind::Exercise, profile.exercise_min, profile.exercise_hint.to_string());
        cursor.push(SlotKind::Breakfast, BREAKFAST_MIN, profile.food_hint.to_string());

        let remaining = self.pack_study_blocks(&mut cursor, &profile, request.study_minutes);
        if remaining > 0 {
            tracing::info!(
                constitution = %request.constitution,
                requested = request.study_minutes,
                unscheduled = remaining,
                "study load exceeds the block cap, truncating"
            );
        }

        for (kind, minutes) in TRAILING_BLOCKS {
            cursor.push(kind, minutes, trailing_note(kind, &profile));
        }

        let schedule = DaySchedule {
            constitution: request.constitution,
            wake_time: request.wake_time,
            policy: self.policy,
            study_minutes_requested: request.study_minutes,
            study_minutes_scheduled: request.study_minutes - remaining,
            unscheduled_study_minutes: remaining,
            custom_note: request.custom_note.clone(),
            slots: cursor.into_slots(),
        };

        tracing::debug!(
            constitution = %schedule.constitution,
            wake = %format_hhmm(schedule.wake_time),
            slots = schedule.slots.len(),
            study_blocks = schedule.study_block_count(),
            "generated day schedule"
        );
        Ok(schedule)
    }

    /// Emit study blocks and the breaks between them. Returns the minutes
    /// left unscheduled.
    fn pack_study_blocks(&self, cursor: &mut SlotCursor, profile: &ScheduleProfile, study_minutes: u32) -> u32 {
        let mut remaining = study_minutes;
        let mut block = 0u32;

        while remaining > 0 && (self.policy == OverflowPolicy::Continue || block < MAX_STUDY_BLOCKS) {
            let minutes = profile.study_block_min.min(remaining);
            block += 1;
            cursor.push_titled(
                SlotKind::Study,
                format!("{} {block}", SlotKind::Study.title()),
                minutes,
                "Focused deep work, keep posture straight and stay hydrated".to_string(),
            );
            remaining -= minutes;

            if remaining > 0 {
                cursor.push(
                    SlotKind::Break,
                    profile.break_min,
                    format!("Stretch, hydrate, and relax ({} min)", profile.break_min),
                );
            }
        }

        remaining
    }
}

fn trailing_note(kind: SlotKind, profile: &ScheduleProfile) -> String {
    match kind {
        SlotKind::Lunch => format!("{}. Avoid screens while eating. Eat mindfully.", profile.food_hint),
        SlotKind::Rest => "Power nap or guided mindfulness (max 30 min)".to_string(),
        SlotKind::Review => "Summarize learnings or plan next tasks".to_string(),
        SlotKind::EveningWalk => "Go for a light walk or enjoy a calming hobby".to_string(),
        SlotKind::Dinner => format!("{}. Light and early for better digestion.", profile.food_hint),
        SlotKind::Reflection => "Slow breathing, gratitude journaling, no screens".to_string(),
        SlotKind::Sleep => "Rest deeply, follow body rhythm and wake naturally".to_string(),
        SlotKind::MorningRoutine | SlotKind::Exercise | SlotKind::Breakfast | SlotKind::Study | SlotKind::Break => {
            String::new()
        }
    }
}

/// Appends contiguous slots, tracking both the wall clock and the offset
/// from wake-up.
struct SlotCursor {
    clock: NaiveTime,
    offset_min: u64,
    slots: Vec<TimeSlot>,
}

impl SlotCursor {
    fn new(start: NaiveTime) -> Self {
        Self {
            clock: start,
            offset_min: 0,
            slots: Vec::new(),
        }
    }

    fn push(&mut self, kind: SlotKind, minutes: u32, note: String) {
        self.push_titled(kind, kind.title().to_string(), minutes, note);
    }

    fn push_titled(&mut self, kind: SlotKind, title: String, minutes: u32, note: String) {
        let end = add_minutes(self.clock, minutes);
        self.slots.push(TimeSlot {
            kind,
            start: self.clock,
            end,
            title,
            note: Some(note).filter(|n| !n.is_empty()),
            offset_min: self.offset_min,
            duration_min: minutes,
        });
        self.clock = end;
        self.offset_min += u64::from(minutes);
    }

    fn into_slots(self) -> Vec<TimeSlot> {
        self.slots
    }
}
