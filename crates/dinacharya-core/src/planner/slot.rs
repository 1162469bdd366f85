//! Slots and the finished day plan.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::OverflowPolicy;
use crate::constitution::Constitution;
use crate::time_of_day::hhmm;

/// What a slot is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    MorningRoutine,
    Exercise,
    Breakfast,
    Study,
    Break,
    Lunch,
    Rest,
    Review,
    EveningWalk,
    Dinner,
    Reflection,
    Sleep,
}

impl SlotKind {
    /// Display title. Study blocks are numbered separately by the generator.
    pub fn title(self) -> &'static str {
        match self {
            SlotKind::MorningRoutine => "Morning Routine",
            SlotKind::Exercise => "Exercise / Yoga",
            SlotKind::Breakfast => "Breakfast",
            SlotKind::Study => "Study Block",
            SlotKind::Break => "Short Break",
            SlotKind::Lunch => "Lunch",
            SlotKind::Rest => "Rest / Meditation",
            SlotKind::Review => "Light Review or Creative Work",
            SlotKind::EveningWalk => "Evening Walk / Hobby",
            SlotKind::Dinner => "Dinner",
            SlotKind::Reflection => "Meditation / Reflection",
            SlotKind::Sleep => "Sleep",
        }
    }
}

/// One contiguous, titled block of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub kind: SlotKind,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Minutes from wake-up to the start of this slot.
    pub offset_min: u64,
    pub duration_min: u32,
}

impl TimeSlot {
    /// Minutes from wake-up to the end of this slot.
    pub fn end_offset_min(&self) -> u64 {
        self.offset_min + u64::from(self.duration_min)
    }
}

/// A generated day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub constitution: Constitution,
    #[serde(with = "hhmm")]
    pub wake_time: NaiveTime,
    pub policy: OverflowPolicy,
    pub study_minutes_requested: u32,
    pub study_minutes_scheduled: u32,
    /// Minutes dropped by [`OverflowPolicy::Truncate`]; zero otherwise.
    pub unscheduled_study_minutes: u32,
    /// Caller-supplied note, shown alongside the plan and never used for timing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_note: Option<String>,
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn study_block_count(&self) -> usize {
        self.slots_of(SlotKind::Study).count()
    }

    pub fn slots_of(&self, kind: SlotKind) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(move |s| s.kind == kind)
    }

    /// Span from wake-up to the end of the last slot.
    pub fn total_duration_min(&self) -> u64 {
        self.slots.last().map(TimeSlot::end_offset_min).unwrap_or(0)
    }

    pub fn was_truncated(&self) -> bool {
        self.unscheduled_study_minutes > 0
    }
}
