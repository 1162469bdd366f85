//! Daily schedule generator.
//!
//! Builds a full day of contiguous slots from a wake time, a study budget
//! and a constitution:
//! - Morning routine, exercise and breakfast sized by the constitution
//! - Up to [`MAX_STUDY_BLOCKS`] study blocks separated by breaks
//! - A fixed evening sequence ending in eight hours of sleep
//!
//! What happens to study time beyond the block cap is set by
//! [`OverflowPolicy`].

mod generator;
mod profile;
mod slot;

pub use generator::{
    study_minutes_from_hours, OverflowPolicy, ScheduleGenerator, ScheduleRequest, BREAKFAST_MIN,
    MAX_CONTINUE_STUDY_MIN, MAX_STUDY_BLOCKS, TRAILING_BLOCKS,
};
pub use profile::ScheduleProfile;
pub use slot::{DaySchedule, SlotKind, TimeSlot};
