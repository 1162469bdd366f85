//! Per-constitution timing and guidance.

use chrono::NaiveTime;
use serde::Serialize;

use crate::constitution::Constitution;

/// Per-constitution durations driving the day planner, plus the
/// display-only guidance attached to slot notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleProfile {
    /// Length of a full study block (minutes).
    pub study_block_min: u32,
    /// Break between study blocks (minutes).
    pub break_min: u32,
    pub morning_routine_min: u32,
    pub exercise_min: u32,
    pub exercise_hint: &'static str,
    pub food_hint: &'static str,
}

impl Constitution {
    /// Planner profile for this constitution.
    pub fn schedule_profile(self) -> ScheduleProfile {
        match self {
            Constitution::Vata => ScheduleProfile {
                study_block_min: 40,
                break_min: 15,
                morning_routine_min: 30,
                exercise_min: 25,
                exercise_hint: "Gentle yoga or walking",
                food_hint: "Warm, oily, grounding foods (like soups, ghee, rice, cooked vegetables)",
            },
            Constitution::Pitta => ScheduleProfile {
                study_block_min: 60,
                break_min: 20,
                morning_routine_min: 20,
                exercise_min: 35,
                exercise_hint: "Moderate yoga or swimming",
                food_hint: "Cooling foods (like cucumber, coconut, leafy greens, milk)",
            },
            Constitution::Kapha => ScheduleProfile {
                study_block_min: 45,
                break_min: 10,
                morning_routine_min: 40,
                exercise_min: 40,
                exercise_hint: "Brisk walk or cardio for activation",
                food_hint: "Light, dry, spicy foods (like millet, legumes, ginger tea)",
            },
        }
    }

    /// Suggested wake time when the user has not chosen one.
    pub fn default_wake_time(self) -> NaiveTime {
        let (h, m) = match self {
            Constitution::Vata => (6, 30),
            Constitution::Pitta => (6, 0),
            Constitution::Kapha => (5, 30),
        };
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
    }
}
