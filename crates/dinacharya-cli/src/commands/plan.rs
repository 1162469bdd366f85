//! Day plan generation command.

use clap::Args;
use dinacharya_core::time_of_day::{format_hhmm, parse_hhmm};
use dinacharya_core::{
    study_minutes_from_hours, Config, Constitution, CoreError, DaySchedule, OverflowPolicy, ScheduleGenerator,
    ScheduleRequest,
};

#[derive(Args)]
pub struct PlanArgs {
    /// Constitution type (vata, pitta or kapha)
    constitution: String,
    /// Wake-up time, HH:MM (defaults to the configured time for the constitution)
    #[arg(long)]
    wake: Option<String>,
    /// Daily study hours
    #[arg(long, conflicts_with = "minutes")]
    hours: Option<f64>,
    /// Daily study minutes
    #[arg(long)]
    minutes: Option<u32>,
    /// Note shown with the plan
    #[arg(long)]
    note: Option<String>,
    /// Overflow policy: truncate, continue or reject
    #[arg(long)]
    policy: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), CoreError> {
    let config = Config::load()?;

    let constitution: Constitution = args.constitution.parse()?;
    let wake_time = match args.wake.as_deref() {
        Some(raw) => parse_hhmm(raw)?,
        None => config.wake_time_for(constitution)?,
    };
    let policy: OverflowPolicy = match args.policy.as_deref() {
        Some(raw) => raw.parse()?,
        None => config.planner.overflow_policy,
    };

    let requested = match (args.minutes, args.hours) {
        (Some(minutes), _) => minutes,
        (None, Some(hours)) => study_minutes_from_hours(hours),
        (None, None) => study_minutes_from_hours(config.planner.default_study_hours),
    };
    let study_minutes = config.clamp_study_minutes(requested);
    if study_minutes < requested {
        tracing::info!(requested, study_minutes, "clamped study minutes to configured maximum");
    }

    let mut request = ScheduleRequest::new(wake_time, study_minutes, constitution);
    request.custom_note = args.note;

    let schedule = ScheduleGenerator::with_policy(policy).generate(&request)?;
    if schedule.was_truncated() {
        eprintln!(
            "warning: {} study minutes did not fit in the day and were dropped",
            schedule.unscheduled_study_minutes
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print_schedule(&schedule);
    }
    Ok(())
}

fn print_schedule(schedule: &DaySchedule) {
    println!(
        "Day plan for {} (wake {}, {} study min)",
        schedule.constitution.label(),
        format_hhmm(schedule.wake_time),
        schedule.study_minutes_scheduled
    );
    println!();
    for slot in &schedule.slots {
        println!("{}-{}  {}", format_hhmm(slot.start), format_hhmm(slot.end), slot.title);
        if let Some(note) = &slot.note {
            println!("             {note}");
        }
    }
    if let Some(note) = &schedule.custom_note {
        println!();
        println!("Note: {note}");
    }
}
