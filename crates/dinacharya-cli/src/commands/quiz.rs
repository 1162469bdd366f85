//! Constitution questionnaire commands.

use clap::Subcommand;
use dinacharya_core::{AnswerSheet, ConstitutionResult, CoreError, ScoringEngine};

#[derive(Subcommand)]
pub enum QuizAction {
    /// List the questions and their options
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a set of answers
    Score {
        /// Comma-separated option indices (0-2), "-" for unanswered, e.g. "0,1,2,-,1,..."
        answers: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: QuizAction) -> Result<(), CoreError> {
    let engine = ScoringEngine::new();
    match action {
        QuizAction::Questions { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(engine.bank().questions())?);
                return Ok(());
            }
            for (qi, question) in engine.bank().questions().iter().enumerate() {
                println!("{}. {}", qi + 1, question.prompt);
                for (oi, option) in question.options.iter().enumerate() {
                    println!("   [{oi}] {}", option.text);
                }
                println!();
            }
        }
        QuizAction::Score { answers, json } => {
            let sheet = AnswerSheet::from_choices(parse_answers(&answers).map_err(CoreError::Custom)?);
            let result = engine.score(&sheet)?;
            if !result.is_complete {
                eprintln!(
                    "warning: only {}/{} questions answered, result is provisional",
                    result.answered,
                    sheet.len()
                );
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result, sheet.len());
            }
        }
    }
    Ok(())
}

fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>, String> {
    raw.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, part)| match part {
            "-" | "" => Ok(None),
            n => n
                .parse::<usize>()
                .map(Some)
                .map_err(|_| format!("answer {} ('{n}') is not an option index", i + 1)),
        })
        .collect()
}

fn print_result(result: &ConstitutionResult, total: usize) {
    println!("Dominant constitution: {}", result.dominant.label());
    for (constitution, pct) in result.percentages() {
        println!(
            "  {:<6} {:>3} ({pct}%)",
            constitution.as_str(),
            result.tally.get(constitution)
        );
    }
    println!("Answered: {}/{total}", result.answered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_answers() {
        assert_eq!(
            parse_answers("0, 1,-,2").unwrap(),
            vec![Some(0), Some(1), None, Some(2)]
        );
    }

    #[test]
    fn rejects_non_numeric_answer() {
        let err = parse_answers("0,x").unwrap_err();
        assert!(err.contains("answer 2"));
    }
}
