//! Display functions for command results

use super::formatters::{colored_guess, distribution_bar};
use crate::commands::{ConvertResult, EvaluationResult, ScoreResult, SolveResult};
use crate::game::RoundStatus;
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} hints{})",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy,
        if result.hard_mode { ", hard mode" } else { "" }
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Feedback:   {} ({})", step.feedback.to_digits(), step.feedback);
            if let Some((before, after)) = step.candidates {
                println!("  Candidates: {before} → {after}");
            }
        }
    }

    println!();
    match result.status {
        RoundStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        RoundStatus::Lost | RoundStatus::InProgress => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of an evaluation
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EVALUATION:".bright_cyan().bold(),
        format!(
            "{} hints{}",
            result.strategy,
            if result.hard_mode { ", hard mode" } else { "" }
        )
        .bright_yellow()
        .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.tested);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.mean).bright_yellow().bold()
    );
    println!("   Std deviation:    {:.3}", result.std_dev);
    println!(
        "   Worst case:       {}",
        format!("{}", result.max).yellow()
    );
    if result.failed == 0 {
        println!(
            "   Failures:         {}",
            format!("none within {}", result.max_attempts).green()
        );
    } else {
        println!(
            "   Failures:         {}",
            format!("{} beyond {} guesses", result.failed, result.max_attempts).red()
        );
    }
    if let Some(vertices) = result.vertices {
        println!("   Tree nodes:       {vertices}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.tested);
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    let max_count = distribution.values().copied().max().unwrap_or(0);
    for (guesses, &count) in distribution {
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        let bar = distribution_bar(count, max_count, 40);
        let (filled, empty) = bar.split_at(bar.rfind('█').map_or(0, |i| i + '█'.len_utf8()));
        println!(
            "   {guesses}: {}{} {count:4} ({pct:5.1}%)",
            filled.green(),
            empty.bright_black()
        );
    }
}

/// Print one scored pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}",
        result.guess.to_string().bright_yellow().bold(),
        result.secret.to_string().bright_white().bold()
    );
    println!(
        "{}  {}  {}",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        result.feedback.to_digits()
    );
}

/// Print a summary of a converted tree
pub fn print_convert_result(result: &ConvertResult, output: &std::path::Path) {
    println!(
        "{} {} tree with {} nodes (root {}) to {}",
        "Wrote".green().bold(),
        result.mode,
        result.nodes,
        result.root_guess.bright_yellow(),
        output.display()
    );
}
