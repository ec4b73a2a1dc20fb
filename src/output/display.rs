//! Display functions for command results

use super::formatters::{feedback_emoji, similarity_bar};
use crate::commands::{AnalysisReport, BenchmarkResult, SolveResult, ValidationResult};
use crate::core::{LetterStatus, Word};
use colored::Colorize;

/// Color a word letter by letter according to its feedback against a target
fn colorize_letters(current: &Word, target: &Word) -> String {
    crate::analysis::analyze_letters(current, target)
        .iter()
        .map(|result| {
            let letter = result.letter.to_uppercase().to_string();
            match result.status {
                LetterStatus::Correct => letter.green().bold().to_string(),
                LetterStatus::Present => letter.yellow().to_string(),
                LetterStatus::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Print the result of a pair analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "PAIR ANALYSIS:".bright_cyan().bold(),
        report.current.text().to_uppercase().bright_yellow().bold(),
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Letters:     {}  {}",
        colorize_letters(&report.current, &report.target),
        feedback_emoji(&report.letters)
    );
    println!(
        "   Similarity:  [{}] {}",
        similarity_bar(report.similarity, 30).green(),
        format!("{:.1}%", report.similarity * 100.0).bright_yellow()
    );
    println!("   Est. cost:   {}", report.estimated_cost);

    if let Some(suggestion) = &report.suggestion {
        println!("   Suggestion:  {suggestion}");
    } else {
        println!("   {}", "Already solved".green());
    }
}

/// Print the transcript of an auto-play run
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.text().to_uppercase(),
        result
            .state
            .target_word()
            .text()
            .to_uppercase()
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nStep {}: {} → {}",
            i + 1,
            step.description,
            step.word_after.to_uppercase()
        );
        if verbose {
            println!("  Total cost: {}", step.total_cost);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!(
                "Solved in {} moves at cost {}",
                result.steps.len(),
                result.state.total_cost()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "Gave up after {} moves ({} needs letters that cannot be inserted)",
                result.steps.len(),
                result.state.target_word()
            )
            .red()
            .bold()
        );
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Puzzles played:   {}", result.total);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Unsolvable:       {}",
        format!("{}", result.unsolved).yellow()
    );
    println!(
        "   Average cost:     {}",
        format!("{:.2}", result.average_cost).bright_yellow().bold()
    );
    println!("   Average moves:    {:.2}", result.average_moves);
    println!("   Worst cost:       {}", result.max_cost);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n{}", "Cost distribution:".bright_cyan().bold());
    let mut costs: Vec<_> = result.cost_distribution.iter().collect();
    costs.sort_by_key(|(cost, _)| **cost);
    for (cost, count) in costs {
        let pct = (*count as f64 / result.total.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {cost:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the validation verdicts
pub fn print_validation_result(result: &ValidationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-VALIDATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for message in &result.messages {
        if message.starts_with("FAIL") {
            println!("   {}", message.red().bold());
        } else if message.starts_with("ok") {
            println!("   {}", message.green());
        } else {
            println!("   {message}");
        }
    }
}
