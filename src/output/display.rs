//! Display functions for command results

use super::formatters::{
    BANNER_WIDTH, ResultStatus, banner_line, center, format_scored_word, result_status,
};
use crate::commands::SolveResult;
use colored::Colorize;

/// Print the solver banner
pub fn print_banner() {
    let border = "*".repeat(BANNER_WIDTH);
    println!("{}", border.bright_cyan().bold());
    println!("{}", banner_line("").bright_cyan().bold());
    println!("{}", banner_line("ANAGRAM SOLVER").bright_cyan().bold());
    println!("{}", banner_line("").bright_cyan().bold());
    println!("{}", border.bright_cyan().bold());
}

/// Print the ranked words found for one rack
pub fn print_solve_result(result: &SolveResult) {
    let rule = "-".repeat(BANNER_WIDTH);

    println!("{}", rule.bright_magenta().bold());
    println!(
        "{}",
        " Words that can be formed from the letters: "
            .bright_magenta()
            .bold()
    );
    println!(
        "{}",
        center(&result.rack, BANNER_WIDTH).bright_yellow().bold()
    );
    println!("{}", rule.bright_magenta().bold());

    for scored in &result.words {
        println!("{}", format_scored_word(scored));
    }

    match result_status(result.words.len(), result.total_found) {
        Some(ResultStatus::NoneFound) => println!("{}", "No words found".red()),
        Some(ResultStatus::Truncated { shown, total }) => println!(
            "{}",
            format!("... showing {shown} of {total} words").bright_black()
        ),
        None => {}
    }
    println!("{}", rule.bright_magenta().bold());
}
