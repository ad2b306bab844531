use crate::model::grade::GradeReport;
use crate::model::moves::{Move, Outcome};
use crate::report::format_f64_2;

pub const CELSIUS_PROMPT: &str = "Enter the temperature in Celsius: ";
pub const CHOICE_PROMPT: &str = "Enter your choice (Rock/Paper/Scissor): ";
pub const GAME_WELCOME: &str = "Welcome to Rock Paper Scissor Game";
pub const GAME_RULES: &str = "Rules: Rock beats Scissors, Scissors beats Paper, Paper beats Rock";

pub fn marks_prompt(subject: usize) -> String {
    format!("Enter the marks for subject {subject}: ")
}

pub fn render_fahrenheit(fahrenheit: f64) -> String {
    format!(
        "The temperature in Fahrenheit is: {}°F\n",
        format_f64_2(fahrenheit)
    )
}

pub fn render_grade_report(report: &GradeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "The average marks are: {}\n",
        format_f64_2(report.average)
    ));
    out.push_str(&format!("The grade is: {}\n", report.grade));
    out
}

pub fn render_game_intro() -> String {
    format!("{GAME_WELCOME}\n{GAME_RULES}\n")
}

// Wording (including Scissor/Scissors) is the workshop's own.
pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Tied(_) => "Match tied",
        Outcome::UserWins(Move::Rock) => "You won Rock beats Scissors",
        Outcome::UserWins(Move::Paper) => "You won Paper beats Rock",
        Outcome::UserWins(Move::Scissor) => "You won Scissors beats Paper",
        Outcome::ComputerWins(Move::Rock) => "Computer won Rock beats Scissor",
        Outcome::ComputerWins(Move::Paper) => "Computer won Paper beats Rock",
        Outcome::ComputerWins(Move::Scissor) => "Computer won Scissors beats Paper",
        Outcome::Invalid => "In-valid Option Try again!",
    }
}

pub fn render_outcome(outcome: Outcome) -> String {
    format!("{}\n", outcome_line(outcome))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
