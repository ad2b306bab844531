//! One linear program body per workshop binary: prompt, compute, print.
//!
//! Prompts go through a [`Prompter`](crate::input::Prompter); results are
//! written to `out`. On the terminal both end up on stdout.

pub mod converter;
pub mod mark_sheet;
pub mod rps;

pub use converter::run_converter;
pub use mark_sheet::run_mark_sheet;
pub use rps::{play_round, run_game};
