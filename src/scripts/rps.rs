use std::io::Write;

use crate::error::WorkshopError;
use crate::input::Prompter;
use crate::model::moves::{Move, Outcome, resolve};
use crate::opponent::MoveSource;
use crate::report::text::{CHOICE_PROMPT, render_game_intro, render_outcome};

/// Validates the choice before drawing, so an invalid choice never consumes
/// an opponent move.
pub fn play_round<S>(user_choice: &str, opponent: &mut S) -> Outcome
where
    S: MoveSource + ?Sized,
{
    let Some(user) = Move::from_choice(user_choice) else {
        tracing::warn!(choice = user_choice, "invalid move");
        return Outcome::Invalid;
    };
    let computer = opponent.draw();
    let outcome = resolve(user, computer);
    tracing::info!(%user, %computer, ?outcome, "round resolved");
    outcome
}

pub fn run_game<P, W, S>(
    prompter: &mut P,
    out: &mut W,
    opponent: &mut S,
) -> Result<Outcome, WorkshopError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    S: MoveSource + ?Sized,
{
    out.write_all(render_game_intro().as_bytes())?;
    out.flush()?;

    let choice = prompter.prompt(CHOICE_PROMPT)?;
    let outcome = play_round(&choice, opponent);

    out.write_all(render_outcome(outcome).as_bytes())?;
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scripts/rps.rs"]
mod tests;
