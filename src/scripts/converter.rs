use std::io::Write;

use crate::error::WorkshopError;
use crate::input::Prompter;
use crate::model::temperature::celsius_to_fahrenheit;
use crate::report::text::{CELSIUS_PROMPT, render_fahrenheit};

pub fn run_converter<P, W>(prompter: &mut P, out: &mut W) -> Result<f64, WorkshopError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let celsius = prompter.prompt_f64(CELSIUS_PROMPT)?;
    let fahrenheit = celsius_to_fahrenheit(celsius);
    tracing::debug!(celsius, fahrenheit, "converted temperature");

    out.write_all(render_fahrenheit(fahrenheit).as_bytes())?;
    out.flush()?;
    Ok(fahrenheit)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scripts/converter.rs"]
mod tests;
