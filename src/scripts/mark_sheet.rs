use std::io::Write;

use crate::error::WorkshopError;
use crate::input::Prompter;
use crate::model::grade::{GradeReport, SUBJECTS, calculate_grade};
use crate::report::text::{marks_prompt, render_grade_report};

/// Reads the marks for subjects 1..=3 in order, then prints average and grade.
pub fn run_mark_sheet<P, W>(prompter: &mut P, out: &mut W) -> Result<GradeReport, WorkshopError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let mut marks = [0.0f64; SUBJECTS];
    for (idx, mark) in marks.iter_mut().enumerate() {
        *mark = prompter.prompt_f64(&marks_prompt(idx + 1))?;
    }

    let report = calculate_grade(&marks);
    tracing::debug!(
        ?marks,
        average = report.average,
        grade = %report.grade,
        "graded marks"
    );

    out.write_all(render_grade_report(&report).as_bytes())?;
    out.flush()?;
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scripts/mark_sheet.rs"]
mod tests;
