use std::io::Cursor;

use super::*;
use crate::input::{InputError, Terminal};
use crate::model::grade::Grade;

fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_mark_sheet_transcript() {
    let mut term = terminal("95\n95\n95\n");
    let mut out = Vec::new();
    let report = run_mark_sheet(&mut term, &mut out).unwrap();
    assert_eq!(report.grade, Grade::A);

    let (_, prompts) = term.into_parts();
    assert_eq!(
        String::from_utf8(prompts).unwrap(),
        "Enter the marks for subject 1: Enter the marks for subject 2: Enter the marks for subject 3: "
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The average marks are: 95.00\nThe grade is: A\n"
    );
}

#[test]
fn test_mark_sheet_boundary_below_ninety() {
    let mut term = terminal("89.99\n89.99\n89.99\n");
    let mut out = Vec::new();
    run_mark_sheet(&mut term, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The average marks are: 89.99\nThe grade is: B\n"
    );
}

#[test]
fn test_mark_sheet_mixed_marks() {
    let mut term = terminal("60\n70\n71\n");
    let mut out = Vec::new();
    let report = run_mark_sheet(&mut term, &mut out).unwrap();
    assert_eq!(report.average, 67.0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The average marks are: 67.00\nThe grade is: D\n"
    );
}

#[test]
fn test_mark_sheet_negative_zero_prints_zero() {
    let mut term = terminal("-0\n-0\n-0\n");
    let mut out = Vec::new();
    run_mark_sheet(&mut term, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The average marks are: 0.00\nThe grade is: D\n"
    );
}

#[test]
fn test_mark_sheet_stops_at_first_bad_mark() {
    let mut term = terminal("80\nabc\n90\n");
    let mut out = Vec::new();
    let err = run_mark_sheet(&mut term, &mut out).unwrap_err();
    assert!(matches!(
        err,
        WorkshopError::Input(InputError::NotANumber { ref input, .. }) if input == "abc"
    ));
    assert!(out.is_empty());

    let (_, prompts) = term.into_parts();
    assert_eq!(
        String::from_utf8(prompts).unwrap(),
        "Enter the marks for subject 1: Enter the marks for subject 2: "
    );
}

#[test]
fn test_mark_sheet_missing_mark_is_eof() {
    let mut term = terminal("80\n");
    let mut out = Vec::new();
    let err = run_mark_sheet(&mut term, &mut out).unwrap_err();
    assert!(matches!(err, WorkshopError::Input(InputError::Eof { .. })));
}
