use std::fmt;

pub const SUBJECTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Inclusive lower bounds, highest first. Anything below the last floor is a D.
const GRADE_FLOORS: [(f64, Grade); 3] = [(90.0, Grade::A), (80.0, Grade::B), (70.0, Grade::C)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeReport {
    pub average: f64,
    pub grade: Grade,
}

pub fn average(marks: &[f64; SUBJECTS]) -> f64 {
    // Folding from +0.0 keeps an all -0.0 sheet at 0.00.
    marks.iter().fold(0.0, |acc, m| acc + m) / SUBJECTS as f64
}

pub fn grade_for(average: f64) -> Grade {
    GRADE_FLOORS
        .iter()
        .find(|(floor, _)| average >= *floor)
        .map(|&(_, grade)| grade)
        .unwrap_or(Grade::D)
}

pub fn calculate_grade(marks: &[f64; SUBJECTS]) -> GradeReport {
    let average = average(marks);
    GradeReport {
        average,
        grade: grade_for(average),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/grade.rs"]
mod tests;
