pub mod grade;
pub mod moves;
pub mod temperature;
