/// Fixed linear Celsius to Fahrenheit conversion; no range check, so values
/// below absolute zero convert like any other.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/temperature.rs"]
mod tests;
