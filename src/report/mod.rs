pub mod text;

pub fn format_f64_2(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
