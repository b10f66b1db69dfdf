// File: crates/sales-core/src/format.rs
// Summary: Number/percentage formatting and XML escaping for labels and tooltips.

/// Format a number the way a plain string conversion shows it: integers
/// without a fractional part, other values with at most six decimals and no
/// trailing zeros.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Share of `value` in `total` as a whole percent, rounding halves up.
/// A non-positive total yields 0.
pub fn percent(value: f64, total: f64) -> i64 {
    if total > 0.0 {
        (value / total * 100.0 + 0.5).floor() as i64
    } else {
        0
    }
}

/// Escape text for use in XML content and attribute values.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn percent_rounds_half_up_and_guards_zero_total() {
        assert_eq!(percent(30.0, 100.0), 30);
        assert_eq!(percent(1.0, 8.0), 13);
        assert_eq!(percent(5.0, 0.0), 0);
    }

    #[test]
    fn escape_covers_markup() {
        assert_eq!(xml_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
