//! Float to report string helper.

/// Formats a float as its shortest round-trip representation.
///
/// Integral values keep a `.0` suffix, very large or very small magnitudes
/// use exponent notation with a signed, at least two-digit exponent.
///
/// # Examples
///
/// ```ignore
/// use filecrunch::utils::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(0.000015), "1.5e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::format_float;

    #[test]
    fn plain() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(-7.0), "-7.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn exponent() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.25e-100), "1.25e-100");
        assert_eq!(format_float(1e300), "1e+300");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}
