//! Numeric conversion of number token text.
//!
//! Number tokens may carry trailing suffixes (`1.5f`), dangling exponent
//! markers (`2e`) or an embedded minus (`3-4`). Conversion takes the longest
//! prefix that forms a decimal number and ignores the rest. A text with no
//! such prefix does not convert.

/// Splits `text` into the parts of its longest decimal-number prefix.
struct Prefix<'a> {
    negative: bool,
    int: &'a [u8],
    frac: &'a [u8],
    exp_negative: bool,
    exp: &'a [u8],
}

fn digits(text: &[u8], from: usize) -> usize {
    text[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn split_prefix(text: &[u8], allow_fraction: bool) -> Option<Prefix<'_>> {
    let mut i = 0;
    let negative = match text.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let int_len = digits(text, i);
    let int = &text[i..i + int_len];
    i += int_len;

    let mut frac: &[u8] = &[];
    if allow_fraction && text.get(i) == Some(&b'.') {
        let frac_len = digits(text, i + 1);
        if int_len > 0 || frac_len > 0 {
            frac = &text[i + 1..i + 1 + frac_len];
            i += 1 + frac_len;
        }
    }

    if int.is_empty() && frac.is_empty() {
        return None;
    }

    let mut exp_negative = false;
    let mut exp: &[u8] = &[];
    if allow_fraction && matches!(text.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        let sign = match text.get(j) {
            Some(b'-') => {
                j += 1;
                true
            }
            Some(b'+') => {
                j += 1;
                false
            }
            _ => false,
        };
        let exp_len = digits(text, j);
        if exp_len > 0 {
            exp_negative = sign;
            exp = &text[j..j + exp_len];
        }
    }

    Some(Prefix {
        negative,
        int,
        frac,
        exp_negative,
        exp,
    })
}

/// Canonical `[-]I.FeE` rendering that the standard float parsers accept.
fn canonical(prefix: &Prefix<'_>) -> String {
    let part = |bytes: &[u8]| -> String {
        if bytes.is_empty() {
            "0".to_string()
        } else {
            String::from_utf8_lossy(bytes).into_owned()
        }
    };
    format!(
        "{}{}.{}e{}{}",
        if prefix.negative { "-" } else { "" },
        part(prefix.int),
        part(prefix.frac),
        if prefix.exp_negative { "-" } else { "" },
        part(prefix.exp),
    )
}

/// Converts the longest numeric prefix to `f64`.
///
/// ```
/// use luffa_lex::numeric::parse_f64;
///
/// assert_eq!(parse_f64(b"1.5f"), Some(1.5));
/// assert_eq!(parse_f64(b".25"), Some(0.25));
/// assert_eq!(parse_f64(b"2e"), Some(2.0));
/// assert_eq!(parse_f64(b"-."), None);
/// ```
pub fn parse_f64(text: &[u8]) -> Option<f64> {
    let prefix = split_prefix(text, true)?;
    canonical(&prefix).parse().ok()
}

/// Converts the longest numeric prefix to `f32`.
pub fn parse_f32(text: &[u8]) -> Option<f32> {
    let prefix = split_prefix(text, true)?;
    canonical(&prefix).parse().ok()
}

/// Converts the longest base-10 integer prefix to `i32`, saturating at the
/// bounds of the type.
///
/// ```
/// use luffa_lex::numeric::parse_i32;
///
/// assert_eq!(parse_i32(b"-42"), Some(-42));
/// assert_eq!(parse_i32(b"12e3"), Some(12));
/// assert_eq!(parse_i32(b"99999999999"), Some(i32::MAX));
/// assert_eq!(parse_i32(b"-"), None);
/// ```
pub fn parse_i32(text: &[u8]) -> Option<i32> {
    let prefix = split_prefix(text, false)?;
    let magnitude = prefix.int.iter().fold(0i64, |acc, &b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if prefix.negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(parse_f64(b"123"), Some(123.0));
        assert_eq!(parse_f64(b"-0.5"), Some(-0.5));
        assert_eq!(parse_i32(b"0"), Some(0));
        assert_eq!(parse_i32(b"-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(parse_f64(b"5."), Some(5.0));
        assert_eq!(parse_f32(b"5.f"), Some(5.0));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_f64(b"1e3"), Some(1000.0));
        assert_eq!(parse_f64(b"1.5E-1"), Some(0.15));
        assert_eq!(parse_f64(b"1e-"), Some(1.0));
    }

    #[test]
    fn test_embedded_minus_stops() {
        assert_eq!(parse_f64(b"3-4"), Some(3.0));
        assert_eq!(parse_i32(b"3-4"), Some(3));
    }

    #[test]
    fn test_integer_ignores_fraction() {
        assert_eq!(parse_i32(b"7.9"), Some(7));
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(parse_f64(b"."), None);
        assert_eq!(parse_f32(b"-"), None);
        assert_eq!(parse_i32(b".5"), None);
        assert_eq!(parse_i32(b""), None);
    }

    #[test]
    fn test_saturates_low() {
        assert_eq!(parse_i32(b"-99999999999999999999999"), Some(i32::MIN));
    }
}
