//! Rating string segmentation and value normalization.

use crate::domain::{ParsedRating, RatingValue};

/// Split a rating string at its first `.`.
///
/// Total over all strings: no numeric validation happens here, so `"."`,
/// `".000"` and `"abc"` are all accepted verbatim.
pub fn parse(input: &str) -> ParsedRating<'_> {
    match input.find('.') {
        Some(dot) => {
            let (upper, lower) = input.split_at(dot);
            ParsedRating { upper, lower }
        }
        None => ParsedRating {
            upper: input,
            lower: "",
        },
    }
}

/// Read the numeric value of a rating string for tier selection.
///
/// Lenient in the same way as a leading-prefix float parse: the longest
/// prefix that forms a decimal number is used and trailing text is ignored
/// (`"18abc"` -> 18). Returns `None` when no numeric prefix exists.
pub fn parse_rating_value(input: &str) -> Option<RatingValue> {
    numeric_prefix(input.trim_start()).and_then(RatingValue::new)
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
