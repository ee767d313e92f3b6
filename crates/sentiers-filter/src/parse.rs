//! Lenient parsing of the free-form `distance` and `duration` fields
//!
//! Neither parser fails loudly. A distance that cannot be read is `None`; a
//! duration segment that cannot be read counts as zero.

/// Distance in kilometres, or `None` when no finite number can be read
///
/// The first `,` is taken as the decimal separator. Leading whitespace is
/// skipped and the longest leading decimal literal is used, so `"12,5 km"`
/// reads as `12.5`.
pub fn parse_distance_km(raw: &str) -> Option<f64> {
    let normalized = raw.replacen(',', ".", 1);
    let literal = leading_decimal(normalized.trim_start())?;
    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Total minutes of a `"<H>h<MM>"` duration
///
/// The text is split on `h`; the first segment is hours and the second is
/// minutes. Each segment contributes its leading integer, or zero.
pub fn parse_duration_minutes(raw: &str) -> i64 {
    let mut segments = raw.split('h');
    let hours = segments.next().and_then(leading_integer).unwrap_or(0);
    let minutes = segments.next().and_then(leading_integer).unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`
fn leading_decimal(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&s[..end])
}

/// Leading `[+-]digits` of a trimmed segment
fn leading_integer(segment: &str) -> Option<i64> {
    let s = segment.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return None;
    }

    let literal = &s[..sign_len + digits];
    match literal.parse::<i64>() {
        Ok(value) => Some(value),
        // Only overflow can fail here
        Err(_) if literal.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
