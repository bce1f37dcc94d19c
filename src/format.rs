//! Display formatting for percentages, fixed decimals and grouped counts.

/// Formats `value` with exactly `digits` fractional digits.
///
/// Rounds the shortest decimal form of the value half away from zero, so
/// `97.345` gives `97.35` and `12.5` gives `13` at zero digits.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let repr = value.abs().to_string();
    let (whole, frac) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    if frac.len() <= digits {
        let mut out = format!("{}{}", sign, whole);
        if digits > 0 {
            out.push('.');
            out.push_str(frac);
            out.extend(std::iter::repeat('0').take(digits - frac.len()));
        }
        return out;
    }

    let round_up = frac.as_bytes()[digits] >= b'5';
    let mut kept: Vec<char> = whole.chars().chain(frac.chars().take(digits)).collect();
    if round_up {
        carry_increment(&mut kept);
    }

    let split = kept.len() - digits;
    let mut out = String::from(sign);
    out.extend(&kept[..split]);
    if digits > 0 {
        out.push('.');
        out.extend(&kept[split..]);
    }
    out
}

fn carry_increment(digits: &mut Vec<char>) {
    for slot in digits.iter_mut().rev() {
        if *slot == '9' {
            *slot = '0';
        } else {
            *slot = char::from(*slot as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}

/// Two-decimal percentage text, e.g. `"97.35%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}

/// Whole-number percentage text, e.g. `"13%"`.
pub fn whole_percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 0))
}

/// Inserts `separator` between every group of three digits.
pub fn group_thousands(n: u64, separator: &str) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
