//! Compact label text: abbreviated names and short magnitudes.

/// Abbreviate a name to initials plus the last word, upper-cased.
///
/// `"John Smith Doe"` becomes `"J. S. DOE"`; a single word is only
/// upper-cased.
#[must_use]
pub fn abbreviate(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let Some((last, rest)) = words.split_last() else {
        return String::new();
    };

    let mut out = String::with_capacity(name.len());
    for word in rest {
        if let Some(initial) = word.chars().next() {
            out.push(initial);
            out.push_str(". ");
        }
    }
    out.push_str(last);
    out.to_uppercase()
}

/// Keep at most `max_chars` characters.
#[must_use]
pub fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

/// Abbreviate then truncate, the form every name label uses.
#[must_use]
pub fn short_name(name: &str, max_chars: usize) -> String {
    truncate(&abbreviate(name), max_chars).to_string()
}

/// Format a magnitude with K/M suffixes.
///
/// | Range | Form |
/// |---|---|
/// | < 10,000 | `9,500` |
/// | < 100,000 | `15.0K` |
/// | < 1,000,000 | `150K` |
/// | < 100,000,000 | `1.5M` |
/// | otherwise | `150M` |
///
/// Every form truncates, so a value never prints in a tier above its own.
#[must_use]
pub fn kilo_format(value: u32) -> String {
    if value >= 100_000_000 {
        format!("{}M", group_thousands(value / 1_000_000))
    } else if value >= 1_000_000 {
        let tenths = value / 100_000;
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if value >= 100_000 {
        format!("{}K", group_thousands(value / 1_000))
    } else if value >= 10_000 {
        let tenths = value / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        group_thousands(value)
    }
}

/// `1234567` becomes `"1,234,567"`.
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
