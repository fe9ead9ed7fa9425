// src/util.rs
//
// Small display helpers used by the DTO layer when shaping records for a
// card-style listing.

/// Truncate text to `max` characters, appending an ellipsis when the input
/// is at least that long.
pub fn truncate(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() >= max {
        let head: String = chars[..max].iter().collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Insert commas as thousand separators into the integer part of a numeric
/// string. The input is already regex-validated, so this is pure string
/// shaping with no numeric parsing.
pub fn number_with_commas(value: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match fraction {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_adds_ellipsis_at_limit() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc...");
        assert_eq!(truncate("ab", 3), "ab");
    }

    #[test]
    fn test_number_with_commas() {
        assert_eq!(number_with_commas("45000"), "45,000");
        assert_eq!(number_with_commas("1234567"), "1,234,567");
        assert_eq!(number_with_commas("529.99"), "529.99");
        assert_eq!(number_with_commas("1200.5"), "1,200.5");
        assert_eq!(number_with_commas("999"), "999");
    }
}
