//! Number formatting for human-readable summaries.

/// Render `value` with `,` thousands separators (en-US grouping).
pub fn format_thousands(value: u64) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_three() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_500_000), "1,500,000");
        assert_eq!(format_thousands(12_345_678), "12,345,678");
        assert_eq!(format_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }
}
