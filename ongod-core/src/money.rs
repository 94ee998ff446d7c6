use serde::{Deserialize, Serialize};

pub const RUPEE_SIGN: char = '₹';

/// How rupee amounts are rendered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// en-IN grouping: last three digits, then pairs (`₹1,20,000`)
    #[default]
    Localized,
    /// Bare concatenation (`₹120000`)
    Plain,
}

impl CurrencyStyle {
    /// Whole-rupee string; an absent amount renders as zero
    pub fn format(&self, amount: Option<i64>) -> String {
        let amount = amount.unwrap_or(0);
        match self {
            CurrencyStyle::Plain => format!("{}{}", RUPEE_SIGN, amount),
            CurrencyStyle::Localized => {
                let sign = if amount < 0 { "-" } else { "" };
                format!("{}{}{}", sign, RUPEE_SIGN, group_indian(amount.unsigned_abs()))
            }
        }
    }
}

/// Formats an amount the way the en-IN locale shows INR, without decimals
pub fn format_inr(amount: Option<i64>) -> String {
    CurrencyStyle::Localized.format(amount)
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        let s = format_inr(Some(40_000));
        assert!(s.contains("40,000"));
        assert!(s.contains('₹'));
        assert_eq!(s, "₹40,000");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_inr(Some(120_000)), "₹1,20,000");
        assert_eq!(format_inr(Some(12_345_678)), "₹1,23,45,678");
        assert_eq!(format_inr(Some(999)), "₹999");
        assert_eq!(format_inr(Some(-2_500)), "-₹2,500");
    }

    #[test]
    fn test_absent_amount_is_zero() {
        assert_eq!(format_inr(None), "₹0");
        assert_eq!(format_inr(None), format_inr(Some(0)));
    }

    #[test]
    fn test_plain_fallback() {
        assert_eq!(CurrencyStyle::Plain.format(Some(40_000)), "₹40000");
        assert_eq!(CurrencyStyle::Plain.format(None), "₹0");
    }
}
