use crate::config::DigitGrouping;
use chrono::NaiveDate;

/// Round `amount` to a whole number and group its digits.
#[must_use]
pub fn group_amount(amount: f64, grouping: DigitGrouping) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    if digits.len() <= 3 || !rounded.is_finite() {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}

/// "Rs. 1,23,456" style total line.
#[must_use]
pub fn format_total(amount: f64, prefix: &str, grouping: DigitGrouping) -> String {
    let grouped = group_amount(amount, grouping);
    if prefix.is_empty() {
        grouped
    } else {
        format!("{prefix} {grouped}")
    }
}

/// Date as printed on the quotation, e.g. "19 Oct 2026".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `<prefix>_<client>_<millis>.<ext>`.
///
/// The client name is trimmed with whitespace runs and path separators
/// collapsed to `_`; a blank name becomes `Client`.
#[must_use]
pub fn export_file_name(prefix: &str, client_name: &str, millis: i64, extension: &str) -> String {
    let mut client = String::with_capacity(client_name.len());
    let mut in_gap = false;
    for ch in client_name.trim().chars() {
        if ch.is_whitespace() || matches!(ch, '/' | '\\') {
            if !in_gap {
                client.push('_');
            }
            in_gap = true;
        } else {
            client.push(ch);
            in_gap = false;
        }
    }
    if client.is_empty() {
        client.push_str("Client");
    }

    format!("{prefix}_{client}_{millis}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grouping_beyond_integer_range() {
        assert_eq!(
            group_amount(1e20, DigitGrouping::Western),
            "100,000,000,000,000,000,000"
        );
        assert_eq!(
            group_amount(-1e19, DigitGrouping::Indian),
            "-1,00,00,00,00,00,00,00,00,000"
        );
        assert_eq!(group_amount(-0.4, DigitGrouping::Indian), "0");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(group_amount(0.0, DigitGrouping::Indian), "0");
        assert_eq!(group_amount(999.0, DigitGrouping::Indian), "999");
        assert_eq!(group_amount(11_000.0, DigitGrouping::Indian), "11,000");
        assert_eq!(group_amount(123_456.0, DigitGrouping::Indian), "1,23,456");
        assert_eq!(group_amount(12_345_678.0, DigitGrouping::Indian), "1,23,45,678");
    }

    #[test]
    fn western_grouping() {
        assert_eq!(group_amount(1_000.0, DigitGrouping::Western), "1,000");
        assert_eq!(group_amount(1_234_567.0, DigitGrouping::Western), "1,234,567");
    }

    #[test]
    fn rounds_and_keeps_sign() {
        assert_eq!(group_amount(1_499.5, DigitGrouping::Indian), "1,500");
        assert_eq!(group_amount(10.4, DigitGrouping::Indian), "10");
        assert_eq!(group_amount(-250_000.0, DigitGrouping::Indian), "-2,50,000");
        assert_eq!(group_amount(-0.3, DigitGrouping::Indian), "0");
    }

    #[test]
    fn total_line_prefix() {
        assert_eq!(
            format_total(11_000.0, "Rs.", DigitGrouping::Indian),
            "Rs. 11,000"
        );
        assert_eq!(format_total(5.0, "", DigitGrouping::Indian), "5");
    }

    #[test]
    fn date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07 Mar 2026");
    }

    #[test]
    fn file_name_from_client() {
        assert_eq!(
            export_file_name("Estimate_Quotation", "Asha  Rao\tK", 1_700_000_000_000, "pdf"),
            "Estimate_Quotation_Asha_Rao_K_1700000000000.pdf"
        );
        assert_eq!(
            export_file_name("Estimate_Quotation", "   ", 42, "csv"),
            "Estimate_Quotation_Client_42.csv"
        );
        assert_eq!(
            export_file_name("Q", "../etc/passwd", 1, "json"),
            "Q_.._etc_passwd_1.json"
        );
    }
}
