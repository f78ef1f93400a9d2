//! Batch reader for precomputed risk percentages
//!
//! Input is CSV text with one percentage per line, optionally preceded by a
//! `stroke_risk_percent` header. Lines that don't start with a number are
//! skipped but still count towards patient numbering.

use serde::{Deserialize, Serialize};

const HEADER_MARKER: &str = "stroke_risk_percent";

/// Display band for a risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentBand {
    /// Below 20%
    Low,
    /// 20% up to 70%
    Medium,
    /// 70% and above
    High,
}

impl PercentBand {
    /// Band for a percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 20.0 {
            PercentBand::Low
        } else if percentage < 70.0 {
            PercentBand::Medium
        } else {
            PercentBand::High
        }
    }
}

/// One row of a batch upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRiskEntry {
    /// `Patient <n>`, numbered by line position
    pub id: String,
    /// Risk percentage as read
    pub percentage: f64,
    /// Display band
    pub band: PercentBand,
    /// CSS `rgb(..)` colour on the green-orange-red scale
    pub color: String,
}

/// Read every usable row from a CSV of risk percentages
pub fn read_risk_percentages(csv: &str) -> Vec<BatchRiskEntry> {
    let lines: Vec<&str> = csv.split('\n').collect();
    let start_row = match lines.first() {
        Some(first) if first.contains(HEADER_MARKER) => 1,
        _ => 0,
    };

    lines
        .iter()
        .enumerate()
        .skip(start_row)
        .filter_map(|(i, line)| {
            let percentage = leading_number(line.trim())?;
            Some(BatchRiskEntry {
                id: format!("Patient {}", i + 1 - start_row),
                percentage,
                band: PercentBand::from_percentage(percentage),
                color: risk_color(percentage),
            })
        })
        .collect()
}

/// Gradient colour for a percentage: green to yellow below 20, yellow to
/// orange below 70, orange to red above.
pub fn risk_color(percentage: f64) -> String {
    let (r, g, b) = if percentage < 20.0 {
        let ratio = percentage / 20.0;
        (
            (16.0 + (239.0 - 16.0) * ratio).floor(),
            185.0,
            (129.0 - (129.0 - 16.0) * ratio).floor(),
        )
    } else if percentage < 70.0 {
        let ratio = (percentage - 20.0) / 50.0;
        (
            239.0 + ((245.0 - 239.0) * ratio).floor(),
            185.0 - ((158.0 - 129.0) * ratio).floor(),
            16.0,
        )
    } else {
        let ratio = (percentage - 70.0) / 30.0;
        (
            245.0 + ((220.0 - 245.0) * ratio).floor(),
            158.0 - ((38.0 - 16.0) * ratio).floor(),
            16.0,
        )
    };

    format!("rgb({}, {}, {})", channel(r), channel(g), channel(b))
}

fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Longest numeric prefix of `text`, if it is finite.
///
/// Follows JavaScript `parseFloat` prefix rules (`"30%"` reads as 30), which a CSV parser would not.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_skipped() {
        let entries = read_risk_percentages("stroke_risk_percent\n12.5\n45\n88.25\n");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "Patient 1");
        assert_eq!(entries[0].percentage, 12.5);
        assert_eq!(entries[0].band, PercentBand::Low);
        assert_eq!(entries[1].band, PercentBand::Medium);
        assert_eq!(entries[2].id, "Patient 3");
        assert_eq!(entries[2].band, PercentBand::High);
    }

    #[test]
    fn test_without_header() {
        let entries = read_risk_percentages("5\r\n75\r\n");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "Patient 1");
        assert_eq!(entries[1].percentage, 75.0);
    }

    #[test]
    fn test_invalid_lines_keep_numbering() {
        let entries = read_risk_percentages("stroke_risk_percent\n10\n\nn/a\n30%\n");

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Patient 1", "Patient 4"]);
        assert_eq!(entries[1].percentage, 30.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_risk_percentages("").is_empty());
        assert!(read_risk_percentages("stroke_risk_percent").is_empty());
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("42"), Some(42.0));
        assert_eq!(leading_number("-1.5,foo"), Some(-1.5));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("1e2"), Some(100.0));
        assert_eq!(leading_number("3e"), Some(3.0));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("inf"), None);
    }

    #[test]
    fn test_color_scale() {
        assert_eq!(risk_color(0.0), "rgb(16, 185, 129)");
        assert_eq!(risk_color(10.0), "rgb(127, 185, 72)");
        assert_eq!(risk_color(20.0), "rgb(239, 185, 16)");
        assert_eq!(risk_color(45.0), "rgb(242, 171, 16)");
        assert_eq!(risk_color(70.0), "rgb(245, 158, 16)");
        assert_eq!(risk_color(85.0), "rgb(232, 147, 16)");
        assert_eq!(risk_color(100.0), "rgb(220, 136, 16)");
    }

    #[test]
    fn test_color_channels_clamped() {
        assert_eq!(risk_color(-40.0), "rgb(0, 185, 255)");
    }
}
