use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::{ClassifiedObservations, DescriptiveObservation, NumericObservation, ObservationSet};

lazy_static! {
    /// Optional sign, then a decimal with a fractional part or a bare integer.
    static ref RE_STRICT: Regex = Regex::new(r"[-+]?(?:[0-9]*\.[0-9]+|[0-9]+)").unwrap();

    /// Same as `RE_STRICT`, but comma-grouped thousands count as one numeral.
    static ref RE_GROUPED: Regex = Regex::new(
        r"[-+]?(?:[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?|[0-9]*\.[0-9]+|[0-9]+)"
    ).unwrap();
}

/// How numerals are recognised inside a raw value.
///
/// Both rules take the leftmost match and ignore any later numerals.
/// `Strict` is the plain leftmost-match behaviour and silently truncates
/// grouped figures; `Grouped` is the default and reads them whole. Pick
/// `Strict` to reproduce results from tools that extract the first bare
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralRule {
    /// Thousands separators end a numeral: `"$1,234.5"` reads as `1`.
    Strict,
    /// `"$1,234.5"` reads as `1234.5`; the commas are dropped before parsing.
    #[default]
    Grouped,
}

impl NumeralRule {
    fn regex(self) -> &'static Regex {
        match self {
            NumeralRule::Strict => &RE_STRICT,
            NumeralRule::Grouped => &RE_GROUPED,
        }
    }
}

/// Extract the leftmost numeral of `raw` as an `f64`.
///
/// Returns `None` when the value has no numeral. Very long digit runs parse
/// to infinity rather than failing.
pub fn extract_numeral(raw: &str, rule: NumeralRule) -> Option<f64> {
    let found = rule.regex().find(raw)?;
    let digits = found.as_str().replace(',', "");
    digits.parse::<f64>().ok()
}

/// Partition an [`ObservationSet`] into numeric and descriptive observations.
pub fn classify(set: &ObservationSet, rule: NumeralRule) -> ClassifiedObservations {
    let mut out = ClassifiedObservations::default();
    for (key, raw) in set.iter() {
        match extract_numeral(raw, rule) {
            Some(value) => out.numeric.push(NumericObservation::new(key, value)),
            None => out.descriptive.push(DescriptiveObservation {
                key: key.to_string(),
                value: raw.trim().to_string(),
            }),
        }
    }
    log::debug!(
        "classified {} numeric / {} descriptive observation(s)",
        out.numeric.len(),
        out.descriptive.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::tokenize;

    #[test]
    fn test_leftmost_numeral_wins() {
        assert_eq!(extract_numeral("12.5% up from 10%", NumeralRule::Strict), Some(12.5));
        assert_eq!(extract_numeral("$340M in Q3", NumeralRule::Grouped), Some(340.0));
        assert_eq!(extract_numeral("Q3 2024", NumeralRule::Grouped), Some(3.0));
    }

    #[test]
    fn test_sign_and_bare_fraction() {
        assert_eq!(extract_numeral("down -4.2 points", NumeralRule::Strict), Some(-4.2));
        assert_eq!(extract_numeral("-7 units", NumeralRule::Strict), Some(-7.0));
        assert_eq!(extract_numeral("+3", NumeralRule::Grouped), Some(3.0));
        assert_eq!(extract_numeral("about .75", NumeralRule::Strict), Some(0.75));
    }

    #[test]
    fn test_trailing_dot_falls_back_to_integer() {
        assert_eq!(extract_numeral("ends at 12.", NumeralRule::Strict), Some(12.0));
    }

    #[test]
    fn test_thousands_separator_by_rule() {
        assert_eq!(extract_numeral("$1,234.5 growth", NumeralRule::Strict), Some(1.0));
        assert_eq!(extract_numeral("$1,234.5 growth", NumeralRule::Grouped), Some(1234.5));
        assert_eq!(extract_numeral("10,000,000 users", NumeralRule::Grouped), Some(10_000_000.0));
        // Not a thousands group: only two digits after the comma.
        assert_eq!(extract_numeral("12,34", NumeralRule::Grouped), Some(12.0));
    }

    #[test]
    fn test_no_numeral_is_descriptive() {
        assert_eq!(extract_numeral("strong quarter", NumeralRule::Grouped), None);
        assert_eq!(extract_numeral("", NumeralRule::Strict), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numerals() {
        assert_eq!(extract_numeral("٣٤", NumeralRule::Grouped), None);
    }

    #[test]
    fn test_huge_integer_is_infinite() {
        let raw = "9".repeat(400);
        let value = extract_numeral(&raw, NumeralRule::Strict).unwrap();
        assert!(value.is_infinite());
    }

    #[test]
    fn test_classify_partitions_in_key_order() {
        let set = tokenize("Revenue: $1,234.5 growth\nNotes: strong quarter\nMargin: 12.5%");
        let classified = classify(&set, NumeralRule::Grouped);

        assert_eq!(
            classified.numeric,
            vec![
                NumericObservation::new("Revenue", 1234.5),
                NumericObservation::new("Margin", 12.5),
            ]
        );
        assert_eq!(
            classified.descriptive,
            vec![DescriptiveObservation {
                key: "Notes".to_string(),
                value: "strong quarter".to_string(),
            }]
        );
        assert_eq!(classified.len(), set.len());
    }
}
