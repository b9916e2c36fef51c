use super::model::{Observation, ObservationSet};

/// Characters treated as line boundaries.
///
/// Besides `\n` / `\r`, PDF text extraction emits form feeds between pages and
/// the occasional Unicode line or paragraph separator.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Parse a single line into an [`Observation`].
///
/// Returns `None` when the line has no colon. The key is everything before
/// the first colon, the value everything after it; both are trimmed.
pub fn parse_line(line: &str) -> Option<Observation> {
    let (key, value) = line.split_once(':')?;
    Some(Observation {
        key: key.trim().to_string(),
        raw_value: value.trim().to_string(),
    })
}

/// Split raw text into an [`ObservationSet`].
///
/// Later lines win on duplicate keys. Text without any colon yields an empty
/// set.
pub fn tokenize(text: &str) -> ObservationSet {
    let set: ObservationSet = text.split(is_line_break).filter_map(parse_line).collect();
    log::debug!("tokenized {} observation(s)", set.len());
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colon_yields_empty_set() {
        assert!(tokenize("hello world").is_empty());
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n  \n").is_empty());
    }

    #[test]
    fn test_key_and_value_are_trimmed() {
        let set = tokenize("  Revenue :  $1,234.5 growth  \nNotes: strong quarter");
        assert_eq!(set.get("Revenue"), Some("$1,234.5 growth"));
        assert_eq!(set.get("Notes"), Some("strong quarter"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_value_keeps_further_colons() {
        let set = tokenize("Meeting: 10:30 at HQ: room 4");
        assert_eq!(set.get("Meeting"), Some("10:30 at HQ: room 4"));
    }

    #[test]
    fn test_last_write_wins() {
        let set = tokenize("A: 1\nA: 2");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("A"), Some("2"));
    }

    #[test]
    fn test_handles_crlf_and_form_feed() {
        let set = tokenize("A: 1\r\nB: 2\u{0c}C: 3");
        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(set.get("A"), Some("1"));
    }

    #[test]
    fn test_no_case_normalization() {
        let set = tokenize("Total: 1\ntotal: 2");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_key_is_kept() {
        let set = tokenize(": orphan value");
        assert_eq!(set.get(""), Some("orphan value"));
    }
}
