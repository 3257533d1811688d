//! Line parsing for frequency lists.

use crate::error::{FilterError, FilterResult};

/// One parsed input line: a word and its frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The word field, as spelled in the input.
    pub word: String,
    /// The frequency field, coerced to floating point.
    pub frequency: f64,
}

/// Parse a single input line into a [`Record`].
///
/// The line is trimmed, then split on tabs. Exactly two fields are required;
/// anything else is a fatal [`FilterError::MalformedLine`]. A word containing
/// any non-alphabetic character yields `Ok(None)` - the record is silently
/// excluded before the frequency field is even looked at. A frequency that
/// does not parse as `f64` is fatal.
pub fn parse_line(line_no: usize, raw: &str) -> FilterResult<Option<Record>> {
    let line = raw.trim();

    let mut fields = line.split('\t');
    let (Some(word), Some(freq_field), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(FilterError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    if !word.chars().all(char::is_alphabetic) {
        tracing::debug!(line = line_no, word, "skipping non-alphabetic word");
        return Ok(None);
    }

    let frequency: f64 = freq_field
        .parse()
        .map_err(|_| FilterError::InvalidFrequency {
            line: line_no,
            content: line.to_string(),
        })?;

    Ok(Some(Record {
        word: word.to_string(),
        frequency,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line() {
        let rec = parse_line(0, "three\t789").unwrap().unwrap();
        assert_eq!(rec.word, "three");
        assert_eq!(rec.frequency, 789.0);
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let rec = parse_line(0, "  three\t789\n").unwrap().unwrap();
        assert_eq!(rec.word, "three");
    }

    #[test]
    fn decimal_frequency() {
        let rec = parse_line(0, "three\t1.5").unwrap().unwrap();
        assert_eq!(rec.frequency, 1.5);
    }

    #[test]
    fn no_tab_is_malformed() {
        let err = parse_line(3, "badline").unwrap_err();
        match err {
            FilterError::MalformedLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "badline");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_tab_is_malformed() {
        assert!(matches!(
            parse_line(0, "a\tb\tc"),
            Err(FilterError::MalformedLine { .. })
        ));
    }

    #[test]
    fn empty_line_is_malformed() {
        assert!(matches!(
            parse_line(0, ""),
            Err(FilterError::MalformedLine { .. })
        ));
    }

    #[test]
    fn non_alphabetic_word_skipped() {
        assert!(parse_line(0, "four5\t9").unwrap().is_none());
    }

    #[test]
    fn non_alphabetic_word_skipped_before_frequency_check() {
        // The word check wins: a bad frequency behind a bad word is not fatal.
        assert!(parse_line(0, "four5\tnot-a-number").unwrap().is_none());
    }

    #[test]
    fn unparseable_frequency_is_fatal() {
        let err = parse_line(7, "three\tmany").unwrap_err();
        match err {
            FilterError::InvalidFrequency { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_display_names_line_and_content() {
        let err = parse_line(2, "a\tb\tc").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("a\\tb\\tc"));
    }
}
