//! Text codec for waveform files
//!
//! The format is one sample per line, two whitespace-separated numbers:
//!
//! ```text
//! 0.1 0.5
//! -0.2 0.3
//! ```
//!
//! The first number is the column minimum, the second the maximum.
//! Blank lines are ignored when parsing.

use crate::error::{WaveformError, WaveformResult};
use crate::types::Sample;

/// Number of tokens expected on every non-blank line
const TOKENS_PER_LINE: usize = 2;

/// Parse waveform text into samples
///
/// Fails with [`WaveformError::InvalidFormat`] on the first line that does not
/// hold exactly two finite numbers, and with [`WaveformError::Empty`] when no
/// sample survives.
pub fn parse_waveform(text: &str) -> WaveformResult<Vec<Sample>> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_line(line, idx + 1)?);
    }

    if samples.is_empty() {
        return Err(WaveformError::Empty);
    }

    log::debug!("parse_waveform: {} samples", samples.len());
    Ok(samples)
}

fn parse_line(line: &str, line_no: usize) -> WaveformResult<Sample> {
    let invalid = || WaveformError::InvalidFormat { line: line_no };

    let mut values = [0.0f32; TOKENS_PER_LINE];
    let mut count = 0;
    for token in line.split_whitespace() {
        if count == TOKENS_PER_LINE {
            return Err(invalid());
        }
        let value: f32 = token.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        values[count] = value;
        count += 1;
    }

    if count != TOKENS_PER_LINE {
        return Err(invalid());
    }
    Ok(Sample::new(values[0], values[1]))
}

/// Serialize samples back to waveform text, one `"<min> <max>\n"` line each
///
/// Uses the shortest representation that parses back to the same `f32`.
pub fn serialize_samples(samples: &[Sample]) -> String {
    let mut out = String::with_capacity(samples.len() * 16);
    for sample in samples {
        out.push_str(&format!("{} {}\n", sample.min, sample.max));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_lines() {
        let samples = parse_waveform("0.1 0.5\n-0.2 0.3\n").unwrap();
        assert_eq!(samples, vec![Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let samples = parse_waveform("\n  \n0.1 0.5\n\n\t\n-1 1\n").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1], Sample::new(-1.0, 1.0));
    }

    #[test]
    fn test_mixed_whitespace_and_crlf() {
        let samples = parse_waveform("0.1\t 0.5\r\n  -0.2   0.3  \r\n").unwrap();
        assert_eq!(samples, vec![Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)]);
    }

    #[test]
    fn test_single_token_is_invalid() {
        let err = parse_waveform("1.0\n").unwrap_err();
        assert!(matches!(err, WaveformError::InvalidFormat { line: 1 }));
        assert_eq!(err.to_string(), "Invalid waveform data format");
    }

    #[test]
    fn test_three_tokens_is_invalid() {
        let err = parse_waveform("0.1 0.2\n0.1 0.2 0.3\n").unwrap_err();
        assert!(matches!(err, WaveformError::InvalidFormat { line: 2 }));
    }

    #[test]
    fn test_unparseable_number_is_invalid() {
        let err = parse_waveform("0.1 abc\n").unwrap_err();
        assert!(matches!(err, WaveformError::InvalidFormat { line: 1 }));
    }

    #[test]
    fn test_non_finite_number_is_invalid() {
        assert!(parse_waveform("NaN 0.5\n").is_err());
        assert!(parse_waveform("0.1 inf\n").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_waveform(""), Err(WaveformError::Empty)));
        let err = parse_waveform("\n   \n\n").unwrap_err();
        assert_eq!(err.to_string(), "Waveform data is empty");
    }

    #[test]
    fn test_serialize_format() {
        let text = serialize_samples(&[Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)]);
        assert_eq!(text, "0.1 0.5\n-0.2 0.3\n");
    }

    #[test]
    fn test_serialize_then_parse_recovers_samples() {
        let original: Vec<Sample> = (0..64)
            .map(|i| {
                let t = i as f32 / 63.0;
                Sample::new(-(t * 0.731).sin(), (t * 1.913).cos() * 0.77)
            })
            .collect();
        let parsed = parse_waveform(&serialize_samples(&original)).unwrap();
        assert_eq!(parsed, original);
    }
}
