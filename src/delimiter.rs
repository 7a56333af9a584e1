//! Delimiter candidates and heuristic detection

use std::fmt;

/// Field delimiter, one of the four fixed candidates
///
/// Declaration order is the tie-break priority order used by [`detect`]:
/// comma beats tab beats semicolon beats pipe when counts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `,` (CSV)
    #[default]
    Comma,
    /// Tab character (spreadsheet paste / TSV)
    Tab,
    /// `;` (common in locales where comma is the decimal separator)
    Semicolon,
    /// `|`
    Pipe,
}

impl Delimiter {
    /// All candidates, in tie-break priority order
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    /// The delimiter character itself
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
        }
    }

    /// Map a character back to a candidate, if it is one
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            ';' => Some(Delimiter::Semicolon),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }

    /// Human-readable label for status lines
    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma",
            Delimiter::Tab => "Tab",
            Delimiter::Semicolon => "Semicolon",
            Delimiter::Pipe => "Pipe",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Infer the delimiter from raw pasted text
///
/// Takes the first non-blank line as the sample and counts each candidate
/// outside quoted regions. A double quote toggles quoted state; a doubled
/// quote `""` is an escaped literal and does not toggle. The strictly
/// highest count wins; ties resolve to the earlier candidate in
/// [`Delimiter::CANDIDATES`] order. If nothing matches (or the input has no
/// non-blank line), the answer is comma. Total function, never fails.
pub fn detect(text: &str) -> Delimiter {
    let sample = match text.lines().find(|line| !line.trim().is_empty()) {
        Some(line) => line,
        None => return Delimiter::default(),
    };

    let mut best = Delimiter::default();
    let mut best_count = 0usize;
    for candidate in Delimiter::CANDIDATES {
        let count = count_unquoted(sample, candidate.as_char());
        if count > best_count {
            best_count = count;
            best = candidate;
        }
    }
    best
}

/// Count occurrences of `target` outside quoted regions of a single line
fn count_unquoted(line: &str, target: char) -> usize {
    let mut count = 0;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if chars.peek() == Some(&'"') {
                // Escaped literal quote, no state change
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if !in_quotes && ch == target {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma() {
        assert_eq!(detect("a,b,c\nd,e,f"), Delimiter::Comma);
    }

    #[test]
    fn test_detect_tab() {
        assert_eq!(detect("a\tb\tc"), Delimiter::Tab);
    }

    #[test]
    fn test_detect_semicolon() {
        assert_eq!(detect("a;b;c"), Delimiter::Semicolon);
    }

    #[test]
    fn test_detect_pipe() {
        assert_eq!(detect("a|b|c"), Delimiter::Pipe);
    }

    #[test]
    fn test_empty_input_defaults_to_comma() {
        assert_eq!(detect(""), Delimiter::Comma);
    }

    #[test]
    fn test_blank_lines_only_defaults_to_comma() {
        assert_eq!(detect("\n  \n\t\n"), Delimiter::Comma);
    }

    #[test]
    fn test_no_delimiter_defaults_to_comma() {
        assert_eq!(detect("just one field"), Delimiter::Comma);
    }

    #[test]
    fn test_skips_leading_blank_lines() {
        assert_eq!(detect("\n\n a;b;c"), Delimiter::Semicolon);
    }

    #[test]
    fn test_quoted_delimiters_not_counted() {
        // One unquoted comma on the sample line; the comma inside the
        // quoted field must not be counted.
        assert_eq!(count_unquoted(r#""a,b",c"#, ','), 1);
        assert_eq!(detect("\"a,b\",c\nd,e,f"), Delimiter::Comma);
    }

    #[test]
    fn test_escaped_quote_keeps_quote_state() {
        // "" inside quotes does not close the region, so both commas
        // after it are still quoted.
        assert_eq!(count_unquoted(r#""say ""hi"", twice",x"#, ','), 1);
    }

    #[test]
    fn test_tie_resolves_by_priority() {
        // One comma, one semicolon: comma wins by candidate order.
        assert_eq!(detect("a,b;c"), Delimiter::Comma);
    }

    #[test]
    fn test_strictly_higher_count_wins() {
        assert_eq!(detect("a;b;c,d"), Delimiter::Semicolon);
    }

    #[test]
    fn test_char_round_trip() {
        for candidate in Delimiter::CANDIDATES {
            assert_eq!(Delimiter::from_char(candidate.as_char()), Some(candidate));
        }
        assert_eq!(Delimiter::from_char('x'), None);
    }
}
