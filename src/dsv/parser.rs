//! DSV parsing with RFC 4180-like behavior, delimiter-parameterized

use crate::delimiter::Delimiter;
use crate::types::{ParsedTable, Record};

/// Quote-aware parser turning raw pasted text into a [`ParsedTable`]
///
/// Tokenization rules:
/// - A field may be quoted with `"`. Inside quotes, `""` is an escaped
///   literal quote; everything else (delimiter, newlines) is content.
/// - Outside quotes, the delimiter ends the field, `\n` ends the row,
///   and `\r` is dropped so both `\n` and `\r\n` line endings work.
/// - End of input closes the last field and row, unless the input ended
///   with a trailing newline leaving a single empty field.
///
/// The first remaining row is the header; blank header cells get the
/// synthetic name `col_<n>` (1-based). Data rows are trimmed, padded with
/// empty strings up to the header width, extras discarded, and rows that
/// are entirely blank dropped. Never fails: worst case the result is empty.
pub struct DsvParser {
    delimiter: char,
}

impl DsvParser {
    /// Create a parser for the given delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.as_char(),
        }
    }

    /// Parse raw text into a header and records
    pub fn parse(&self, text: &str) -> ParsedTable {
        let mut rows = self.tokenize(text);

        // Drop trailing rows that are entirely empty
        while rows
            .last()
            .is_some_and(|row| row.iter().all(String::is_empty))
        {
            rows.pop();
        }
        if rows.is_empty() {
            return ParsedTable::default();
        }

        let header: Vec<String> = rows[0]
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    format!("col_{}", i + 1)
                } else {
                    trimmed.to_string()
                }
            })
            .collect();

        let records: Vec<Record> = rows[1..]
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(|row| {
                // Duplicate header names collapse last-write-wins here
                header
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let value = row.get(i).map(|cell| cell.trim()).unwrap_or("");
                        (name.clone(), value.to_string())
                    })
                    .collect()
            })
            .collect();

        ParsedTable { header, records }
    }

    /// Split raw text into rows of raw (untrimmed) fields
    fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(ch);
                }
            } else if ch == '"' {
                in_quotes = true;
            } else if ch == self.delimiter {
                row.push(std::mem::take(&mut field));
            } else if ch == '\n' {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            } else if ch != '\r' {
                field.push(ch);
            }
        }

        // Implicit end of the last field and row, unless the input ended
        // with a newline and produced nothing more.
        row.push(field);
        if row.len() > 1 || !row[0].is_empty() {
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedTable {
        DsvParser::new(Delimiter::Comma).parse(text)
    }

    #[test]
    fn test_simple() {
        let table = parse("a,b\n1,2\n3,4");
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0]["a"], "1");
        assert_eq!(table.records[1]["b"], "4");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), ParsedTable::default());
        assert_eq!(parse("\n\n"), ParsedTable::default());
    }

    #[test]
    fn test_quoted_delimiter() {
        let table = parse("name,note\n\"Doe, Jane\",ok");
        assert_eq!(table.records[0]["name"], "Doe, Jane");
    }

    #[test]
    fn test_escaped_quotes() {
        let table = parse("q\n\"say \"\"hi\"\"\"");
        assert_eq!(table.records[0]["q"], r#"say "hi""#);
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        let table = parse("a,b\n\"line1\nline2\",x");
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0]["a"], "line1\nline2");
        assert_eq!(table.records[0]["b"], "x");
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("a,b\r\n1,2\r\n");
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0]["b"], "2");
    }

    #[test]
    fn test_trailing_blank_lines_dropped() {
        let with = parse("a,b\n1,2\n\n\n");
        let without = parse("a,b\n1,2");
        assert_eq!(with, without);
    }

    #[test]
    fn test_blank_interior_row_dropped() {
        let table = parse("a,b\n1,2\n,\n3,4");
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1]["a"], "3");
    }

    #[test]
    fn test_header_synthesis() {
        let table = parse(",\"Last Name\"\nAda,Lovelace");
        assert_eq!(table.header, vec!["col_1", "Last Name"]);
        assert_eq!(table.records[0]["col_1"], "Ada");
        assert_eq!(table.records[0]["Last Name"], "Lovelace");
    }

    #[test]
    fn test_whitespace_only_header_cell_synthesized() {
        let table = parse("  ,b\n1,2");
        assert_eq!(table.header, vec!["col_1", "b"]);
    }

    #[test]
    fn test_short_row_padded() {
        let table = parse("a,b,c\n1,2");
        assert_eq!(table.records[0]["c"], "");
    }

    #[test]
    fn test_long_row_extras_discarded() {
        let table = parse("a,b\n1,2,3,4");
        assert_eq!(table.records[0].len(), 2);
        assert_eq!(table.records[0]["b"], "2");
    }

    #[test]
    fn test_values_trimmed() {
        let table = parse("a,b\n  1  , 2 ");
        assert_eq!(table.records[0]["a"], "1");
        assert_eq!(table.records[0]["b"], "2");
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let table = parse("a,b,c");
        assert_eq!(table.header, vec!["a", "b", "c"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_header_last_write_wins() {
        let table = parse("x,x\n1,2");
        assert_eq!(table.header, vec!["x", "x"]);
        assert_eq!(table.records[0].len(), 1);
        assert_eq!(table.records[0]["x"], "2");
    }

    #[test]
    fn test_tab_delimiter() {
        let table = DsvParser::new(Delimiter::Tab).parse("a\tb\n1\t2");
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.records[0]["b"], "2");
    }
}
