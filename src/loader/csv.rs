//! CSV parsing for table files
//!
//! Small domain parser: quoted fields, doubled quotes inside quoted fields,
//! embedded commas and newlines inside quotes, CRLF and LF line endings.
//! No external CSV dependency; table files are small and the dialect is
//! fixed.

/// Split CSV content into rows of fields.
///
/// Returns `Err` with a human-readable reason on an unterminated quoted
/// field. Blank lines between rows are dropped; a trailing newline does not
/// produce an empty row.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, String> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // True once the current row has seen any content, so "a,b\n" yields
    // two fields but "\n" yields none.
    let mut row_started = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                c => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                row_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' => {
                // Consumed as part of CRLF; a bare CR is treated the same
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if row_started || !field.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                row_started = false;
            }
            '\n' => {
                if row_started || !field.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                row_started = false;
            }
            c => {
                field.push(c);
                row_started = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    if row_started || !field.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let rows = parse_rows("a,b,c\nd,e,f\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_quoted_comma_and_newline() {
        let rows = parse_rows("code,desc\n1,\"jam, at door\nsecond line\"\n").unwrap();
        assert_eq!(rows[1], vec!["1", "jam, at door\nsecond line"]);
    }

    #[test]
    fn test_doubled_quotes() {
        let rows = parse_rows("a\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(rows[1], vec!["say \"hi\""]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d\r\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_empty_field() {
        let rows = parse_rows("a,\n").unwrap();
        assert_eq!(rows, vec![vec!["a", ""]]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(parse_rows("a,\"oops\n").is_err());
    }

    #[test]
    fn test_no_trailing_newline() {
        let rows = parse_rows("a,b").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }
}
