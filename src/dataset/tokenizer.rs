//! Quote-aware line tokenizer
//!
//! Splits one raw line of the catalogue export into its fields. A field may be
//! wrapped in double quotes, in which case commas inside it are literal and a
//! doubled quote (`""`) stands for one quote character. Every emitted field is
//! trimmed, and empty positions are kept so column indices stay aligned.
//!
//! The tokenizer never fails. Unterminated quotes run to the end of the line
//! and text following a closing quote is appended to the same field.

use std::iter::Peekable;
use std::str::Chars;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Split a single line (without its trailing newline) into fields.
///
/// ```
/// use playstats::dataset::tokenizer::tokenize;
///
/// assert_eq!(tokenize(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
/// assert_eq!(tokenize("A,,B"), vec!["A", "", "B"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        fields.push(read_field(&mut chars));
        match chars.next() {
            Some(DELIMITER) => continue,
            _ => break,
        }
    }

    fields
}

/// Read one field, leaving the iterator on the delimiter that ended it (if any).
fn read_field(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut leading = String::new();
    while let Some(&c) = chars.peek() {
        if c == DELIMITER || !c.is_whitespace() {
            break;
        }
        leading.push(c);
        chars.next();
    }

    if chars.peek() == Some(&QUOTE) {
        chars.next();
        read_quoted(chars)
    } else {
        let mut raw = leading;
        read_until_delimiter(chars, &mut raw);
        raw.replace("\"\"", "\"").trim().to_string()
    }
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut value = String::new();

    while let Some(c) = chars.next() {
        if c != QUOTE {
            value.push(c);
            continue;
        }
        if chars.peek() == Some(&QUOTE) {
            chars.next();
            value.push(QUOTE);
            continue;
        }
        // Closing quote. Anything left before the next delimiter is malformed
        // input and stays in this field.
        let mut trailing = String::new();
        read_until_delimiter(chars, &mut trailing);
        value.push_str(&trailing.replace("\"\"", "\""));
        break;
    }

    value.trim().to_string()
}

fn read_until_delimiter(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while let Some(&c) = chars.peek() {
        if c == DELIMITER {
            break;
        }
        out.push(c);
        chars.next();
    }
}
