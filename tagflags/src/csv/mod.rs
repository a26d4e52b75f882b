//! Single-record CSV codec for sequence-valued flags.
//!
//! Each occurrence of a sequence flag carries one comma-separated record.
//! Fields may be wrapped in double quotes to embed commas, newlines, or
//! quotes (written as `""`). Reading stops after the first record; blank
//! leading lines are skipped and `\r\n` is treated as `\n`.

use std::iter::Peekable;
use std::str::Chars;

use crate::CsvError;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// How a field was terminated.
enum FieldEnd {
    Delimiter,
    Record,
}

struct RecordReader<'a> {
    chars: Peekable<Chars<'a>>,
    column: usize,
}

impl<'a> RecordReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.chars.next();
        match next {
            Some('\n') => self.column = 1,
            Some(_) => self.column += 1,
            None => {}
        }
        next
    }

    fn skip_blank_lines(&mut self) {
        while self.chars.next_if_eq(&'\n').is_some() {}
    }

    fn read_record(&mut self) -> Result<Vec<String>, CsvError> {
        self.skip_blank_lines();
        if self.chars.peek().is_none() {
            return Err(CsvError::Empty);
        }
        let mut record = Vec::new();
        loop {
            let mut field = String::new();
            let end = if self.chars.peek() == Some(&QUOTE) {
                self.bump();
                self.read_quoted(&mut field)?
            } else {
                self.read_bare(&mut field)?
            };
            record.push(field);
            if matches!(end, FieldEnd::Record) {
                return Ok(record);
            }
        }
    }

    fn read_bare(&mut self, field: &mut String) -> Result<FieldEnd, CsvError> {
        loop {
            let column = self.column;
            match self.bump() {
                Some(DELIMITER) => return Ok(FieldEnd::Delimiter),
                Some('\n') | None => return Ok(FieldEnd::Record),
                Some(QUOTE) => return Err(CsvError::BareQuote { column }),
                Some(c) => field.push(c),
            }
        }
    }

    fn read_quoted(&mut self, field: &mut String) -> Result<FieldEnd, CsvError> {
        loop {
            match self.bump() {
                Some(QUOTE) => match self.chars.peek() {
                    Some(&QUOTE) => {
                        self.bump();
                        field.push(QUOTE);
                    }
                    Some(&DELIMITER) => {
                        self.bump();
                        return Ok(FieldEnd::Delimiter);
                    }
                    Some('\n') | None => {
                        self.bump();
                        return Ok(FieldEnd::Record);
                    }
                    Some(_) => {
                        return Err(CsvError::Quote {
                            column: self.column,
                        });
                    }
                },
                Some(c) => field.push(c),
                None => {
                    return Err(CsvError::Quote {
                        column: self.column,
                    });
                }
            }
        }
    }
}

/// Decodes the first CSV record in `input`.
///
/// # Errors
///
/// Returns [`CsvError::Empty`] when `input` holds only blank lines,
/// [`CsvError::BareQuote`] for a quote inside an unquoted field, and
/// [`CsvError::Quote`] for an unterminated quoted field or text following a
/// closing quote.
pub(crate) fn read_record(input: &str) -> Result<Vec<String>, CsvError> {
    let normalized = input.replace("\r\n", "\n");
    RecordReader::new(&normalized).read_record()
}

fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    if field == r"\." {
        return true;
    }
    field.contains([DELIMITER, QUOTE, '\r', '\n'])
        || field.chars().next().is_some_and(char::is_whitespace)
}

/// Encodes `fields` as a single CSV record without a trailing newline.
pub(crate) fn write_record<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            out.push(DELIMITER);
        }
        let text = field.as_ref();
        if needs_quotes(text) {
            out.push(QUOTE);
            for c in text.chars() {
                if c == QUOTE {
                    out.push(QUOTE);
                }
                out.push(c);
            }
            out.push(QUOTE);
        } else {
            out.push_str(text);
        }
    }
    out
}

#[cfg(test)]
mod tests;
