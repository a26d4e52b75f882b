//! Tests for the single-record CSV codec.

use rstest::rstest;

use super::{read_record, write_record};
use crate::CsvError;

#[rstest]
#[case("a", &["a"])]
#[case("a,b,c", &["a", "b", "c"])]
#[case("a,b,", &["a", "b", ""])]
#[case(",a", &["", "a"])]
#[case(" a , b", &[" a ", " b"])]
#[case("\"x,y\",z", &["x,y", "z"])]
#[case("\"say \"\"hi\"\"\"", &["say \"hi\""])]
#[case("\"two\nlines\",b", &["two\nlines", "b"])]
#[case("\n\nfirst,second\nthird", &["first", "second"])]
#[case("a,b\r\n", &["a", "b"])]
#[case("\"\"", &[""])]
fn reads_first_record(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(read_record(input), Ok(expected.iter().map(|s| (*s).to_owned()).collect()));
}

#[rstest]
#[case("", CsvError::Empty)]
#[case("\n\r\n", CsvError::Empty)]
#[case("ab\"c", CsvError::BareQuote { column: 3 })]
#[case("\"abc", CsvError::Quote { column: 5 })]
#[case("\"ab\"c", CsvError::Quote { column: 5 })]
fn rejects_malformed_records(#[case] input: &str, #[case] expected: CsvError) {
    assert_eq!(read_record(input), Err(expected));
}

#[rstest]
#[case(&[], "")]
#[case(&["a", "b"], "a,b")]
#[case(&["x,y", "z"], "\"x,y\",z")]
#[case(&["say \"hi\""], "\"say \"\"hi\"\"\"")]
#[case(&[" padded"], "\" padded\"")]
#[case(&["", "b"], ",b")]
fn writes_records(#[case] fields: &[&str], #[case] expected: &str) {
    assert_eq!(write_record(fields), expected);
}

#[test]
fn written_records_read_back() {
    let fields = ["plain", "with,comma", "with \"quote\"", "multi\nline"];
    let encoded = write_record(fields);
    assert_eq!(
        read_record(&encoded),
        Ok(fields.iter().map(|s| (*s).to_owned()).collect())
    );
}
