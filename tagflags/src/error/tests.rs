//! Unit tests for error classification and rendering.

use clap::{Command, error::ErrorKind};
use rstest::rstest;

use super::{ConvertError, CsvError, FlagError, is_display_request};

fn build_error(kind: ErrorKind) -> clap::Error {
    Command::new("demo").error(kind, "demo output")
}

#[rstest]
#[case(ErrorKind::DisplayHelp)]
#[case(ErrorKind::DisplayVersion)]
fn recognises_display_requests(#[case] kind: ErrorKind) {
    let err = build_error(kind);
    assert!(is_display_request(&err));
    assert!(FlagError::from(err).is_display_request());
}

#[rstest]
#[case(ErrorKind::UnknownArgument)]
#[case(ErrorKind::InvalidValue)]
fn rejects_regular_errors(#[case] kind: ErrorKind) {
    let err = build_error(kind);
    assert!(!is_display_request(&err));
    assert!(!FlagError::from(err).is_display_request());
}

#[test]
fn invalid_argument_names_flag_and_value() {
    let err = FlagError::InvalidArgument {
        flag: "alpha".into(),
        value: "ten".into(),
        source: ConvertError::invalid("ten", "not a number"),
    };
    assert_eq!(
        err.to_string(),
        "invalid argument \"ten\" for \"--alpha\" flag: invalid value 'ten': not a number"
    );
    assert!(!err.is_display_request());
}

#[test]
fn csv_errors_convert_into_conversion_errors() {
    let err = ConvertError::from(CsvError::Quote { column: 4 });
    assert_eq!(
        err.to_string(),
        "malformed list: extraneous or missing \" in quoted-field at column 4"
    );
}
