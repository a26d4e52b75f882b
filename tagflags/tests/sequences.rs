//! Behavioural tests for sequence flags fed CSV records.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use tagflags::{ConvertError, CsvError, FlagError, Flags, create_flagset};

#[derive(Default, Flags)]
struct Lists {
    #[tag(flag = "name", alias = "n")]
    names: Vec<String>,
    #[tag(flag = "port")]
    ports: Vec<u16>,
}

fn defaults() -> Lists {
    Lists {
        names: vec!["default".into()],
        ports: vec![80],
    }
}

#[rstest]
#[case::single(&["--name", "a"], &["a"])]
#[case::record(&["--name", "a,b"], &["a", "b"])]
#[case::accumulates(&["--name", "a", "--n", "b,c"], &["a", "b", "c"])]
#[case::quoted(&["--name", "\"x,y\",z"], &["x,y", "z"])]
#[case::escaped_quote(&["--name", "\"say \"\"hi\"\"\""], &["say \"hi\""])]
#[case::untouched(&[], &["default"])]
fn records_replace_then_accumulate(#[case] args: &[&str], #[case] expected: &[&str]) -> Result<()> {
    let mut config = defaults();
    let mut flags = create_flagset(&mut config);
    flags.parse(args.iter().copied())?;
    drop(flags);
    ensure!(config.names == expected, "names were {:?}", config.names);
    Ok(())
}

#[rstest]
fn rendered_value_quotes_fields_that_need_it() -> Result<()> {
    let mut config = defaults();
    let mut flags = create_flagset(&mut config);
    flags.parse(["--name", "\"a,b\",c"])?;
    let rendered = flags
        .lookup("name")
        .map(tagflags::Flag::value_string)
        .ok_or_else(|| anyhow!("name missing"))?;
    ensure!(rendered == "[\"a,b\",c]", "rendered {rendered}");
    Ok(())
}

#[rstest]
#[case::bare_quote("ab\"c", CsvError::BareQuote { column: 3 })]
#[case::unterminated("\"abc", CsvError::Quote { column: 5 })]
fn malformed_records_leave_the_field_alone(
    #[case] raw: &str,
    #[case] expected: CsvError,
) -> Result<()> {
    let mut config = defaults();
    let mut flags = create_flagset(&mut config);
    let err = flags
        .parse(["--name", raw])
        .err()
        .ok_or_else(|| anyhow!("expected a malformed record"))?;
    ensure!(
        matches!(&err, FlagError::InvalidArgument { source: ConvertError::Csv(csv), .. } if *csv == expected),
        "unexpected error {err:?}"
    );
    ensure!(!flags.changed("name"));
    drop(flags);
    ensure!(config.names == ["default"]);
    Ok(())
}

#[rstest]
fn a_bad_element_rejects_the_whole_record() -> Result<()> {
    let mut config = defaults();
    let mut flags = create_flagset(&mut config);
    ensure!(flags.parse(["--port", "8080,http"]).is_err());
    drop(flags);
    ensure!(config.ports == [80]);
    Ok(())
}
