//! Tests for the generic value adapter.

use std::fmt;
use std::sync::Arc;

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};

use super::{GenericValue, Target, Value, type_name_of};
use crate::convert::{Converter, ConverterRegistry, FlagValue};
use crate::{ConvertError, CsvError};

#[fixture]
fn registry() -> ConverterRegistry {
    ConverterRegistry::with_builtins()
}

#[rstest]
fn scalar_set_replaces_value(registry: ConverterRegistry) -> Result<()> {
    let mut port = 80_u16;
    {
        let mut value = GenericValue::scalar(&mut port, &registry);
        ensure!(!value.changed());
        value.set("8080")?;
        value.set("9090")?;
        ensure!(value.changed());
        ensure!(value.to_string() == "9090");
        ensure!(value.type_name() == "u16");
    }
    ensure!(port == 9090);
    Ok(())
}

#[rstest]
fn scalar_failure_keeps_previous_value(registry: ConverterRegistry) {
    let mut port = 80_u16;
    let mut value = GenericValue::scalar(&mut port, &registry);
    assert!(matches!(value.set("http"), Err(ConvertError::Int { .. })));
    assert!(!value.changed());
    assert_eq!(value.to_string(), "80");
}

#[rstest]
fn first_sequence_set_replaces_default(registry: ConverterRegistry) -> Result<()> {
    let mut names = vec![String::from("defaultvalue")];
    {
        let mut value = GenericValue::sequence(&mut names, &registry);
        value.set("b")?;
        value.set("b2")?;
    }
    ensure!(names == ["b", "b2"], "unexpected sequence {names:?}");
    Ok(())
}

#[rstest]
fn sequence_set_decodes_one_record(registry: ConverterRegistry) -> Result<()> {
    let mut ids: Vec<i32> = Vec::new();
    {
        let mut value = GenericValue::sequence(&mut ids, &registry);
        value.set("1,2")?;
        value.set("3")?;
        ensure!(value.to_string() == "[1,2,3]");
        ensure!(value.type_name() == "i32Slice");
    }
    ensure!(ids == [1, 2, 3]);
    Ok(())
}

#[rstest]
#[case("4,x,5")]
#[case("\"4,5")]
#[case("")]
fn sequence_failure_leaves_target_untouched(registry: ConverterRegistry, #[case] raw: &str) -> Result<()> {
    let mut ids = vec![7_i32];
    {
        let mut value = GenericValue::sequence(&mut ids, &registry);
        value.set("1")?;
        ensure!(value.set(raw).is_err(), "expected {raw:?} to fail");
    }
    ensure!(ids == [1], "unexpected sequence {ids:?}");
    Ok(())
}

#[rstest]
fn failed_first_set_still_replaces_on_next_success(registry: ConverterRegistry) -> Result<()> {
    let mut ids = vec![7_i32];
    {
        let mut value = GenericValue::sequence(&mut ids, &registry);
        ensure!(value.set("oops").is_err());
        value.set("8")?;
    }
    ensure!(ids == [8]);
    Ok(())
}

#[rstest]
fn malformed_record_reports_csv_error(registry: ConverterRegistry) {
    let mut names: Vec<String> = Vec::new();
    let mut value = GenericValue::sequence(&mut names, &registry);
    assert_eq!(
        value.set("a\"b"),
        Err(ConvertError::Csv(CsvError::BareQuote { column: 2 }))
    );
}

#[rstest]
#[case(&[], "[]")]
#[case(&["a", "b"], "[a,b]")]
#[case(&["x,y"], "[\"x,y\"]")]
fn sequences_render_as_bracketed_csv(
    registry: ConverterRegistry,
    #[case] items: &[&str],
    #[case] expected: &str,
) {
    let mut names: Vec<String> = items.iter().map(|s| (*s).to_owned()).collect();
    let value = GenericValue::sequence(&mut names, &registry);
    assert_eq!(value.to_string(), expected);
}

#[derive(Debug, Default, PartialEq)]
struct Level(u8);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl FlagValue for Level {
    fn self_parser() -> Option<Converter<Self>> {
        Some(Arc::new(|raw: &str| {
            raw.strip_prefix('L')
                .and_then(|digits| digits.parse().ok())
                .map(Level)
                .ok_or_else(|| ConvertError::invalid(raw, "expected L<n>"))
        }))
    }

    fn type_name() -> Option<&'static str> {
        Some("level")
    }
}

#[test]
fn self_parsing_elements_skip_the_registry() -> Result<()> {
    let registry = ConverterRegistry::new();
    let mut levels = vec![Level(0)];
    {
        let mut value = GenericValue::sequence(&mut levels, &registry);
        value.set("L1,L2")?;
        ensure!(value.to_string() == "[L1,L2]");
        ensure!(value.type_name() == "levelSlice");
    }
    ensure!(levels == [Level(1), Level(2)]);
    Ok(())
}

#[test]
fn explicit_converter_overrides_resolution() -> Result<()> {
    let mut level = Level::default();
    {
        let converter: Converter<Level> = Arc::new(|_: &str| Ok(Level(9)));
        let mut value = GenericValue::with_converter(Target::Scalar(&mut level), converter);
        value.set("anything")?;
    }
    ensure!(level == Level(9));
    Ok(())
}

struct Unregistered;

impl fmt::Display for Unregistered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unregistered")
    }
}

impl FlagValue for Unregistered {}

#[test]
#[should_panic(expected = "no converter available for type")]
fn missing_converter_is_fatal() {
    let mut target = Unregistered;
    let _value = GenericValue::scalar(&mut target, &ConverterRegistry::with_builtins());
}

#[test]
fn type_names_use_sequence_suffix() {
    assert_eq!(type_name_of::<bool>(false), "bool");
    assert_eq!(type_name_of::<Level>(false), "level");
    assert_eq!(type_name_of::<f64>(true), "f64Slice");
}

#[rstest]
fn set_follows_the_target_shape(registry: ConverterRegistry) -> Result<()> {
    let mut single = 1_u8;
    let mut many = vec![1_u8];
    {
        let mut scalar = GenericValue::new(Target::Scalar(&mut single), &registry);
        let mut sequence = GenericValue::new(Target::Sequence(&mut many), &registry);
        scalar.set("2")?;
        scalar.set("3")?;
        sequence.set("2")?;
        sequence.set("3,4")?;
        ensure!(!scalar.is_sequence() && sequence.is_sequence());
        ensure!(scalar.changed() && sequence.changed());
    }
    ensure!(single == 3);
    ensure!(many == [2, 3, 4]);
    Ok(())
}
