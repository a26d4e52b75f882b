//! Behavioural tests for building and parsing through `FlagsetBuilder`.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use tagflags::{FieldInfo, Flags, FlagsetBuilder, create_flagset};

#[derive(Default, Flags)]
struct Network {
    #[tag(flag = "host", description = "server host")]
    host: String,
    #[tag(flag = "port", shorthand = 'p')]
    port: u16,
}

#[derive(Default, Flags)]
struct App {
    #[tag(flag = "alpha", description = "an int value")]
    alpha: i64,
    #[tag(flag = "-")]
    secret: String,
    #[tag(recurse)]
    network: Network,
    #[tag(flag = "help", description = "a user flag named help")]
    help: String,
}

#[rstest]
fn recursive_example_parses_every_level() -> Result<()> {
    let mut config = App::default();
    let rest = FlagsetBuilder::new().parse(
        &mut config,
        ["--alpha", "10", "--host", "example.org", "-p", "8080", "pos1", "pos2"],
    )?;
    ensure!(rest == ["pos1", "pos2"]);
    ensure!(config.alpha == 10);
    ensure!(config.network.host == "example.org");
    ensure!(config.network.port == 8080);
    Ok(())
}

#[rstest]
fn dash_named_fields_are_skipped() {
    let mut config = App::default();
    let flags = create_flagset(&mut config);
    assert!(flags.lookup("-").is_none());
    assert!(flags.lookup("secret").is_none());
    assert_eq!(flags.len(), 4);
}

#[rstest]
fn user_flag_named_help_takes_precedence() -> Result<()> {
    let mut config = App::default();
    FlagsetBuilder::new().parse(&mut config, ["--help", "me"])?;
    ensure!(config.help == "me");
    Ok(())
}

#[rstest]
fn help_output_lists_visible_flags() -> Result<()> {
    let mut config = Network::default();
    let builder = FlagsetBuilder::new().program_name("netd");
    let mut flags = builder.build(&mut config);
    let usage = flags.usage();
    ensure!(usage.contains("netd"), "usage was {usage}");
    ensure!(usage.contains("--host"), "usage was {usage}");
    ensure!(usage.contains("server host"), "usage was {usage}");
    ensure!(usage.contains("-p, --port"), "usage was {usage}");

    let err = flags
        .parse(["-h"])
        .err()
        .ok_or_else(|| anyhow!("expected a help request"))?;
    ensure!(err.is_display_request());
    Ok(())
}

#[rstest]
fn filter_sees_field_names_and_tags() -> Result<()> {
    let mut config = App::default();
    let builder = FlagsetBuilder::new()
        .set_filter(|field: &FieldInfo| !field.tags().contains("shorthand"));
    let flags = builder.build(&mut config);
    ensure!(flags.lookup("port").is_none());
    ensure!(flags.lookup("host").is_some());
    Ok(())
}

#[rstest]
fn parsing_no_arguments_keeps_defaults() -> Result<()> {
    let mut config = Network {
        host: "localhost".into(),
        port: 22,
    };
    let mut flags = create_flagset(&mut config);
    flags.parse(Vec::<String>::new())?;
    ensure!(flags.parsed());
    ensure!(flags.args().is_empty());
    ensure!(!flags.changed("host"));
    drop(flags);
    ensure!(config.host == "localhost" && config.port == 22);
    Ok(())
}
