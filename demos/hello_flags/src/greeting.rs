//! Greeting assembly.

use crate::config::GreetConfig;
use crate::error::{HelloFlagsError, Result};

/// Build the greeting line for `config`.
///
/// Positional arguments in `extra` are greeted after the configured
/// recipients.
///
/// # Errors
///
/// Returns [`HelloFlagsError::NoRecipients`] when every name is blank.
pub fn render(config: &GreetConfig, extra: &[String]) -> Result<String> {
    let names: Vec<&str> = config
        .recipients
        .iter()
        .chain(extra)
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .collect();
    let (last, rest) = names.split_last().ok_or(HelloFlagsError::NoRecipients)?;

    let who = if rest.is_empty() {
        (*last).to_owned()
    } else {
        format!("{} and {last}", rest.join(", "))
    };
    let punctuation = if config.excited {
        "!"
    } else if config.style.punctuation.is_empty() {
        "."
    } else {
        config.style.punctuation.as_str()
    };

    let line = format!("{}, {who}{punctuation}", config.salutation);
    Ok(if config.style.shout {
        line.to_uppercase()
    } else {
        line
    })
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use tagflags::FlagsetBuilder;

    use super::render;
    use crate::config::GreetConfig;
    use crate::error::HelloFlagsError;

    fn greet(args: &[&str]) -> Result<String> {
        let mut config = GreetConfig::default();
        let extra = FlagsetBuilder::new().parse(&mut config, args.iter().copied())?;
        Ok(render(&config, &extra)?)
    }

    #[rstest]
    #[case::defaults(&[], "Hello, World.")]
    #[case::salutation(&["-s", "Hi"], "Hi, World.")]
    #[case::list(&["--recipient", "Ada,Grace"], "Hello, Ada and Grace.")]
    #[case::alias_and_positional(&["--to", "Ada", "-x", "Linus"], "Hello, Ada and Linus!")]
    #[case::nested(&["--shout", "--punctuation", "?"], "HELLO, WORLD?")]
    #[case::three(&["--recipient", "a,b", "c"], "Hello, a, b and c.")]
    fn renders_greetings(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
        let line = greet(args)?;
        ensure!(line == expected, "rendered {line}");
        Ok(())
    }

    #[rstest]
    fn empty_recipients_are_reported() {
        let config = GreetConfig {
            recipients: Vec::new(),
            ..GreetConfig::default()
        };
        assert!(matches!(
            render(&config, &[]),
            Err(HelloFlagsError::NoRecipients)
        ));
    }
}
