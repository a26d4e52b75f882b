//! Flags accepted by the demo.

use tagflags::Flags;

/// Greeting configuration bound to the command line.
#[derive(Debug, Flags)]
pub struct GreetConfig {
    #[tag(flag = "salutation", shorthand = 's', description = "Word to greet with")]
    pub salutation: String,
    #[tag(
        flag = "recipient",
        alias = "to",
        description = "People to greet; repeat the flag or separate names with commas"
    )]
    pub recipients: Vec<String>,
    #[tag(flag = "excited", shorthand = 'x', description = "Finish with an exclamation mark")]
    pub excited: bool,
    #[tag(flag = "repeat", nooptdef = 2, description = "Print the greeting this many times")]
    pub repeat: u8,
    #[tag(recurse)]
    pub style: Style,
}

/// Presentation options, registered from a nested struct.
#[derive(Debug, Default, Flags)]
pub struct Style {
    #[tag(flag = "shout", shorthand = 'u', description = "Upper-case the whole greeting")]
    pub shout: bool,
    #[tag(flag = "punctuation", deprecated = "use --excited instead")]
    pub punctuation: String,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            salutation: "Hello".to_owned(),
            recipients: vec!["World".to_owned()],
            excited: false,
            repeat: 1,
            style: Style::default(),
        }
    }
}
