//! Free-text command parsing.

/// The operation a user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Show,
    Lock,
    Unlock,
    Help,
    /// Any first token that is not a known subcommand.
    Unrecognized,
}

impl Subcommand {
    fn parse(token: &str) -> Self {
        match token {
            "show" => Subcommand::Show,
            "lock" => Subcommand::Lock,
            "unlock" => Subcommand::Unlock,
            "help" => Subcommand::Help,
            _ => Subcommand::Unrecognized,
        }
    }
}

/// A parsed command line. Lives only for the duration of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub subcommand: Subcommand,
    pub resource: Option<String>,
}

impl Command {
    /// Parse the free text following the slash-command name.
    ///
    /// Splits on whitespace into `[subcommand, resource]`; tokens beyond the
    /// second are ignored. Empty or missing text is not an error — it parses
    /// to `Help` with no resource.
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let subcommand = match tokens.next() {
            Some(token) => Subcommand::parse(token),
            None => Subcommand::Help,
        };
        let resource = tokens.next().map(str::to_string);
        Command {
            subcommand,
            resource,
        }
    }
}
