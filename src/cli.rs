use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::controller::Outcome;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(version)]
#[command(about = "Translate text into a chosen language from the terminal")]
pub struct Cli {
    /// Settings file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive translator (default)
    Ui,

    /// Translate once and print the result
    Translate {
        /// Target language by display name, e.g. "French"
        #[arg(short, long, value_name = "LANGUAGE")]
        to: String,

        /// Print the chosen font on stderr
        #[arg(long)]
        show_font: bool,

        /// Text to translate
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the supported target languages
    Languages,

    /// Write a settings file with the default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Process exit code for `translate`: 0 on success, 1 when the backend
/// failed, 2 when the input was rejected.
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Translated => 0,
        Outcome::Failed => 1,
        Outcome::Rejected => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ui() {
        let cli = Cli::parse_from(["lingo"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn parses_translate() {
        let cli = Cli::parse_from(["lingo", "translate", "--to", "French", "good", "morning"]);
        match cli.command {
            Some(Command::Translate { to, text, show_font }) => {
                assert_eq!(to, "French");
                assert_eq!(text.join(" "), "good morning");
                assert!(!show_font);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn exit_code_follows_outcome() {
        assert_eq!(exit_code(Outcome::Translated), 0);
        assert_eq!(exit_code(Outcome::Failed), 1);
        assert_eq!(exit_code(Outcome::Rejected), 2);
    }

    #[test]
    fn translate_needs_text() {
        assert!(Cli::try_parse_from(["lingo", "translate", "--to", "French"]).is_err());
    }
}
