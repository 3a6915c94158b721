//! Console command parsing.

use std::path::PathBuf;

use crate::antenna::Field;

/// Help text listing the console commands.
pub const HELP: &str = "\
Commands:
  set <field> <value>   Edit an input field (frequency|f, permittivity|er,
                        height|h, impedance|z0, gamma|g)
  show                  Show the current input fields
  calculate | calc      Calculate and display the design
  export [path]         Write the displayed report to a file
  reset                 Clear all fields and the displayed report
  help                  Show this help
  quit | exit           Leave the console";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Edit one input field.
    Set {
        /// Field to edit.
        field: Field,
        /// New text for the field.
        value: String,
    },
    /// Print the input fields.
    Show,
    /// Run a calculation.
    Calculate,
    /// Export the displayed report, optionally to a specific path.
    Export(Option<PathBuf>),
    /// Clear fields and report.
    Reset,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_lowercase().as_str() {
            "set" => Self::parse_set(rest),
            "show" => Ok(Self::Show),
            "calculate" | "calc" => Ok(Self::Calculate),
            "export" => Ok(Self::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command '{word}'. Type 'help' for a list of commands."
            )),
        }
    }

    fn parse_set(args: &str) -> Result<Self, String> {
        const USAGE: &str = "Usage: set <field> <value>";

        let Some((name, value)) = args.split_once(char::is_whitespace) else {
            return Err(USAGE.to_string());
        };
        let field = Field::from_str_loose(name)
            .ok_or_else(|| format!("Unknown field '{name}'. {USAGE}"))?;

        Ok(Self::Set {
            field,
            value: value.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("calc"), Ok(Command::Calculate));
        assert_eq!(Command::parse("  CALCULATE "), Ok(Command::Calculate));
        assert_eq!(Command::parse("show"), Ok(Command::Show));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_set() {
        assert_eq!(
            Command::parse("set f 5.8"),
            Ok(Command::Set {
                field: Field::Frequency,
                value: "5.8".to_string()
            })
        );
        assert_eq!(
            Command::parse("set gamma   0.1"),
            Ok(Command::Set {
                field: Field::ReflectionCoefficient,
                value: "0.1".to_string()
            })
        );
    }

    #[test]
    fn parse_set_errors() {
        assert!(Command::parse("set").is_err());
        assert!(Command::parse("set f").is_err());
        assert!(Command::parse("set width 3").unwrap_err().contains("Unknown field"));
    }

    #[test]
    fn parse_export() {
        assert_eq!(Command::parse("export"), Ok(Command::Export(None)));
        assert_eq!(
            Command::parse("export out/design.txt"),
            Ok(Command::Export(Some(PathBuf::from("out/design.txt"))))
        );
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("simulate").unwrap_err();
        assert!(err.contains("Unknown command 'simulate'"));
    }
}
