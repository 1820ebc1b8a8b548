//! Parsing of input lines into commands.

use crate::error::CommandError;
use std::str::FromStr;

/// Actions that end the session.
pub const EXIT_ACTIONS: [&str; 3] = ["goodbye", "close", "exit"];

/// A parsed user command.
///
/// Input is lowercased and split on whitespace before parsing, so names are
/// stored and looked up in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> <phone>...`
    Add { name: String, phones: Vec<String> },

    /// `change <name> <phone>`
    Change { name: String, phone: String },

    /// `phone <name>`
    Phone { name: String },

    /// `show all`
    ShowAll,

    /// `hello`
    Hello,

    /// `goodbye`, `close` or `exit`
    Exit,

    /// Anything else, including blank input
    Unknown,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.to_lowercase();
        let mut tokens = line.split_whitespace().map(str::to_string);
        let Some(action) = tokens.next() else {
            return Ok(Command::Unknown);
        };
        let args: Vec<String> = tokens.collect();

        match action.as_str() {
            "add" => match args.split_first() {
                Some((name, phones)) if !phones.is_empty() => Ok(Command::Add {
                    name: name.clone(),
                    phones: phones.to_vec(),
                }),
                _ => Err(CommandError::InvalidFormat {
                    command: "add",
                    expected: "a name and at least one phone number",
                }),
            },
            "change" => match <[String; 2]>::try_from(args) {
                Ok([name, phone]) => Ok(Command::Change { name, phone }),
                Err(_) => Err(CommandError::InvalidFormat {
                    command: "change",
                    expected: "a name and a new phone number",
                }),
            },
            "phone" => match args.into_iter().next() {
                Some(name) => Ok(Command::Phone { name }),
                None => Err(CommandError::InvalidFormat {
                    command: "phone",
                    expected: "a name",
                }),
            },
            "show" if args.first().map(String::as_str) == Some("all") => Ok(Command::ShowAll),
            "hello" => Ok(Command::Hello),
            a if EXIT_ACTIONS.contains(&a) => Ok(Command::Exit),
            _ => Ok(Command::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cmd: Command = "add John 1234567890 0987654321".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "john".to_string(),
                phones: vec!["1234567890".to_string(), "0987654321".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_add_requires_phone() {
        assert!(matches!(
            "add john".parse::<Command>(),
            Err(CommandError::InvalidFormat { command: "add", .. })
        ));
        assert!("add".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_change_requires_exactly_two_args() {
        assert_eq!(
            "change john 1234567890".parse::<Command>().unwrap(),
            Command::Change {
                name: "john".to_string(),
                phone: "1234567890".to_string(),
            }
        );
        assert!("change john".parse::<Command>().is_err());
        assert!("change john 1234567890 extra".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_phone() {
        assert_eq!(
            "PHONE john".parse::<Command>().unwrap(),
            Command::Phone {
                name: "john".to_string()
            }
        );
        assert!(matches!(
            "phone".parse::<Command>(),
            Err(CommandError::InvalidFormat {
                command: "phone",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_show_all() {
        assert_eq!("show all".parse::<Command>().unwrap(), Command::ShowAll);
        assert_eq!("  Show   ALL ".parse::<Command>().unwrap(), Command::ShowAll);
        assert_eq!("show".parse::<Command>().unwrap(), Command::Unknown);
        assert_eq!("show john".parse::<Command>().unwrap(), Command::Unknown);
    }

    #[test]
    fn test_parse_exit_family() {
        for input in ["goodbye", "close", "exit", "EXIT"] {
            assert_eq!(input.parse::<Command>().unwrap(), Command::Exit);
        }
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!("hello".parse::<Command>().unwrap(), Command::Hello);
        assert_eq!("delete john".parse::<Command>().unwrap(), Command::Unknown);
        assert_eq!("".parse::<Command>().unwrap(), Command::Unknown);
        assert_eq!("   ".parse::<Command>().unwrap(), Command::Unknown);
    }
}
