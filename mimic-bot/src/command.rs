//! Command grammar.
//!
//! ```text
//! chat
//! chat about <word>...
//! chatremove <term>
//! chatknowledge
//! ```

use thiserror::Error;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Chat,
    ChatAbout { words: Vec<String> },
    Remove { term: String },
    Knowledge,
}

impl ChatCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ChatCommand::Chat => "chat",
            ChatCommand::ChatAbout { .. } => "chat about",
            ChatCommand::Remove { .. } => "chatremove",
            ChatCommand::Knowledge => "chatknowledge",
        }
    }
}

/// Why a command body could not be parsed. The display text is sent back
/// to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command.")]
    Unknown,
    #[error("The input text has too few parameters.")]
    TooFewParameters,
    #[error("The input text has too many parameters.")]
    TooManyParameters,
}

/// Parse the text after the trigger prefix.
pub fn parse_command(body: &str) -> Result<ChatCommand, CommandError> {
    let mut words = body.split_whitespace();
    let name = words.next().ok_or(CommandError::Unknown)?;
    let args: Vec<&str> = words.collect();

    match name {
        "chat" => match args.split_first() {
            None => Ok(ChatCommand::Chat),
            Some((&"about", [])) => Err(CommandError::TooFewParameters),
            Some((&"about", rest)) => Ok(ChatCommand::ChatAbout {
                words: rest.iter().map(|w| w.to_string()).collect(),
            }),
            Some(_) => Err(CommandError::TooManyParameters),
        },
        "chatremove" => match args.as_slice() {
            [] => Err(CommandError::TooFewParameters),
            [term] => Ok(ChatCommand::Remove {
                term: term.to_string(),
            }),
            _ => Err(CommandError::TooManyParameters),
        },
        "chatknowledge" if args.is_empty() => Ok(ChatCommand::Knowledge),
        "chatknowledge" => Err(CommandError::TooManyParameters),
        _ => Err(CommandError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_command() {
        assert_eq!(parse_command("chat"), Ok(ChatCommand::Chat));
        assert_eq!(
            parse_command("chat about the  cat"),
            Ok(ChatCommand::ChatAbout {
                words: vec!["the".into(), "cat".into()]
            })
        );
        assert_eq!(
            parse_command("chatremove Cat"),
            Ok(ChatCommand::Remove { term: "Cat".into() })
        );
        assert_eq!(parse_command("chatknowledge"), Ok(ChatCommand::Knowledge));
    }

    #[test]
    fn rejects_bad_arity() {
        assert_eq!(parse_command("chat about"), Err(CommandError::TooFewParameters));
        assert_eq!(parse_command("chat loudly"), Err(CommandError::TooManyParameters));
        assert_eq!(parse_command("chatremove"), Err(CommandError::TooFewParameters));
        assert_eq!(parse_command("chatremove a b"), Err(CommandError::TooManyParameters));
        assert_eq!(parse_command("chatknowledge now"), Err(CommandError::TooManyParameters));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown));
        assert_eq!(parse_command("   "), Err(CommandError::Unknown));
        assert_eq!(parse_command("Chat"), Err(CommandError::Unknown));
    }
}
