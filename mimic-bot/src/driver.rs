//! Line protocol: one `<guild> <author> <text>` message per line.

use std::io::Write;

use mimic_core::{CommunityId, IExportSink};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::bot::Bot;
use crate::message::IncomingMessage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected `<guild> <author> <text>`")]
    MissingFields,
    #[error("invalid {field} id {value:?}")]
    BadId { field: &'static str, value: String },
}

pub fn parse_line(line: &str) -> Result<IncomingMessage, LineError> {
    let mut parts = line.splitn(3, ' ');
    let (Some(guild), Some(author)) = (parts.next(), parts.next()) else {
        return Err(LineError::MissingFields);
    };
    let id = |field: &'static str, value: &str| {
        value.parse::<u64>().map_err(|_| LineError::BadId {
            field,
            value: value.to_string(),
        })
    };
    Ok(IncomingMessage::new(
        CommunityId(id("guild", guild)?),
        id("author", author)?,
        parts.next().unwrap_or_default(),
    ))
}

/// Feed every line of `input` to `bot`, onboarding guilds on first sight,
/// and write replies to `output`. A failing message is logged and skipped so
/// one community's trouble never stops the others; only I/O errors end the
/// loop.
pub async fn run<S, R, W>(bot: &Bot<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: IExportSink,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let message = match parse_line(&line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "skipping input line");
                continue;
            }
        };
        bot.on_guild_available(message.guild);
        match bot.on_message(&message).await {
            Ok(Some(reply)) => writeln!(output, "{reply}")?,
            Ok(None) => {}
            Err(e) => warn!(guild = %message.guild, error = %e, "message dropped"),
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_messages() {
        let message = parse_line("3 9 hello  there").unwrap();
        assert_eq!(message.guild, CommunityId(3));
        assert_eq!(message.author, 9);
        assert_eq!(message.content, "hello  there");
        assert_eq!(parse_line("3 9").unwrap().content, "");
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!(parse_line("hello"), Err(LineError::MissingFields));
        assert!(matches!(
            parse_line("x 9 hi"),
            Err(LineError::BadId { field: "guild", .. })
        ));
        assert!(matches!(
            parse_line("3 me hi"),
            Err(LineError::BadId { field: "author", .. })
        ));
    }
}
