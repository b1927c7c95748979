//! Gateway event handling.

use std::sync::Arc;

use mimic_core::config::CommandsConfig;
use mimic_core::{CommunityId, IExportSink, MimicError, MimicResult};
use mimic_observability::{command_span, ingest_span};
use mimic_registry::ModelRegistry;
use tracing::{debug, info, warn, Instrument};

use crate::command::{parse_command, ChatCommand};
use crate::message::IncomingMessage;
use crate::replies;

/// Routes gateway events to the registry and builds replies.
pub struct Bot<S> {
    registry: Arc<ModelRegistry>,
    sink: S,
    commands: CommandsConfig,
    user_id: u64,
}

impl<S: IExportSink> Bot<S> {
    /// `user_id` is the bot's own account, used to recognise mention prefixes.
    pub fn new(registry: Arc<ModelRegistry>, sink: S, commands: CommandsConfig, user_id: u64) -> Self {
        Self {
            registry,
            sink,
            commands,
            user_id,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// A guild became available. Returns whether it was newly onboarded.
    pub fn on_guild_available(&self, guild: CommunityId) -> bool {
        self.registry.add_guild(guild)
    }

    /// Handle one message. Plain messages are learned and produce no reply;
    /// commands produce the text to send back.
    pub async fn on_message(&self, message: &IncomingMessage) -> MimicResult<Option<String>> {
        if message.author_is_bot {
            return Ok(None);
        }

        let Some(body) = self.command_body(message) else {
            self.registry
                .ingest(message.guild, message.content.as_str())
                .instrument(ingest_span!(message.guild))
                .await?;
            return Ok(None);
        };

        let name = body.split_whitespace().next().unwrap_or_default();
        if self.commands.is_disabled(name) {
            debug!(guild = %message.guild, command = name, "disabled command invoked");
            return Ok(Some(replies::DISABLED_COMMAND_REPLY.to_string()));
        }

        match parse_command(body) {
            Ok(command) => {
                let span = command_span!(message.guild, command.name());
                self.execute(message, command).instrument(span).await.map(Some)
            }
            Err(e) => {
                debug!(guild = %message.guild, error = %e, "command rejected");
                Ok(Some(e.to_string()))
            }
        }
    }

    async fn execute(&self, message: &IncomingMessage, command: ChatCommand) -> MimicResult<String> {
        let guild = message.guild;
        match command {
            ChatCommand::Chat => Ok(or_cannot(self.registry.generate(guild, &[]).await?)),
            ChatCommand::ChatAbout { words } => {
                Ok(or_cannot(self.registry.generate(guild, &words).await?))
            }
            ChatCommand::Remove { term } => {
                if self.commands.admin_id != Some(message.author) {
                    info!(%guild, author = message.author, "non-admin tried to remove a term");
                    return Ok(replies::contact_admin(&self.commands.admin_contact));
                }
                let removed = self.registry.remove(guild, &term).await?;
                Ok(replies::removed(&term, removed))
            }
            ChatCommand::Knowledge => match self.registry.export(guild, &self.sink).await {
                Ok(url) => Ok(replies::knowledge_base(&url)),
                Err(MimicError::ExternalService(e)) => {
                    warn!(%guild, error = %e, "knowledge base upload failed");
                    Ok(replies::EXPORT_FAILED_REPLY.to_string())
                }
                Err(e) => Err(e),
            },
        }
    }

    /// The text after the guild's trigger or a leading mention of the bot.
    fn command_body<'a>(&self, message: &'a IncomingMessage) -> Option<&'a str> {
        let content = message.content.as_str();
        let trigger = self.commands.trigger_for(message.guild.0);
        if let Some(body) = content.strip_prefix(trigger) {
            return Some(body);
        }

        let rest = content.strip_prefix("<@")?;
        let rest = rest.strip_prefix('!').unwrap_or(rest);
        let rest = rest.strip_prefix(self.user_id.to_string().as_str())?;
        let rest = rest.strip_prefix('>')?;
        rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
    }
}

fn or_cannot(generated: String) -> String {
    if generated.is_empty() {
        replies::EMPTY_GENERATION_REPLY.to_string()
    } else {
        generated
    }
}
