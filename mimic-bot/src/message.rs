use mimic_core::CommunityId;

/// A message as delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub guild: CommunityId,
    pub author: u64,
    pub author_is_bot: bool,
    pub content: String,
}

impl IncomingMessage {
    pub fn new(guild: impl Into<CommunityId>, author: u64, content: impl Into<String>) -> Self {
        Self {
            guild: guild.into(),
            author,
            author_is_bot: false,
            content: content.into(),
        }
    }

    /// Mark the author as a bot account.
    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}
