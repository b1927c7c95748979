//! Per-community worker: the only code that ever touches a `ChainModel`.

use mimic_chain::ChainModel;
use mimic_core::{ChainStats, CommunityId, KnowledgeBase, MimicResult};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Operations queued on a community's mailbox.
pub enum Command {
    Ingest {
        text: String,
    },
    Generate {
        seed: Vec<String>,
        reply: oneshot::Sender<String>,
    },
    Remove {
        term: String,
        reply: oneshot::Sender<u64>,
    },
    Render {
        reply: oneshot::Sender<MimicResult<String>>,
    },
    Snapshot {
        reply: oneshot::Sender<KnowledgeBase>,
    },
    Stats {
        reply: oneshot::Sender<ChainStats>,
    },
    Replace {
        model: Box<ChainModel>,
        reply: oneshot::Sender<()>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Ingest { .. } => "ingest",
            Command::Generate { .. } => "generate",
            Command::Remove { .. } => "remove",
            Command::Render { .. } => "render",
            Command::Snapshot { .. } => "snapshot",
            Command::Stats { .. } => "stats",
            Command::Replace { .. } => "replace",
        }
    }
}

/// Drain the mailbox until every sender is gone. Replies to callers that
/// stopped waiting are discarded.
pub async fn run(community: CommunityId, mut model: ChainModel, mut mailbox: mpsc::Receiver<Command>) {
    info!(%community, "worker started");
    while let Some(command) = mailbox.recv().await {
        debug!(%community, op = command.name(), "worker: handling");
        match command {
            Command::Ingest { text } => model.ingest(&text),
            Command::Generate { seed, reply } => {
                let _ = reply.send(model.generate(&seed));
            }
            Command::Remove { term, reply } => {
                let removed = model.remove(&term);
                info!(%community, term = %term, removed, "term pruned");
                let _ = reply.send(removed);
            }
            Command::Render { reply } => {
                let _ = reply.send(model.render());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(model.knowledge_base());
            }
            Command::Stats { reply } => {
                let _ = reply.send(model.stats());
            }
            Command::Replace { model: next, reply } => {
                model = *next;
                info!(%community, stats = ?model.stats(), "model replaced");
                let _ = reply.send(());
            }
        }
    }
    info!(%community, "worker stopped");
}
