//! ModelRegistry — concurrent per-community routing via `DashMap`.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use mimic_chain::{ChainModel, ISamplingPolicy};
use mimic_core::config::{ChainConfig, MimicConfig, RegistryConfig};
use mimic_core::{ChainStats, CommunityId, IExportSink, KnowledgeBase, MimicError, MimicResult};
use mimic_observability::export_span;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn, Instrument};

use crate::worker::{self, Command};

/// Builds the sampling policy for each new community model.
pub type PolicyFactory = Arc<dyn Fn() -> Box<dyn ISamplingPolicy> + Send + Sync>;

struct WorkerHandle {
    mailbox: mpsc::Sender<Command>,
    task: JoinHandle<()>,
}

/// Registry of community chain models.
///
/// The map only stores mailbox handles. Its shard locks are held for a
/// lookup or insert and never across an await, so a busy community cannot
/// stall the others.
pub struct ModelRegistry {
    workers: DashMap<CommunityId, WorkerHandle>,
    chain: ChainConfig,
    registry: RegistryConfig,
    policy_factory: Option<PolicyFactory>,
}

impl ModelRegistry {
    pub fn new(config: &MimicConfig) -> Self {
        Self {
            workers: DashMap::new(),
            chain: config.chain.clone(),
            registry: config.registry.clone(),
            policy_factory: None,
        }
    }

    /// Use `factory` instead of the configured sampling kind for models
    /// created after this call.
    pub fn with_policy_factory(mut self, factory: PolicyFactory) -> Self {
        self.policy_factory = Some(factory);
        self
    }

    /// Onboard a community. Idempotent: returns `false` and leaves the existing
    /// model untouched if `community` is already known.
    ///
    /// Spawns the community's worker, so it must be called from within a Tokio
    /// runtime.
    pub fn add_guild(&self, community: CommunityId) -> bool {
        match self.workers.entry(community) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let (tx, rx) = mpsc::channel(self.registry.mailbox_capacity);
                let task = tokio::spawn(worker::run(community, self.new_model(), rx));
                slot.insert(WorkerHandle { mailbox: tx, task });
                info!(%community, "community onboarded");
                true
            }
        }
    }

    /// Queue a message for learning. Returns once the message is queued; any
    /// later operation on the same community observes it.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn ingest(&self, community: CommunityId, text: impl Into<String>) -> MimicResult<()> {
        let mailbox = self.mailbox(community)?;
        mailbox
            .send(Command::Ingest { text: text.into() })
            .await
            .map_err(|_| unavailable(community, "mailbox closed"))
    }

    /// Generate text, optionally continuing from `seed`. An empty string means
    /// the chain could not produce anything from that seed.
    #[instrument(skip(self))]
    pub async fn generate(&self, community: CommunityId, seed: &[String]) -> MimicResult<String> {
        let seed = seed.to_vec();
        self.request(community, |reply| Command::Generate { seed, reply })
            .await
    }

    /// Prune `term` from the community's model. Returns the number of
    /// occurrences removed.
    #[instrument(skip(self))]
    pub async fn remove(&self, community: CommunityId, term: &str) -> MimicResult<u64> {
        let term = term.to_string();
        self.request(community, |reply| Command::Remove { term, reply })
            .await
    }

    /// Render the community's knowledge base as text.
    #[instrument(skip(self))]
    pub async fn render(&self, community: CommunityId) -> MimicResult<String> {
        self.request(community, |reply| Command::Render { reply })
            .await?
    }

    /// Structured snapshot of the community's knowledge base.
    pub async fn snapshot(&self, community: CommunityId) -> MimicResult<KnowledgeBase> {
        self.request(community, |reply| Command::Snapshot { reply })
            .await
    }

    pub async fn stats(&self, community: CommunityId) -> MimicResult<ChainStats> {
        self.request(community, |reply| Command::Stats { reply })
            .await
    }

    /// Replace an onboarded community's model with one rebuilt from rendered
    /// text. Parsing happens before the worker is involved; operations queued
    /// earlier apply to the old model and are discarded with it.
    #[instrument(skip(self, rendered))]
    pub async fn restore(&self, community: CommunityId, rendered: &str) -> MimicResult<()> {
        let mailbox = self.mailbox(community)?;
        let model = match &self.policy_factory {
            Some(factory) => ChainModel::restore_with_policy(self.chain.clone(), factory(), rendered)?,
            None => ChainModel::restore(self.chain.clone(), rendered)?,
        };
        let (reply, rx) = oneshot::channel();
        mailbox
            .send(Command::Replace {
                model: Box::new(model),
                reply,
            })
            .await
            .map_err(|_| unavailable(community, "mailbox closed"))?;
        rx.await
            .map_err(|_| unavailable(community, "worker dropped the reply"))
    }

    /// Snapshot-then-publish: render inside the community's worker, then
    /// publish outside it so the network call never blocks that community.
    pub async fn export<S: IExportSink>(&self, community: CommunityId, sink: &S) -> MimicResult<String> {
        let rendered = self.render(community).await?;
        let bytes = rendered.len();
        async {
            match sink.publish(rendered).await {
                Ok(url) => {
                    info!(%url, bytes, "knowledge base exported");
                    Ok(url)
                }
                Err(e) => {
                    warn!(error = %e, "knowledge base export failed");
                    Err(MimicError::from(e))
                }
            }
        }
        .instrument(export_span!(community, sink.name()))
        .await
    }

    pub fn contains(&self, community: CommunityId) -> bool {
        self.workers.contains_key(&community)
    }

    /// Onboarded communities, in no particular order.
    pub fn communities(&self) -> Vec<CommunityId> {
        self.workers.iter().map(|r| *r.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Close every mailbox and wait for the workers to drain what was already
    /// queued. Communities must be onboarded again afterwards.
    pub async fn shutdown(&self) {
        let ids = self.communities();
        let mut tasks = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some((_, handle)) = self.workers.remove(&id) {
                drop(handle.mailbox);
                tasks.push((id, handle.task));
            }
        }
        for (community, task) in tasks {
            if let Err(e) = task.await {
                warn!(%community, error = %e, "worker ended abnormally");
            }
        }
        info!("registry shut down");
    }

    fn new_model(&self) -> ChainModel {
        match &self.policy_factory {
            Some(factory) => ChainModel::with_policy(self.chain.clone(), factory()),
            None => ChainModel::new(self.chain.clone()),
        }
    }

    /// Clone the community's mailbox handle without holding the map guard.
    fn mailbox(&self, community: CommunityId) -> MimicResult<mpsc::Sender<Command>> {
        self.workers
            .get(&community)
            .map(|h| h.mailbox.clone())
            .ok_or(MimicError::NotFound { community })
    }

    async fn request<T>(
        &self,
        community: CommunityId,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> MimicResult<T> {
        let mailbox = self.mailbox(community)?;
        let (reply, rx) = oneshot::channel();
        mailbox
            .send(make(reply))
            .await
            .map_err(|_| unavailable(community, "mailbox closed"))?;
        rx.await
            .map_err(|_| unavailable(community, "worker dropped the reply"))
    }
}

fn unavailable(community: CommunityId, reason: &str) -> MimicError {
    warn!(%community, reason, "community worker unavailable");
    MimicError::ConcurrencyViolation {
        community,
        reason: reason.to_string(),
    }
}
