pub mod chain_stats;
pub mod community;
pub mod knowledge_base;

pub use chain_stats::ChainStats;
pub use community::CommunityId;
pub use knowledge_base::{KnowledgeBase, TransitionRecord};
