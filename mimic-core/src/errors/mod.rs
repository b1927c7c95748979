pub mod export_error;
pub mod knowledge_error;
pub mod mimic_error;

pub use export_error::ExportError;
pub use knowledge_error::KnowledgeBaseError;
pub use mimic_error::{MimicError, MimicResult};
