// ABOUTME: Agent model registry
// ABOUTME: JSON-backed per-agent model, preview and reasoning-effort capabilities with pure lookups

mod document;
pub mod error;
pub mod registry;
pub mod selection;
pub mod types;
pub mod validation;

pub use error::{ConsistencyIssue, RegistryError, SelectionError};
pub use registry::{ModelRegistry, AGENTS_JSON, REGISTRY};
pub use selection::{AgentSelection, StoredSelection};
pub use types::{
    AgentModelDefinition, AgentModelOption, ParseReasoningEffortError, ReasoningEffort,
    ReasoningEffortOption,
};
