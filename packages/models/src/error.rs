// ABOUTME: Error types for registry loading, validation and selection changes
// ABOUTME: Lookups never fail; only construction and explicit transitions do

use std::fmt;

use thiserror::Error;

use crate::types::ReasoningEffort;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to parse registry document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model '{model_id}' of agent '{agent_id}' references unknown reasoning effort set '{set}'")]
    UnknownReasoningEffortSet {
        agent_id: String,
        model_id: String,
        set: String,
    },

    #[error("Registry is inconsistent:\n{}", format_issues(.0))]
    Inconsistent(Vec<ConsistencyIssue>),
}

fn format_issues(issues: &[ConsistencyIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A registry entry that would break model selection at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    DuplicateAgent {
        agent_id: String,
    },
    DefaultModelMissing {
        agent_id: String,
        model_id: String,
    },
    DefaultPreviewModelMissing {
        agent_id: String,
        model_id: String,
    },
    DuplicateModel {
        agent_id: String,
        model_id: String,
    },
    EmptyReasoningEfforts {
        agent_id: String,
        model_id: String,
    },
    DefaultReasoningEffortMissing {
        agent_id: String,
        model_id: String,
        effort: ReasoningEffort,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::DuplicateAgent { agent_id } => {
                write!(f, "{}: agent is defined more than once", agent_id)
            }
            ConsistencyIssue::DefaultModelMissing { agent_id, model_id } => write!(
                f,
                "{}: default model '{}' is not in the model list",
                agent_id, model_id
            ),
            ConsistencyIssue::DefaultPreviewModelMissing { agent_id, model_id } => write!(
                f,
                "{}: default preview model '{}' is not in the preview model list",
                agent_id, model_id
            ),
            ConsistencyIssue::DuplicateModel { agent_id, model_id } => {
                write!(f, "{}: model '{}' is defined more than once", agent_id, model_id)
            }
            ConsistencyIssue::EmptyReasoningEfforts { agent_id, model_id } => write!(
                f,
                "{}: model '{}' declares an empty reasoning effort list",
                agent_id, model_id
            ),
            ConsistencyIssue::DefaultReasoningEffortMissing {
                agent_id,
                model_id,
                effort,
            } => write!(
                f,
                "{}: default reasoning effort '{}' of model '{}' is not in its effort list",
                agent_id, effort, model_id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Agent '{agent_id}' has no model '{model_id}'")]
    UnknownModel { agent_id: String, model_id: String },

    #[error("Model '{model_id}' does not support reasoning effort '{effort}'")]
    UnsupportedReasoningEffort {
        model_id: String,
        effort: ReasoningEffort,
    },
}
