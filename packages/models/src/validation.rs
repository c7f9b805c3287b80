// ABOUTME: Startup consistency check for the agent model registry
// ABOUTME: Collects every default or model entry that would break selection at runtime

use std::collections::HashSet;

use tracing::warn;

use crate::error::ConsistencyIssue;
use crate::types::{AgentModelDefinition, AgentModelOption};

/// Check every agent definition. Advisory findings are logged, not returned.
pub fn check_consistency(agents: &[AgentModelDefinition]) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    let mut seen_agents = HashSet::new();

    for agent in agents {
        if !seen_agents.insert(agent.agent_id.as_str()) {
            issues.push(ConsistencyIssue::DuplicateAgent {
                agent_id: agent.agent_id.clone(),
            });
        }
        check_agent(agent, &mut issues);
    }

    issues
}

fn check_agent(agent: &AgentModelDefinition, issues: &mut Vec<ConsistencyIssue>) {
    let agent_id = &agent.agent_id;

    if !contains(&agent.models(false), &agent.default_model) {
        issues.push(ConsistencyIssue::DefaultModelMissing {
            agent_id: agent_id.clone(),
            model_id: agent.default_model.clone(),
        });
    }

    if let Some(preview_default) = &agent.default_preview_model {
        if !contains(&agent.models(true), preview_default) {
            issues.push(ConsistencyIssue::DefaultPreviewModelMissing {
                agent_id: agent_id.clone(),
                model_id: preview_default.clone(),
            });
        }
    }

    if agent.preview_models.is_some() && !agent.supports_preview() {
        warn!(
            "Agent {} declares preview models but no preview key; they can never be enabled",
            agent_id
        );
    }

    let mut seen_models = HashSet::new();
    for model in agent.models(true) {
        if !seen_models.insert(model.id.as_str()) {
            issues.push(ConsistencyIssue::DuplicateModel {
                agent_id: agent_id.clone(),
                model_id: model.id.clone(),
            });
        }
        check_model(agent_id, model, issues);
    }
}

fn check_model(agent_id: &str, model: &AgentModelOption, issues: &mut Vec<ConsistencyIssue>) {
    let Some(efforts) = &model.reasoning_efforts else {
        if let Some(effort) = model.default_reasoning_effort {
            issues.push(ConsistencyIssue::DefaultReasoningEffortMissing {
                agent_id: agent_id.to_string(),
                model_id: model.id.clone(),
                effort,
            });
        }
        return;
    };

    if efforts.is_empty() {
        issues.push(ConsistencyIssue::EmptyReasoningEfforts {
            agent_id: agent_id.to_string(),
            model_id: model.id.clone(),
        });
        return;
    }

    if let Some(effort) = model.default_reasoning_effort {
        if !model.offers_reasoning_effort(effort) {
            issues.push(ConsistencyIssue::DefaultReasoningEffortMissing {
                agent_id: agent_id.to_string(),
                model_id: model.id.clone(),
                effort,
            });
        }
    }

    let flagged_defaults = efforts.iter().filter(|e| e.is_default).count();
    if flagged_defaults != 1 {
        warn!(
            "Model {} of agent {} flags {} reasoning efforts as default (expected 1)",
            model.id, agent_id, flagged_defaults
        );
    }
}

fn contains(models: &[&AgentModelOption], model_id: &str) -> bool {
    models.iter().any(|m| m.id == model_id)
}
