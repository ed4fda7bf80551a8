use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{EventType, RunCount, Target};

/// A validated, normalized simulation request
///
/// Constructed only by the validator; the engine trusts every field.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub event_type: EventType,
    pub num_runs: RunCount,
    pub target: Target,
    /// The caller's odds_parameters exactly as submitted, echoed back in the
    /// result
    pub raw_target: Value,
}

/// Aggregated outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub event_type: EventType,
    pub total_runs: u32,
    pub target_outcome: Value,
    pub success_count: u32,
    pub failure_count: u32,
    pub empirical_probability: f64,
    pub theoretical_probability: f64,
}
