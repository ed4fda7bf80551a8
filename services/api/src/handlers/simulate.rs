use axum::Json;
use serde_json::Value;

use crate::{
    domain::SimulationResult,
    errors::Result,
    extractors::RawJson,
    simulation::{run_simulation, validate_request},
};

pub async fn simulate(RawJson(body): RawJson<Value>) -> Result<Json<SimulationResult>> {
    let request = validate_request(&body)?;

    let span = tracing::info_span!(
        "simulate",
        event_type = %request.event_type,
        num_runs = %request.num_runs,
    );
    let _enter = span.enter();

    tracing::debug!(target_outcome = ?request.target, "Running simulation");

    let result = run_simulation(&request, &mut rand::thread_rng());

    tracing::info!(
        success_count = result.success_count,
        empirical_probability = result.empirical_probability,
        "Simulation completed"
    );
    metrics::counter!("simulations_total", "event_type" => request.event_type.as_str())
        .increment(1);

    Ok(Json(result))
}
