//! Validation of untrusted request bodies into normalized simulation
//! requests.
//!
//! Validation is fail-fast: each check short-circuits and the first failing
//! field produces the error the caller sees.

use serde_json::Value;
use shared::{CoinFace, DieFace, EventType, RunCount, Target, ValidationError};

use crate::domain::SimulationRequest;

const REQUIRED_FIELDS: [&str; 3] = ["event_type", "num_runs", "odds_parameters"];

/// Validate and normalize an untrusted request body.
pub fn validate_request(body: &Value) -> Result<SimulationRequest, ValidationError> {
    let fields = match body.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::EmptyBody),
    };

    if !REQUIRED_FIELDS.iter().all(|field| fields.contains_key(*field)) {
        return Err(ValidationError::MissingFields);
    }

    let num_runs = coerce_integer(&fields["num_runs"]).ok_or(ValidationError::RunsNotAnInteger)?;
    let num_runs = RunCount::try_from(num_runs)?;

    let event_type = fields["event_type"]
        .as_str()
        .ok_or(ValidationError::UnknownEventType)?
        .parse::<EventType>()?;

    let raw_target = &fields["odds_parameters"];
    let target = match event_type {
        EventType::CoinFlip => {
            let face = coerce_string(raw_target)
                .ok_or(ValidationError::InvalidCoinTarget)?
                .parse::<CoinFace>()?;
            Target::Coin(face)
        }
        EventType::DiceRoll => {
            // Non-integer input and an out-of-range face share one message
            let face = coerce_integer(raw_target)
                .ok_or(ValidationError::InvalidDieTarget)
                .and_then(DieFace::try_from)?;
            Target::Die(face)
        }
        EventType::CardDeck => {
            let name = raw_target
                .as_str()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(ValidationError::InvalidCardTarget)?;
            Target::Card(name.to_string())
        }
    };

    Ok(SimulationRequest {
        event_type,
        num_runs,
        target,
        raw_target: raw_target.clone(),
    })
}

/// Coerce a JSON value to an integer the way a permissive cast would:
/// integers pass through, floats truncate toward zero, numeric strings parse.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON scalar to its string form; arrays, objects and null have no
/// string form.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
