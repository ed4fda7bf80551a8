//! Trial execution: runs the requested number of independent draws and
//! aggregates them into a result record.

use rand::seq::SliceRandom;
use rand::Rng;

use shared::{standard_deck, CoinFace, EventType, Target, DIE_FACES};

use crate::domain::{SimulationRequest, SimulationResult};

/// Closed-form probability of the target outcome under a fair model.
pub fn theoretical_probability(event_type: EventType) -> f64 {
    match event_type {
        EventType::CoinFlip => 0.5,
        EventType::DiceRoll => 1.0 / 6.0,
        EventType::CardDeck => 1.0 / 52.0,
    }
}

/// Run `num_runs` independent trials against the request target.
///
/// The engine has no failure path: a normalized request cannot take it out
/// of bounds. Callers inject the random source; production uses
/// `rand::thread_rng()`, tests a seeded `StdRng`.
pub fn run_simulation<R: Rng>(request: &SimulationRequest, rng: &mut R) -> SimulationResult {
    let total_runs = request.num_runs.as_u32();
    let mut success_count = 0u32;

    for _ in 0..total_runs {
        if trial_matches(&request.target, rng) {
            success_count += 1;
        }
    }

    // Guard kept even though RunCount makes zero unrepresentable
    let empirical_probability = if total_runs == 0 {
        0.0
    } else {
        round6(f64::from(success_count) / f64::from(total_runs))
    };

    SimulationResult {
        event_type: request.event_type,
        total_runs,
        target_outcome: request.raw_target.clone(),
        success_count,
        failure_count: total_runs - success_count,
        empirical_probability,
        theoretical_probability: round6(theoretical_probability(request.event_type)),
    }
}

/// One independent draw, compared against the target outcome.
fn trial_matches<R: Rng>(target: &Target, rng: &mut R) -> bool {
    match target {
        Target::Coin(face) => {
            let flip = if rng.gen::<f64>() < 0.5 {
                CoinFace::Heads
            } else {
                CoinFace::Tails
            };
            flip == *face
        }
        Target::Die(face) => rng.gen_range(1..=DIE_FACES) == face.as_u8(),
        Target::Card(name) => standard_deck()
            .choose(rng)
            .map_or(false, |card| card.eq_ignore_ascii_case(name)),
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
