/// Shared constants for the probability simulation service
///
/// Centralizes the simulation bounds so the validator, engine, and tests
/// agree on the same limits.

/// Minimum number of trials a single request may ask for
pub const MIN_RUNS: u32 = 1;

/// Maximum number of trials a single request may ask for
///
/// Caps the synchronous work done inside one request/response cycle.
pub const MAX_RUNS: u32 = 1000;

/// Number of faces on the simulated die
pub const DIE_FACES: u8 = 6;

/// Number of cards in the standard deck (13 ranks x 4 suits)
pub const DECK_SIZE: usize = 52;
