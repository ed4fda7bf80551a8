/// Type-safe wrappers for simulation domain primitives
///
/// These types enforce validation at construction time so a normalized
/// request cannot carry an out-of-range value into the engine.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DIE_FACES, MAX_RUNS, MIN_RUNS};

/// Everything that can go wrong while normalizing a request.
///
/// The display strings are the exact messages returned to the caller in the
/// HTTP 400 body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body must contain variables")]
    EmptyBody,

    #[error("Missing required fields: event type, number of runs and odds parameters")]
    MissingFields,

    #[error("number of runs must be an integer")]
    RunsNotAnInteger,

    #[error("number of runs must be between {} and {}", MIN_RUNS, MAX_RUNS)]
    RunsOutOfRange,

    #[error("Invalid event type, must be one of: coin_flip, dice_roll, card_deck")]
    UnknownEventType,

    #[error("Coin flip odds parameters must be either heads or tails")]
    InvalidCoinTarget,

    #[error("Dice roll odds parameters must be an integer value between 1 and 6")]
    InvalidDieTarget,

    #[error("Card deck odds parameters must specify the card or characteristics e.g. King of Hearts")]
    InvalidCardTarget,
}

/// The closed set of random events the service can simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CoinFlip,
    DiceRoll,
    CardDeck,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::CoinFlip => "coin_flip",
            EventType::DiceRoll => "dice_roll",
            EventType::CardDeck => "card_deck",
        }
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coin_flip" => Ok(EventType::CoinFlip),
            "dice_roll" => Ok(EventType::DiceRoll),
            "card_deck" => Ok(EventType::CardDeck),
            _ => Err(ValidationError::UnknownEventType),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two outcomes of a fair coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl FromStr for CoinFace {
    type Err = ValidationError;

    /// Parse "heads"/"tails" in any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heads" => Ok(CoinFace::Heads),
            "tails" => Ok(CoinFace::Tails),
            _ => Err(ValidationError::InvalidCoinTarget),
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// A die face, constructible only for values in [1, 6]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieFace(u8);

impl DieFace {
    pub fn new(face: u8) -> Result<Self, ValidationError> {
        if face < 1 || face > DIE_FACES {
            return Err(ValidationError::InvalidDieTarget);
        }
        Ok(Self(face))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for DieFace {
    type Error = ValidationError;

    fn try_from(face: i64) -> Result<Self, Self::Error> {
        u8::try_from(face)
            .map_err(|_| ValidationError::InvalidDieTarget)
            .and_then(Self::new)
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated trial count in [MIN_RUNS, MAX_RUNS]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunCount(u32);

impl RunCount {
    pub fn new(runs: u32) -> Result<Self, ValidationError> {
        if runs < MIN_RUNS || runs > MAX_RUNS {
            return Err(ValidationError::RunsOutOfRange);
        }
        Ok(Self(runs))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for RunCount {
    type Error = ValidationError;

    fn try_from(runs: i64) -> Result<Self, Self::Error> {
        u32::try_from(runs)
            .map_err(|_| ValidationError::RunsOutOfRange)
            .and_then(Self::new)
    }
}

impl fmt::Display for RunCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller's target outcome, shaped by the event type
///
/// Card names are stored trimmed; the engine matches them against the deck
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Coin(CoinFace),
    Die(DieFace),
    Card(String),
}
