pub mod constants;
pub mod deck;
pub mod types;

pub use constants::*;
pub use deck::*;
pub use types::*;
