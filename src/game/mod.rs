// Public API
pub use cards::{Card, Rank, Suit};
pub use deck::Deck;
pub use errors::GameError;
pub use logic::{apply_outcome, resolve_round, Guess, Outcome, ROUND_STAKE, STARTING_MONEY};
pub use session::{FlipOutcome, GameSession, RoundPhase, RoundResult};

// Internal modules
pub mod cards;
mod deck;
mod errors;
mod logic;
mod session;
