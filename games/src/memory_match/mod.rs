mod deck;
mod game_state;
mod session;
mod settings;
mod types;

pub use deck::Deck;
pub use game_state::MemoryMatchGameState;
pub use session::{MemoryMatchSession, MemoryMatchSessionState};
pub use settings::{CARD_SYMBOLS, DECK_SIZE, GRID_WIDTH, MISMATCH_DELAY_MS, PAIR_COUNT};
pub use types::{Card, CardFace, FlipOutcome};
