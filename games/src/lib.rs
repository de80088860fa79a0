pub mod logger;
pub mod memory_match;
pub mod session_rng;
pub mod tictactoe;

pub use session_rng::SessionRng;
