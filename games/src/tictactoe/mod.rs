mod engine;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use engine::{GameStateObserver, TicTacToeEngine};
pub use game_state::TicTacToeGameState;
pub use settings::{FIELD_CELLS, FIELD_WIDTH, MAX_MARKS_PER_PLAYER};
pub use types::{GameStatus, Mark, MoveOutcome};
pub use win_detector::{WINNING_LINES, check_win};
