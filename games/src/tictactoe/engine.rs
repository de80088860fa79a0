use super::game_state::TicTacToeGameState;
use super::types::MoveOutcome;

pub trait GameStateObserver: Send {
    fn on_state_changed(&mut self, state: &TicTacToeGameState);
}

pub struct TicTacToeEngine {
    state: TicTacToeGameState,
    observers: Vec<Box<dyn GameStateObserver>>,
}

impl Default for TicTacToeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeEngine {
    pub fn new() -> Self {
        Self {
            state: TicTacToeGameState::new(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameStateObserver>) {
        self.observers.push(observer);
    }

    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if !self.state.place_current_mark(index) {
            return MoveOutcome::Ignored;
        }

        if let Some(winner) = self.state.check_game_over() {
            self.notify_observers();
            return MoveOutcome::Won { winner };
        }

        let vanished = self.state.vanish_overflow();
        if vanished.is_some() {
            self.notify_observers();
        }

        self.state.switch_turn();
        self.notify_observers();

        match vanished {
            Some(cleared_index) => MoveOutcome::PlacedWithVanish { cleared_index },
            None => MoveOutcome::Placed,
        }
    }

    pub fn restart(&mut self) {
        self.state.reset();
        self.notify_observers();
    }

    fn notify_observers(&mut self) {
        for observer in &mut self.observers {
            observer.on_state_changed(&self.state);
        }
    }
}
