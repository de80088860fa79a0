use games::log;
use games::tictactoe::{
    FIELD_CELLS, FIELD_WIDTH, GameStateObserver, Mark, MoveOutcome, TicTacToeEngine,
    TicTacToeGameState,
};

use crate::config::TicTacToeConfig;
use crate::{InputLines, read_line};

struct ConsoleView {
    player_x_name: String,
    player_o_name: String,
}

impl ConsoleView {
    fn new(config: &TicTacToeConfig) -> Self {
        Self {
            player_x_name: config.player_x_name.clone(),
            player_o_name: config.player_o_name.clone(),
        }
    }

    fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player_o_name,
            _ => &self.player_x_name,
        }
    }

    fn render(&self, state: &TicTacToeGameState) {
        let vanishing = state.vanishing_cell();
        println!();
        for row in 0..FIELD_WIDTH {
            let mut line = String::new();
            for col in 0..FIELD_WIDTH {
                let index = row * FIELD_WIDTH + col;
                let cell = match state.board()[index] {
                    Mark::X => 'X',
                    Mark::O => 'O',
                    Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                };
                if vanishing == Some(index) {
                    line.push('(');
                    line.push(cell);
                    line.push(')');
                } else {
                    line.push(' ');
                    line.push(cell);
                    line.push(' ');
                }
                if col + 1 < FIELD_WIDTH {
                    line.push('|');
                }
            }
            println!("{}", line);
            if row + 1 < FIELD_WIDTH {
                println!("---+---+---");
            }
        }

        match state.winner() {
            Some(winner) => println!("{} wins!", self.player_name(winner)),
            None => println!(
                "{}'s turn ({})",
                self.player_name(state.current_mark()),
                mark_char(state.current_mark())
            ),
        }
    }
}

impl GameStateObserver for ConsoleView {
    fn on_state_changed(&mut self, state: &TicTacToeGameState) {
        self.render(state);
    }
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
        Mark::Empty => ' ',
    }
}

pub async fn run(config: &TicTacToeConfig, input: &mut InputLines) {
    let mut engine = TicTacToeEngine::new();
    let view = ConsoleView::new(config);
    view.render(engine.state());
    engine.add_observer(Box::new(view));

    log!(
        "Tic-tac-toe started: {} vs {}",
        config.player_x_name,
        config.player_o_name
    );
    println!("Enter a cell number (1-{}), r to restart, q to leave the game.", FIELD_CELLS);
    println!("The mark in (parentheses) vanishes with its owner's next move.");

    while let Some(line) = read_line(input).await {
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => engine.restart(),
            "" => {}
            cell => match cell.parse::<usize>() {
                Ok(number) if (1..=FIELD_CELLS).contains(&number) => {
                    if engine.apply_move(number - 1) == MoveOutcome::Ignored {
                        println!("Cell {} is not available.", number);
                    }
                }
                _ => println!(
                    "Enter a cell number (1-{}), r to restart, q to leave the game.",
                    FIELD_CELLS
                ),
            },
        }
    }
}
