use games::log;
use games::memory_match::{
    CardFace, DECK_SIZE, FlipOutcome, GRID_WIDTH, MemoryMatchSession, MemoryMatchSessionState,
    PAIR_COUNT,
};

use crate::config::MemoryMatchConfig;
use crate::{InputLines, read_line};

pub async fn run(config: &MemoryMatchConfig, input: &mut InputLines) {
    let seed = config.shuffle_seed.unwrap_or_else(rand::random);
    let state = MemoryMatchSessionState::create(seed);

    log!("Memory match started with seed {}", seed);
    render(&state).await;
    println!("Enter a card number (1-{}), r to reshuffle, q to leave the game.", DECK_SIZE);
    println!("The board turns a quarter every time a pair does not match.");

    while let Some(line) = read_line(input).await {
        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => {
                MemoryMatchSession::reset(&state).await;
                render(&state).await;
            }
            card => match card.parse::<usize>() {
                Ok(number) if (1..=DECK_SIZE).contains(&number) => {
                    let outcome = MemoryMatchSession::flip_card(&state, number - 1).await;
                    render(&state).await;
                    report(&state, outcome).await;
                }
                _ => println!(
                    "Enter a card number (1-{}), r to reshuffle, q to leave the game.",
                    DECK_SIZE
                ),
            },
        }
    }
}

async fn render(state: &MemoryMatchSessionState) {
    let game_state = state.game_state.lock().await;

    let mut grid = Vec::with_capacity(GRID_WIDTH);
    for row in 0..GRID_WIDTH {
        let mut cells = Vec::with_capacity(GRID_WIDTH);
        for col in 0..GRID_WIDTH {
            let index = row * GRID_WIDTH + col;
            let text = match game_state.card(index) {
                Some(card) if card.face == CardFace::Up => format!(" {} ", card.value),
                Some(card) if card.face == CardFace::Matched => format!("[{}]", card.value),
                _ => format!("{:^3}", index + 1),
            };
            cells.push(text);
        }
        grid.push(cells);
    }

    let grid = rotate_quarter_turns(grid, game_state.mismatch_count());

    println!();
    for row in &grid {
        println!("{}", row.join(" "));
    }
    println!(
        "Moves: {}  Matched pairs: {}/{}",
        game_state.move_count(),
        game_state.matched_pairs(),
        PAIR_COUNT
    );
}

async fn report(state: &MemoryMatchSessionState, outcome: FlipOutcome) {
    match outcome {
        FlipOutcome::Ignored => println!("That card cannot be flipped right now."),
        FlipOutcome::Flipped => {}
        FlipOutcome::Matched { .. } => {
            let game_state = state.game_state.lock().await;
            if game_state.is_complete() {
                println!("All pairs found in {} moves!", game_state.move_count());
            } else {
                println!("It's a match!");
            }
        }
        FlipOutcome::Mismatched { .. } => {
            println!("No match, the cards flip back shortly.");
        }
    }
}

fn rotate_quarter_turns(mut grid: Vec<Vec<String>>, quarter_turns: u32) -> Vec<Vec<String>> {
    for _ in 0..(quarter_turns % 4) {
        grid = rotate_clockwise(grid);
    }
    grid
}

fn rotate_clockwise(grid: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let size = grid.len();
    let mut rotated = vec![vec![String::new(); size]; size];
    for (row, cells) in grid.into_iter().enumerate() {
        for (col, cell) in cells.into_iter().enumerate() {
            rotated[col][size - 1 - row] = cell;
        }
    }
    rotated
}
