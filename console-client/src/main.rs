mod config;
mod memory_match_runner;
mod tictactoe_runner;

use clap::Parser;
use games::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

pub type InputLines = tokio::io::Lines<BufReader<Stdin>>;

#[derive(Parser)]
#[command(name = "games_console")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::load_config(args.config.as_deref())?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!();
        println!("=== Casual games ===");
        println!("  1) Tic-tac-toe with vanishing marks");
        println!("  2) Memory match");
        println!("  q) Quit");

        let Some(choice) = read_line(&mut input).await else {
            break;
        };

        match choice.trim() {
            "1" => tictactoe_runner::run(&config.tictactoe, &mut input).await,
            "2" => memory_match_runner::run(&config.memory_match, &mut input).await,
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown selection: {}", other),
        }
    }

    log!("Goodbye");
    Ok(())
}

pub async fn read_line(input: &mut InputLines) -> Option<String> {
    match input.next_line().await {
        Ok(line) => line,
        Err(err) => {
            log!("Failed to read input: {}", err);
            None
        }
    }
}
