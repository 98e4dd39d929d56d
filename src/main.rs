use anyhow::Result;

use tennis_livescore::cli::Command;
use tennis_livescore::{
    handle_h2h, handle_live, handle_player, handle_rankings, handle_serve, handle_watch, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Live => handle_live(),
        Command::Watch { match_key } => handle_watch(match_key),
        Command::Rankings { tour, discipline } => handle_rankings(tour, discipline),
        Command::H2h {
            first_player_key,
            second_player_key,
        } => handle_h2h(first_player_key, second_player_key),
        Command::Player { player_key } => handle_player(player_key),
    }
}
