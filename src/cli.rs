use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis-livescore backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the proxy gateway server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch and print the current live matches
    Live,
    /// Poll one match and print updates until interrupted
    Watch {
        /// Upstream match key
        match_key: String,
    },
    /// Print world rankings for a tour
    Rankings {
        /// Tour code: ATP or WTA
        #[arg(short, long, default_value = "ATP")]
        tour: String,
        /// Discipline (Singles only for now)
        #[arg(short, long, default_value = "Singles")]
        discipline: String,
    },
    /// Print head-to-head history for two players
    H2h {
        first_player_key: String,
        second_player_key: String,
    },
    /// Print the raw profile rows for a player
    Player {
        player_key: String,
    },
}
