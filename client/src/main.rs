mod command;
mod config;
mod offline;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::FirstPlayerMode;
use tictactoe_common::{log, log_debug, logger};

use config::get_config_manager;
use offline::TicTacToeRunner;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Play tic-tac-toe against a minimax bot")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Log search statistics
    #[arg(long)]
    verbose: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(first_player) = args.first_player {
        config.first_player = first_player.into();
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
    }
    config.log.verbose |= args.verbose;
    config.validate()?;

    logger::init_logger(config.log.prefix.clone(), config.log.verbose);
    log_debug!("Effective config: {:?}", config);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let mut runner = TicTacToeRunner::new(&config, rand::rng());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let tally = runner.run(stdin.lock(), &mut stdout)?;

    log!(
        "Session finished: {} human wins, {} bot wins, {} ties",
        tally.human_wins,
        tally.computer_wins,
        tally.ties
    );

    Ok(())
}
