//! Pente CLI
//!
//! Plays one game between two players chosen from random, human, and
//! minimax styles.

use std::env;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pente::player::chooser_for;
use pente::{Config, GameState, PlayerStyle};

fn print_usage() {
    println!("Pente");
    println!();
    println!("Usage:");
    println!("  pente [--config FILE] [--p1 STYLE] [--p2 STYLE] [--seed N]");
    println!("        [--depth D] [--breadth B] [--dimension N]");
    println!();
    println!("Styles:");
    println!("  random  (0) - uniformly random legal moves");
    println!("  human   (1) - moves typed as \"x y\"");
    println!("  minimax (2) - alpha-beta search");
    println!();
    println!("Set RUST_LOG=debug to see every root move evaluation.");
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<Option<Config>> {
    // The config file is the base layer; flags override it
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => Config::load(flag_value(args, i, "--config")?)?,
        None => Config::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {}
            "--p1" => config.players.one = flag_value(args, i, "--p1")?.parse::<PlayerStyle>()?,
            "--p2" => config.players.two = flag_value(args, i, "--p2")?.parse::<PlayerStyle>()?,
            "--seed" | "-s" => {
                config.search.seed = Some(flag_value(args, i, "--seed")?.parse().context("--seed")?)
            }
            "--depth" | "-d" => {
                config.search.depth = flag_value(args, i, "--depth")?.parse().context("--depth")?
            }
            "--breadth" | "-b" => {
                config.search.breadth =
                    flag_value(args, i, "--breadth")?.parse().context("--breadth")?
            }
            "--dimension" | "-n" => {
                config.game.dimension =
                    flag_value(args, i, "--dimension")?.parse().context("--dimension")?
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 2;
    }

    config.validate()?;
    Ok(Some(config))
}

fn play(config: &Config) {
    let mut game = GameState::new(config.game);
    let mut choosers = [
        chooser_for(config.players.style(0), &config.search, 0),
        chooser_for(config.players.style(1), &config.search, 1),
    ];
    info!(
        dimension = config.game.dimension,
        p1 = choosers[0].name(),
        p2 = choosers[1].name(),
        "new game"
    );

    loop {
        if game.board().empty_count() == 0 {
            info!("no moves available, ending the game");
            break;
        }

        let player = game.current_player();
        let Some(mov) = choosers[player].choose(&game) else {
            warn!(player = player + 1, "no move chosen, ending the game");
            break;
        };

        if let Err(err) = game.try_place(mov) {
            warn!(player = player + 1, %err, "move rejected");
            continue;
        }
        info!(turn = game.current_turn(), player = player + 1, %mov, "played");

        if game.game_over() {
            match game.winner() {
                Some(winner) => info!(player = winner + 1, "wins"),
                None => info!("board full, no winner"),
            }
            break;
        }
    }

    print!("{}", game.results());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    play(&config);
    Ok(())
}
