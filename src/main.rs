#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{cli::run_hotseat, init_logging, Game, GameStatus, SessionConfig, FLEET};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players share this terminal and take turns.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = broadside::SHOTS_PER_TURN)]
        shots: u32,
        #[arg(long, default_value_t = broadside::DAMAGE_PER_HIT)]
        damage: u32,
        #[arg(long, default_value_t = broadside::BOARD_COLUMNS)]
        columns: usize,
        #[arg(long, default_value_t = broadside::BOARD_ROWS)]
        rows: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            shots,
            damage,
            columns,
            rows,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleets will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = SessionConfig::new()
                .with_board(columns, rows)
                .with_shots_per_turn(shots)
                .with_damage_per_hit(damage);

            let mut game = Game::new(config).map_err(|e| anyhow::anyhow!(e))?;
            game.place_fleets(&mut rng, &FLEET)
                .map_err(|e| anyhow::anyhow!(e))?;

            println!("Player 1: w/a/s/d move, space select, q hide.");
            println!("Player 2: up/down/left/right move, enter select, backspace hide.");
            println!("Type 'fire' to shoot, 'end' to end the turn, 'quit' to leave.");

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            match run_hotseat(&mut game, stdin.lock(), &mut stdout)? {
                GameStatus::Won(kind) => println!("\nGAME OVER: {} wins.", kind),
                GameStatus::InProgress => println!("\nGame abandoned."),
            }
        }
    }
    Ok(())
}
