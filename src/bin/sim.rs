use broadside::{cli::parse_command, cli::Command, Game, SessionConfig, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [tokens...]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::new(SessionConfig::default()).map_err(|e| anyhow::anyhow!(e))?;
    game.place_fleets(&mut rng, &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut reports = Vec::new();
    for token in &args[2..] {
        match parse_command(token) {
            Some(Command::Key(key)) => {
                game.handle_key(key);
            }
            Some(Command::Fire) => reports.push(game.fire()),
            Some(Command::EndTurn) => game.end_turn(),
            Some(Command::Quit) => break,
            None => return Err(anyhow::anyhow!("unrecognised token '{}'", token)),
        }
    }

    let p1 = game.player(broadside::PlayerKind::PlayerOne).state();
    let p2 = game.player(broadside::PlayerKind::PlayerTwo).state();
    let result = json!({
        "turn": game.turn(),
        "current": game.current_kind(),
        "status": game.status(),
        "player1": p1,
        "player2": p2,
        "shots": reports,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
