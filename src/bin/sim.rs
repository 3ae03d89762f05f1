use broadside::{init_logging, setup_player, AiPlayer, Game, Player, PlayerId, PlayerKind};
use clap::Parser;
use serde_json::json;

/// Play one AI-vs-AI game headlessly and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for Player1's AI.
    seed1: u64,
    /// Seed for Player2's AI.
    seed2: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut ai1 = AiPlayer::seeded(args.seed1);
    let mut ai2 = AiPlayer::seeded(args.seed2);
    let mut p1 = Player::new(PlayerKind::Automated, "Player1");
    let mut p2 = Player::new(PlayerKind::Automated, "Player2");

    setup_player(&mut p1, &mut ai1)?;
    setup_player(&mut p2, &mut ai2)?;

    let mut game = Game::new(p1, p2)?;
    let winner = game.run([&mut ai1, &mut ai2])?;
    let turns = game.turns();
    let [p1, p2] = game.into_players();

    let summary = |p: &Player| {
        json!({
            "name": p.name(),
            "ships_afloat": p.board().ships_afloat(),
            "fleet": p.board().fleet(),
        })
    };
    let result = json!({
        "winner": match winner {
            PlayerId::One => "player1",
            PlayerId::Two => "player2",
        },
        "turns": turns,
        "player1": summary(&p1),
        "player2": summary(&p2),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
