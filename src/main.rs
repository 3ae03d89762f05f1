use std::io;

use broadside::{
    init_logging, prompt_opponent_kind, prompt_play_again, setup_player, AiPlayer, CliPlayer,
    Controller, Game, GameError, Player, PlayerKind,
};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player Battleship in the terminal", long_about = None)]
struct Cli {
    /// Who Player2 is. Asked interactively before each game when omitted.
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Human,
    Ai,
}

impl From<Opponent> for PlayerKind {
    fn from(opponent: Opponent) -> Self {
        match opponent {
            Opponent::Human => PlayerKind::Human,
            Opponent::Ai => PlayerKind::Automated,
        }
    }
}

/// Fresh RNG for the `n`th consumer, derived from the seed when one is fixed.
fn make_rng(seed: Option<u64>, n: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(n)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn controller_for(kind: PlayerKind, rng: SmallRng) -> Box<dyn Controller> {
    match kind {
        PlayerKind::Human => Box::new(CliPlayer::stdio(rng)),
        PlayerKind::Automated => Box::new(AiPlayer::new(rng)),
    }
}

fn play_one(cli: &Cli, round: u64) -> Result<(), GameError> {
    let opponent = match cli.opponent {
        Some(o) => o.into(),
        None => prompt_opponent_kind(&mut io::stdin(), &mut io::stdout())?,
    };
    let mut player1 = Player::new(PlayerKind::Human, "Player1");
    let mut player2 = Player::new(opponent, "Player2");
    let mut c1 = controller_for(PlayerKind::Human, make_rng(cli.seed, 2 * round));
    let mut c2 = controller_for(opponent, make_rng(cli.seed, 2 * round + 1));

    setup_player(&mut player1, c1.as_mut())?;
    setup_player(&mut player2, c2.as_mut())?;

    let mut game = Game::new(player1, player2)?;
    let winner = game.run([c1.as_mut(), c2.as_mut()])?;
    let name = game.player(winner).name();
    info!("game {} won by {} in {} turns", round, name, game.turns());
    println!("Congrats {}! You won!", name);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (AI moves will be reproducible)", s);
    }

    let mut round = 0;
    loop {
        match play_one(&cli, round) {
            Ok(()) => {}
            Err(GameError::InputClosed) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
        round += 1;
        match prompt_play_again(&mut io::stdin(), &mut io::stdout()) {
            Ok(true) => {}
            Ok(false) | Err(GameError::InputClosed) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}
