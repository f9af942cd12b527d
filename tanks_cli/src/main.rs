use std::io;

use anyhow::Context;
use tanks_core::{play_game, BattlefieldBuilder, Prompt};
use tracing::{info, info_span, Level};

use crate::terminal::TerminalSurface;

mod terminal;

fn main() -> anyhow::Result<()> {
    // the board owns stdout, logs go to stderr
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let field = BattlefieldBuilder::default()
        .build()
        .context("invalid battlefield")?;

    let match_id = generate_match_id();
    let span = info_span!("match", id = %match_id);
    let _entered = span.enter();
    info!(?field, "starting match");

    let stdin = io::stdin();
    let console = Prompt::new(stdin.lock(), io::stdout());
    let surface = TerminalSurface::new(io::stdout());

    let summary = play_game(field, surface, console).context("match aborted")?;

    println!("Player {} wins after {} turns", summary.winner, summary.turns);
    let summary = serde_json::to_string(&summary).context("summary is not serializable")?;
    info!(%summary, "match finished");

    Ok(())
}

/// Short upper case id tagging every log line of a match
fn generate_match_id() -> String {
    const MATCH_ID_LENGTH: usize = 5;

    nanoid::nanoid!(
        MATCH_ID_LENGTH,
        &[
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
            'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
        ]
    )
}
