//! Rendering generated batches and the catalog for the terminal.

use serde::Serialize;
use sorzi_domain::{Game, Lottery, LotteryKey};

use crate::use_cases::GenerationOutcome;

/// Plain-text batch: a header line, then one numbered line per game.
pub fn render_text(outcome: &GenerationOutcome) -> String {
    let mut out = format!(
        "{} • {} jogo(s) • {} dezenas\n",
        outcome.lottery.name,
        outcome.games.len(),
        outcome.pick_count
    );
    for (i, game) in outcome.games.iter().enumerate() {
        out.push_str(&format!("Jogo {}: {}\n", i + 1, game));
    }
    out
}

#[derive(Serialize)]
struct BatchView<'a> {
    lottery: LotteryKey,
    picks: usize,
    games: &'a [Game],
}

/// JSON batch: `{"lottery", "picks", "games": [[..], ..]}`.
pub fn render_json(outcome: &GenerationOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BatchView {
        lottery: outcome.lottery.key,
        picks: outcome.pick_count,
        games: outcome.games.games(),
    })
}

/// One line per lottery: key, name, range and pick bounds.
pub fn render_catalog(lotteries: &[Lottery]) -> String {
    lotteries
        .iter()
        .map(|l| format!("{:<16} {:<14} {}\n", l.key.as_str(), l.name, l.summary()))
        .collect()
}
