use anyhow::{Context, Result};

use wcq_sim::calibration;
use wcq_sim::tables;
use wcq_sim::win_prob::{self, ModelParams};

fn main() -> Result<()> {
    let tournament = tables::afc_group_c().context("group tables are inconsistent")?;
    let params = ModelParams::default();

    // In-sample: the form term already includes each result being scored.
    // Meant for quick sanity checks when tuning the model constants.
    let scored = tournament
        .history()
        .iter()
        .map(|played| {
            win_prob::compute_match_prob(&tournament, played.pairing, &params)
                .map(|p| (p, played.outcome))
        })
        .collect::<Result<Vec<_>, _>>()
        .context("match model rejected")?;

    let m = calibration::score(scored.iter().copied());
    let observed = calibration::observed_frequencies(scored.iter().map(|&(_, o)| o));

    println!("Samples: {}", m.samples);
    println!("Brier: {:.4}", m.brier);
    println!("Log loss: {:.4}", m.log_loss);
    println!("Accuracy: {:.1}%", m.accuracy * 100.0);
    println!(
        "Observed: home {:.1}% draw {:.1}% away {:.1}%",
        observed.home * 100.0,
        observed.draw * 100.0,
        observed.away * 100.0
    );

    Ok(())
}
