use std::io::{BufRead, Write};

use janken_core::{ChallengeGenerator, Move, RoundEngine, SessionSummary};

/// Runs sessions on a line-based terminal until the player quits or input runs out.
///
/// Returns the summary of every session that was played to the end.
pub(crate) fn play<G, R, W>(
    engine: &mut RoundEngine<G>,
    input: R,
    mut output: W,
) -> anyhow::Result<Vec<SessionSummary>>
where
    G: ChallengeGenerator,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut sessions = Vec::new();

    loop {
        if engine.is_finished() {
            let summary = engine.summary();
            sessions.push(summary);
            writeln!(
                output,
                "Your score: {}/{}",
                summary.score, summary.total_rounds
            )?;
            write!(output, "Play again? [y/N] ")?;
            output.flush()?;

            match lines.next().transpose()? {
                Some(line) if line.trim().eq_ignore_ascii_case("y") => {
                    engine.restart();
                    continue;
                }
                _ => break,
            }
        }

        let challenge = engine.challenge();
        writeln!(
            output,
            "[{}/{}] {} {} {}",
            engine.rounds_played() + 1,
            engine.total_rounds(),
            challenge.directive_label(),
            challenge.shown_move.glyph(),
            challenge.shown_move
        )?;
        write!(output, "Your move (r/p/s, q to quit): ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            log::debug!("input closed mid-session");
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        match line.parse::<Move>() {
            Ok(player_move) => {
                let outcome = engine.submit_move(player_move)?;
                writeln!(
                    output,
                    "{}",
                    if outcome.correct { "Correct!" } else { "Wrong." }
                )?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    Ok(sessions)
}
