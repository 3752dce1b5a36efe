//! Headless replay: drive a scripted game through the controller and print it.

use tictac_timeline_core::{GameController, GameEvent, GameView, SortOrder, TimelineError};
use tracing::{info, instrument};

/// A scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    /// Cell indices in play order.
    pub moves: Vec<usize>,
    /// Step to jump to once all moves are played.
    pub jump: Option<usize>,
    /// Present the history newest first.
    pub descending: bool,
}

/// Plays `script` on a fresh controller and returns the final view.
///
/// Moves the rules reject are skipped exactly as they would be in the
/// interactive game.
///
/// # Errors
///
/// Fails on the first out-of-range cell index or history step.
#[instrument(skip(script), fields(moves = script.moves.len()))]
pub fn run(script: &Script, initial_order: SortOrder) -> Result<GameView, TimelineError> {
    let mut controller = GameController::new(initial_order);

    for &cell in &script.moves {
        controller.dispatch(GameEvent::CellActivated(cell))?;
    }
    if let Some(step) = script.jump {
        controller.dispatch(GameEvent::HistoryStepActivated(step))?;
    }
    if script.descending && *controller.sort_order() == SortOrder::Ascending {
        controller.dispatch(GameEvent::SortToggled)?;
    }

    info!(
        history = controller.state().history().len(),
        step = controller.state().step(),
        "Replay finished"
    );
    Ok(controller.view())
}

/// Renders a view as plain text.
///
/// The board grid comes first, then the status line, then the history list
/// with `>` in front of the active entry.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status());
    out.push_str("\n\n");

    for entry in view.history() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push(marker);
        out.push(' ');
        out.push_str(entry.label());
        out.push('\n');
    }
    out
}
