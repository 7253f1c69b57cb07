//! tui-arcade runner (default binary).
//!
//! Picks a demo from the first CLI argument and runs its frame loop on
//! the shared terminal renderer. The terminal is always restored, even
//! when a run loop errors out.

use anyhow::{bail, Result};

use tui_arcade::app;
use tui_arcade::term::TerminalRenderer;

fn main() -> Result<()> {
    let demo = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "platformer".to_string());

    let runner = match demo.as_str() {
        "platformer" => app::platformer::run,
        "tetris" => app::tetris::run,
        "sand" => app::sand::run,
        other => bail!("unknown demo '{other}' (expected platformer, tetris or sand)"),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runner(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
