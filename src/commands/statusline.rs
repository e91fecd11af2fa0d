//! `aiterm statusline` — render the two-line banner from stdin JSON.

use std::io::{self, Read};

use anyhow::{Context, Result};

use aiterm::statusline::{StatusLineConfig, StatusLineRenderer};

pub fn run(width: Option<usize>) -> Result<()> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read status event from stdin")?;

    let config = StatusLineConfig::load();
    let mut renderer = StatusLineRenderer::new(config);
    if let Some(width) = width {
        renderer = renderer.with_width(width);
    }

    // The escapes must survive the pipe back to the host terminal, so this
    // bypasses anstream's tty detection.
    println!("{}", renderer.render(&raw));
    Ok(())
}
