use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &mut App, path: &Path) -> Result<()> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let count = app.session.import(&text)?;
    println!("Imported {} cards", count);

    Ok(())
}
