use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use lexicard::deck::transfer::EXPORT_FILE_NAME;

pub fn run(app: &App, path: Option<&Path>) -> Result<()> {
    let json = app.session.export()?;

    match path {
        Some(p) if p == Path::new("-") => {
            println!("{}", json);
        }
        Some(p) => {
            fs::write(p, &json)
                .with_context(|| format!("Failed to write {}", p.display()))?;
            println!("Exported {} cards to {}", app.session.len(), p.display());
        }
        None => {
            fs::write(EXPORT_FILE_NAME, &json)
                .with_context(|| format!("Failed to write {}", EXPORT_FILE_NAME))?;
            println!("Exported {} cards to {}", app.session.len(), EXPORT_FILE_NAME);
        }
    }

    Ok(())
}
