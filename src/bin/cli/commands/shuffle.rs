use anyhow::Result;

use crate::app::App;

pub fn run(app: &mut App) -> Result<()> {
    app.session.shuffle()?;
    println!("Shuffled {} cards", app.session.len());
    Ok(())
}
