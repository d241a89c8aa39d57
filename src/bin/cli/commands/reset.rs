use anyhow::Result;

use crate::app::App;

pub fn run(app: &mut App) -> Result<()> {
    app.session.reset()?;
    println!("Deck reset to the starter deck ({} cards)", app.session.len());
    Ok(())
}
