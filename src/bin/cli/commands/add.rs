use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    term: &str,
    answer: &str,
    tag: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let card = app.session.add_card(term, answer, tag)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "card": card,
                "count": app.session.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Added \"{}\" ({} cards)", card.term, app.session.len());
            if let Some(tag) = card.tag.as_deref() {
                println!("  Tag: #{}", tag);
            }
        }
    }

    Ok(())
}
