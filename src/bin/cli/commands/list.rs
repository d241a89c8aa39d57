use anyhow::Result;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;
use lexicard::deck::models::distinct_tags;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.session.cards();
    let tags = distinct_tags(cards);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": cards.len(),
                "tags": tags,
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if use_color {
                println!("{}{} cards{}", Color::BOLD, cards.len(), Color::RESET);
            } else {
                println!("{} cards", cards.len());
            }
            if !tags.is_empty() {
                let chips: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
                if use_color {
                    println!("{}{}{}", Color::CYAN, chips.join(" "), Color::RESET);
                } else {
                    println!("{}", chips.join(" "));
                }
            }
            println!();

            for (i, card) in cards.iter().enumerate() {
                let tag_suffix = match card.tag.as_deref() {
                    Some(tag) if use_color => {
                        format!("  {}#{}{}", Color::CYAN, tag, Color::RESET)
                    }
                    Some(tag) => format!("  #{}", tag),
                    None => String::new(),
                };
                if use_color {
                    println!(
                        "{:>4}. {} {}= {}{}{}",
                        i + 1,
                        card.term,
                        Color::DIM,
                        card.answer,
                        Color::RESET,
                        tag_suffix
                    );
                } else {
                    println!("{:>4}. {} = {}{}", i + 1, card.term, card.answer, tag_suffix);
                }
            }
        }
    }

    Ok(())
}
