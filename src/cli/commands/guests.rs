//! Guests command - inspect the loaded guest list without the model.

use crate::cli::{GuestsAction, Output};
use crate::config::Settings;
use crate::error::Result;

/// Run the guests command.
pub async fn run_guests(action: &GuestsAction, settings: Settings) -> Result<()> {
    let index = super::load_guests(&settings).await?;

    match action {
        GuestsAction::List => {
            let names = index.names()?;

            Output::header(&format!("Invited guests ({})", names.len()));
            for name in names {
                Output::list_item(&name);
            }
            println!();
        }

        GuestsAction::Search { query, limit } => {
            let hits = index.search(query, *limit)?;

            if hits.is_empty() {
                Output::info("No matching guests.");
                return Ok(());
            }

            Output::header(&format!("Matches for {:?}", query));
            for hit in &hits {
                Output::guest_hit(&hit.name, hit.score, &hit.document);
            }
            println!();
        }
    }

    Ok(())
}
