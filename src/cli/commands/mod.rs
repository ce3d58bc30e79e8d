//! CLI command implementations.

mod ask;
mod chat;
mod config;
mod doctor;
mod guests;
mod init;
mod serve;

pub use ask::run_ask;
pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use guests::run_guests;
pub use init::run_init;
pub use serve::run_serve;

use crate::cli::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::guests::{load_guest_index, GuestIndex};
use std::sync::Arc;

/// Load the guest index with a spinner, reusing the configured token when
/// present (the invitee dataset itself is public).
pub(crate) async fn load_guests(settings: &Settings) -> Result<Arc<GuestIndex>> {
    let token = std::env::var(&settings.model.api_key_env).ok();

    let spinner = Output::spinner("Loading guest list...");
    let result = load_guest_index(&settings.guests, token).await;
    spinner.finish_and_clear();

    let index = result?;
    Output::info(&format!("Loaded {} guest documents.", index.len()));

    Ok(Arc::new(index))
}
