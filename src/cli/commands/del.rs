use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EventId;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let id = EventId(*id);
        let mut session = open_session(cfg);

        let Some(title) = session.event(id).map(|e| e.title.clone()) else {
            info(format!("No event with id {}; nothing deleted.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        session.request_delete(id);

        let prompt = format!(
            "Are you sure you want to delete the event \"{}\"? This action cannot be undone.",
            title
        );

        if !ask_confirmation(&prompt) {
            session.cancel_pending();
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        if let Some(removed) = session.confirm_delete() {
            audit(&session, "del", &id.to_string(), &removed.title);
            success(format!("Event #{} \"{}\" has been deleted.", id, removed.title));
        }
    }

    Ok(())
}
