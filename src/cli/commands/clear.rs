use crate::cli::commands::{audit, open_session};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg);
    let count = session.state().events.len();

    session.request_clear();

    if !ask_confirmation(
        "Are you sure you want to delete all timeline data? This action cannot be undone.",
    ) {
        session.cancel_pending();
        info("Operation cancelled.");
        return Ok(());
    }

    if session.confirm_clear() {
        audit(
            &session,
            "clear",
            "",
            &format!("Timeline cleared ({} events removed)", count),
        );
        success("Campaign time and timeline have been reset.");
    }

    Ok(())
}
