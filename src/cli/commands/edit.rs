use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EventId;
use crate::ui::messages::{info, success, warning};

/// Edit an event: start an edit session, overlay the given fields on the
/// pre-filled form and save it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        description,
        remaining,
        clear_remaining,
    } = cmd
    {
        let id = EventId(*id);
        let mut session = open_session(cfg);

        let Some(mut form) = session.start_edit(id) else {
            info(format!("No event with id {}; nothing to edit.", id));
            return Ok(());
        };

        if let Some(t) = title {
            form.title = t.clone();
        }
        if let Some(d) = description {
            form.description = d.clone();
        }
        if *clear_remaining {
            form.time_remaining = None;
        } else if remaining.is_some() {
            form.time_remaining = *remaining;
        }

        match session.save_edit(form) {
            Ok(true) => {}
            Ok(false) => {
                info(format!("Event {} no longer exists; nothing saved.", id));
                return Ok(());
            }
            Err(AppError::EmptyTitle) => {
                warning("Event title must not be empty; changes discarded.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        let Some(ev) = session.event(id) else {
            return Ok(());
        };

        let countdown = ev
            .countdown_label()
            .unwrap_or_else(|| "no countdown".to_string());
        let title = ev.title.clone();

        audit(&session, "edit", &id.to_string(), &format!("{} ({})", title, countdown));
        success(format!("Event #{} \"{}\" updated ({}).", id, title, countdown));
    }

    Ok(())
}
