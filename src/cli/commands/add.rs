use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::EventForm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Add a key decision at the current campaign time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        description,
        remaining,
    } = cmd
    {
        let mut session = open_session(cfg);
        let form = EventForm::new(title.clone(), description.clone(), *remaining);

        let id = match session.create_event(form) {
            Ok(id) => id,
            Err(AppError::EmptyTitle) => {
                warning("Event title must not be empty; nothing added.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let created = session.state().time;
        audit(&session, "add", &id.to_string(), title);

        success(format!("Event #{} \"{}\" added at {}.", id, title, created));
    }

    Ok(())
}
