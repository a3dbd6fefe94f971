use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut session = open_session(cfg);

        ImportLogic::import(&mut session, file)?;

        let state = session.state();
        let message = format!(
            "Imported {} events, campaign time {}",
            state.events.len(),
            state.time
        );

        audit(&session, "import", file, &message);
        success(message);
    }

    Ok(())
}
