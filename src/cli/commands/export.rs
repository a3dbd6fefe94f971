use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = open_session(cfg);
        let path = ExportLogic::export(
            session.state(),
            *format,
            file,
            &cfg.export_file_name,
            *force,
        )?;

        audit(
            &session,
            "export",
            format.as_str(),
            &path.to_string_lossy(),
        );
    }
    Ok(())
}
