use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite store and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rCampaign…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store       : {}", &db_path);

    let pool = DbPool::new(&db_path)?;

    ttlog_quiet(
        &pool.conn,
        "init",
        "store",
        &format!("Store initialized at {}", &db_path),
    );

    println!("🎉 rCampaign initialization completed!");
    Ok(())
}
