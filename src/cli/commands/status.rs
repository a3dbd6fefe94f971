use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Show the campaign clock.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg);
    let state = session.state();
    let parts = state.time.parts();

    header("Campaign Time");

    let mut table = Table::new(vec![
        Column::new("Years", 8),
        Column::new("Months", 8),
        Column::new("Days", 8),
        Column::new("Hours", 8),
    ]);
    table.add_row(vec![
        parts.years.to_string(),
        parts.months.to_string(),
        parts.days.to_string(),
        parts.hours.to_string(),
    ]);
    print!("{}", table.render());

    println!(
        "\nTotal: {} hours | Events: {} ({} running, {} expired)",
        state.time.total_hours(),
        state.events.len(),
        state.events.active_countdowns(),
        state.events.expired()
    );

    Ok(())
}
