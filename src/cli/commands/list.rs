use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Event;
use crate::models::clock::from_total_hours;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, color_for_countdown, paint};
use crate::utils::formatting::{bold, preview, wrap_indented};

const WRAP_WIDTH: usize = 80;
const INDENT: &str = "    ";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { full } = cmd {
        let session = open_session(cfg);
        let state = session.state();

        header(format!("Timeline (now at {})", state.time));

        if state.events.is_empty() {
            info("No events added yet. Add a key decision to begin your timeline.");
            return Ok(());
        }

        for ev in state.events.sorted() {
            print_event(ev, cfg.preview_length, *full);
        }
    }

    Ok(())
}

fn print_event(ev: &Event, preview_length: usize, full: bool) {
    println!("{} {}", paint(&format!("#{}", ev.id), GREY), bold(&ev.title));
    println!(
        "{INDENT}Created at: {}",
        from_total_hours(ev.time_created)
    );

    if let Some(text) = preview(&ev.description, preview_length, full) {
        println!("{}", wrap_indented(&text, WRAP_WIDTH, INDENT));
    }

    if let Some(label) = ev.countdown_label() {
        println!(
            "{INDENT}{}",
            paint(&label, color_for_countdown(ev.time_remaining))
        );
    }

    println!();
}
