use crate::core::persistence::{self, STATE_KEY};
use crate::db::KeyValueStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SNAPSHOT
    //
    let raw = pool.get(STATE_KEY)?;
    match raw {
        None => println!("{}• Snapshot:{} {}none{}", CYAN, RESET, GREY, RESET),
        Some(raw) => println!("{}• Snapshot:{} {} bytes", CYAN, RESET, raw.len()),
    }

    //
    // 3) CONTENT
    //
    match persistence::load(pool) {
        Some(state) => {
            println!("{}• Campaign time:{} {}", CYAN, RESET, state.time);
            println!(
                "{}• Events:{} {}{}{} ({} running, {} expired)",
                CYAN,
                RESET,
                GREEN,
                state.events.len(),
                RESET,
                state.events.active_countdowns(),
                state.events.expired()
            );
        }
        None => println!("{}• Events:{} {}--{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
