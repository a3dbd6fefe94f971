use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::advance::custom_hours;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::plural;

/// Advance the campaign clock by a preset or a custom amount.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Advance { amount, unit, rest } = cmd {
        //
        // 1. Resolve the delta (presets first, then custom amount)
        //
        let (hours, label) = match (rest, amount) {
            (Some(preset), _) => (preset.hours(), preset.label().to_string()),
            (None, Some(value)) => {
                let unit = unit.unwrap_or(cfg.default_unit);
                match custom_hours(*value, unit) {
                    Ok(h) => (h, format!("{} {}", value, unit)),
                    Err(AppError::InvalidAmount(v)) => {
                        warning(format!("Nothing to advance: amount must be positive (got {v})."));
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                }
            }
            (None, None) => return Ok(()),
        };

        //
        // 2. Apply and persist
        //
        let mut session = open_session(cfg);
        let expiring_before = session.state().events.active_countdowns();
        session.advance_time(hours)?;
        let state = session.state();

        audit(
            &session,
            "advance",
            &label,
            &format!("Advanced {} → {}", plural(hours, "hour"), state.time),
        );

        success(format!(
            "Advanced {} ({}). Campaign time: {}",
            plural(hours, "hour"),
            label,
            state.time
        ));

        let newly_expired = expiring_before.saturating_sub(state.events.active_countdowns());
        if newly_expired > 0 {
            warning(format!(
                "{} expired during this advance.",
                plural(newly_expired as u64, "countdown")
            ));
        }
    }

    Ok(())
}
