use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::repo::WaterRepo;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::ml2readable;
use crate::utils::time::{parse_optional_time, timestamp_ms};

/// Record a water intake.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        amount_ml,
        date: date_arg,
        time,
    } = cmd
    {
        //
        // 1. Parse date (default today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Resolve timestamp: explicit HH:MM on that date, or now
        //
        let timestamp = match parse_optional_time(time.as_ref())? {
            Some(t) => timestamp_ms(d, t),
            None => date::now_ms(),
        };

        //
        // 3. Record through the repository (amount validation lives there)
        //
        let repo = WaterRepo::open(cfg)?;
        let entry = repo.add_water_intake(*amount_ml, d, timestamp)?;

        let total = repo.today_total(d)?;
        let goal = repo.daily_goal()?;

        success(format!(
            "Recorded {} for {} (entry #{}). Day total: {} of {} goal.",
            ml2readable(entry.amount_ml),
            entry.date_str(),
            entry.id,
            ml2readable(total),
            ml2readable(goal),
        ));
    }

    Ok(())
}
