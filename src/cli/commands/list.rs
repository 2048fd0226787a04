use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DailySummary, WaterEntry};
use crate::repo::WaterRepo;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::date;
use crate::utils::formatting::{goal_progress, ml2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        today,
    } = cmd
    {
        let repo = WaterRepo::open(cfg)?;

        if *today {
            let d = date::today();
            let total = repo.today_total(d)?;
            let goal = repo.daily_goal()?;

            let color = color_for_progress(total, goal);
            println!(
                "💧 {}: {}{}{}",
                d,
                color,
                goal_progress(total, goal),
                RESET
            );
            return Ok(());
        }

        if let Some(s) = date_arg {
            let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            let entries = repo.entries_for_date(d)?;

            if entries.is_empty() {
                println!("No entries for {}", d);
                return Ok(());
            }

            print_entries(&entries);
            return Ok(());
        }

        // Default: all daily summaries, most recent first
        let summaries = repo.all_daily_summaries()?;
        if summaries.is_empty() {
            println!("No intake recorded yet.");
            return Ok(());
        }

        let goal = repo.daily_goal()?;
        print_summaries(&summaries, goal);
    }
    Ok(())
}

fn print_entries(entries: &[WaterEntry]) {
    let mut table = Table::new(vec![
        Column::right("ID", 6),
        Column::left("TIME", 7),
        Column::right("AMOUNT", 9),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.local_time().format("%H:%M").to_string(),
            ml2readable(e.amount_ml),
        ]);
    }

    print!("{}", table.render());
}

fn print_summaries(summaries: &[DailySummary], goal_ml: i64) {
    let mut table = Table::new(vec![
        Column::left("DATE", 12),
        Column::right("TOTAL", 9),
        Column::right("ENTRIES", 8),
        Column::right("GOAL %", 7),
    ]);

    for s in summaries {
        let pct = s
            .percent_of_goal(goal_ml)
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "--".into());

        table.add_row(vec![
            s.date_str(),
            ml2readable(s.total_ml),
            s.entry_count.to_string(),
            pct,
        ]);
    }

    print!("{}", table.render());
}
