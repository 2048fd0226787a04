use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::repo::WaterRepo;
use crate::ui::messages::success;
use crate::utils::formatting::ml2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { set, reset } = cmd {
        let repo = WaterRepo::open(cfg)?;

        if let Some(goal) = set {
            repo.update_daily_goal(*goal)?;
            success(format!("Daily goal set to {}.", ml2readable(*goal)));
            return Ok(());
        }

        if *reset {
            repo.reset_daily_goal_to_default()?;
            success(format!(
                "Daily goal reset to the default ({}).",
                ml2readable(crate::settings::DEFAULT_DAILY_GOAL_ML)
            ));
            return Ok(());
        }

        let goal = repo.daily_goal()?;
        println!("🎯 Daily goal: {} ml", goal);
    }

    Ok(())
}
