use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct LogLogic;

impl LogLogic {
    /// Print the internal log table, newest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{} | {:<8} | {}", date, operation, message);
        }

        Ok(())
    }
}
