use crate::cli::commands::load_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogAnalyzer;
use crate::errors::AppResult;
use crate::ui::messages::{header, metric};
use crate::utils::table::log_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { file, rows } = cmd {
        let table = load_table(file, cfg)?;
        let n = rows.unwrap_or(cfg.preview_rows);

        header(format!("Preview newest {n} log entries"));
        metric("Total number of records:", table.len());
        println!();
        print!("{}", log_table(&LogAnalyzer::preview(&table, n)).render(cfg.color));
    }
    Ok(())
}
