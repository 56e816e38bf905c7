use crate::cli::commands::{load_table, resolve_range};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogAnalyzer;
use crate::errors::AppResult;
use crate::ui::messages::{header, metric};
use crate::utils::table::log_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter {
        file,
        range,
        column,
        value,
    } = cmd
    {
        let table = load_table(file, cfg)?;
        let (from, to) = resolve_range(range)?;
        let (from, to, rows) = LogAnalyzer::filter_by_date(&table, from, to)?;

        match value {
            None => {
                let values = LogAnalyzer::unique_values(&rows, column)?;
                header(format!("Values of '{column}' ({} distinct)", values.len()));
                for v in values {
                    println!("- {v}");
                }
            }
            Some(value) => {
                let filtered = LogAnalyzer::filter_by_column(&rows, column, value)?;
                header(format!(
                    "Records from {from} to {} where '{column}' == '{value}'",
                    to.pred_opt().unwrap_or(to)
                ));
                metric("Current number of records:", filtered.len());
                println!();
                print!("{}", log_table(&filtered).render(cfg.color));
            }
        }
    }
    Ok(())
}
