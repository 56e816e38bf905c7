use crate::cli::commands::{column_filter, load_table, resolve_range};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{LogAnalyzer, ReportParams};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        range,
        column,
        value,
        format,
        what,
        out,
        force,
    } = cmd
    {
        let table = load_table(file, cfg)?;
        let (from, to) = resolve_range(range)?;

        let params = ReportParams {
            from,
            to,
            filter: column_filter(column, value),
            timezone: cfg.tz()?,
        };
        let report = LogAnalyzer::build_report(&table, &params)?;

        ExportLogic::export(&report, *what, *format, out, *force)?;
    }
    Ok(())
}
