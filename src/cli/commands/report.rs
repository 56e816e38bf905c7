use crate::cli::commands::{column_filter, load_table, resolve_range};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{LogAnalyzer, ReportParams};
use crate::errors::AppResult;
use crate::models::Report;
use crate::ui::chart::{ChartLabels, render_bar_chart};
use crate::ui::messages::{header, metric, warning};
use crate::utils::table::log_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        range,
        column,
        value,
        names_only,
        dates_only,
        show_rows,
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

        header(format!(
            "Records from {} to {}",
            report.from,
            report.selected_to()
        ));
        match &params.filter {
            Some(f) => metric(
                &format!("Current number of records ('{}' == '{}'):", f.column, f.value),
                report.rows.len(),
            ),
            None => metric("Current number of records:", report.rows.len()),
        }

        if report.rows.is_empty() {
            warning("No records in the selected range.");
            return Ok(());
        }

        if *show_rows {
            println!();
            print!("{}", log_table(&report.rows).render(cfg.color));
        }

        if !*dates_only {
            print_name_chart(&report, cfg);
        }
        if !*names_only {
            print_date_chart(&report, cfg);
        }
    }
    Ok(())
}

fn print_name_chart(report: &Report, cfg: &Config) {
    header(format!(
        "Accesses per name from {} to {}",
        report.from,
        report.selected_to()
    ));

    let labels = ChartLabels {
        keys: format!(
            "Members + memberless triggers: {}",
            report.by_name.total_groups()
        ),
        counts: format!("Accesses: {}", report.by_name.total_actions()),
    };
    let series = LogAnalyzer::to_chart_series(&report.by_name, true);
    print!("{}", render_bar_chart(&series, &labels, cfg.bar_width, cfg.color));
}

fn print_date_chart(report: &Report, cfg: &Config) {
    header(format!(
        "Accesses per date from {} to {} ({})",
        report.from,
        report.selected_to(),
        cfg.timezone
    ));

    let labels = ChartLabels {
        keys: format!("Dates: {}", report.by_date.total_days()),
        counts: format!("Accesses: {}", report.by_date.total_actions()),
    };
    let series = LogAnalyzer::to_chart_series(&report.by_date, false);
    print!("{}", render_bar_chart(&series, &labels, cfg.bar_width, cfg.color));
}
