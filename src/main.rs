use std::panic;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;

use kopilka::analysis::{filter_by_category, known_categories, spent_total};
use kopilka::ui::{THEME, UI_TEXT, chart_table, comparison_table, statistics_block, transactions_table};
use kopilka::{Cli, DashboardSnapshot, DashboardView, load_snapshot, merge_series};

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("kopilka"), my_code_level)
        .init();

    let args = Cli::parse();
    let snapshot = load_snapshot(&args.snapshot)?;
    log::info!(
        "Loaded snapshot: {} operations, {} history months, {} forecast months",
        snapshot.transactions.len(),
        snapshot.history.len(),
        snapshot.forecast.len()
    );

    match args.command {
        Some(DashboardView::Chart) => render_chart(&snapshot),
        Some(DashboardView::Compare) => render_comparison(&snapshot),
        Some(DashboardView::Transactions { category }) => {
            render_transactions(&snapshot, category.as_deref());
        }
        None => {
            render_chart(&snapshot);
            println!();
            render_comparison(&snapshot);
            println!();
            render_transactions(&snapshot, None);
        }
    }

    Ok(())
}

fn render_chart(snapshot: &DashboardSnapshot) {
    if snapshot.forecast.is_empty() {
        log::warn!("Snapshot carries no forecast points; chart shows history only");
    }

    let rows = merge_series(&snapshot.history, &snapshot.forecast);
    println!("{}", THEME.paint_heading(UI_TEXT.chart_heading));
    println!("{}", chart_table(&rows));
    println!("{}", statistics_block(&snapshot.statistics));
}

fn render_comparison(snapshot: &DashboardSnapshot) {
    println!("{}", THEME.paint_heading(UI_TEXT.compare_heading));
    println!("{}", comparison_table(&snapshot.comparison));
}

fn render_transactions(snapshot: &DashboardSnapshot, category: Option<&str>) {
    let picked = filter_by_category(&snapshot.transactions, category);

    println!("{}", THEME.paint_heading(UI_TEXT.transactions_heading));
    println!("{}", transactions_table(&picked));
    println!(
        "{}: {} · {}: {}",
        UI_TEXT.label_total,
        spent_total(&picked),
        UI_TEXT.label_categories,
        known_categories(&snapshot.transactions).iter().join(", ")
    );
}
