mod app;
mod cli;
mod ui;

use item_tui::config;
use item_tui::item;
use item_tui::store;
use item_tui::utils;

use anyhow::Result;
use app::AppState;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use item::Item;
use std::fs;
use std::io::Write;
use std::panic;
use store::ItemStore;
use ui::theme::Theme;
use utils::paths::{get_crash_log_path, get_logs_dir, get_storage_path};

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n",
                std::backtrace::Backtrace::force_capture()
            ));
            crash_report.push('\n');

            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logging to stderr would corrupt the alternate screen, so logs go to
/// ~/.item-tui/logs/itui.log instead. Log level is controlled with the
/// RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match get_logs_dir() {
        Ok(dir) => dir,
        Err(_) => return None,
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "itui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn open_store() -> Result<ItemStore> {
    Ok(ItemStore::open(get_storage_path()?))
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Add { text }) => {
            handle_add(text)?;
        }
        Some(Commands::Show) => {
            handle_show()?;
        }
        Some(Commands::Reset) => {
            handle_reset()?;
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!("itui starting");

            let store = open_store()?;
            let theme = Theme::from_config(&config);
            let state = AppState::new(store, theme, config.items_per_page);

            ui::run_tui(state)?;
        }
    }

    Ok(())
}

fn handle_add(text: String) -> Result<()> {
    // Same validation as the UI: blank input is silently rejected
    if text.trim().is_empty() {
        return Ok(());
    }

    let mut store = open_store()?;
    store.add_item(Item::new(text));
    println!("Added. {} item(s) stored.", store.len());
    Ok(())
}

fn handle_show() -> Result<()> {
    let store = open_store()?;
    if store.is_empty() {
        println!("No items.");
        return Ok(());
    }

    for item in store.all_items() {
        println!(
            "{}  {}",
            item.created_date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            item.text
        );
    }
    Ok(())
}

fn handle_reset() -> Result<()> {
    let mut store = open_store()?;
    store.reset();
    println!("Store reset.");
    Ok(())
}
