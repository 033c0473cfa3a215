use std::io::IsTerminal;

use clap::ArgMatches;
use tracing::{error, info};

use arc_core::{CreateWindowRequest, events, window_ops};

use super::helpers::{executor_for, load_config_with_warning};
use crate::table::TableFormatter;

pub(crate) fn handle_window_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("create", sub_matches)) => handle_create_command(sub_matches),
        Some(("close", sub_matches)) => handle_close_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        _ => {
            error!(event = "cli.window.command_unknown");
            Err("Unknown window command".into())
        }
    }
}

fn handle_create_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let executor = executor_for(&config);

    let request = CreateWindowRequest::new(matches.get_one::<String>("url").cloned())
        .with_incognito(matches.get_flag("incognito"))
        .with_focus(matches.get_one::<String>("focus").cloned());

    info!(
        event = "cli.window.create_started",
        url = ?request.url,
        incognito = request.incognito,
        focus = ?request.focus
    );

    match window_ops::create_window(&executor, &config, &request) {
        Ok(()) => {
            info!(event = "cli.window.create_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to create window: {}", e);
            error!(event = "cli.window.create_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_close_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let executor = executor_for(&config);

    let ids: Vec<String> = matches
        .get_many::<String>("ids")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    info!(event = "cli.window.close_started", ids = ?ids);

    match window_ops::close_windows(&executor, &config, ids.as_slice()) {
        Ok(()) => {
            info!(event = "cli.window.close_completed", count = ids.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to close window: {}", e);
            error!(event = "cli.window.close_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let executor = executor_for(&config);

    info!(event = "cli.window.list_started", json_output = json_output);

    match window_ops::list_windows(&executor, &config) {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if std::io::stdout().is_terminal() {
                TableFormatter::new(&windows).print_table(&windows);
            } else {
                for window in &windows {
                    println!("{}\t{}", window.id, window.title);
                }
            }

            info!(event = "cli.window.list_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to list windows: {}", e);
            error!(event = "cli.window.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
