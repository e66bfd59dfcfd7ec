use std::path::PathBuf;

use encounter_dashboard::Result;
use encounter_dashboard::config::DashboardConfig;
use encounter_dashboard::dashboard::Session;
use encounter_dashboard::utils::logging::console::{print_filter_options, print_render};
use encounter_dashboard::utils::logging::{create_spinner, finish_progress_bar};
use log::{info, warn};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DashboardConfig::from_json_file(&path)?,
        None => DashboardConfig::default(),
    };
    info!("{config}");

    let spinner = create_spinner(Some("Loading encounters..."));
    let mut session = Session::open(&config)?;
    finish_progress_bar(
        &spinner,
        Some(&format!("Loaded {} encounters", session.table().len())),
    );

    print_filter_options(&session);

    let render = session.render(&config.filters);
    if render.is_no_data() {
        warn!("Nothing to display for the current selection");
    }
    print_render(&render);

    if let Some(path) = &config.export_path {
        let rows = session.export(&config.filters, path)?;
        info!("Exported {rows} filtered encounters to {}", path.display());
    }

    Ok(())
}
