use clap::Args;
use glasspane_core::config::{self, Config};
use glasspane_core::{log, log_info};

#[derive(Args)]
pub struct RunArgs {
    /// Window title, overriding the config file
    #[arg(long)]
    pub title: Option<String>,
    /// Present sync interval, overriding the config file
    #[arg(long)]
    pub sync_interval: Option<u32>,
}

/// Loads the config, applies command-line overrides and clamps the result.
fn resolve(args: &RunArgs) -> Config {
    let mut config = config::load();
    if let Some(title) = &args.title {
        config.overlay.title = title.clone();
    }
    if let Some(interval) = args.sync_interval {
        config.overlay.sync_interval = interval;
    }
    config.validate();
    config
}

#[cfg(windows)]
pub fn execute(args: &RunArgs) -> i32 {
    use glasspane_core::{NullGui, log_debug, log_error, run_overlay};
    use glasspane_windows::Win32Platform;

    let config = resolve(args);
    log::init(&config.logging);
    log_info!("starting overlay \"{}\"", config.overlay.title);

    if config.overlay.dpi_aware {
        glasspane_windows::enable_dpi_awareness();
    }

    let platform = match Win32Platform::current() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: could not get module handle: {e}");
            return 1;
        }
    };

    let mut frames: u64 = 0;
    let renderer = move || {
        frames += 1;
        if frames % 600 == 0 {
            log_debug!("rendered {frames} frames");
        }
    };

    match run_overlay(platform, NullGui, config.overlay.to_options(), renderer) {
        Ok(summary) => {
            log_info!("overlay closed after {} frames", summary.frames);
            0
        }
        Err(e) => {
            log_error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(not(windows))]
pub fn execute(args: &RunArgs) -> i32 {
    let config = resolve(args);
    log::init(&config.logging);
    log_info!("refusing to start \"{}\" on a non-Windows host", config.overlay.title);
    eprintln!("Error: the overlay requires Windows (DWM and Direct3D 11).");
    1
}
