use glasspane_core::config;

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

pub fn execute() -> i32 {
    println!();
    let mut healthy = check_config_file();
    healthy &= check_log_path();
    healthy &= check_desktop();
    println!();
    if healthy { 0 } else { 1 }
}

fn check_config_file() -> bool {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return false;
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return true;
    }
    match config::try_load() {
        Ok(c) => {
            println!(
                "  {OK} config.toml is valid (\"{}\", {} Hz, sync interval {})",
                c.overlay.title, c.overlay.refresh_rate, c.overlay.sync_interval
            );
            true
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            false
        }
    }
}

fn check_log_path() -> bool {
    let config = config::load();
    if !config.logging.enabled {
        println!("  {OK} File logging disabled");
        return true;
    }
    match glasspane_core::log::log_path() {
        Some(path) => {
            println!("  {OK} Logging at {} to {}", config.logging.level, path.display());
            true
        }
        None => {
            println!("  {FAIL} Could not determine log path");
            false
        }
    }
}

#[cfg(windows)]
fn check_desktop() -> bool {
    if config::load().overlay.dpi_aware {
        glasspane_windows::enable_dpi_awareness();
    }
    match glasspane_windows::monitor::desktop_size() {
        Ok(size) => {
            println!("  {OK} Desktop is {}x{}", size.width, size.height);
            true
        }
        Err(e) => {
            println!("  {FAIL} Could not query desktop size: {e}");
            false
        }
    }
}

#[cfg(not(windows))]
fn check_desktop() -> bool {
    println!("  {WARN} Overlay requires Windows; display checks skipped");
    true
}
