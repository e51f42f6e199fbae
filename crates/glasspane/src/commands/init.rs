use glasspane_core::config;

/// Creates `~/.config/glasspane/config.toml` with every option commented.
/// An existing file is left untouched.
pub fn execute() -> i32 {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        return 1;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        return 1;
    }

    if !write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    ) {
        return 1;
    }

    println!("\nEdit config.toml to change the overlay title, refresh rate and logging.");
    0
}

/// Writes content to a file only if it doesn't already exist.
/// Returns `false` only when the write itself failed.
fn write_if_missing(path: &std::path::Path, content: &str) -> bool {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return true;
    }

    match std::fs::write(path, content) {
        Ok(()) => {
            println!("Created {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            false
        }
    }
}
