/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `glasspane init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Glasspane configuration
# Location: ~/.config/glasspane/config.toml

[overlay]
# Window title. Also used as the window class name unless class_name is set.
title = "Glasspane"
# Explicit window class name (leave empty to use the title).
class_name = ""
# Swapchain refresh rate in Hz.
refresh_rate = 60
# Present sync interval: 0 presents immediately, 1 waits for every refresh.
sync_interval = 1
# Show a modal dialog when setup or presentation fails.
error_dialogs = true
# Show the overlay without taking focus from the active window.
no_activate = false
# Use raw pixel coordinates on mixed-DPI setups.
dpi_aware = true

[logging]
# Enable file logging to ~/.config/glasspane/logs/glasspane.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
