use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// Uses the platform config directory (e.g., ~/.config on Linux), falling
/// back to the current directory if it is unavailable.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nardi-portal")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nardi-portal")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the path of the persisted language preference file.
///
/// One small file holding a single language tag, the terminal analog of the
/// website's single localStorage key.
pub fn get_language_pref_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nardi-portal")
        .join("language")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced() {
        assert!(get_config_path().contains("nardi-portal"));
        assert!(get_log_dir_path().contains("nardi-portal"));
        assert!(get_language_pref_path().ends_with("language"));
    }
}
