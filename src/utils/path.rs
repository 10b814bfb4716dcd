//! Filesystem locations for config and logs.

use std::path::PathBuf;

/// Path to the application config file:
/// `<config_dir>/mimuni/config.toml`, falling back to the home directory.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mimuni")
        .join("config.toml")
}

/// Directory where log files are written:
/// `<cache_dir>/mimuni`, falling back to the home directory.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mimuni")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_toml() {
        let path = config_path();
        assert!(path.ends_with("mimuni/config.toml"));
    }

    #[test]
    fn test_log_dir_ends_with_app_name() {
        let dir = log_dir();
        assert!(dir.ends_with("mimuni"));
    }
}
