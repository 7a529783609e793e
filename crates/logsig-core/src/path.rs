use std::path::PathBuf;

/// Directory scanned when nothing else is configured.
pub const DEFAULT_LOG_DIR: &str = "/var/log";

/// Resolve the log directory based on priority:
/// 1. Explicit path (`--path`, with tilde expansion)
/// 2. LOGSIG_LOG_DIR environment variable (with tilde expansion)
/// 3. `log_dir` from the configuration file
/// 4. /var/log
pub fn resolve_log_dir(explicit_path: Option<&str>, configured: Option<&str>) -> PathBuf {
    let env_path = std::env::var("LOGSIG_LOG_DIR").ok();
    log_dir_from(explicit_path, env_path.as_deref(), configured)
}

fn log_dir_from(
    explicit_path: Option<&str>,
    env_path: Option<&str>,
    configured: Option<&str>,
) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Some(env_path) = env_path
        && !env_path.is_empty()
    {
        return expand_tilde(env_path);
    }

    if let Some(path) = configured {
        return expand_tilde(path);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (`--config`)
/// 2. LOGSIG_CONFIG environment variable
/// 3. `<config_dir>/logsig/config.toml`
///
/// Returns None when no location can be determined; callers fall back to
/// the default configuration.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LOGSIG_CONFIG")
        && !env_path.is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("logsig").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = resolve_log_dir(Some("/explicit/logs"), Some("/configured/logs"));
        assert_eq!(dir, PathBuf::from("/explicit/logs"));
    }

    #[test]
    fn test_log_dir_priority_chain() {
        let dir = log_dir_from(None, Some("/env/logs"), Some("/configured/logs"));
        assert_eq!(dir, PathBuf::from("/env/logs"));

        let dir = log_dir_from(None, Some(""), Some("/configured/logs"));
        assert_eq!(dir, PathBuf::from("/configured/logs"));

        let dir = log_dir_from(None, None, None);
        assert_eq!(dir, PathBuf::from(DEFAULT_LOG_DIR));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/var/log"), PathBuf::from("/var/log"));
        assert_eq!(expand_tilde("relative/log"), PathBuf::from("relative/log"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(expand_tilde("~/logs"), PathBuf::from(home).join("logs"));
        }
    }

    #[test]
    fn test_explicit_config_path() {
        let path = resolve_config_path(Some("/etc/logsig.toml"));
        assert_eq!(path, Some(PathBuf::from("/etc/logsig.toml")));
    }
}
