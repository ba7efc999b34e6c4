use std::{
    env,
    path::{Path, PathBuf},
};

const HOME_ENV: &str = "FINAWARE_HOME";
const DEFAULT_DIR_NAME: &str = ".finaware";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Application directory, `$FINAWARE_HOME` or `~/.finaware`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_config_dir() {
        let path = config_file_in(Path::new("/tmp/finaware"));
        assert_eq!(path, PathBuf::from("/tmp/finaware/config/config.json"));
    }
}
