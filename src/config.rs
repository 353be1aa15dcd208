/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/* Custom libraries */
use crate::shared::SimulationError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub reader: ReaderConfig,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ReaderConfig {
    pub buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            reader: ReaderConfig::default(),
        }
    }
}

impl Default for ReaderConfig {
    fn default() -> ReaderConfig {
        ReaderConfig {
            buffer_capacity: 8192,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
/// Loads config.toml from the working directory. A missing file is not
/// an error; defaults apply.
pub fn load_config() -> Result<Config, SimulationError> {
    load_config_from(Path::new("config.toml"))
}

fn load_config_from(path: &Path) -> Result<Config, SimulationError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    toml::from_str(&config_str)
        .map_err(|e| SimulationError::Config(format!("invalid configuration file: {}", e)))
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        // Purpose: Verify that an absent config.toml yields the default configuration

        // Arrange & Act
        let config = load_config_from(Path::new("does-not-exist.toml")).unwrap();

        // Assert
        assert_eq!(config.reader.buffer_capacity, 8192);
    }

    #[test]
    fn test_load_from_file() {
        // Purpose: Verify that a config.toml on disk overrides the defaults

        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[reader]\nbuffer_capacity = 1234").unwrap();

        // Act
        let config = load_config_from(&path).unwrap();

        // Assert
        assert_eq!(config.reader.buffer_capacity, 1234);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        // Purpose: Verify that a malformed config.toml fails with a config error

        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[reader\nbuffer_capacity = oops").unwrap();

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(SimulationError::Config(_))));
    }
}
