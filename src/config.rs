use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Duración por defecto del cuestionario (10 minutos).
pub const DEFAULT_TIME_LIMIT_SECONDS: u32 = 600;

/// Fichero de configuración buscado en el directorio de trabajo.
pub const CONFIG_FILE: &str = "edublink.yaml";

/// Variable de entorno que sustituye la ruta del fichero.
pub const CONFIG_ENV: &str = "EDUBLINK_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizConfig {
    /// Segundos de la cuenta atrás de cada intento.
    pub time_limit_seconds: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Un fichero vacío equivale a la configuración por defecto
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: QuizConfig = serde_yaml::from_str(content)?;
        if config.time_limit_seconds == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Lee `EDUBLINK_CONFIG` o `edublink.yaml`; si no existe o es inválido,
    /// usa los valores por defecto.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        let path = Path::new(&path);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("loaded config from {}: {config:?}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_minutes() {
        assert_eq!(QuizConfig::default().time_limit_seconds, 600);
        assert_eq!(QuizConfig::from_yaml_str("").unwrap(), QuizConfig::default());
    }

    #[test]
    fn time_limit_override_uses_camel_case_key() {
        let config = QuizConfig::from_yaml_str("timeLimitSeconds: 90").unwrap();
        assert_eq!(config.time_limit_seconds, 90);
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        assert!(matches!(
            QuizConfig::from_yaml_str("timeLimitSeconds: 0"),
            Err(ConfigError::ZeroTimeLimit)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuizConfig::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
