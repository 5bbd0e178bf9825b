// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env! + .env)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_title: String,
    /// ID del elemento donde se monta la app
    pub mount_id: String,
    /// Prefijo bajo el que se sirve la app ("/" o "/algo")
    pub base_path: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Encryption Analyzer".to_string(),
            mount_id: "app".to_string(),
            base_path: "/".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("APP_TITLE"),
            option_env!("MOUNT_ID"),
            option_env!("BASE_PATH"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        app_title: Option<&str>,
        mount_id: Option<&str>,
        base_path: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        let defaults = Self::default();

        Self {
            app_title: non_empty(app_title)
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            mount_id: non_empty(mount_id)
                .map(|id| id.trim_start_matches('#').to_string())
                .unwrap_or(defaults.mount_id),
            base_path: non_empty(base_path)
                .map(normalize_base_path)
                .unwrap_or(defaults.base_path),
            environment: non_empty(environment)
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: non_empty(enable_logging)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: non_empty(log_level)
                .filter(|v| v.parse::<log::Level>().is_ok())
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel de log para wasm_logger (cae a Info si no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Normaliza el base path: siempre empieza por "/" y nunca termina en "/" (salvo la raíz)
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = AppConfig::from_values(
            Some("  "),
            Some(""),
            None,
            None,
            Some("maybe"),
            Some("verbose"),
        );
        assert_eq!(config.app_title, "Encryption Analyzer");
        assert_eq!(config.mount_id, "app");
        assert!(config.enable_logging);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn explicit_values_are_used() {
        let config = AppConfig::from_values(
            Some("Cipher Lab"),
            Some("#root"),
            Some("analyzer/"),
            Some("production"),
            Some("false"),
            Some("DEBUG"),
        );
        assert_eq!(config.app_title, "Cipher Lab");
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.base_path, "/analyzer");
        assert_eq!(config.environment, "production");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn base_path_normalization() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("app"), "/app");
        assert_eq!(normalize_base_path("/app/"), "/app");
        assert_eq!(normalize_base_path("/a/b/"), "/a/b");
    }
}
