use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Espera antes de redirigir tras login / sign-up
    pub redirect_delay_ms: u32,
    pub notifications: NotificationConfig,
    pub tables: TableConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            redirect_delay_ms: 2000,
            notifications: NotificationConfig::default(),
            tables: TableConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Páginas CRUD (business / sales)
    pub default_duration_ms: u32,
    pub login_duration_ms: u32,
    pub signup_duration_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 4000,
            login_duration_ms: 3000,
            signup_duration_ms: 6000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub business_page_size: usize,
    pub sales_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            business_page_size: 10,
            sales_page_size: 5,
        }
    }
}

/// Valor de env en compilación parseado, o el default si falta o no parsea
fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            redirect_delay_ms: parse_or(option_env!("REDIRECT_DELAY_MS"), defaults.redirect_delay_ms),
            notifications: NotificationConfig {
                default_duration_ms: parse_or(
                    option_env!("NOTIFICATION_DURATION_MS"),
                    defaults.notifications.default_duration_ms,
                ),
                login_duration_ms: parse_or(
                    option_env!("LOGIN_NOTIFICATION_DURATION_MS"),
                    defaults.notifications.login_duration_ms,
                ),
                signup_duration_ms: parse_or(
                    option_env!("SIGNUP_NOTIFICATION_DURATION_MS"),
                    defaults.notifications.signup_duration_ms,
                ),
            },
            tables: TableConfig {
                business_page_size: parse_or(
                    option_env!("BUSINESS_PAGE_SIZE"),
                    defaults.tables.business_page_size,
                ),
                sales_page_size: parse_or(
                    option_env!("SALES_PAGE_SIZE"),
                    defaults.tables.sales_page_size,
                ),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
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
    fn parse_or_falls_back_on_missing_or_garbage() {
        assert_eq!(parse_or::<u32>(None, 7), 7);
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 42 "), 7), 42);
        assert!(!parse_or(Some("false"), true));
    }

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_production: "https://prod".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "http://localhost:3000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://prod");
    }
}
