use std::env;
use tracing::warn;

pub const DEFAULT_CLINICAON_BASE_URL: &str = "https://sistema.clinicaon.com.br";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub clinicaon_base_url: String,
    pub clinicaon_email: Option<String>,
    pub clinicaon_password: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            clinicaon_base_url: env::var("CLINICAON_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINICAON_BASE_URL not set, using default");
                    DEFAULT_CLINICAON_BASE_URL.to_string()
                }),
            clinicaon_email: env::var("CLINICAON_EMAIL").ok(),
            clinicaon_password: env::var("CLINICAON_PASSWORD").ok(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using 3000");
                    3000
                }),
        };

        if !config.has_bootstrap_credentials() {
            warn!("CLINICAON_EMAIL/CLINICAON_PASSWORD not set - skipping auto-login at startup");
        }

        config
    }

    pub fn has_bootstrap_credentials(&self) -> bool {
        self.clinicaon_email.is_some() && self.clinicaon_password.is_some()
    }
}
