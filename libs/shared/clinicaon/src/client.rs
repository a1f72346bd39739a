// libs/shared/clinicaon/src/client.rs
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, warn};

use shared_config::AppConfig;

use crate::error::ClinicaOnError;
use crate::models::{AgendaQuery, Appointment, LoginRequest, LoginResponse};

/// The single in-process ClinicaOn session.
///
/// Tokens carry no advertised TTL, so validity is optimistic: a stored token
/// is treated as good until the upstream rejects an authenticated call, at
/// which point the session is cleared and callers must log in again.
#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
    issued_at: Option<DateTime<Utc>>,
}

/// Client for the ClinicaOn system API.
///
/// Owns one authenticated session at a time. Intended to be created once by
/// the composition root and shared behind an `Arc`; the session lock is never
/// held across an await, so concurrent `login`/`get_agenda` calls interleave
/// with last-write-wins semantics.
pub struct ClinicaOnClient {
    client: Client,
    base_url: String,
    session: RwLock<Session>,
}

impl ClinicaOnClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.clinicaon_base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session: RwLock::new(Session::default()),
        }
    }

    /// Authenticate with email/password credentials.
    /// POST /api/login
    ///
    /// The stored session is overwritten on success only; a rejected login
    /// leaves any previously established session untouched.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ClinicaOnError> {
        info!("Authenticating against ClinicaOn as {}", email);

        let url = format!("{}/api/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            senha: password.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("ClinicaOn login response: {}", status);

        if !status.is_success() {
            error!("ClinicaOn login rejected: {} - {}", status, response_text);
            return Err(ClinicaOnError::Authentication(format!(
                "HTTP {}: {}",
                status, response_text
            )));
        }

        let login: LoginResponse = serde_json::from_str(&response_text).map_err(|e| {
            ClinicaOnError::Authentication(format!("Failed to parse login response: {}", e))
        })?;

        if !login.sucesso {
            warn!("ClinicaOn rejected credentials for {}", email);
            return Err(ClinicaOnError::Authentication(
                "Invalid credentials".to_string(),
            ));
        }

        // A success flag without a token is unusable; refuse to store it.
        let token = login.token.clone().ok_or_else(|| {
            ClinicaOnError::Authentication("Login response carried no token".to_string())
        })?;

        {
            let mut session = self.session.write().unwrap();
            session.token = Some(token);
            session.issued_at = Some(Utc::now());
        }

        info!("ClinicaOn session established");
        Ok(login)
    }

    /// True iff a token is currently stored. No local expiry timer exists;
    /// see [`Session`] for the invalidation policy.
    pub fn is_token_valid(&self) -> bool {
        self.session.read().unwrap().token.is_some()
    }

    /// The stored token, unvalidated. Combine with [`Self::is_token_valid`].
    pub fn get_token(&self) -> Option<String> {
        self.session.read().unwrap().token.clone()
    }

    pub fn token_issued_at(&self) -> Option<DateTime<Utc>> {
        self.session.read().unwrap().issued_at
    }

    /// Fetch the appointment agenda for a date range.
    /// GET /api/agenda
    ///
    /// Fails fast with `Unauthenticated` before any network call when no
    /// token is stored. An upstream 401/403 clears the session so subsequent
    /// calls require a fresh login. Items are returned in upstream order,
    /// unmodified.
    pub async fn get_agenda(&self, query: AgendaQuery) -> Result<Vec<Appointment>, ClinicaOnError> {
        let token = self.get_token().ok_or(ClinicaOnError::Unauthenticated)?;

        let mut params: Vec<(&str, String)> = vec![
            ("startDate", query.start_date.clone()),
            ("endDate", query.end_date.clone()),
        ];
        if query.exclude_no_shows {
            params.push(("semFalta", "true".to_string()));
        }
        if let Some(status_filter) = &query.status_filter {
            params.push(("status", status_filter.clone()));
        }

        let url = format!("{}/api/agenda", self.base_url);
        debug!("Fetching agenda {} - {}", query.start_date, query.end_date);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("ClinicaOn token rejected ({}), clearing session", status);
            self.clear_session();
            return Err(ClinicaOnError::Unauthenticated);
        }

        let response_text = response.text().await?;

        if !status.is_success() {
            error!("ClinicaOn agenda fetch failed: {} - {}", status, response_text);
            return Err(ClinicaOnError::Upstream {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let appointments: Vec<Appointment> =
            serde_json::from_str(&response_text).map_err(|e| ClinicaOnError::Upstream {
                status: status.as_u16(),
                message: format!("Failed to parse agenda response: {}", e),
            })?;

        debug!("Fetched {} appointments", appointments.len());
        Ok(appointments)
    }

    fn clear_session(&self) {
        let mut session = self.session.write().unwrap();
        session.token = None;
        session.issued_at = None;
    }
}
