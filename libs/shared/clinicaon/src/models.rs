use serde::{Deserialize, Serialize};

// ==============================================================================
// UPSTREAM WIRE MODELS
// ==============================================================================
// Field names mirror the ClinicaOn API verbatim; appointment data is passed
// through to facade consumers without reshaping.

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub sucesso: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub usuarioid: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub nome_usuario: Option<String>,
    #[serde(default)]
    pub nome_unidade: Option<String>,
    #[serde(default)]
    pub unidade_id: Option<i64>,
    #[serde(default)]
    pub tipo_assinatura: Option<i64>,
    #[serde(default)]
    pub nutricional: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    /// Appointment date, yyyy-MM-dd.
    pub data: String,
    /// Start time, HH:mm.
    pub hora_inicio: String,
    /// End time, HH:mm.
    pub hora_fim: String,
    pub nome_pessoa: String,
    pub telefone: Option<String>,
    pub celular: String,
    pub servicos: Vec<String>,
    pub status: String,
}

/// One agenda lookup. Immutable once constructed; dates are full ISO-8601
/// timestamps as the upstream expects them.
#[derive(Debug, Clone)]
pub struct AgendaQuery {
    pub start_date: String,
    pub end_date: String,
    pub exclude_no_shows: bool,
    pub status_filter: Option<String>,
}

impl AgendaQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            exclude_no_shows: false,
            status_filter: None,
        }
    }

    pub fn exclude_no_shows(mut self, exclude: bool) -> Self {
        self.exclude_no_shows = exclude;
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status_filter = status;
        self
    }
}
