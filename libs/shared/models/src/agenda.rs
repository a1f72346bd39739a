use serde::{Deserialize, Serialize};

use shared_clinicaon::Appointment;

/// Query string accepted by the agenda routes. Dates are plain `yyyy-MM-dd`;
/// the handlers expand them to the ISO timestamps the upstream expects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaParams {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub sem_falta: bool,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDateParams {
    #[serde(default)]
    pub sem_falta: bool,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AgendaResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub data: Vec<Appointment>,
    pub count: usize,
}

impl AgendaResponse {
    pub fn new(data: Vec<Appointment>) -> Self {
        let count = data.len();
        Self {
            success: true,
            date: None,
            data,
            count,
        }
    }

    pub fn for_date(data: Vec<Appointment>, date: String) -> Self {
        let mut response = Self::new(data);
        response.date = Some(date);
        response
    }
}
