use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use chrono::{Duration, NaiveDate};
use tracing::debug;

use shared_clinicaon::{AgendaQuery, ClinicaOnClient};
use shared_models::agenda::{AgendaDateParams, AgendaParams, AgendaResponse};
use shared_models::error::AppError;

// ClinicaOn expects full ISO timestamps; day boundaries sit at 03:00 UTC
// (midnight in the clinic's timezone).
fn to_upstream_timestamp(date: NaiveDate) -> String {
    format!("{}T03:00:00.000Z", date.format("%Y-%m-%d"))
}

fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected yyyy-MM-dd", date)))
}

/// GET /agenda - appointments for a date range, passed through verbatim.
pub async fn get_agenda(
    State(client): State<Arc<ClinicaOnClient>>,
    Query(params): Query<AgendaParams>,
) -> Result<Json<AgendaResponse>, AppError> {
    debug!("Agenda request {} - {}", params.start_date, params.end_date);

    let start = parse_date(&params.start_date)?;
    let end = parse_date(&params.end_date)?;

    let query = AgendaQuery::new(to_upstream_timestamp(start), to_upstream_timestamp(end))
        .exclude_no_shows(params.sem_falta)
        .with_status(params.status);

    let agenda = client.get_agenda(query).await?;
    Ok(Json(AgendaResponse::new(agenda)))
}

/// GET /agenda/date/{date} - single-day convenience lookup.
pub async fn get_agenda_for_date(
    State(client): State<Arc<ClinicaOnClient>>,
    Path(date): Path<String>,
    Query(params): Query<AgendaDateParams>,
) -> Result<Json<AgendaResponse>, AppError> {
    debug!("Agenda request for {}", date);

    let day = parse_date(&date)?;
    let next_day = day + Duration::days(1);

    let query = AgendaQuery::new(to_upstream_timestamp(day), to_upstream_timestamp(next_day))
        .exclude_no_shows(params.sem_falta)
        .with_status(params.status);

    let agenda = client.get_agenda(query).await?;
    Ok(Json(AgendaResponse::for_date(agenda, date)))
}
