use serde::{Deserialize, Serialize};

use shared_clinicaon::LoginResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields surfaced to facade consumers after a successful login.
/// Names follow the upstream vocabulary so existing ClinicaOn integrations
/// can consume them unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<i64>,
    pub user_name: Option<String>,
    pub nome_usuario: Option<String>,
    pub nome_unidade: Option<String>,
    pub unidade_id: Option<i64>,
    pub tipo_assinatura: Option<i64>,
    pub nutricional: Option<bool>,
}

impl From<&LoginResponse> for UserProfile {
    fn from(login: &LoginResponse) -> Self {
        Self {
            id: login.usuarioid,
            user_name: login.user_name.clone(),
            nome_usuario: login.nome_usuario.clone(),
            nome_unidade: login.nome_unidade.clone(),
            unidade_id: login.unidade_id,
            tipo_assinatura: login.tipo_assinatura,
            nutricional: login.nutricional,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginSuccessResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub token: Option<String>,
}
