use serde_json::{json, Value};

/// Canned ClinicaOn payloads for wiremock-backed tests.
pub struct MockClinicaOnResponses;

impl MockClinicaOnResponses {
    pub fn login_success(token: &str) -> Value {
        json!({
            "sucesso": true,
            "token": token,
            "usuarioid": 7,
            "userName": "u",
            "nomeUsuario": "Usuario Teste",
            "nomeUnidade": "Unidade Centro",
            "unidadeId": 2,
            "tipoAssinatura": 1,
            "nutricional": false
        })
    }

    pub fn login_failure() -> Value {
        json!({"sucesso": false})
    }

    pub fn appointment(id: i64, date: &str, patient: &str) -> Value {
        json!({
            "id": id,
            "data": date,
            "horaInicio": "09:00",
            "horaFim": "09:30",
            "nomePessoa": patient,
            "telefone": null,
            "celular": "11987654321",
            "servicos": ["Consulta"],
            "status": "Confirmado"
        })
    }

    pub fn agenda(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}
