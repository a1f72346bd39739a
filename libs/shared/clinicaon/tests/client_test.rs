use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_clinicaon::{AgendaQuery, ClinicaOnClient, ClinicaOnError};

fn login_success_body(token: &str) -> serde_json::Value {
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

fn appointment_body() -> serde_json::Value {
    json!({
        "id": 101,
        "data": "2025-09-03",
        "horaInicio": "09:00",
        "horaFim": "09:30",
        "nomePessoa": "Maria Silva",
        "telefone": null,
        "celular": "11987654321",
        "servicos": ["Consulta", "Retorno"],
        "status": "Confirmado"
    })
}

async fn authenticated_client(server: &MockServer, token: &str) -> ClinicaOnClient {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body(token)))
        .mount(server)
        .await;

    let client = ClinicaOnClient::with_base_url(server.uri());
    client.login("u@x.com", "secret").await.unwrap();
    client
}

#[tokio::test]
async fn test_login_success_establishes_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "u@x.com", "senha": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-1")))
        .mount(&server)
        .await;

    let client = ClinicaOnClient::with_base_url(server.uri());
    let login = client.login("u@x.com", "secret").await.unwrap();

    assert_eq!(login.usuarioid, Some(7));
    assert_eq!(login.user_name.as_deref(), Some("u"));
    assert_eq!(login.nome_unidade.as_deref(), Some("Unidade Centro"));

    assert!(client.is_token_valid());
    assert_eq!(client.get_token().as_deref(), Some("tok-1"));
    assert!(client.token_issued_at().is_some());
}

#[tokio::test]
async fn test_login_rejection_leaves_client_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sucesso": false})))
        .mount(&server)
        .await;

    let client = ClinicaOnClient::with_base_url(server.uri());
    let result = client.login("u@x.com", "wrong").await;

    assert_matches!(result, Err(ClinicaOnError::Authentication(_)));
    assert!(!client.is_token_valid());
    assert!(client.get_token().is_none());
}

#[tokio::test]
async fn test_login_http_error_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = ClinicaOnClient::with_base_url(server.uri());
    let result = client.login("u@x.com", "secret").await;

    assert_matches!(result, Err(ClinicaOnError::Authentication(msg)) => {
        assert!(msg.contains("503"));
    });
}

#[tokio::test]
async fn test_failed_login_preserves_existing_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "u@x.com", "senha": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-1")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "u@x.com", "senha": "wrong"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sucesso": false})))
        .mount(&server)
        .await;

    let client = ClinicaOnClient::with_base_url(server.uri());
    client.login("u@x.com", "secret").await.unwrap();

    let result = client.login("u@x.com", "wrong").await;
    assert_matches!(result, Err(ClinicaOnError::Authentication(_)));

    // The earlier session survives the rejected attempt.
    assert!(client.is_token_valid());
    assert_eq!(client.get_token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_relogin_replaces_token() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-2")))
        .mount(&server)
        .await;

    client.login("u@x.com", "secret").await.unwrap();
    assert_eq!(client.get_token().as_deref(), Some("tok-2"));
}

#[tokio::test]
async fn test_agenda_fails_fast_without_session() {
    let server = MockServer::start().await;
    let client = ClinicaOnClient::with_base_url(server.uri());

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    let result = client.get_agenda(query).await;

    assert_matches!(result, Err(ClinicaOnError::Unauthenticated));
    // Fail-fast: the upstream never saw a request.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_agenda_passes_items_through_verbatim() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(query_param("startDate", "2025-09-03T03:00:00.000Z"))
        .and(query_param("endDate", "2025-09-04T03:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([appointment_body()])))
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    let agenda = client.get_agenda(query).await.unwrap();

    assert_eq!(agenda.len(), 1);
    let item = &agenda[0];
    assert_eq!(item.id, 101);
    assert_eq!(item.data, "2025-09-03");
    assert_eq!(item.hora_inicio, "09:00");
    assert_eq!(item.hora_fim, "09:30");
    assert_eq!(item.nome_pessoa, "Maria Silva");
    assert_eq!(item.telefone, None);
    assert_eq!(item.celular, "11987654321");
    assert_eq!(item.servicos, vec!["Consulta", "Retorno"]);
    assert_eq!(item.status, "Confirmado");
}

#[tokio::test]
async fn test_agenda_forwards_no_show_and_status_filters() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .and(query_param("semFalta", "true"))
        .and(query_param("status", "Confirmado"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z")
        .exclude_no_shows(true)
        .with_status(Some("Confirmado".to_string()));

    client.get_agenda(query).await.unwrap();
}

#[tokio::test]
async fn test_agenda_omits_unset_filters() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .and(query_param_is_missing("semFalta"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    client.get_agenda(query).await.unwrap();
}

#[tokio::test]
async fn test_agenda_unauthorized_clears_session() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    let result = client.get_agenda(query.clone()).await;

    assert_matches!(result, Err(ClinicaOnError::Unauthenticated));
    assert!(!client.is_token_valid());

    // One login plus one rejected agenda call so far.
    let seen = server.received_requests().await.unwrap().len();
    assert_eq!(seen, 2);

    // The next call fails before reaching the network.
    let result = client.get_agenda(query).await;
    assert_matches!(result, Err(ClinicaOnError::Unauthenticated));
    assert_eq!(server.received_requests().await.unwrap().len(), seen);
}

#[tokio::test]
async fn test_agenda_upstream_error_keeps_session() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    let result = client.get_agenda(query).await;

    assert_matches!(result, Err(ClinicaOnError::Upstream { status: 500, message }) => {
        assert!(message.contains("database offline"));
    });
    // Only authorization failures invalidate the session.
    assert!(client.is_token_valid());
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    let client = ClinicaOnClient::with_base_url("http://127.0.0.1:1");

    let result = client.login("u@x.com", "secret").await;
    assert_matches!(result, Err(ClinicaOnError::Network(_)));
}

#[tokio::test]
async fn test_concurrent_login_and_agenda_interleave_safely() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server, "tok-old").await;

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-new")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/agenda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let query = AgendaQuery::new("2025-09-03T03:00:00.000Z", "2025-09-04T03:00:00.000Z");
    let (login, agenda) = tokio::join!(client.login("u@x.com", "secret"), client.get_agenda(query));

    // The agenda call may have observed either token; both are accepted by
    // the upstream here, and the replacement login always wins the session.
    assert!(login.is_ok());
    assert!(agenda.is_ok());
    assert_eq!(client.get_token().as_deref(), Some("tok-new"));
}
