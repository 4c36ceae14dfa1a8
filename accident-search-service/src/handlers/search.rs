use super::AppJson;
use crate::error::SearchError;
use crate::models::{ErrorResponse, SearchRequest, SearchResponse};
use crate::services::{compose_prompt, metrics, SearchTopic};
use crate::startup::AppState;
use axum::{extract::State, Json};
use std::time::Instant;

/// Busca grau de ferimento
///
/// Recebe uma pergunta via JSON e retorna uma análise sobre o grau do ferimento, utilizando a API Groq.
#[utoipa::path(
    post,
    path = "/busca/grau-ferimento",
    params(
        ("api_token" = String, Header, description = "Token de autenticação da API")
    ),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Resposta do modelo", body = SearchResponse),
        (status = 400, description = "Corpo JSON malformado", body = ErrorResponse),
        (status = 401, description = "Token ausente ou inválido", body = ErrorResponse),
        (status = 415, description = "Content-Type diferente de application/json", body = ErrorResponse),
        (status = 422, description = "Campo pergunta ausente", body = ErrorResponse),
        (status = 500, description = "Dataset indisponível ou falha na inferência", body = ErrorResponse)
    ),
    tag = "Buscas"
)]
pub async fn search_injury_degree(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResponse>, SearchError> {
    tracing::info!(pergunta = %request.pergunta, "Received injury degree search");
    search(&state, SearchTopic::InjuryDegree, &request.pergunta)
        .await
        .map(Json)
}

/// Busca partes do corpo afetadas
///
/// Recebe uma pergunta via JSON para identificar partes do corpo afetadas em acidentes, utilizando dados do dataset de acidentes e a API Groq para processamento.
#[utoipa::path(
    post,
    path = "/busca/partes-corpo-afetadas",
    params(
        ("api_token" = String, Header, description = "Token de autenticação da API")
    ),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Resposta do modelo", body = SearchResponse),
        (status = 400, description = "Corpo JSON malformado", body = ErrorResponse),
        (status = 401, description = "Token ausente ou inválido", body = ErrorResponse),
        (status = 415, description = "Content-Type diferente de application/json", body = ErrorResponse),
        (status = 422, description = "Campo pergunta ausente", body = ErrorResponse),
        (status = 500, description = "Dataset indisponível ou falha na inferência", body = ErrorResponse)
    ),
    tag = "Buscas"
)]
pub async fn search_affected_body_parts(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResponse>, SearchError> {
    tracing::info!(pergunta = %request.pergunta, "Received affected body parts search");
    search(&state, SearchTopic::AffectedBodyParts, &request.pergunta)
        .await
        .map(Json)
}

async fn search(
    state: &AppState,
    topic: SearchTopic,
    question: &str,
) -> Result<SearchResponse, SearchError> {
    let result = answer(state, topic, question).await;
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_search(topic.as_str(), outcome);
    result
}

async fn answer(
    state: &AppState,
    topic: SearchTopic,
    question: &str,
) -> Result<SearchResponse, SearchError> {
    // Without a context provider the dataset is never touched.
    let dados = state
        .context
        .as_ref()
        .map(|provider| provider.frequencies(topic))
        .transpose()?;

    let prompt = compose_prompt(topic, question, dados.as_ref());

    let started = Instant::now();
    let resultado = state
        .inference
        .complete(&prompt)
        .await
        .inspect_err(|e| metrics::record_inference_error(e.kind()))?;
    metrics::record_inference_duration(state.inference.model(), started.elapsed());

    tracing::info!(
        topic = topic.as_str(),
        model = %state.inference.model(),
        reply_len = resultado.len(),
        "Inference reply received"
    );

    Ok(SearchResponse { resultado, dados })
}
