//! Generated OpenAPI document served next to Swagger UI.

use crate::handlers::{health, search};
use crate::models::{ErrorResponse, FrequencyTable, SearchRequest, SearchResponse};
use service_core::middleware::API_TOKEN_HEADER;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

/// Where the JSON document is served; Swagger UI lives under `/docs`.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trabalho_API_AAB",
        version = "1.0.0",
        description = "API para busca de informações sobre:
- **Grau de Ferimento:** Recebe uma pergunta e retorna uma análise quanto ao grau do ferimento.
- **Partes do Corpo Afetadas:** Recebe uma pergunta e utiliza dados do dataset de acidentes (OSHA) para identificar partes do corpo afetadas, com processamento via API Groq.

**Observações de segurança:**
- Autenticação via token simples (API_TOKEN) no header `api_token`.
- Validação do corpo JSON.
- Logs e tratamento de erros com códigos HTTP apropriados."
    ),
    paths(
        health::health_check,
        health::readiness_check,
        search::search_injury_degree,
        search::search_affected_body_parts,
    ),
    components(schemas(SearchRequest, SearchResponse, FrequencyTable, ErrorResponse)),
    modifiers(&ApiTokenScheme),
    tags(
        (name = "Buscas", description = "Perguntas sobre acidentes respondidas pelo modelo"),
        (name = "Observability", description = "Service health and readiness"),
    )
)]
pub struct ApiDoc;

struct ApiTokenScheme;

impl Modify for ApiTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_TOKEN_HEADER))),
            );
        }
    }
}
