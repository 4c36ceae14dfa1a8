use super::FrequencyTable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by both `/busca/*` endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[schema(example = "Qual o grau de ferimento mais comum em quedas?")]
    pub pergunta: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub resultado: String,

    /// Counts the prompt was grounded on; absent in baseline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<FrequencyTable>,
}

/// Shape of every error body returned by the service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Token inválido")]
    pub error: String,
}
