//! Prompt text sent to the inference provider.
//!
//! Composition is pure: the same topic, question and context always produce
//! the same prompt. The question is embedded verbatim.

use crate::models::FrequencyTable;
use std::fmt::Write;

/// The two question families served by the `/busca` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTopic {
    InjuryDegree,
    AffectedBodyParts,
}

impl SearchTopic {
    /// Route segment and metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTopic::InjuryDegree => "grau-ferimento",
            SearchTopic::AffectedBodyParts => "partes-corpo-afetadas",
        }
    }
}

const DATASET_NAME: &str = "dataset do Kaggle sobre acidentes (OSHA 2015-2017)";

/// Build the prompt for `topic`, grounding it on `context` when present.
pub fn compose_prompt(
    topic: SearchTopic,
    question: &str,
    context: Option<&FrequencyTable>,
) -> String {
    match (topic, context) {
        (SearchTopic::InjuryDegree, None) => format!(
            "Analise a seguinte pergunta e determine o grau do ferimento: {}",
            question
        ),
        (SearchTopic::InjuryDegree, Some(table)) => format!(
            "Distribuição dos graus de ferimento registrados no {}:\n{}\n\
             Com base nesses dados, responda a seguinte pergunta: {}\n\
             Resuma os graus de ferimento mais comuns relevantes para a pergunta.",
            DATASET_NAME,
            render_table(table),
            question
        ),
        (SearchTopic::AffectedBodyParts, None) => format!(
            "Utilize os dados do {} para responder a seguinte pergunta: {}. \
             Identifique as partes do corpo mais afetadas e forneça uma análise resumida.",
            DATASET_NAME, question
        ),
        (SearchTopic::AffectedBodyParts, Some(table)) => format!(
            "Distribuição das partes do corpo afetadas registradas no {}:\n{}\n\
             Com base nesses dados, responda a seguinte pergunta: {}\n\
             Identifique as partes do corpo mais afetadas e forneça uma análise resumida.",
            DATASET_NAME,
            render_table(table),
            question
        ),
    }
}

/// One `- label: count` line per entry, in table order.
fn render_table(table: &FrequencyTable) -> String {
    if table.is_empty() {
        return "- (sem registros)".to_string();
    }

    let mut out = String::new();
    for (i, (label, count)) in table.entries().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "- {}: {}", label, count);
    }
    out
}
