use crate::config::DatasetConfig;
use crate::error::SearchError;
use crate::models::FrequencyTable;
use crate::services::{Dataset, SearchTopic};
use std::sync::Arc;

/// Supplies the frequency counts a search prompt is grounded on.
pub trait ContextProvider: Send + Sync {
    fn frequencies(&self, topic: SearchTopic) -> Result<FrequencyTable, SearchError>;

    /// Whether requests can currently be answered.
    fn is_available(&self) -> bool;
}

/// Context backed by the CSV loaded at startup.
///
/// A failed load leaves the dataset absent for the life of the process; every
/// request then fails with [`SearchError::DatasetUnavailable`].
pub struct DatasetContext {
    dataset: Option<Arc<Dataset>>,
    injury_degree_column: String,
    body_part_column: String,
}

impl DatasetContext {
    pub fn new(dataset: Option<Arc<Dataset>>, config: &DatasetConfig) -> Self {
        Self {
            dataset,
            injury_degree_column: config.injury_degree_column.clone(),
            body_part_column: config.body_part_column.clone(),
        }
    }

    /// Load the configured CSV once. Failure is logged, not returned.
    pub fn load(config: &DatasetConfig) -> Self {
        let dataset = match Dataset::load(&config.path) {
            Ok(dataset) => {
                tracing::info!(
                    path = %config.path.display(),
                    rows = dataset.len(),
                    columns = dataset.headers().len(),
                    "Dataset loaded"
                );
                Some(Arc::new(dataset))
            }
            Err(e) => {
                tracing::error!(
                    path = %config.path.display(),
                    error = %e,
                    "Failed to load dataset; dataset-backed searches will fail"
                );
                None
            }
        };

        Self::new(dataset, config)
    }

    fn column_for(&self, topic: SearchTopic) -> &str {
        match topic {
            SearchTopic::InjuryDegree => &self.injury_degree_column,
            SearchTopic::AffectedBodyParts => &self.body_part_column,
        }
    }
}

impl ContextProvider for DatasetContext {
    fn frequencies(&self, topic: SearchTopic) -> Result<FrequencyTable, SearchError> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or(SearchError::DatasetUnavailable)?;
        Ok(dataset.frequencies(self.column_for(topic))?)
    }

    fn is_available(&self) -> bool {
        self.dataset.is_some()
    }
}
