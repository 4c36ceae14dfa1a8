pub mod context;
pub mod dataset;
pub mod metrics;
pub mod prompts;
pub mod providers;

pub use context::{ContextProvider, DatasetContext};
pub use dataset::{Dataset, DatasetError};
pub use prompts::{compose_prompt, SearchTopic};
