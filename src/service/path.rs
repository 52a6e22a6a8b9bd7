//! Learning path lookups.

use super::{decode_rows, LEARNING_PATHS};
use crate::client::{Backend, Query};
use crate::domain::LearningPath;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone)]
pub struct PathService {
    backend: Arc<dyn Backend>,
}

impl PathService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Active learning paths, newest first.
    pub async fn get_paths(&self) -> Vec<LearningPath> {
        let query = Query::new(LEARNING_PATHS)
            .eq("is_active", true)
            .order("created_at", false);

        match self.backend.fetch(&query).await.and_then(decode_rows) {
            Ok(paths) => paths,
            Err(e) => {
                error!("Error fetching paths: {}", e);
                Vec::new()
            }
        }
    }
}
