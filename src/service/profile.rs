//! Profile lookups.

use super::{decode_row, decode_rows, PROFILES};
use crate::client::{Backend, Query};
use crate::domain::{Profile, Role, UserId};
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone)]
pub struct UserService {
    backend: Arc<dyn Backend>,
}

impl UserService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Fetch one profile by id. `None` when it is missing or the call fails.
    pub async fn get_profile(&self, user_id: &UserId) -> Option<Profile> {
        let query = Query::new(PROFILES).eq("id", user_id.as_str()).single();

        match self.backend.fetch_single(&query).await.and_then(decode_row) {
            Ok(profile) => Some(profile),
            Err(e) => {
                error!("Error fetching profile: {}", e);
                None
            }
        }
    }

    /// Fetch every profile, or only those with `role` when given.
    pub async fn get_users(&self, role: Option<Role>) -> Vec<Profile> {
        let mut query = Query::new(PROFILES);
        if let Some(role) = role {
            query = query.eq("role", role.as_str());
        }

        match self.backend.fetch(&query).await.and_then(decode_rows) {
            Ok(profiles) => profiles,
            Err(e) => {
                error!("Error fetching users: {}", e);
                Vec::new()
            }
        }
    }
}
