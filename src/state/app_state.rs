use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::result_model::BehavioralResult;
use crate::state::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    // Maps result id -> ingested record, shared across handlers
    pub results: Arc<RwLock<HashMap<String, Arc<BehavioralResult>>>>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(session: SessionStore) -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
            session: Arc::new(session),
        }
    }
}
