use std::{collections::HashMap, sync::Arc};

use controller::Controller;
use shared::{
    domain::SessionId,
    error::{ApiError, ErrorCode},
};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

/// One device's controller. Every operation on it goes through this lock.
pub(crate) type SharedController = Arc<Mutex<Controller>>;

pub(crate) struct AppState {
    pub(crate) sessions: SessionRegistry,
    pub(crate) port: u16,
}

impl AppState {
    pub(crate) fn new(port: u16, max_sessions: usize) -> Self {
        Self {
            sessions: SessionRegistry::new(max_sessions),
            port,
        }
    }
}

/// The always-present default controller plus any number of explicitly
/// created ones, up to `max_sessions`.
pub(crate) struct SessionRegistry {
    default: SharedController,
    sessions: RwLock<HashMap<SessionId, SharedController>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub(crate) fn new(max_sessions: usize) -> Self {
        Self {
            default: Arc::new(Mutex::new(Controller::new())),
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    pub(crate) fn default_session(&self) -> SharedController {
        Arc::clone(&self.default)
    }

    pub(crate) async fn create(&self) -> Result<SessionId, ApiError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(ApiError::new(
                ErrorCode::Capacity,
                format!("session limit of {} reached", self.max_sessions),
            ));
        }

        let session_id = SessionId::new_v4();
        sessions.insert(session_id, Arc::new(Mutex::new(Controller::new())));
        info!(%session_id, open = sessions.len(), "session created");
        Ok(session_id)
    }

    pub(crate) async fn get(&self, session_id: SessionId) -> Option<SharedController> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    pub(crate) async fn remove(&self, session_id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&session_id).is_some();
        if removed {
            info!(%session_id, "session closed");
        }
        removed
    }
}
