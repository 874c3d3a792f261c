use std::sync::Arc;

use crate::config::Config;
use crate::db::DocumentStore;
use crate::email::EmailSender;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub mailer: Option<Arc<dyn EmailSender>>,
    pub config: Config,
}
