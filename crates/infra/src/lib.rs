mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IReminderRepo, InMemoryReminderRepo, Repos};
use std::sync::Arc;
pub use system::{ISys, RealSys};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReminderContext {
    fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Every call creates a new, empty reminder collection.
pub fn setup_context() -> ReminderContext {
    ReminderContext::create_inmemory()
}
