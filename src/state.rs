use crate::config::Config;
use crate::session::Session;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: Config, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}
