pub mod api;

use crate::agent::BiAgent;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    addr: String,
    agent: Arc<BiAgent>,
}

impl Server {
    pub fn new(addr: String, agent: Arc<BiAgent>) -> Self {
        Self { addr, agent }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::serve(&self.addr, self.agent.clone()).await
    }
}
