pub mod agent;
pub mod cli;
pub mod llm;
pub mod models;
pub mod monday;
pub mod server;

use agent::BiAgent;
use cli::Args;
use log::{info, warn};
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let agent = Arc::new(BiAgent::new(&args)?);

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Monday Base URL: {}", args.monday_base_url);
    info!("Work Orders Board ID: {}", args.work_orders_board_id.as_deref().unwrap_or("<not set>"));
    info!("Deals Board ID: {}", args.deals_board_id.as_deref().unwrap_or("<not set>"));
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("Chat Model: {}", agent.chat_model());
    info!("-------------------------");

    // Best-effort board listing so an operator can see which ids to put in
    // WORK_ORDERS_BOARD_ID / DEALS_BOARD_ID. Never blocks startup.
    match agent.monday().list_boards().await {
        Ok(envelope) => log_available_boards(&envelope),
        Err(e) => warn!("Could not fetch boards: {}", e),
    }

    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, agent);
    server.run().await?;

    Ok(())
}

fn log_available_boards(envelope: &serde_json::Value) {
    let Some(boards) = envelope.pointer("/data/boards").and_then(|b| b.as_array()) else {
        warn!("Unexpected boards envelope: {}", envelope);
        return;
    };

    info!("Available boards:");
    for board in boards {
        let name = board.get("name").and_then(|v| v.as_str()).unwrap_or("?");
        let id = board.get("id").and_then(|v| v.as_str()).unwrap_or("?");
        info!("  - {}: {}", name, id);
    }
    info!("Add these IDs to your .env file!");
}
