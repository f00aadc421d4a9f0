use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:5000")]
    pub server_addr: String,

    // --- Monday.com Args ---
    /// API key for the Monday.com GraphQL API
    #[arg(long, env = "MONDAY_API_KEY", default_value = "")]
    pub monday_api_key: String,

    /// Base URL for the Monday.com GraphQL API
    #[arg(long, env = "MONDAY_BASE_URL", default_value = "https://api.monday.com/v2")]
    pub monday_base_url: String,

    /// Board id holding work orders (project execution data)
    #[arg(long, env = "WORK_ORDERS_BOARD_ID")]
    pub work_orders_board_id: Option<String>,

    /// Board id holding deals (sales pipeline data)
    #[arg(long, env = "DEALS_BOARD_ID")]
    pub deals_board_id: Option<String>,

    // --- Chat LLM Provider Args ---
    /// Type of LLM provider for chat completion (anthropic, groq)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "anthropic")]
    pub chat_llm_type: String,

    /// API Key for the Anthropic API
    #[arg(long, env = "ANTHROPIC_API_KEY", default_value = "")]
    pub anthropic_api_key: String,

    /// API Key for the Groq API
    #[arg(long, env = "GROQ_API_KEY", default_value = "")]
    pub groq_api_key: String,

    /// Model name for chat completion (e.g., claude-sonnet-4-20250514, llama-3.3-70b-versatile)
    #[arg(long, env = "CHAT_MODEL")] // No default, let adapters pick per provider
    pub chat_model: Option<String>,

    /// Base URL override for the chat provider API
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,
}
