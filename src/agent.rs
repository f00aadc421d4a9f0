use serde_json::Value;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

use crate::cli::Args;
use crate::llm::chat::{new_client, ChatClient};
use crate::llm::{LlmConfig, LlmType};
use crate::monday::{MondayClient, MondayConfig, MondayError};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("No query provided")]
    EmptyQuery,

    #[error("{0}")]
    Monday(#[from] MondayError),

    #[error("{0}")]
    Completion(String),
}

/// The whole pipeline behind `/ask`: fetch both boards, build the prompt,
/// ask the chat backend. Owns the process-wide clients; holds no per-request
/// state, so a single instance is shared across all requests.
pub struct BiAgent {
    monday: MondayClient,
    chat: Arc<dyn ChatClient>,
}

impl BiAgent {
    pub fn new(args: &Args) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let llm_type = args.chat_llm_type.parse::<LlmType>()?;
        let api_key = match llm_type {
            LlmType::Anthropic => args.anthropic_api_key.clone(),
            LlmType::Groq => args.groq_api_key.clone(),
        };

        let chat = new_client(&LlmConfig {
            llm_type,
            api_key: Some(api_key),
            completion_model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
        })?;

        let monday = MondayClient::new(MondayConfig {
            api_key: args.monday_api_key.clone(),
            base_url: args.monday_base_url.clone(),
            work_orders_board_id: args.work_orders_board_id.clone(),
            deals_board_id: args.deals_board_id.clone(),
        })?;

        Ok(Self { monday, chat })
    }

    pub fn monday(&self) -> &MondayClient {
        &self.monday
    }

    /// Model the chat backend will answer with, resolved to the provider
    /// default when no override is configured.
    pub fn chat_model(&self) -> String {
        self.chat.get_model()
    }

    pub async fn answer(&self, question: &str) -> Result<String, AgentError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AgentError::EmptyQuery);
        }

        let dataset = self.monday.board_dataset().await?;
        let prompt = build_prompt(&dataset, question);

        let completion = self.chat
            .complete(&prompt)
            .await
            .map_err(|e| AgentError::Completion(e.to_string()))?;

        Ok(completion.response)
    }
}

/// Pure function of its inputs: same dataset and question produce a
/// byte-identical prompt. The dataset goes in verbatim, messiness and
/// per-board error envelopes included, for the model to interpret.
pub fn build_prompt(dataset: &Value, question: &str) -> String {
    let data = serde_json::to_string_pretty(dataset).unwrap_or_else(|_| dataset.to_string());

    format!(
        "You are a business intelligence analyst examining Monday.com data.\n\
         \n\
         You have access to two boards:\n\
         1. Work Orders - Project execution data\n\
         2. Deals - Sales pipeline data\n\
         \n\
         The data contains real-world messiness: missing values, inconsistent formats, incomplete records.\n\
         \n\
         Here's the data:\n\
         {data}\n\
         \n\
         User Question: {question}\n\
         \n\
         Provide a clear, insightful business intelligence answer. Handle data quality issues \
         gracefully and mention any caveats. Focus on actionable insights that would help \
         executives make decisions.\n\
         \n\
         If the question asks for leadership updates or summaries, provide:\n\
         - Key metrics and trends\n\
         - Notable insights or concerns\n\
         - Actionable recommendations\n"
    )
}
