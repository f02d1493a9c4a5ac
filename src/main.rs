//! Routine Advisor - terminal beauty chat
//!
//! Keeps a conversation with a remote completion worker, answering
//! off-topic questions locally.

mod chat_loop;
mod config;
mod conversation;
mod llm;
mod runtime;
mod system_prompt;
mod terminal;
mod topic_filter;

use config::AdvisorConfig;
use llm::{LoggingClient, WorkerClient};
use runtime::ChatSession;
use terminal::TerminalView;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout belongs to the chat
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AdvisorConfig::from_env();
    let system_prompt = system_prompt::load_system_prompt(config.system_prompt_file.as_deref())?;

    let client = LoggingClient::new(WorkerClient::new(
        config.worker_url.clone(),
        config.request_timeout,
    )?);

    let mut session = ChatSession::new(system_prompt, client, TerminalView::new(std::io::stdout()));
    tracing::info!(
        session_id = %session.id(),
        worker = %config.worker_url,
        timeout_secs = ?config.request_timeout.map(|t| t.as_secs()),
        "Advisor session started"
    );

    session.greet();
    terminal::run_repl(&mut session, BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}
