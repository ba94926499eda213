use std::io::{stdin, stdout, Write};

use anyhow::Result;
use dotenvy::dotenv;
use tracing::warn;

use agent::{LlmConfig, SqlAgent};
use connection::{ConnectionDescriptor, DatabaseKind};
use session::ChatSessionState;

mod agent;
mod connection;
mod error;
mod session;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();
    sqlx::any::install_default_drivers();

    let llm = LlmConfig::from_env();
    let mut state = ChatSessionState::new();

    println!("DB schema chat assistant. /connect to reach a database, /help for commands.");

    loop {
        print!("> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => {}
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/connect" => {
                if let Err(e) = handle_connect(&mut state, &llm).await {
                    warn!(error = %e, "connection attempt failed");
                    println!("error: {e}");
                }
            }
            question => match state.dispatch(question).await {
                Ok(()) => {
                    if let Some(message) = state.transcript.last() {
                        println!("{}", message.content);
                    }
                }
                Err(e) => println!("error: {e}"),
            },
        }
    }

    Ok(())
}

/// Collects the connection form, builds the connection string and swaps in a
/// new agent session. On any failure the previous session stays as it was.
async fn handle_connect(state: &mut ChatSessionState, llm: &LlmConfig) -> Result<()> {
    let descriptor = read_connection_form()?;
    descriptor.validate()?;

    let session = SqlAgent::connect(&descriptor.connection_string(), llm).await?;
    state.replace_session(Box::new(session));

    println!("Successfully connected to {}.", descriptor.database);
    Ok(())
}

fn read_connection_form() -> Result<ConnectionDescriptor> {
    let kind: DatabaseKind =
        prompt_with_default("Database kind (postgresql/mysql)", "postgresql")?.parse()?;

    let host = prompt_with_default("Host", "localhost")?;
    let port = prompt_with_default("Port", &kind.default_port().to_string())?;
    let database = prompt("Database name")?;
    let username = prompt("Username")?;
    let secret = prompt("Password")?;

    Ok(ConnectionDescriptor {
        kind,
        host,
        port,
        database,
        username,
        secret,
    })
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    let value = prompt(&format!("{label} [{default}]"))?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

fn print_help() {
    println!("/connect  connect to a database (replaces the current session)");
    println!("/help     show this help");
    println!("/quit     exit");
    println!("Anything else is sent to the agent as a question about the connected database.");
}
