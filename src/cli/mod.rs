use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::core::content::Envelope;
use crate::core::tool::JsonObject;
use crate::infra::config::{Config, Transport};
use crate::infra::mcp::QuranSvc;

#[derive(Parser)]
#[command(name = "quran-mcp")]
#[command(about = "Quran MCP server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server (default)
    Serve {
        /// Serve MCP over HTTP + Server-Sent Events
        #[arg(long, conflicts_with = "stdio")]
        sse: bool,
        /// Serve MCP over stdin/stdout
        #[arg(long)]
        stdio: bool,
    },
    /// Load and print the resolved configuration
    Config,
    /// List the tool catalog
    Tools,
    /// Run one tool against the configured Quran API
    Call {
        /// Tool name, e.g. `chapter_by_id`
        name: String,
        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command).await
}

pub async fn run_commands(command: Option<Commands>) -> ExitCode {
    match command.unwrap_or(Commands::Serve { sse: false, stdio: false }) {
        Commands::Serve { sse, stdio } => match serve(sse, stdio).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server failed");
                ExitCode::FAILURE
            }
        },
        Commands::Config => match Config::load() {
            Ok(cfg) => {
                print!("{}", describe_config(&cfg));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration invalid: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Tools => {
            for tool in list_tools() {
                println!("{tool}");
            }
            ExitCode::SUCCESS
        }
        Commands::Call { name, args } => {
            let result = match Config::load() {
                Ok(cfg) => call_tool(&cfg, &name, args.as_deref()).await,
                Err(e) => Err(e.into()),
            };
            match result {
                Ok(envelope) => {
                    println!("{}", envelope.as_text());
                    if envelope.is_error {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn serve(sse: bool, stdio: bool) -> anyhow::Result<()> {
    let mut cfg = Config::load()?;
    if sse {
        cfg.transport = Transport::Sse;
    } else if stdio {
        cfg.transport = Transport::Stdio;
    }
    crate::infra::boot::run_server(cfg).await
}

fn describe_config(cfg: &Config) -> String {
    format!(
        "📋 Configuration:\n  Transport: {}\n  Listen: {}:{}\n  Quran API: {}\n  Connect timeout: {} ms\n  Request timeout: {}\n",
        cfg.transport,
        cfg.host,
        cfg.port,
        cfg.api.base_url,
        cfg.api.connect_timeout_ms,
        cfg.api
            .timeout_ms
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "none".into()),
    )
}

fn list_tools() -> Vec<String> {
    let mut tools = crate::tools::catalog();
    tools.sort_by_key(|t| t.name);
    tools
        .iter()
        .map(|t| format!("{:<18} {}", t.name, t.description))
        .collect()
}

async fn call_tool(cfg: &Config, name: &str, args: Option<&str>) -> anyhow::Result<Envelope> {
    let arguments = match args {
        Some(raw) => match serde_json::from_str::<serde_json::Value>(raw)? {
            serde_json::Value::Object(map) => Some(map),
            other => anyhow::bail!("--args must be a JSON object, got {other}"),
        },
        None => None::<JsonObject>,
    };
    let svc = QuranSvc::from_config(&cfg.api)?;
    svc.dispatch(name, arguments)
        .await
        .ok_or_else(|| anyhow::anyhow!("unknown tool: {name}"))
}
