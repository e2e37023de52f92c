//! JurisIntel Web Server
//!
//! HTTP API for AI-assisted legal research analysis and report export.

use clap::Parser;
use jurisintel_web::server::JurisIntelServerBuilder;
use jurisintel_web::{init_logging, WebConfig};

/// JurisIntel Web Server - legal research analysis API
#[derive(Parser)]
#[command(name = "jurisintel-web")]
#[command(about = "Web API for JurisIntel legal research analysis")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Static files directory
    #[arg(long)]
    static_dir: Option<String>,

    /// JurisIntel configuration file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("jurisintel_web={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration
    let mut config = WebConfig::from_env();

    // Override with command line arguments
    config.host = args.host;
    config.port = args.port;
    config.dev_mode = args.dev;
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }
    if args.config.is_some() {
        config.config_path = args.config;
    }

    println!("🚀 Starting JurisIntel Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    println!("🔧 Development mode: {}", config.dev_mode);

    if let Some(static_dir) = &config.static_dir {
        println!("📁 Static files: {}", static_dir);
    }

    // Check for required environment variables
    if std::env::var("OPENAI_API_KEY").is_err()
        && std::env::var("ANTHROPIC_API_KEY").is_err()
        && std::env::var("GROQ_API_KEY").is_err()
        && std::env::var("OLLAMA_HOST").is_err()
    {
        println!("⚠️  Warning: no LLM credentials found in the environment");
        println!("   Set OPENAI_API_KEY, ANTHROPIC_API_KEY, GROQ_API_KEY or OLLAMA_HOST,");
        println!("   or point --config at a TOML file carrying llm.api_key.");
    }

    let mut builder = JurisIntelServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .dev_mode(config.dev_mode);
    if let Some(static_dir) = config.static_dir.clone() {
        builder = builder.static_dir(static_dir);
    }
    if let Some(config_path) = config.config_path.clone() {
        builder = builder.config_path(config_path);
    }

    let server = match builder.build().await {
        Ok(server) => {
            println!("✅ Server built successfully");
            server
        }
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}
