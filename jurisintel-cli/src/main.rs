//! JurisIntel CLI - Command-line interface for legal research analysis
//!
//! Drives the same pipeline as the web API: theme in, normalized analysis
//! out, with report files written to disk.

use clap::{Parser, Subcommand, ValueEnum};
use jurisintel_analysis::{build_research_prompt, AnalysisService};
use jurisintel_core::{
    init_logging, DashboardData, GuidanceData, JurisIntelConfig, JurisResult, LoggingConfig,
};
use jurisintel_report::{ExportFormat, ReportExporter};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "jurisintel")]
#[command(about = "AI-assisted legal research analysis and reports")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a legal analysis for a theme and export reports
    Analyze {
        /// Legal research theme
        theme: String,

        /// Output directory for the report files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format to export
        #[arg(short, long, value_enum, default_value_t = ReportFormatArg::All)]
        format: ReportFormatArg,
    },

    /// Generate a deep-research prompt for external research tools
    Prompt {
        /// Legal research theme
        theme: String,

        /// Comma-separated state court acronyms to prioritize (e.g. "TJSP, TJRJ")
        #[arg(long)]
        courts: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormatArg {
    Html,
    Markdown,
    All,
}

impl ReportFormatArg {
    fn formats(self) -> Vec<ExportFormat> {
        match self {
            ReportFormatArg::Html => vec![ExportFormat::Html],
            ReportFormatArg::Markdown => vec![ExportFormat::Markdown],
            ReportFormatArg::All => vec![ExportFormat::Html, ExportFormat::Markdown],
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    dotenvy::dotenv().ok();

    if let Err(e) = run(cli).await {
        e.log();
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> JurisResult<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Analyze {
            theme,
            output,
            format,
        } => analyze(&config, &theme, output, format).await,
        Commands::Prompt { theme, courts } => {
            let prompt = build_research_prompt(&theme, courts.as_deref())?;
            println!("{}", prompt);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> JurisResult<JurisIntelConfig> {
    let config = match &cli.config {
        Some(path) => JurisIntelConfig::from_file(path)?,
        None => JurisIntelConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn analyze(
    config: &JurisIntelConfig,
    theme: &str,
    output: Option<PathBuf>,
    format: ReportFormatArg,
) -> JurisResult<()> {
    let service = AnalysisService::from_config(config).await?;
    let result = service.analyze(theme).await?;

    // Call-site substitution of empty defaults for missing sections.
    let dashboard = result.dashboard.unwrap_or_else(|| {
        warn!("Dashboard data missing from AI response; substituting empty sections");
        DashboardData::default()
    });
    let guidance = result.guidance.unwrap_or_else(|| {
        warn!("Guidance data missing from AI response; substituting empty guidance");
        GuidanceData::default()
    });

    print_summary(theme, &dashboard, &guidance);

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.report.output_dir));
    let exporter = ReportExporter::new();
    for export_format in format.formats() {
        let path = exporter
            .export_to_dir(
                &output_dir,
                export_format,
                theme,
                Some(&dashboard),
                Some(&guidance),
            )
            .await?;
        println!("📄 Relatório gerado: {}", path.display());
    }

    Ok(())
}

fn print_summary(theme: &str, dashboard: &DashboardData, guidance: &GuidanceData) {
    println!("✅ Análise concluída para: {}", theme);
    println!("   Teses do STJ: {}", dashboard.theses_stj.len());
    println!("   Precedentes: {}", dashboard.precedents.len());
    println!("   Pontos temporais: {}", dashboard.temporal_evolution.len());
    println!(
        "   Evoluções de entendimento: {}",
        dashboard.understanding_evolution.len()
    );
    println!("   Divergências: {}", dashboard.divergences.len());
    println!(
        "   Exemplos de prequestionamento: {}",
        guidance.prequestionamento.examples.len()
    );
    println!(
        "   Elementos do recurso especial: {}",
        guidance.recurso_especial_elements.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_defaults() {
        let cli = Cli::parse_from(["jurisintel", "analyze", "dano moral"]);
        match cli.command {
            Commands::Analyze {
                theme,
                output,
                format,
            } => {
                assert_eq!(theme, "dano moral");
                assert!(output.is_none());
                assert!(matches!(format, ReportFormatArg::All));
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn parses_prompt_with_courts() {
        let cli = Cli::parse_from([
            "jurisintel",
            "prompt",
            "dano moral",
            "--courts",
            "TJSP, TJRJ",
        ]);
        match cli.command {
            Commands::Prompt { theme, courts } => {
                assert_eq!(theme, "dano moral");
                assert_eq!(courts.as_deref(), Some("TJSP, TJRJ"));
            }
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn format_arg_expands_to_export_formats() {
        assert_eq!(ReportFormatArg::All.formats().len(), 2);
        assert_eq!(ReportFormatArg::Html.formats(), vec![ExportFormat::Html]);
        assert_eq!(
            ReportFormatArg::Markdown.formats(),
            vec![ExportFormat::Markdown]
        );
    }
}
