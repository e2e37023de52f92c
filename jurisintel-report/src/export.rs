//! Report export
//!
//! Derives download metadata (filename, MIME type) from the search theme,
//! blocks exports when there is no data, and writes report files to disk.

use crate::{render_html_report, render_markdown_report};
use chrono::Local;
use jurisintel_core::{DashboardData, ErrorContext, GuidanceData, JurisError, JurisResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Filename prefix shared by both report formats.
pub const FILENAME_PREFIX: &str = "JurisIntel_Relatorio";

/// Fixed stem used when the theme sanitizes down to nothing.
pub const DEFAULT_FILENAME_STEM: &str = "Relatorio_JurisIntel";

/// Report formats supported by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Self-contained styled HTML document
    Html,
    /// Markdown document
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html;charset=utf-8",
            ExportFormat::Markdown => "text/markdown;charset=utf-8",
        }
    }

    /// Resolve a format from its request name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(ExportFormat::Html),
            "markdown" | "md" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }
}

/// A fully built report ready for download or file writing.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Reduce a theme to filename-safe characters.
///
/// Keeps Unicode letters and digits, whitespace, `.`, `-` and `_`; drops
/// everything else; then collapses each whitespace run to a single
/// underscore.
pub fn sanitize_theme(theme: &str) -> String {
    let kept: String = theme
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '-' | '_'))
        .collect();

    let mut sanitized = String::with_capacity(kept.len());
    let mut in_whitespace = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
                in_whitespace = true;
            }
        } else {
            sanitized.push(c);
            in_whitespace = false;
        }
    }
    sanitized
}

/// Derive the download filename for a theme and format.
pub fn report_filename(theme: &str, format: ExportFormat) -> String {
    let sanitized = sanitize_theme(theme.trim());
    let stem = if sanitized.is_empty() {
        DEFAULT_FILENAME_STEM.to_string()
    } else {
        sanitized
    };
    format!("{}_{}.{}", FILENAME_PREFIX, stem, format.extension())
}

/// Build a downloadable report document.
///
/// Export is blocked when both dashboard and guidance are absent; the
/// error carries the user-facing notice.
pub fn build_report(
    format: ExportFormat,
    theme: &str,
    dashboard: Option<&DashboardData>,
    guidance: Option<&GuidanceData>,
    generated_at: chrono::DateTime<Local>,
) -> JurisResult<ReportDocument> {
    if dashboard.is_none() && guidance.is_none() {
        return Err(JurisError::Export {
            message: "Não há dados para gerar o relatório.".to_string(),
            context: ErrorContext::new("report_export")
                .with_operation("build_report")
                .with_suggestion("Run an analysis before exporting"),
        });
    }

    let content = match format {
        ExportFormat::Html => render_html_report(theme, dashboard, guidance, generated_at),
        ExportFormat::Markdown => render_markdown_report(theme, dashboard, guidance, generated_at),
    };

    debug!(
        format = format.extension(),
        bytes = content.len(),
        "Built report document"
    );

    Ok(ReportDocument {
        filename: report_filename(theme, format),
        mime_type: format.mime_type(),
        content,
    })
}

/// Writes report documents to the filesystem.
pub struct ReportExporter;

impl ReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a report into a directory, creating it if needed.
    ///
    /// Returns the path of the written file.
    pub async fn export_to_dir(
        &self,
        output_dir: &Path,
        format: ExportFormat,
        theme: &str,
        dashboard: Option<&DashboardData>,
        guidance: Option<&GuidanceData>,
    ) -> JurisResult<PathBuf> {
        let document = build_report(format, theme, dashboard, guidance, Local::now())?;

        fs::create_dir_all(output_dir).await?;
        let path = output_dir.join(&document.filename);
        fs::write(&path, &document.content).await?;

        info!(
            "Exported {} report to {:?}",
            format.extension(),
            path
        );
        Ok(path)
    }
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_punctuation_and_collapses_whitespace() {
        assert_eq!(
            sanitize_theme("Responsabilidade Civil do Estado?!"),
            "Responsabilidade_Civil_do_Estado"
        );
    }

    #[test]
    fn sanitization_is_unicode_aware() {
        assert_eq!(sanitize_theme("Ação Rescisória"), "Ação_Rescisória");
        assert_eq!(sanitize_theme("dano (moral)"), "dano_moral");
    }

    #[test]
    fn keeps_period_hyphen_and_underscore() {
        assert_eq!(sanitize_theme("art. 1.022 - CPC_15"), "art._1.022_-_CPC_15");
    }

    #[test]
    fn blank_theme_falls_back_to_fixed_filename() {
        assert_eq!(
            report_filename("", ExportFormat::Html),
            "JurisIntel_Relatorio_Relatorio_JurisIntel.html"
        );
        assert_eq!(
            report_filename("?!", ExportFormat::Markdown),
            "JurisIntel_Relatorio_Relatorio_JurisIntel.md"
        );
    }

    #[test]
    fn filename_combines_prefix_theme_and_extension() {
        assert_eq!(
            report_filename("dano moral", ExportFormat::Markdown),
            "JurisIntel_Relatorio_dano_moral.md"
        );
    }

    #[test]
    fn export_is_blocked_without_any_data() {
        let err = build_report(ExportFormat::Html, "tema", None, None, Local::now()).unwrap_err();
        assert!(matches!(err, JurisError::Export { .. }));
        assert_eq!(err.user_message(), "Não há dados para gerar o relatório.");
    }

    #[test]
    fn build_report_carries_format_mime_type() {
        let dashboard = DashboardData::default();
        let document = build_report(
            ExportFormat::Html,
            "tema",
            Some(&dashboard),
            None,
            Local::now(),
        )
        .unwrap();
        assert_eq!(document.mime_type, "text/html;charset=utf-8");
        assert_eq!(document.filename, "JurisIntel_Relatorio_tema.html");

        let document = build_report(
            ExportFormat::Markdown,
            "tema",
            Some(&dashboard),
            None,
            Local::now(),
        )
        .unwrap();
        assert_eq!(document.mime_type, "text/markdown;charset=utf-8");
    }

    #[test]
    fn format_names_resolve_with_md_alias() {
        assert_eq!(ExportFormat::from_name("html"), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_name("markdown"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_name("md"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_name("pdf"), None);
    }

    #[tokio::test]
    async fn exports_report_file_to_directory() {
        let exporter = ReportExporter::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let dashboard = DashboardData::default();

        let path = exporter
            .export_to_dir(
                temp_dir.path(),
                ExportFormat::Markdown,
                "dano moral",
                Some(&dashboard),
                None,
            )
            .await
            .unwrap();

        assert!(path.ends_with("JurisIntel_Relatorio_dano_moral.md"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.starts_with("# Relatório JurisIntel"));
    }
}
