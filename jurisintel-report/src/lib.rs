//! JurisIntel Report - Dual-format report serialization
//!
//! Renders a normalized analysis model into two downloadable document
//! formats: a self-contained styled HTML report and a Markdown report.
//! Both serializers share section ordering, field-presence rules and the
//! empty-section placeholder policy, so the two outputs stay structurally
//! in step for the same input.

pub mod export;
pub mod html;
pub mod markdown;

pub use export::{
    build_report, report_filename, sanitize_theme, ExportFormat, ReportDocument, ReportExporter,
};
pub use html::render_html_report;
pub use markdown::render_markdown_report;

/// Report title shared by both formats.
pub const REPORT_TITLE: &str = "Relatório JurisIntel";

// Section titles, in render order. Both serializers consume these so the
// two documents cannot drift apart.
pub(crate) const SECTION_DASHBOARD: &str = "Análise Jurisprudencial";
pub(crate) const SECTION_THESES: &str = "Teses Firmadas pelo STJ";
pub(crate) const SECTION_PRECEDENTS: &str = "Precedentes Relevantes";
pub(crate) const SECTION_TEMPORAL: &str = "Evolução Temporal dos Casos";
pub(crate) const SECTION_UNDERSTANDING: &str = "Evolução dos Entendimentos Jurídicos";
pub(crate) const SECTION_DIVERGENCES: &str = "Divergências Jurisprudenciais e Incidentes";
pub(crate) const SECTION_GUIDANCE: &str = "Guias Práticos";
pub(crate) const SECTION_PREQUESTIONAMENTO: &str = "Prequestionamento";
pub(crate) const SECTION_RECURSO: &str = "Elementos Essenciais do Recurso Especial";
pub(crate) const EXAMPLES_HEADING: &str = "Exemplos Práticos:";

// Placeholder policy: one generic text for every empty section, with a
// single wording exception for divergences.
pub(crate) const EMPTY_SECTION_TEXT: &str = "Nenhuma informação disponível.";
pub(crate) const EMPTY_DIVERGENCES_TEXT: &str = "Nenhuma divergência identificada.";
pub(crate) const EMPTY_DASHBOARD_TEXT: &str = "Nenhuma análise jurisprudencial disponível.";
pub(crate) const EMPTY_GUIDANCE_TEXT: &str = "Nenhum guia prático disponível.";

/// Label rendered in place of a blank theme; titles are never empty.
pub(crate) const FALLBACK_THEME_LABEL: &str = "N/A";

/// Brazilian date-time convention for the generation stamp.
pub(crate) const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Resolve the theme shown in headers, falling back for blank input.
pub(crate) fn theme_label(theme: &str) -> &str {
    let trimmed = theme.trim();
    if trimmed.is_empty() {
        FALLBACK_THEME_LABEL
    } else {
        trimmed
    }
}

/// An optional field renders only when present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
