//! Markdown report serialization
//!
//! Feature parity with the HTML serializer: same section order, same
//! field-presence rules, same placeholder policy. Heading and list markers
//! replace tags; verbatim passages go into fenced text blocks instead of
//! preformatted elements.

use crate::*;
use chrono::{DateTime, Local};
use jurisintel_core::{DashboardData, GuidanceData};

/// Wrap content into a list item, indenting embedded newlines so multi-line
/// content stays inside the same logical item.
fn list_item_md(content: &str) -> String {
    format!("- {}", content.replace('\n', "\n  "))
}

fn section_md<T>(
    title: &str,
    items: &[T],
    empty_text: &str,
    render_item: impl Fn(&T) -> String,
) -> String {
    let mut section = format!("## {}\n\n", title);
    if items.is_empty() {
        section.push_str(&format!("*{}*\n\n", empty_text));
    } else {
        let rendered: Vec<String> = items.iter().map(render_item).collect();
        section.push_str(&rendered.join("\n"));
        section.push_str("\n\n");
    }
    section
}

fn dashboard_md(md: &mut String, dashboard: &DashboardData) {
    md.push_str(&section_md(
        SECTION_THESES,
        &dashboard.theses_stj,
        EMPTY_SECTION_TEXT,
        |thesis| {
            let mut content = thesis.text.clone();
            if let Some(reference) = non_empty(&thesis.reference) {
                content.push_str(&format!("\n  *Referência: {}*", reference));
            }
            if let Some(url) = non_empty(&thesis.source_url) {
                content.push_str(&format!("\n  [Ver Fonte]({})", url));
            }
            list_item_md(&content)
        },
    ));

    md.push_str(&section_md(
        SECTION_PRECEDENTS,
        &dashboard.precedents,
        EMPTY_SECTION_TEXT,
        |precedent| {
            let mut content = format!(
                "**{}**\n  *Referência: {}*",
                precedent.summary, precedent.reference
            );
            if let Some(url) = non_empty(&precedent.source_url) {
                content.push_str(&format!("\n  [Ver Fonte]({})", url));
            }
            list_item_md(&content)
        },
    ));

    md.push_str(&section_md(
        SECTION_TEMPORAL,
        &dashboard.temporal_evolution,
        EMPTY_SECTION_TEXT,
        |point| list_item_md(&format!("**{} - {}:** {}", point.year, point.event, point.description)),
    ));

    md.push_str(&section_md(
        SECTION_UNDERSTANDING,
        &dashboard.understanding_evolution,
        EMPTY_SECTION_TEXT,
        |point| list_item_md(&format!("**Período:** {}\n  {}", point.period, point.description)),
    ));

    md.push_str(&section_md(
        SECTION_DIVERGENCES,
        &dashboard.divergences,
        EMPTY_DIVERGENCES_TEXT,
        |divergence| {
            list_item_md(&format!(
                "**Descrição:** {}\n  *Implicação: {}*",
                divergence.description, divergence.implication
            ))
        },
    ));
}

fn guidance_md(md: &mut String, guidance: &GuidanceData) {
    md.push_str(&format!("### {}\n\n", SECTION_PREQUESTIONAMENTO));
    let prequestionamento = &guidance.prequestionamento;
    if !prequestionamento.explanation.is_empty() || !prequestionamento.examples.is_empty() {
        if !prequestionamento.explanation.is_empty() {
            md.push_str(&format!("{}\n\n", prequestionamento.explanation));
        }
        if !prequestionamento.examples.is_empty() {
            md.push_str(&format!("#### {}\n\n", EXAMPLES_HEADING));
            for example in &prequestionamento.examples {
                md.push_str(&format!("**Situação:** {}\n", example.scenario));
                md.push_str("```text\n");
                md.push_str(&format!("{}\n", example.text));
                md.push_str("```\n\n");
            }
        }
    } else {
        md.push_str(&format!("*{}*\n\n", EMPTY_SECTION_TEXT));
    }

    md.push_str(&format!("### {}\n\n", SECTION_RECURSO));
    if !guidance.recurso_especial_elements.is_empty() {
        for element in &guidance.recurso_especial_elements {
            md.push_str(&format!("#### {}\n\n", element.name));
            md.push_str(&format!("{}\n\n", element.explanation));
            if !element.example.is_empty() {
                md.push_str("**Exemplo de Redação:**\n");
                md.push_str("```text\n");
                md.push_str(&format!("{}\n", element.example));
                md.push_str("```\n\n");
            }
        }
    } else {
        md.push_str(&format!("*{}*\n\n", EMPTY_SECTION_TEXT));
    }
}

/// Render the complete Markdown report for a theme.
pub fn render_markdown_report(
    theme: &str,
    dashboard: Option<&DashboardData>,
    guidance: Option<&GuidanceData>,
    generated_at: DateTime<Local>,
) -> String {
    let theme = theme_label(theme);
    let formatted_date = generated_at.format(DATE_FORMAT);

    let mut md = format!("# {}\n\n", REPORT_TITLE);
    md.push_str(&format!("**Tema da Pesquisa:** {}\n", theme));
    md.push_str(&format!("**Gerado em:** {}\n\n---\n\n", formatted_date));

    md.push_str(&format!("## {}\n\n", SECTION_DASHBOARD));
    match dashboard {
        Some(dashboard) => dashboard_md(&mut md, dashboard),
        None => md.push_str(&format!("*{}*\n\n", EMPTY_DASHBOARD_TEXT)),
    }
    md.push_str("---\n\n");

    md.push_str(&format!("## {}\n\n", SECTION_GUIDANCE));
    match guidance {
        Some(guidance) => guidance_md(&mut md, guidance),
        None => md.push_str(&format!("*{}*\n\n", EMPTY_GUIDANCE_TEXT)),
    }

    md
}
