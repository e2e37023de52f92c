//! HTML report serialization
//!
//! Produces one self-contained styled document per analysis: an inline
//! style block and no external resource references, so the file renders
//! identically wherever it is opened.

use crate::*;
use chrono::{DateTime, Local};
use jurisintel_core::{
    DashboardData, Divergence, GuidanceData, Precedent, TemporalPoint, Thesis,
    UnderstandingPoint,
};

const REPORT_STYLES: &str = r#"<style>
  body {
    font-family: 'Inter', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    margin: 0;
    padding: 20px;
    color: #cbd5e1;
    background-color: #0f172a;
  }
  .container {
    max-width: 900px;
    margin: auto;
    background-color: #1e293b;
    padding: 25px;
    border-radius: 8px;
    box-shadow: 0 0 20px rgba(0,0,0,0.3);
    border: 1px solid #334155;
  }
  h1, h2, h3, h4 {
    font-weight: 600;
  }
  h1 {
    text-align: center;
    color: #38bdf8;
    border-bottom: 2px solid #0ea5e9;
    padding-bottom: 15px;
    margin-bottom: 25px;
    font-size: 2.2em;
  }
  h2 {
    font-size: 1.8em;
    margin-top: 35px;
    margin-bottom: 15px;
    padding-bottom: 10px;
    color: #2dd4bf;
    border-bottom: 1px solid #5eead4;
  }
  h3 {
    font-size: 1.4em;
    margin-top: 25px;
    margin-bottom: 10px;
    color: #67e8f9;
  }
  h4 {
    font-size: 1.2em;
    margin-top: 20px;
    margin-bottom: 8px;
    color: #a5f3fc;
  }
  ul {
    list-style-type: none;
    padding-left: 0;
  }
  li {
    margin-bottom: 15px;
    background-color: #334155;
    padding: 15px;
    border-radius: 6px;
    border-left: 4px solid #38bdf8;
    box-shadow: 0 2px 4px rgba(0,0,0,0.2);
  }
  p {
    margin-bottom: 12px;
    color: #e2e8f0;
  }
  .card {
    background-color: #334155;
    border: 1px solid #475569;
    padding: 18px;
    margin-bottom: 18px;
    border-radius: 6px;
    box-shadow: 0 3px 7px rgba(0,0,0,0.25);
  }
  .card-title {
    font-weight: bold;
    color: #7dd3fc;
    margin-bottom: 10px;
    font-size: 1.1em;
  }
  .reference, .implication, .scenario, .period, .source-link {
    font-style: italic;
    color: #94a3b8;
    font-size: 0.9em;
    margin-top: 8px;
  }
  .source-link a {
    color: #5eead4;
    text-decoration: none;
    font-weight: 500;
  }
  .source-link a:hover {
    text-decoration: underline;
    color: #99f6e4;
  }
  pre {
    background-color: #0f172a;
    color: #e2e8f0;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
    white-space: pre-wrap;
    word-wrap: break-word;
    font-family: 'Menlo', 'Consolas', 'Liberation Mono', 'Courier New', Courier, monospace;
    font-size: 0.9em;
    border: 1px solid #475569;
  }
  code {
    font-family: 'Menlo', 'Consolas', 'Liberation Mono', 'Courier New', Courier, monospace;
  }
  .report-header p {
    font-size: 0.95em;
    color: #94a3b8;
    text-align: center;
    margin-bottom: 5px;
  }
  .empty-data {
    color: #64748b;
    font-style: italic;
    padding: 10px;
    background-color: #293548;
    border-radius: 4px;
  }
  li.divergence-item {
    border-left: 4px solid #ef4444;
  }
  li.divergence-item .card-title {
    color: #fca5a5;
  }
  li.divergence-item .implication {
    color: #fcd34d;
  }
</style>"#;

/// Literal newline-to-break conversion for long-form explanation fields.
fn nl2br(text: &str) -> String {
    text.replace('\n', "<br>")
}

fn section_html<T>(
    content: &mut String,
    title: &str,
    items: &[T],
    empty_text: &str,
    render_item: impl Fn(&mut String, &T),
) {
    if items.is_empty() {
        content.push_str(&format!(
            "<h3>{}</h3><p class=\"empty-data\">{}</p>",
            title, empty_text
        ));
        return;
    }
    content.push_str(&format!("<h3>{}</h3><ul>", title));
    for item in items {
        render_item(content, item);
    }
    content.push_str("</ul>");
}

fn source_link_html(content: &mut String, source_url: &Option<String>) {
    if let Some(url) = non_empty(source_url) {
        content.push_str(&format!(
            "<p class=\"source-link\">Fonte: <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{url}</a></p>"
        ));
    }
}

fn thesis_html(content: &mut String, thesis: &Thesis) {
    content.push_str("<li>");
    content.push_str(&format!("<p>{}</p>", thesis.text));
    if let Some(reference) = non_empty(&thesis.reference) {
        content.push_str(&format!(
            "<p class=\"reference\">Referência: {}</p>",
            reference
        ));
    }
    source_link_html(content, &thesis.source_url);
    content.push_str("</li>");
}

fn precedent_html(content: &mut String, precedent: &Precedent) {
    content.push_str("<li>");
    content.push_str(&format!(
        "<p class=\"card-title\">{}</p><p class=\"reference\">Referência: {}</p>",
        precedent.summary, precedent.reference
    ));
    source_link_html(content, &precedent.source_url);
    content.push_str("</li>");
}

fn temporal_point_html(content: &mut String, point: &TemporalPoint) {
    content.push_str(&format!(
        "<li><p class=\"card-title\"><strong>{} - {}</strong></p><p>{}</p></li>",
        point.year, point.event, point.description
    ));
}

fn understanding_point_html(content: &mut String, point: &UnderstandingPoint) {
    content.push_str(&format!(
        "<li><p class=\"period\"><strong>Período:</strong> {}</p><p>{}</p></li>",
        point.period, point.description
    ));
}

fn divergence_html(content: &mut String, divergence: &Divergence) {
    content.push_str(&format!(
        "<li class=\"divergence-item\"><p class=\"card-title\">{}</p><p class=\"implication\">Implicação: {}</p></li>",
        divergence.description, divergence.implication
    ));
}

fn dashboard_html(content: &mut String, dashboard: &DashboardData) {
    section_html(
        content,
        SECTION_THESES,
        &dashboard.theses_stj,
        EMPTY_SECTION_TEXT,
        thesis_html,
    );
    section_html(
        content,
        SECTION_PRECEDENTS,
        &dashboard.precedents,
        EMPTY_SECTION_TEXT,
        precedent_html,
    );
    section_html(
        content,
        SECTION_TEMPORAL,
        &dashboard.temporal_evolution,
        EMPTY_SECTION_TEXT,
        temporal_point_html,
    );
    section_html(
        content,
        SECTION_UNDERSTANDING,
        &dashboard.understanding_evolution,
        EMPTY_SECTION_TEXT,
        understanding_point_html,
    );
    section_html(
        content,
        SECTION_DIVERGENCES,
        &dashboard.divergences,
        EMPTY_DIVERGENCES_TEXT,
        divergence_html,
    );
}

fn guidance_html(content: &mut String, guidance: &GuidanceData) {
    content.push_str(&format!("<h3>{}</h3>", SECTION_PREQUESTIONAMENTO));
    let prequestionamento = &guidance.prequestionamento;
    if !prequestionamento.explanation.is_empty() || !prequestionamento.examples.is_empty() {
        if !prequestionamento.explanation.is_empty() {
            content.push_str(&format!(
                "<div class=\"card\"><p class=\"card-title\">Explicação:</p><p>{}</p></div>",
                nl2br(&prequestionamento.explanation)
            ));
        }
        if !prequestionamento.examples.is_empty() {
            content.push_str(&format!("<h4>{}</h4><ul>", EXAMPLES_HEADING));
            for example in &prequestionamento.examples {
                content.push_str(&format!(
                    "<li><p class=\"scenario\"><strong>Situação:</strong> {}</p><pre><code>{}</code></pre></li>",
                    example.scenario, example.text
                ));
            }
            content.push_str("</ul>");
        }
    } else {
        content.push_str(&format!("<p class=\"empty-data\">{}</p>", EMPTY_SECTION_TEXT));
    }

    content.push_str(&format!("<h3>{}</h3>", SECTION_RECURSO));
    if !guidance.recurso_especial_elements.is_empty() {
        content.push_str("<ul>");
        for element in &guidance.recurso_especial_elements {
            content.push_str(&format!(
                "<li><p class=\"card-title\">{}</p><p>{}</p><p class=\"card-title\">Exemplo de Redação:</p><pre><code>{}</code></pre></li>",
                element.name,
                nl2br(&element.explanation),
                element.example
            ));
        }
        content.push_str("</ul>");
    } else {
        content.push_str(&format!("<p class=\"empty-data\">{}</p>", EMPTY_SECTION_TEXT));
    }
}

/// Render the complete HTML report for a theme.
///
/// Absent dashboard or guidance data never suppresses the section headers;
/// each renders its placeholder line instead.
pub fn render_html_report(
    theme: &str,
    dashboard: Option<&DashboardData>,
    guidance: Option<&GuidanceData>,
    generated_at: DateTime<Local>,
) -> String {
    let theme = theme_label(theme);
    let formatted_date = generated_at.format(DATE_FORMAT);

    let mut content = format!(
        "<html><head><title>{REPORT_TITLE} - {theme}</title>{REPORT_STYLES}</head><body><div class=\"container\">"
    );
    content.push_str(&format!(
        "<div class=\"report-header\"><h1>{REPORT_TITLE}</h1><p><strong>Tema da Pesquisa:</strong> {theme}</p><p><strong>Gerado em:</strong> {formatted_date}</p></div>"
    ));

    content.push_str(&format!("<h2>{}</h2>", SECTION_DASHBOARD));
    match dashboard {
        Some(dashboard) => dashboard_html(&mut content, dashboard),
        None => content.push_str(&format!(
            "<p class=\"empty-data\">{}</p>",
            EMPTY_DASHBOARD_TEXT
        )),
    }

    content.push_str(&format!("<h2>{}</h2>", SECTION_GUIDANCE));
    match guidance {
        Some(guidance) => guidance_html(&mut content, guidance),
        None => content.push_str(&format!(
            "<p class=\"empty-data\">{}</p>",
            EMPTY_GUIDANCE_TEXT
        )),
    }

    content.push_str("</div></body></html>");
    content
}
