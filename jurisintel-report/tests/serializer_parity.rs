//! Structural parity between the HTML and Markdown serializers
//!
//! For identical inputs, both formats must render the same number of items
//! per section and apply the same placeholder policy.

use chrono::{DateTime, Local, TimeZone};
use jurisintel_core::{
    DashboardData, Divergence, GuidanceData, Precedent, PrequestionamentoExample,
    PrequestionamentoGuidance, RecursoElement, TemporalPoint, Thesis, UnderstandingPoint,
};
use jurisintel_report::{render_html_report, render_markdown_report};

fn stamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

fn sample_dashboard() -> DashboardData {
    DashboardData {
        theses_stj: vec![
            Thesis {
                text: "Tese com referência e fonte".to_string(),
                reference: Some("Tema 1.045".to_string()),
                source_url: Some("https://stj.jus.br/tema-1045".to_string()),
            },
            Thesis {
                text: "Tese enxuta".to_string(),
                reference: None,
                source_url: None,
            },
        ],
        precedents: vec![Precedent {
            summary: "Precedente relevante".to_string(),
            reference: "REsp 1.234.567/SP".to_string(),
            source_url: None,
        }],
        temporal_evolution: vec![
            TemporalPoint {
                year: "2019".to_string(),
                event: "Afetação".to_string(),
                description: "Tema afetado ao rito dos repetitivos.".to_string(),
                value: None,
            },
            TemporalPoint {
                year: "2021".to_string(),
                event: "Julgamento".to_string(),
                description: "Tese fixada.".to_string(),
                value: Some(12.0),
            },
            TemporalPoint {
                year: "2023".to_string(),
                event: "Modulação".to_string(),
                description: "Efeitos modulados.".to_string(),
                value: None,
            },
        ],
        understanding_evolution: vec![UnderstandingPoint {
            period: "2015-2020".to_string(),
            description: "Entendimento consolidado.".to_string(),
        }],
        divergences: vec![],
    }
}

fn sample_guidance() -> GuidanceData {
    GuidanceData {
        prequestionamento: PrequestionamentoGuidance {
            explanation: "É preciso provocar o tribunal de origem.".to_string(),
            examples: vec![
                PrequestionamentoExample {
                    scenario: "Embargos de declaração".to_string(),
                    text: "Requer-se o pronunciamento expresso...\nSob pena de ofensa ao art. 1.022.".to_string(),
                },
                PrequestionamentoExample {
                    scenario: "Apelação".to_string(),
                    text: "A questão federal foi suscitada...".to_string(),
                },
            ],
        },
        recurso_especial_elements: vec![RecursoElement {
            name: "Demonstração do cabimento".to_string(),
            explanation: "Indicar a alínea do permissivo constitucional.".to_string(),
            example: "Com fundamento no art. 105, III, 'a'...".to_string(),
        }],
    }
}

/// Count `<li` occurrences in the HTML slice between a section heading and
/// the next heading.
fn html_section_items(html: &str, title: &str) -> usize {
    let start = html.find(&format!("<h3>{}</h3>", title)).unwrap();
    let rest = &html[start + title.len() + 9..];
    let end = rest
        .find("<h3>")
        .or_else(|| rest.find("<h2>"))
        .unwrap_or(rest.len());
    rest[..end].matches("<li").count()
}

/// Count top-level list items in the Markdown slice between a section
/// heading and the next heading.
fn markdown_section_items(md: &str, title: &str) -> usize {
    let start = md.find(&format!("## {}\n", title)).unwrap();
    let rest = &md[start..];
    let end = rest[3..].find("\n## ").map(|i| i + 3).unwrap_or(rest.len());
    rest[..end]
        .lines()
        .filter(|line| line.starts_with("- "))
        .count()
}

#[test]
fn item_counts_match_across_formats() {
    let dashboard = sample_dashboard();
    let guidance = sample_guidance();

    let html = render_html_report("dano moral", Some(&dashboard), Some(&guidance), stamp());
    let md = render_markdown_report("dano moral", Some(&dashboard), Some(&guidance), stamp());

    for (title, expected) in [
        ("Teses Firmadas pelo STJ", 2),
        ("Precedentes Relevantes", 1),
        ("Evolução Temporal dos Casos", 3),
        ("Evolução dos Entendimentos Jurídicos", 1),
    ] {
        assert_eq!(html_section_items(&html, title), expected, "html: {}", title);
        assert_eq!(markdown_section_items(&md, title), expected, "md: {}", title);
    }

    // Guidance lists mirror each other through their own markers.
    assert_eq!(html.matches("<strong>Situação:</strong>").count(), 2);
    assert_eq!(md.matches("**Situação:**").count(), 2);
    assert_eq!(html.matches("Exemplo de Redação:").count(), 1);
    assert_eq!(md.matches("**Exemplo de Redação:**").count(), 1);
}

#[test]
fn empty_divergences_render_distinct_placeholder_in_both() {
    let dashboard = sample_dashboard();

    let html = render_html_report("tema", Some(&dashboard), None, stamp());
    let md = render_markdown_report("tema", Some(&dashboard), None, stamp());

    assert!(html.contains("Nenhuma divergência identificada."));
    assert!(md.contains("*Nenhuma divergência identificada.*"));
    // Populated divergences swap the placeholder for items in both formats.
    let with_divergences = DashboardData {
        divergences: vec![Divergence {
            description: "Divergência entre Turmas".to_string(),
            implication: "Insegurança jurídica".to_string(),
        }],
        ..sample_dashboard()
    };
    let html = render_html_report("tema", Some(&with_divergences), None, stamp());
    let md = render_markdown_report("tema", Some(&with_divergences), None, stamp());
    assert!(!html.contains("Nenhuma divergência identificada."));
    assert!(!md.contains("Nenhuma divergência identificada."));
    assert_eq!(html.matches("<li class=\"divergence-item\">").count(), 1);
    assert_eq!(md.matches("**Descrição:**").count(), 1);
}

#[test]
fn link_rendering_matches_across_formats() {
    let dashboard = sample_dashboard();

    let html = render_html_report("tema", Some(&dashboard), None, stamp());
    let md = render_markdown_report("tema", Some(&dashboard), None, stamp());

    assert_eq!(
        html.matches("href=\"https://stj.jus.br/tema-1045\"").count(),
        1
    );
    assert_eq!(
        md.matches("[Ver Fonte](https://stj.jus.br/tema-1045)").count(),
        1
    );
}
