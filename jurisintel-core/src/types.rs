//! Core type definitions
//!
//! The analysis data model mirrors the JSON contract of the AI service
//! (camelCase wire names). All records are immutable values: each search
//! produces a fresh model that replaces the previous one wholesale.

use serde::{Deserialize, Serialize};

/// Root record returned by the response normalizer.
///
/// The normalizer guarantees both keys are present in a valid response;
/// the options exist so the calling flow owns the empty-default
/// substitution when a section is missing from an otherwise usable result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dashboard: Option<DashboardData>,
    pub guidance: Option<GuidanceData>,
}

/// Jurisprudence dashboard: five independent ordered sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(rename = "thesesSTJ", default)]
    pub theses_stj: Vec<Thesis>,
    #[serde(default)]
    pub precedents: Vec<Precedent>,
    #[serde(default)]
    pub temporal_evolution: Vec<TemporalPoint>,
    #[serde(default)]
    pub understanding_evolution: Vec<UnderstandingPoint>,
    #[serde(default)]
    pub divergences: Vec<Divergence>,
}

/// Settled thesis from the STJ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thesis {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Relevant precedent with a mandatory reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precedent {
    pub summary: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Point on the temporal-evolution timeline.
///
/// `year` is a categorical axis label and is never parsed as a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalPoint {
    pub year: String,
    pub event: String,
    pub description: String,
    /// Optional numeric value for chart consumers; ignored by report output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Stage in the evolution of the courts' understanding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderstandingPoint {
    pub period: String,
    pub description: String,
}

/// Jurisprudential divergence and its practical implication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divergence {
    pub description: String,
    pub implication: String,
}

/// Practical guidance section of the analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceData {
    #[serde(default)]
    pub prequestionamento: PrequestionamentoGuidance,
    #[serde(default)]
    pub recurso_especial_elements: Vec<RecursoElement>,
}

/// Guidance text on the prequestionamento procedural requirement.
///
/// The domain content is opaque to this system and rendered verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrequestionamentoGuidance {
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<PrequestionamentoExample>,
}

/// Illustrative passage for a prequestionamento scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrequestionamentoExample {
    pub scenario: String,
    /// Literal passage, newline-preserving, rendered verbatim.
    pub text: String,
}

/// Essential element of a Recurso Especial filing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecursoElement {
    pub name: String,
    pub explanation: String,
    /// Literal drafting example, rendered verbatim.
    pub example: String,
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name (openai, anthropic, ollama, groq)
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// API key; falls back to the provider's environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom base URL (mainly for ollama)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature; kept low for factual legal output
    pub temperature: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Prompt template configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Path to the externalized analysis prompt template
    pub template_path: String,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default directory for exported report files
    pub output_dir: String,
}

/// Top-level configuration for the JurisIntel system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisIntelConfig {
    pub llm: LlmConfig,
    pub prompt: PromptConfig,
    pub report: ReportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_uses_exact_wire_names() {
        let json = r#"{
            "thesesSTJ": [{"text": "Tese A", "sourceUrl": "https://stj.jus.br/a"}],
            "temporalEvolution": [{"year": "2019", "event": "Afetação", "description": "Tema repetitivo"}],
            "understandingEvolution": [],
            "divergences": []
        }"#;

        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.theses_stj.len(), 1);
        assert_eq!(
            dashboard.theses_stj[0].source_url.as_deref(),
            Some("https://stj.jus.br/a")
        );
        // precedents was absent entirely and defaults to empty
        assert!(dashboard.precedents.is_empty());
        assert_eq!(dashboard.temporal_evolution[0].year, "2019");
    }

    #[test]
    fn absent_optional_fields_stay_none() {
        let thesis: Thesis = serde_json::from_str(r#"{"text": "Tese B"}"#).unwrap();
        assert!(thesis.reference.is_none());
        assert!(thesis.source_url.is_none());

        let out = serde_json::to_string(&thesis).unwrap();
        assert!(!out.contains("sourceUrl"));
    }

    #[test]
    fn guidance_tolerates_missing_prequestionamento() {
        let guidance: GuidanceData =
            serde_json::from_str(r#"{"recursoEspecialElements": []}"#).unwrap();
        assert!(guidance.prequestionamento.explanation.is_empty());
        assert!(guidance.prequestionamento.examples.is_empty());
    }
}
