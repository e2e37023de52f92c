//! Response normalization
//!
//! Takes the raw text returned by the AI service, strips an optional
//! markdown fence, parses it as JSON and repairs known shape violations
//! before handing out a typed [`AnalysisResult`].

use jurisintel_core::{AnalysisResult, ErrorContext, JurisError, JurisResult};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{error, warn};

/// Dashboard sequences covered by the soft not-a-sequence repair.
///
/// Only these two fields are coerced; malformed shapes anywhere else in the
/// payload surface as parse errors. Keep this list in sync with the service
/// contract before widening it.
const REPAIRABLE_DASHBOARD_FIELDS: [&str; 2] = ["thesesSTJ", "precedents"];

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    // One enclosing fence, optionally tagged with a format name. Non-greedy
    // and anchored at both ends; nested fences are not supported.
    FENCE.get_or_init(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").unwrap())
}

/// Strip a single enclosing markdown fence from the response, if present.
///
/// Idempotent on already-unwrapped input: text without a fence comes back
/// trimmed but otherwise unmodified.
pub fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(caps) = fence_regex().captures(trimmed) {
        if let Some(inner) = caps.get(2) {
            let inner = inner.as_str().trim();
            if !inner.is_empty() {
                return inner.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Normalize a raw AI response into a well-formed [`AnalysisResult`].
pub fn normalize_response(raw: &str) -> JurisResult<AnalysisResult> {
    let cleaned = clean_response(raw);

    let mut value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        error!(
            cleaned = %cleaned,
            original = %raw,
            "Failed to parse AI response as JSON"
        );
        JurisError::Parse {
            message: e.to_string(),
            context: ErrorContext::new("normalizer")
                .with_operation("parse_json")
                .with_suggestion("Inspect the logged raw response"),
        }
    })?;

    // Both top-level sections must exist; their absence is a hard failure,
    // never a silent repair.
    let has_dashboard = value.get("dashboard").is_some_and(|v| !v.is_null());
    let has_guidance = value.get("guidance").is_some_and(|v| !v.is_null());
    if !has_dashboard || !has_guidance {
        error!(
            response = %cleaned,
            "AI response does not contain the dashboard and guidance keys"
        );
        return Err(JurisError::InvalidResponse {
            message: "missing top-level keys".to_string(),
            context: ErrorContext::new("normalizer").with_operation("validate_structure"),
        });
    }

    if let Some(dashboard) = value.get_mut("dashboard") {
        for field in REPAIRABLE_DASHBOARD_FIELDS {
            if let Some(entry) = dashboard.get_mut(field) {
                if !entry.is_array() {
                    warn!(
                        field,
                        "AI returned a non-sequence value; coercing to an empty list"
                    );
                    *entry = Value::Array(Vec::new());
                }
            }
        }
    }

    serde_json::from_value(value).map_err(|e| {
        error!(
            cleaned = %cleaned,
            original = %raw,
            "AI response JSON does not match the analysis schema"
        );
        JurisError::Parse {
            message: e.to_string(),
            context: ErrorContext::new("normalizer").with_operation("deserialize_result"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_RESPONSE: &str = r#"{
        "dashboard": {
            "thesesSTJ": [{"text": "Tese firmada"}],
            "precedents": [],
            "temporalEvolution": [],
            "understandingEvolution": [],
            "divergences": []
        },
        "guidance": {
            "prequestionamento": {"explanation": "", "examples": []},
            "recursoEspecialElements": []
        }
    }"#;

    #[test]
    fn strips_fence_with_format_tag() {
        let fenced = format!("```json\n{}\n```", MINIMAL_RESPONSE);
        assert_eq!(clean_response(&fenced), MINIMAL_RESPONSE.trim());
    }

    #[test]
    fn strips_fence_without_format_tag() {
        let fenced = format!("```\n{}\n```", MINIMAL_RESPONSE);
        assert_eq!(clean_response(&fenced), MINIMAL_RESPONSE.trim());
    }

    #[test]
    fn cleaning_is_idempotent_on_unwrapped_input() {
        let once = clean_response(MINIMAL_RESPONSE);
        let twice = clean_response(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn only_one_fence_layer_is_stripped() {
        let inner = "```json\n{\"a\": 1}\n```";
        let doubly_fenced = format!("```\n{}\n```", inner);
        assert_eq!(clean_response(&doubly_fenced), inner);
    }

    #[test]
    fn normalizes_a_valid_response() {
        let result = normalize_response(MINIMAL_RESPONSE).unwrap();
        let dashboard = result.dashboard.unwrap();
        assert_eq!(dashboard.theses_stj.len(), 1);
        assert_eq!(dashboard.theses_stj[0].text, "Tese firmada");
        assert!(result.guidance.is_some());
    }

    #[test]
    fn normalizes_a_fenced_response_identically() {
        let plain = normalize_response(MINIMAL_RESPONSE).unwrap();
        let fenced = normalize_response(&format!("```json\n{}\n```", MINIMAL_RESPONSE)).unwrap();
        assert_eq!(
            plain.dashboard.unwrap().theses_stj.len(),
            fenced.dashboard.unwrap().theses_stj.len()
        );
    }

    #[test]
    fn missing_dashboard_is_a_hard_failure() {
        let response = r#"{
            "guidance": {
                "prequestionamento": {"explanation": "ok", "examples": []},
                "recursoEspecialElements": []
            }
        }"#;
        let err = normalize_response(response).unwrap_err();
        assert!(matches!(err, JurisError::InvalidResponse { .. }));
        assert!(err.to_string().contains("missing top-level keys"));
    }

    #[test]
    fn null_guidance_is_a_hard_failure() {
        let response = r#"{"dashboard": {}, "guidance": null}"#;
        let err = normalize_response(response).unwrap_err();
        assert!(matches!(err, JurisError::InvalidResponse { .. }));
    }

    #[test]
    fn non_sequence_theses_are_repaired_to_empty() {
        let response = r#"{
            "dashboard": {
                "thesesSTJ": "não é uma lista",
                "precedents": [{"summary": "Resumo", "reference": "REsp 1.000.000"}],
                "temporalEvolution": [],
                "understandingEvolution": [],
                "divergences": []
            },
            "guidance": {
                "prequestionamento": {"explanation": "", "examples": []},
                "recursoEspecialElements": []
            }
        }"#;

        let result = normalize_response(response).unwrap();
        let dashboard = result.dashboard.unwrap();
        assert!(dashboard.theses_stj.is_empty());
        // The rest of the dashboard passes through unchanged.
        assert_eq!(dashboard.precedents.len(), 1);
        assert_eq!(dashboard.precedents[0].reference, "REsp 1.000.000");
    }

    #[test]
    fn repair_does_not_extend_to_other_sequences() {
        // temporalEvolution is outside the repair contract; a malformed
        // shape there is a parse failure, not a silent coercion.
        let response = r#"{
            "dashboard": {
                "thesesSTJ": [],
                "precedents": [],
                "temporalEvolution": "não é uma lista",
                "understandingEvolution": [],
                "divergences": []
            },
            "guidance": {
                "prequestionamento": {"explanation": "", "examples": []},
                "recursoEspecialElements": []
            }
        }"#;

        let err = normalize_response(response).unwrap_err();
        assert!(matches!(err, JurisError::Parse { .. }));
    }

    #[test]
    fn repair_does_not_extend_to_guidance_fields() {
        let response = r#"{
            "dashboard": {},
            "guidance": {
                "prequestionamento": {"explanation": "", "examples": []},
                "recursoEspecialElements": "não é uma lista"
            }
        }"#;

        let err = normalize_response(response).unwrap_err();
        assert!(matches!(err, JurisError::Parse { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = normalize_response("isto não é JSON").unwrap_err();
        assert!(matches!(err, JurisError::Parse { .. }));
    }
}
