//! Parse provider output into a judgment

use crate::provider::Judgment;
use crate::VerifyError;
use emblem_domain::VerificationStatus;
use serde_json::Value;

/// Parse a provider response body into a judgment
///
/// Providers (LLM-backed ones in particular) sometimes wrap their JSON in
/// markdown code fences; those are stripped before parsing. Missing optional
/// fields (details, sources) default to empty; a missing or unknown status
/// is an invalid response.
pub fn parse_judgment(response: &str) -> Result<Judgment, VerifyError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| VerifyError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| VerifyError::InvalidResponse("Expected JSON object".to_string()))?;

    let status_str = obj
        .get("status")
        .and_then(|v| v.as_str())
        .ok_or_else(|| VerifyError::InvalidResponse("Missing or invalid 'status'".to_string()))?;

    let status = VerificationStatus::parse(status_str)
        .ok_or_else(|| VerifyError::InvalidResponse(format!("Unknown status '{}'", status_str)))?;

    let confidence = obj
        .get("confidence")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| {
            VerifyError::InvalidResponse("Missing or invalid 'confidence'".to_string())
        })?
        .min(100) as u8;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let details = obj
        .get("details")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let sources = obj
        .get("sources")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|s| s.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(Judgment {
        status,
        confidence,
        summary,
        details,
        sources,
    })
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, VerifyError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(VerifyError::InvalidResponse("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let response = r#"{
            "status": "verified",
            "confidence": 85,
            "summary": "Claims check out",
            "details": "Matches the archaeological record",
            "sources": ["https://example.org/a", "https://example.org/b"]
        }"#;

        let judgment = parse_judgment(response).unwrap();

        assert_eq!(judgment.status, VerificationStatus::Verified);
        assert_eq!(judgment.confidence, 85);
        assert_eq!(judgment.summary, "Claims check out");
        assert_eq!(judgment.sources.len(), 2);
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "```json\n{\"status\": \"disputed\", \"confidence\": 55}\n```";

        let judgment = parse_judgment(response).unwrap();

        assert_eq!(judgment.status, VerificationStatus::Disputed);
        assert_eq!(judgment.confidence, 55);
        assert!(judgment.summary.is_empty());
        assert!(judgment.sources.is_empty());
    }

    #[test]
    fn test_parse_bare_fence() {
        let response = "```\n{\"status\": \"unverified\", \"confidence\": 10}\n```";
        let judgment = parse_judgment(response).unwrap();
        assert_eq!(judgment.status, VerificationStatus::Unverified);
    }

    #[test]
    fn test_confidence_clamped() {
        let response = r#"{"status": "verified", "confidence": 400}"#;
        let judgment = parse_judgment(response).unwrap();
        assert_eq!(judgment.confidence, 100);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let response = r#"{"status": "probably", "confidence": 80}"#;
        assert!(matches!(
            parse_judgment(response),
            Err(VerifyError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_missing_confidence_rejected() {
        let response = r#"{"status": "verified"}"#;
        assert!(parse_judgment(response).is_err());
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(parse_judgment("I could not verify this symbol.").is_err());
    }

    #[test]
    fn test_non_string_sources_skipped() {
        let response = r#"{"status": "verified", "confidence": 80, "sources": ["a", 3, "b"]}"#;
        let judgment = parse_judgment(response).unwrap();
        assert_eq!(judgment.sources, vec!["a".to_string(), "b".to_string()]);
    }
}
