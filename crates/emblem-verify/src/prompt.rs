//! Prompt construction for LLM-backed analysis providers

use crate::provider::CheckRequest;

const CHECK_INSTRUCTIONS: &str = r#"You are a fact-checker for a cultural-symbol knowledge base.
Assess whether the documented claims about the symbol below are historically accurate.

Respond with a single JSON object and nothing else:
{
  "status": "verified" | "disputed" | "unverified",
  "confidence": <integer 0-100>,
  "summary": "<one sentence verdict>",
  "details": "<supporting reasoning>",
  "sources": ["<reference>", ...]
}

Use "verified" when the claims are well corroborated, "disputed" when
reputable sources disagree, and "unverified" when there is not enough
evidence either way."#;

/// Builds fact-check prompts from symbol metadata
pub struct PromptBuilder {
    request: CheckRequest,
}

impl PromptBuilder {
    /// Create a builder for one request
    pub fn new(request: CheckRequest) -> Self {
        Self { request }
    }

    /// Build the complete fact-check prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CHECK_INSTRUCTIONS);
        prompt.push_str("\n\nSymbol under review:\n");
        prompt.push_str(&format!("- Name: {}\n", self.request.name));
        prompt.push_str(&format!("- Culture: {}\n", self.request.culture));

        if let Some(period) = &self.request.period {
            prompt.push_str(&format!("- Period: {}\n", period));
        }
        if let Some(description) = &self.request.description {
            prompt.push_str(&format!("- Description: {}\n", description));
        }
        if let Some(significance) = &self.request.significance {
            prompt.push_str(&format!("- Significance: {}\n", significance));
        }
        if let Some(context) = &self.request.historical_context {
            prompt.push_str(&format!("- Historical context: {}\n", context));
        }

        prompt
    }
}
