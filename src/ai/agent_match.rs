// agent_match.rs
use crate::config::AiConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

/// What the home buyer told us. Validated by the form layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentQuery {
    pub location: String,
    pub property_type: String,
    pub budget: String,
    pub unique_requirements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAgent {
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub experience_years: Option<f64>,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub why_recommended: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recommendations {
    #[serde(default)]
    recommended_agents: Vec<RecommendedAgent>,
}

#[derive(Debug, thiserror::Error)]
pub enum AgentMatchError {
    #[error("AI API key is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("AI service returned {status}")]
    Rejected { status: u16 },

    #[error("Unexpected AI response: {0}")]
    BadResponse(String),
}

pub trait AgentMatcher: Send + Sync {
    fn recommend(&self, query: &AgentQuery) -> Result<Vec<RecommendedAgent>, AgentMatchError>;
}

pub fn build_prompt(q: &AgentQuery, max_agents: usize) -> String {
    let mut prompt = format!(
        "You are an AI assistant specialized in matching homebuyers with the best real estate agents. \
Your goal is to analyze the user's housing preferences and needs, and then recommend up to {max_agents} highly suitable real estate agents. \
For each recommended agent, provide their name, specialization, approximate years of experience, dummy contact information, \
and a clear explanation of why they are an optimal match for the given criteria.\n\n\
User Housing Preferences and Needs:\n\
Location: {}\n\
Property Type: {}\n\
Budget: {}\n",
        q.location, q.property_type, q.budget
    );

    if let Some(req) = q.unique_requirements.as_deref().filter(|r| !r.trim().is_empty()) {
        prompt.push_str(&format!("Unique Requirements: {req}\n"));
    }

    prompt.push_str(
        "\nBased on these preferences, provide a list of recommended agents. \
Ensure the information is well-structured and relevant to the user's input.\n\
Respond with JSON only, shaped as \
{\"recommendedAgents\": [{\"name\": string, \"specialization\": string, \"experienceYears\": number, \
\"contactInfo\": string, \"whyRecommended\": string}]}.\n",
    );
    prompt
}

/// Parse the model's JSON answer, tolerating a ```json fence, and keep at
/// most `max` agents.
pub fn parse_recommendations(text: &str, max: usize) -> Result<Vec<RecommendedAgent>, AgentMatchError> {
    let trimmed = strip_fence(text.trim());
    let parsed: Recommendations =
        serde_json::from_str(trimmed).map_err(|e| AgentMatchError::BadResponse(e.to_string()))?;

    Ok(parsed
        .recommended_agents
        .into_iter()
        .filter(|a| !a.name.trim().is_empty())
        .take(max)
        .collect())
}

fn strip_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Gemini `generateContent` client.
pub struct GeminiMatcher {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    max_agents: usize,
}

impl GeminiMatcher {
    pub fn new(cfg: &AiConfig) -> Result<Self, AgentMatchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AgentMatchError::Network(e.to_string()))?;

        let endpoint = Url::parse(&cfg.base_url)
            .and_then(|base| base.join(&format!("/v1beta/models/{}:generateContent", cfg.model)))
            .map_err(|e| AgentMatchError::BadResponse(format!("bad AI endpoint: {e}")))?;

        let api_key = cfg.api_key();
        if api_key.is_none() {
            tracing::warn!(env = %cfg.api_key_env, "AI API key not set; agent matching disabled");
        }

        Ok(Self {
            client,
            endpoint,
            api_key,
            max_agents: cfg.max_agents,
        })
    }
}

impl AgentMatcher for GeminiMatcher {
    fn recommend(&self, query: &AgentQuery) -> Result<Vec<RecommendedAgent>, AgentMatchError> {
        let key = self.api_key.as_deref().ok_or(AgentMatchError::MissingApiKey)?;

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(query, self.max_agents) }]
            }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .map_err(|e| AgentMatchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentMatchError::Rejected {
                status: status.as_u16(),
            });
        }

        let value: Value = response
            .json()
            .map_err(|e| AgentMatchError::BadResponse(e.to_string()))?;

        let text = candidate_text(&value)
            .ok_or_else(|| AgentMatchError::BadResponse("no candidate text".into()))?;

        parse_recommendations(&text, self.max_agents)
    }
}

/// Concatenated text parts of the first candidate.
fn candidate_text(v: &Value) -> Option<String> {
    let parts = v
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    (!text.is_empty()).then_some(text)
}
