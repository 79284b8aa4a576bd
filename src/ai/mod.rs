pub mod agent_match;

pub use agent_match::{AgentMatcher, AgentQuery, GeminiMatcher, RecommendedAgent};
