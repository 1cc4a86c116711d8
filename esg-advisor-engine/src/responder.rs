//! Keyword-driven canned responder
//!
//! Maps one raw user message to exactly one reply by walking an ordered
//! rule chain: research trigger, the compound "comprehensive briefing"
//! rule, the keyword rules in configuration order, then the fallback.
//! First match wins; the ordering is part of the contract.

use serde::{Deserialize, Serialize};

/// Outcome of classifying one user message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Append this text as the agent's reply.
    Text(String),
    /// Render the research panel instead of a text reply.
    LaunchResearch,
}

/// One keyword-triggered reply rule. Fires when the normalized input
/// contains any of its keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRule {
    /// Short name used in session traces ("competitors", "greeting", ...).
    pub name: String,
    pub keywords: Vec<String>,
    pub template: String,
}

/// The compound rule acknowledging a fully detailed briefing. Fires when
/// the input contains any explicit trigger phrase, or every keyword in
/// `required_keywords` at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveRule {
    pub trigger_phrases: Vec<String>,
    pub required_keywords: Vec<String>,
    pub template: String,
}

/// Ordered rule set for the responder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderRules {
    /// Keywords that launch the research workflow instead of a text reply.
    pub research_keywords: Vec<String>,
    pub comprehensive: ComprehensiveRule,
    /// Evaluated in order after the research and comprehensive rules.
    pub rules: Vec<ReplyRule>,
    /// Catches every input no other rule matched, the empty string included.
    pub fallback_template: String,
}

impl ResponderRules {
    /// Map one raw user message to exactly one reply.
    ///
    /// Pure and total: input is trimmed and lowercased, matching is
    /// substring containment, and identical input always yields the
    /// identical reply.
    pub fn classify(&self, input: &str) -> Reply {
        self.classify_traced(input).0
    }

    /// Classify and report which rule fired, for session traces.
    pub fn classify_traced(&self, input: &str) -> (Reply, String) {
        let input = input.trim().to_lowercase();

        if contains_any(&input, &self.research_keywords) {
            return (Reply::LaunchResearch, "research".to_string());
        }

        let comp = &self.comprehensive;
        if contains_any(&input, &comp.trigger_phrases)
            || (!comp.required_keywords.is_empty()
                && comp.required_keywords.iter().all(|k| input.contains(k.as_str())))
        {
            return (
                Reply::Text(comp.template.clone()),
                "comprehensive".to_string(),
            );
        }

        for rule in &self.rules {
            if contains_any(&input, &rule.keywords) {
                return (Reply::Text(rule.template.clone()), rule.name.clone());
            }
        }

        (
            Reply::Text(self.fallback_template.clone()),
            "fallback".to_string(),
        )
    }
}

fn contains_any(input: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| input.contains(n.as_str()))
}
