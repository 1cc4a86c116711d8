//! Swappable advisor configuration
//!
//! Every constant the engine consumes — keyword lists, reply templates,
//! stage definitions, timings, report content — lives here as data, so a
//! deployment can swap the client (different name, different stage timings,
//! different copy) from a YAML file without touching code.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ProfileError;
use crate::research::{
    ResearchPlan, StageDefinition, SubtaskDefinition, SubtaskGroup,
};
use crate::responder::{ComprehensiveRule, ReplyRule, ResponderRules};

/// One section of the strategy report shown after research completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
}

/// Content rendered in the report overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

/// Complete configuration for one advisory deployment.
///
/// Deserializes with per-field defaults, so a profile file only has to name
/// the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorProfile {
    /// Client the advisory conversation is about.
    pub client_name: String,
    pub user_id: String,
    pub user_label: String,
    pub agent_author_id: String,
    pub agent_label: String,
    /// Delay before the intro message appears after the session opens.
    pub intro_delay_ms: u64,
    pub intro_message: String,
    /// Synthetic send delay before each agent reply.
    pub reply_delay_ms: u64,
    /// Substituted for the reply when delivery fails.
    pub apology_template: String,
    pub rules: ResponderRules,
    pub plan: ResearchPlan,
    pub report: ReportContent,
}

impl AdvisorProfile {
    /// Parse a profile from YAML and validate it.
    pub fn from_yaml(source: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_yaml::from_str(source)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check the structural invariants the simulator relies on: at least
    /// one stage, subtask names unique across the whole plan, stage
    /// activation offsets strictly increasing, and completion no earlier
    /// than the last activation. Out-of-order offsets would make the
    /// active stage regress mid-run.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.plan.stages.is_empty() {
            return Err(ProfileError::EmptyPlan);
        }
        let mut seen = HashSet::new();
        let mut last_activation = None;
        for stage in &self.plan.stages {
            if last_activation.is_some_and(|prev| stage.activate_at_ms <= prev) {
                return Err(ProfileError::StageOrder(stage.title.clone()));
            }
            last_activation = Some(stage.activate_at_ms);
            for group in &stage.subtask_groups {
                for subtask in &group.subtasks {
                    if !seen.insert(subtask.name.as_str()) {
                        return Err(ProfileError::DuplicateSubtask(subtask.name.clone()));
                    }
                }
            }
        }
        let last_activation_ms = last_activation.unwrap_or(0);
        if self.plan.complete_at_ms < last_activation_ms {
            return Err(ProfileError::CompletionBeforeLastStage {
                complete_at_ms: self.plan.complete_at_ms,
                last_activation_ms,
            });
        }
        Ok(())
    }
}

impl Default for AdvisorProfile {
    /// The Borgo Egnazia profile the prototype shipped with.
    fn default() -> Self {
        Self {
            client_name: "Borgo Egnazia".to_string(),
            user_id: "user_001".to_string(),
            user_label: "You".to_string(),
            agent_author_id: "agent_001".to_string(),
            agent_label: "Assistant".to_string(),
            intro_delay_ms: 1_000,
            intro_message: "\u{1F44B} Hello! I'm your Research Agent for Borgo Egnazia.\n\
                I'd like to ask a few quick questions to tailor my analysis, feel free to skip anything you're unsure of!\n\
                1. Who are 2-3 competitors you'd like to benchmark against?\n\
                2. What ESG expectations have you received from stakeholders?\n\
                3. Any new sustainability opportunities you're exploring?\n\
                4. What cultural values shape your sustainability approach?\n\
                5. Which ESG areas are you strongest in, and where would you like to improve?"
                .to_string(),
            reply_delay_ms: 2_000,
            apology_template:
                "I'm having trouble processing your request right now. Please try again."
                    .to_string(),
            rules: default_rules(),
            plan: default_plan(),
            report: default_report(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn default_rules() -> ResponderRules {
    ResponderRules {
        research_keywords: strings(&["research"]),
        comprehensive: ComprehensiveRule {
            trigger_phrases: strings(&["competitors: probably areias do seixo"]),
            required_keywords: strings(&[
                "areias",
                "sextantio",
                "finca",
                "stakeholder",
                "opportunities",
                "cultural",
                "strengths",
            ]),
            template: "Thank you for providing so much comprehensive information! I have recorded your competitor preferences (Areias do Seixo, Sextantio, and Finca Serena), stakeholder expectations from travel agents and banks, exciting opportunities in climate-positive retreats and artisan collaborations, your strong connection to Puglian traditions, and your current strengths in energy and local engagement as well as areas for improvement like waste tracking. This gives me an excellent foundation to develop a tailored ESG strategy for Borgo Egnazia. Send 'Research' and I will research the trends and drivers as well as their value at stake!".to_string(),
        },
        rules: vec![
            ReplyRule {
                name: "competitors".to_string(),
                keywords: strings(&["areias", "sextantio", "finca", "competitor", "benchmark"]),
                template: "Great! I've noted your competitor selection. These are excellent hospitality brands to benchmark against. I'll analyze their ESG practices and create comparisons that will help identify best practices and improvement opportunities for Borgo Egnazia.".to_string(),
            },
            ReplyRule {
                name: "stakeholders".to_string(),
                keywords: strings(&[
                    "travel", "carbon", "plastic", "bank", "roadmap", "stakeholder", "agent",
                    "data", "framework",
                ]),
                template: "Thank you for sharing those stakeholder requirements. I understand the various expectations you're facing from different partners and institutions. I'll help you develop comprehensive ESG metrics and reporting frameworks that address these stakeholder needs while strengthening your market position.".to_string(),
            },
            ReplyRule {
                name: "opportunities".to_string(),
                keywords: strings(&[
                    "climate", "retreat", "season", "eco", "tourism", "artisan", "collaboration",
                    "opportunities", "exploring",
                ]),
                template: "Those are innovative sustainability opportunities! I can see you're thinking strategically about new offerings and partnerships. I'll research market trends and develop implementation strategies for these sustainability-focused initiatives that align with your brand values.".to_string(),
            },
            ReplyRule {
                name: "culture".to_string(),
                keywords: strings(&[
                    "puglian", "tradition", "local", "cultural", "heritage", "community",
                    "values", "approach",
                ]),
                template: "Your commitment to local culture and community is a powerful foundation for your sustainability strategy. This authentic connection to place and people can be a key differentiator. I'll explore how these values can enhance your ESG narrative and stakeholder appeal.".to_string(),
            },
            ReplyRule {
                name: "strengths".to_string(),
                keywords: strings(&[
                    "energy", "engagement", "waste", "tracking", "strength", "gap", "improve",
                    "good", "great",
                ]),
                template: "Thanks for that honest assessment of your current ESG position. Understanding both strengths and improvement areas is crucial for developing an effective strategy. I'll research best practices and systems that can help address the gaps while building on your existing strengths.".to_string(),
            },
            ReplyRule {
                name: "esg".to_string(),
                keywords: strings(&["esg", "sustainability"]),
                template: "ESG integration is crucial for hospitality leaders like Borgo Egnazia. I can help you develop comprehensive strategies that align with your values while meeting modern sustainability standards.".to_string(),
            },
            ReplyRule {
                name: "greeting".to_string(),
                keywords: strings(&["hello", "hi"]),
                template: "Hello! I'm ready to help analyze ESG opportunities for Borgo Egnazia. Feel free to share your thoughts on any of the questions I asked!".to_string(),
            },
            ReplyRule {
                name: "thanks".to_string(),
                keywords: strings(&["thank", "thanks"]),
                template: "You're welcome! Your insights are very helpful for developing tailored ESG strategies. Is there anything specific you'd like me to dive deeper into?".to_string(),
            },
        ],
        fallback_template: "That's valuable information! I'm processing your input to develop tailored ESG insights for Borgo Egnazia. Could you elaborate on any specific aspects you'd like me to focus on?".to_string(),
    }
}

fn default_plan() -> ResearchPlan {
    ResearchPlan {
        title: "ESG Strategy Research".to_string(),
        stages: vec![
            StageDefinition {
                title: "Filter for Relevant Internal Documents".to_string(),
                description: "Scan and filter the company profile and research checklist to identify relevant strategy goals related to Borgo Egnazia.".to_string(),
                activate_at_ms: 0,
                subtask_groups: Vec::new(),
            },
            StageDefinition {
                title: "Design Strategy Foundations".to_string(),
                description: "Lay the groundwork for Borgo Egnazia's ESG strategy by defining ambition level, engaging stakeholders, and identifying key areas for sustainability innovation and impact.".to_string(),
                activate_at_ms: 3_000,
                subtask_groups: vec![
                    SubtaskGroup {
                        category: "Strategic Foundations".to_string(),
                        subtasks: vec![
                            SubtaskDefinition {
                                name: "Ambition".to_string(),
                                complete_after_ms: 1_000,
                            },
                            SubtaskDefinition {
                                name: "Double Materiality".to_string(),
                                complete_after_ms: 2_000,
                            },
                            SubtaskDefinition {
                                name: "Stakeholder Co-creation".to_string(),
                                complete_after_ms: 3_000,
                            },
                        ],
                    },
                    SubtaskGroup {
                        category: "Sustainability Initiatives".to_string(),
                        subtasks: vec![
                            SubtaskDefinition {
                                name: "Systemic Impact".to_string(),
                                complete_after_ms: 4_000,
                            },
                            SubtaskDefinition {
                                name: "Monetisation".to_string(),
                                complete_after_ms: 5_000,
                            },
                            SubtaskDefinition {
                                name: "Sustainability-oriented Innovation".to_string(),
                                complete_after_ms: 6_000,
                            },
                        ],
                    },
                ],
            },
            StageDefinition {
                title: "Create Comprehensive Report".to_string(),
                description: "Synthesize findings into a tailored ESG strategy for Borgo Egnazia, including benchmarks, improvement recommendations, and implementation roadmap.".to_string(),
                activate_at_ms: 10_000,
                subtask_groups: Vec::new(),
            },
        ],
        complete_at_ms: 20_000,
        completion_message: "\u{1F3AF} Great! Your ESG strategy report is ready. Open the report view to see a curated list of initiatives designed to kick-start Borgo Egnazia's sustainability journey. The report includes goal alignment, phased action plans, and tailored strategies across environmental, social, and governance dimensions.".to_string(),
        estimate_label: "Estimated time: 1 minute".to_string(),
    }
}

fn default_report() -> ReportContent {
    ReportContent {
        title: "ESG Strategy Report \u{2014} Borgo Egnazia".to_string(),
        sections: vec![
            ReportSection {
                heading: "Executive Summary".to_string(),
                body: "Borgo Egnazia is well positioned to lead Puglian hospitality on sustainability. Existing strengths in renewable energy sourcing and community engagement provide a credible base; the immediate gaps are systematic waste tracking and externally verified reporting. This strategy aligns the brand's cultural identity with a phased ESG program benchmarked against Areias do Seixo, Sextantio, and Finca Serena.".to_string(),
            },
            ReportSection {
                heading: "Goal Alignment".to_string(),
                body: "Ambition is set at sector leadership within three seasons. Double materiality screening ranks water stewardship, seasonal employment quality, and heritage preservation as the issues where business impact and stakeholder concern overlap most. Stakeholder co-creation workshops with travel agents, lenders, and artisan partners anchor each goal.".to_string(),
            },
            ReportSection {
                heading: "Phased Action Plan".to_string(),
                body: "Phase 1 (0-6 months): establish waste and energy baselines, publish a reporting framework responding to bank and travel-agent data requests. Phase 2 (6-18 months): launch climate-positive retreat pilots and artisan collaboration lines; extend the shoulder season with eco-tourism offers. Phase 3 (18+ months): external assurance, competitor benchmarking refresh, and a public roadmap.".to_string(),
            },
            ReportSection {
                heading: "Environmental Initiatives".to_string(),
                body: "Track and cut food waste across kitchens, close the loop on garden and spa water, and shift remaining energy contracts to certified renewable supply. Each initiative carries a monetisation note: lower input costs, premium positioning, and eligibility for green financing.".to_string(),
            },
            ReportSection {
                heading: "Social Initiatives".to_string(),
                body: "Deepen the existing local engagement program: year-round contracts tied to the extended season, a Puglian craft residency with revenue sharing, and guest experiences built around regional tradition rather than imported amenities.".to_string(),
            },
            ReportSection {
                heading: "Governance Initiatives".to_string(),
                body: "Stand up a sustainability steering group reporting to ownership quarterly, adopt a recognised disclosure framework, and fold ESG metrics into management incentives so progress survives leadership changes.".to_string(),
            },
        ],
    }
}
