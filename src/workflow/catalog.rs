use super::{ConnectionTarget, Node, NodeConnections, WorkflowTemplate};
use ahash::AHashMap;
use serde_json::json;

/// The catalog keys for canned workflow templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    FollowUp,
    Notification,
}

impl TemplateKind {
    /// Resolves a type key. Unknown keys fall back silently to the follow-up
    /// template; that fallback is the documented default, not an error.
    pub fn from_key(key: &str) -> Self {
        match key {
            "notification" => TemplateKind::Notification,
            _ => TemplateKind::FollowUp,
        }
    }
}

/// Source of the millisecond seed used to disambiguate node ids.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock seed source used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Emits canned workflow templates with node ids unique within a generation
/// batch.
///
/// Ids are suffixed with the clock's millisecond reading, so two calls within
/// the same instant may collide; templates are disposable scaffolding, not
/// long-lived identifiers. Tests inject a fixed [`Clock`] to assert exact
/// output graphs.
pub struct TemplateGenerator {
    clock: Box<dyn Clock>,
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateGenerator {
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the id seed source.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Produces the catalog template selected by `kind`, stamped with a fresh
    /// id seed.
    pub fn generate(&self, name: &str, kind: TemplateKind) -> WorkflowTemplate {
        let seed = self.clock.now_millis();
        match kind {
            TemplateKind::FollowUp => follow_up(name, seed),
            TemplateKind::Notification => notification(name, seed),
        }
    }
}

/// Convenience entry point: resolves `type_key` (unknown keys fall back to
/// follow-up) and stamps ids from the system clock.
pub fn generate_template(name: &str, type_key: &str) -> WorkflowTemplate {
    TemplateGenerator::new().generate(name, TemplateKind::from_key(type_key))
}

/// Manual trigger, a wait period, then a follow-up email.
fn follow_up(name: &str, seed: i64) -> WorkflowTemplate {
    WorkflowTemplate {
        name: format!("Generated: {name}"),
        nodes: vec![
            Node {
                id: format!("trigger-{seed}"),
                name: "Start".to_string(),
                node_type: "n8n-nodes-base.manualTrigger".to_string(),
                type_version: 1.0,
                position: [240, 300],
                parameters: json!({}),
            },
            Node {
                id: format!("wait-{seed}"),
                name: "Wait Period".to_string(),
                node_type: "n8n-nodes-base.wait".to_string(),
                type_version: 1.1,
                position: [460, 300],
                parameters: json!({ "amount": 3, "unit": "days" }),
            },
            Node {
                id: format!("action-{seed}"),
                name: "Send Follow-up".to_string(),
                node_type: "n8n-nodes-base.emailSend".to_string(),
                type_version: 2.1,
                position: [680, 300],
                parameters: json!({}),
            },
        ],
        connections: chain(&[("Start", "Wait Period"), ("Wait Period", "Send Follow-up")]),
    }
}

/// Webhook trigger forwarding into an HTTP notification call.
fn notification(name: &str, seed: i64) -> WorkflowTemplate {
    WorkflowTemplate {
        name: format!("Generated: {name}"),
        nodes: vec![
            Node {
                id: format!("trigger-{seed}"),
                name: "Webhook".to_string(),
                node_type: "n8n-nodes-base.webhook".to_string(),
                type_version: 2.0,
                position: [240, 300],
                parameters: json!({ "path": "notify", "httpMethod": "POST" }),
            },
            Node {
                id: format!("notify-{seed}"),
                name: "Send Notification".to_string(),
                node_type: "n8n-nodes-base.httpRequest".to_string(),
                type_version: 4.2,
                position: [460, 300],
                parameters: json!({ "method": "POST" }),
            },
        ],
        connections: chain(&[("Webhook", "Send Notification")]),
    }
}

/// Builds single-output `main` connections for a chain of (source, target)
/// links.
fn chain(links: &[(&str, &str)]) -> AHashMap<String, NodeConnections> {
    links
        .iter()
        .map(|(source, target)| {
            (
                (*source).to_string(),
                NodeConnections {
                    main: vec![vec![ConnectionTarget {
                        node: (*target).to_string(),
                        port: "main".to_string(),
                        index: 0,
                    }]],
                },
            )
        })
        .collect()
}
