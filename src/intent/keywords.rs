//! Fixed keyword tables for goal and industry classification.
//!
//! Both tables are scanned in declaration order with first-match-wins
//! semantics, so the order is load-bearing: "tech" before "technology" means
//! a message containing either reports "tech". Matching is substring-based
//! without word boundaries ("b2business" matches "b2b").

/// Goal keywords; the first one contained in the message is the goal value.
pub const GOAL_KEYWORDS: &[&str] = &[
    "lead gen",
    "lead generation",
    "sales",
    "marketing",
    "growth",
    "automation",
    "optimize",
    "scale",
];

/// Industry keywords; the first one contained in the message wins.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "tech",
    "technology",
    "healthcare",
    "finance",
    "retail",
    "ecommerce",
    "saas",
    "b2b",
    "b2c",
    "manufacturing",
];
