use crate::error::{Result, StripError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which set of removal rules to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Every rule: dotted imports, bare annotations, `@EqualsAndHashCode(..)`
    /// and `@Builder.Default`
    #[default]
    Full,
    /// The narrower legacy set: single-segment imports and the six bare
    /// class-level annotations only
    Minimal,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Full => "full",
            Profile::Minimal => "minimal",
        }
    }
}

// Everything a rule pattern needs around the target: own line, optional
// indentation, optional trailing blanks, then the line break.
const LINE_START: &str = r"(?m)^[ \t]*";
const LINE_END: &str = r"[ \t]*\r?\n";

const IDENT: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

/// A single (pattern, empty replacement) substitution
#[derive(Debug, Clone)]
pub struct RemovalRule {
    name: &'static str,
    pattern: Regex,
}

impl RemovalRule {
    /// Build a rule from the text that must sit alone on its line
    pub fn new(name: &'static str, body: &str) -> Result<Self> {
        let source = format!("{}{}{}", LINE_START, body, LINE_END);
        let pattern = Regex::new(&source).map_err(|source| StripError::Pattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self { name, pattern })
    }

    /// Rule removing a bare annotation such as `@Data`
    pub fn annotation(name: &'static str, annotation: &str) -> Result<Self> {
        Self::new(name, &format!("@{}", regex::escape(annotation)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Remove every line this rule matches, returning the new text and how
    /// many lines went away
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        (self.pattern.replace_all(text, ""), count)
    }
}

/// The ordered removal rules for a profile
#[derive(Debug, Clone)]
pub struct RuleSet {
    profile: Profile,
    rules: Vec<RemovalRule>,
}

impl RuleSet {
    pub fn new(profile: Profile) -> Result<Self> {
        let rules = match profile {
            Profile::Full => vec![
                RemovalRule::new("wildcard-import", r"import[ \t]+lombok\.\*[ \t]*;")?,
                RemovalRule::new(
                    "named-import",
                    &format!(r"import[ \t]+lombok(?:\.{})+[ \t]*;", IDENT),
                )?,
                RemovalRule::annotation("slf4j", "Slf4j")?,
                RemovalRule::annotation("required-args-constructor", "RequiredArgsConstructor")?,
                RemovalRule::annotation("data", "Data")?,
                RemovalRule::annotation("no-args-constructor", "NoArgsConstructor")?,
                RemovalRule::annotation("all-args-constructor", "AllArgsConstructor")?,
                RemovalRule::annotation("builder", "Builder")?,
                // Single line only; stops at the first ')'
                RemovalRule::new("equals-and-hash-code-args", r"@EqualsAndHashCode\([^)\r\n]*\)")?,
                RemovalRule::annotation("builder-default", "Builder.Default")?,
            ],
            Profile::Minimal => vec![
                RemovalRule::new("wildcard-import", r"import[ \t]+lombok\.\*[ \t]*;")?,
                RemovalRule::new(
                    "named-import",
                    &format!(r"import[ \t]+lombok\.{}[ \t]*;", IDENT),
                )?,
                RemovalRule::annotation("slf4j", "Slf4j")?,
                RemovalRule::annotation("required-args-constructor", "RequiredArgsConstructor")?,
                RemovalRule::annotation("data", "Data")?,
                RemovalRule::annotation("no-args-constructor", "NoArgsConstructor")?,
                RemovalRule::annotation("all-args-constructor", "AllArgsConstructor")?,
                RemovalRule::annotation("builder", "Builder")?,
            ],
        };

        Ok(Self { profile, rules })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn rules(&self) -> &[RemovalRule] {
        &self.rules
    }

    /// Apply every rule in order
    pub fn strip(&self, content: &str) -> String {
        self.strip_counted(content).0
    }

    /// Apply every rule in order, also returning the number of lines removed
    /// per rule (same order as [`RuleSet::rules`])
    pub fn strip_counted(&self, content: &str) -> (String, Vec<(&'static str, usize)>) {
        let mut text = content.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (stripped, removed) = rule.apply(&text);
            if let Cow::Owned(next) = stripped {
                text = next;
            }
            counts.push((rule.name(), removed));
        }

        (text, counts)
    }
}
