//! Commit message derivation
//!
//! Messages are derived purely from the path (and, for per-file runs, the
//! status code), so the same entry always yields the same message.

use crate::models::{basename, ChangeEntry, ChangeKind};

/// Placeholder substituted with the path's basename
pub const BASENAME_PLACEHOLDER: &str = "{basename}";

/// Suffix appended to per-file messages so CI skips each of the many pushes
pub const SKIP_CI: &str = "[skip ci]";

/// How a rule tests a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatch {
    Contains(String),
    EndsWith(String),
}

impl PathMatch {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Contains(needle) => path.contains(needle.as_str()),
            PathMatch::EndsWith(suffix) => path.ends_with(suffix.as_str()),
        }
    }
}

/// A (predicate, message template) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRule {
    pub matcher: PathMatch,
    pub template: String,
}

impl MessageRule {
    pub fn contains(needle: &str, template: &str) -> Self {
        Self {
            matcher: PathMatch::Contains(needle.to_string()),
            template: template.to_string(),
        }
    }

    pub fn ends_with(suffix: &str, template: &str) -> Self {
        Self {
            matcher: PathMatch::EndsWith(suffix.to_string()),
            template: template.to_string(),
        }
    }
}

/// Ordered rule list; the first matching rule wins
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<MessageRule>,
    fallback: String,
}

impl RuleSet {
    pub fn new(rules: Vec<MessageRule>, fallback: &str) -> Self {
        Self {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// Rules used by the batch committer.
    ///
    /// `BuddyChat.tsx` also contains `Chat.tsx`, so rule 2 never fires.
    /// It stays in place because reordering would change which message wins.
    pub fn batch_default() -> Self {
        Self::new(
            vec![
                MessageRule::contains(
                    "Chat.tsx",
                    "Fix chat UI overflow, scroll, and delete button visibility",
                ),
                MessageRule::contains("BuddyChat.tsx", "Fix BuddyChat text overflow"),
                MessageRule::contains(
                    "Layout.tsx",
                    "Enlarge sidebar buttons and add innovative hover effect",
                ),
                MessageRule::contains("card.tsx", "Update Card component with glassmorphism styles"),
                MessageRule::contains("socket", "Update socket handlers"),
                MessageRule::contains("routes", "Update API routes"),
                MessageRule::ends_with(".md", "Add documentation: {basename}"),
                MessageRule::contains("vercel.json", "Update Vercel configuration"),
            ],
            "Update {basename}",
        )
    }

    pub fn rules(&self) -> &[MessageRule] {
        &self.rules
    }

    /// Returns the first rule matching `path`, if any
    pub fn matching_rule(&self, path: &str) -> Option<&MessageRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(path))
    }

    pub fn message_for(&self, path: &str) -> String {
        let template = self
            .matching_rule(path)
            .map(|rule| rule.template.as_str())
            .unwrap_or(&self.fallback);
        render(template, path)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::batch_default()
    }
}

fn render(template: &str, path: &str) -> String {
    template.replace(BASENAME_PLACEHOLDER, basename(path))
}

/// Message used by the per-file pusher, chosen by change kind
pub fn per_file_message(entry: &ChangeEntry) -> String {
    let verb = match entry.kind() {
        ChangeKind::Deleted => "Delete",
        ChangeKind::Untracked => "Add",
        _ => "Update",
    };
    format!("{} {} {}", verb, entry.basename(), SKIP_CI)
}
