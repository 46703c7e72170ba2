//! Naming and hook rules, and the registry that runs them
//!
//! A rule is a unit struct declared with [`declare_rule!`] plus a [`Rule`]
//! impl. The registry owns every rule together with the state `namelint.toml`
//! gives it: whether it runs and which severity its diagnostics carry.

pub mod hooks;
pub mod naming;

use serde::Deserialize;

use crate::config::RulesConfig;
use crate::diagnostic::Diagnostic;
use crate::parser::ParsedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Naming,
    Hooks,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Naming => "naming",
            RuleCategory::Hooks => "hooks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMetadata {
    /// Short code such as `H001`
    pub id: &'static str,
    /// Kebab-case name such as `hook-func-name`
    pub name: &'static str,
    pub description: &'static str,
    pub category: RuleCategory,
    pub severity: Severity,
    pub examples: Option<&'static str>,
}

impl RuleMetadata {
    /// Config entries, directives and the CLI refer to a rule by id or name.
    pub fn answers_to(&self, rule_ref: &str) -> bool {
        self.id == rule_ref || self.name == rule_ref
    }
}

pub trait Rule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;
    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic>;
}

struct Registered {
    rule: Box<dyn Rule>,
    enabled: bool,
    severity: Option<Severity>,
}

impl Registered {
    fn configure(&mut self, config: &RulesConfig) {
        let metadata = self.rule.metadata();
        let category_on = match metadata.category {
            RuleCategory::Naming => config.naming,
            RuleCategory::Hooks => config.hooks,
        }
        .unwrap_or(true);

        self.enabled =
            category_on && !config.disabled.iter().any(|rule_ref| metadata.answers_to(rule_ref));
        self.severity = config
            .severity
            .get(metadata.id)
            .or_else(|| config.severity.get(metadata.name))
            .copied();
    }

    fn run(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let mut diagnostics = self.rule.check(file);
        if let Some(severity) = self.severity {
            for diagnostic in &mut diagnostics {
                diagnostic.severity = severity;
            }
        }
        tracing::trace!(
            rule = self.rule.metadata().id,
            count = diagnostics.len(),
            "rule finished"
        );
        diagnostics
    }
}

/// Rules in registration order, which is also the order of their output.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Registered>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(Registered {
            rule,
            enabled: true,
            severity: None,
        });
    }

    /// Applies `config` to every registered rule, replacing earlier settings.
    pub fn configure(&mut self, config: &RulesConfig) {
        for registered in &mut self.rules {
            registered.configure(config);
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.rule.as_ref())
    }

    pub fn run_all(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        self.rules
            .iter()
            .filter(|r| r.enabled)
            .flat_map(|r| r.run(file))
            .collect()
    }

    pub fn get_rule(&self, id: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.metadata().id == id)
    }

    pub fn find_rule(&self, rule_ref: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.metadata().answers_to(rule_ref))
    }

    /// False for unknown rules.
    pub fn is_rule_enabled(&self, rule_ref: &str) -> bool {
        self.rules
            .iter()
            .any(|r| r.enabled && r.rule.metadata().answers_to(rule_ref))
    }
}

/// Declares a rule struct holding its [`RuleMetadata`], with `new()` and
/// `Default`. The `Rule` impl is written by hand next to it.
#[macro_export]
macro_rules! declare_rule {
    (
        $name:ident,
        id = $id:literal,
        name = $rule_name:literal,
        description = $desc:literal,
        category = $cat:ident,
        severity = $sev:ident
        $(, examples = $examples:literal)?
    ) => {
        pub struct $name {
            metadata: $crate::rules::RuleMetadata,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    metadata: $crate::rules::RuleMetadata {
                        id: $id,
                        name: $rule_name,
                        description: $desc,
                        category: $crate::rules::RuleCategory::$cat,
                        severity: $crate::rules::Severity::$sev,
                        examples: None $(.or(Some($examples)))?,
                    },
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
