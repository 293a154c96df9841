//! Rule registry: composes independent rule modules into ordered rule lists.
//!
//! The registry holds no game logic. Its one contract is ordering: command
//! rules are consulted in registration order for legality (first failure
//! rejects) and contribute events in that same order; event rules likewise
//! react in registration order per event. Rule modules implicitly depend on
//! this determinism.

use super::rule::{CommandRule, EventRule};

/// A collaborator contributing rules to the registry.
///
/// Modules are registered in a fixed order and know nothing about each
/// other.
pub trait RulesModule {
    /// Command rules this module contributes, in order.
    fn command_rules(&self) -> Vec<Box<dyn CommandRule>>;

    /// Event rules this module contributes, in order. Most modules have
    /// none.
    fn event_rules(&self) -> Vec<Box<dyn EventRule>> {
        Vec::new()
    }
}

/// The flattened, ordered rule lists the engine consumes.
#[derive(Debug, Default)]
pub struct RuleSet {
    command_rules: Vec<Box<dyn CommandRule>>,
    event_rules: Vec<Box<dyn EventRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a rule set from modules, preserving module order.
    #[must_use]
    pub fn from_modules<'a>(modules: impl IntoIterator<Item = &'a dyn RulesModule>) -> Self {
        let mut rules = Self::new();
        for module in modules {
            rules.register_module(module);
        }
        rules
    }

    /// The built-in rule modules in their canonical order: end turn, pass,
    /// tactical action.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_modules([
            &crate::turns::end_turn::EndTurnModule as &dyn RulesModule,
            &crate::turns::pass_action::PassActionModule,
            &crate::actions::tactical_action::TacticalActionModule,
        ])
    }

    /// Append a module's rules.
    pub fn register_module(&mut self, module: &dyn RulesModule) {
        self.command_rules.extend(module.command_rules());
        self.event_rules.extend(module.event_rules());
    }

    /// Append a single command rule after everything registered so far.
    pub fn push_command_rule(&mut self, rule: Box<dyn CommandRule>) {
        self.command_rules.push(rule);
    }

    /// Append a single event rule after everything registered so far.
    pub fn push_event_rule(&mut self, rule: Box<dyn EventRule>) {
        self.event_rules.push(rule);
    }

    /// Command rules in registration order.
    #[must_use]
    pub fn command_rules(&self) -> &[Box<dyn CommandRule>] {
        &self.command_rules
    }

    /// Event rules in registration order.
    #[must_use]
    pub fn event_rules(&self) -> &[Box<dyn EventRule>] {
        &self.event_rules
    }
}
