use super::{
    ComplexityRule, DeadCodeRule, FuncLenRule, MaxParamsRule, NamingRule, NestingRule, Rule,
};

/// All rules in reporting order, dead-code first
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DeadCodeRule),
        Box::new(NamingRule),
        Box::new(MaxParamsRule),
        Box::new(FuncLenRule),
        Box::new(ComplexityRule),
        Box::new(NestingRule),
    ]
}

/// Apply CLI rule selection on top of the registry: `only` keeps just the
/// named rules (empty keeps all), `disabled` then removes names.
pub fn select_rules(only: &[String], disabled: &[String]) -> Vec<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .filter(|rule| only.is_empty() || only.iter().any(|name| name == rule.name()))
        .filter(|rule| !disabled.iter().any(|name| name == rule.name()))
        .collect()
}
