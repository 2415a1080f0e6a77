//! Tests for the single-pass style rules.

use gostrict::rules::{
    ComplexityRule, FuncLenRule, MaxParamsRule, NamingRule, NestingRule, Rule, RuleContext,
};
use gostrict::{Config, Diagnostic, Diagnostics, GoPackage, GoParser, ParsedFile};
use std::path::Path;

fn parse(path: &str, source: &str) -> ParsedFile {
    GoParser::new()
        .parse(Path::new(path), source)
        .expect("parse failed")
}

fn run_rule(rule: &dyn Rule, config: &Config, sources: &[(&str, &str)]) -> Vec<Diagnostic> {
    let files = sources
        .iter()
        .map(|(path, source)| parse(path, source))
        .collect();
    let pkg = GoPackage::new("pkg", files);
    let ctx = RuleContext { config };
    let mut sink = Diagnostics::new();
    rule.check(&pkg, &ctx, &mut sink);
    sink.into_items()
}

#[test]
fn naming_flags_snake_case() {
    let config = Config::default();
    let diagnostics = run_rule(
        &NamingRule,
        &config,
        &[("pkg/a.go", "package pkg\n\nfunc parse_http_request() {}\n")],
    );

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "GS002");
    assert!(diagnostics[0].message.contains("'parse_http_request'"));
}

#[test]
fn naming_accepts_mixed_caps() {
    let config = Config::default();
    let diagnostics = run_rule(
        &NamingRule,
        &config,
        &[(
            "pkg/a.go",
            "package pkg\n\nfunc ParseHTTPRequest() {}\n\nfunc calculateTotal() {}\n",
        )],
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn naming_skips_test_files() {
    let config = Config::default();
    let diagnostics = run_rule(
        &NamingRule,
        &config,
        &[("pkg/a_test.go", "package pkg\n\nfunc helper_for_tests() {}\n")],
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn max_params_flags_excess_parameters() {
    let config = Config::default();
    let diagnostics = run_rule(
        &MaxParamsRule,
        &config,
        &[(
            "pkg/a.go",
            "package pkg\n\nfunc build(a, b, c int, d string, e bool, f float64) {}\n",
        )],
    );

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("(6 > 5)"));
}

#[test]
fn max_params_respects_configured_limit() {
    let mut config = Config::default();
    config.limits.max_params = 2;
    let diagnostics = run_rule(
        &MaxParamsRule,
        &config,
        &[("pkg/a.go", "package pkg\n\nfunc build(a, b, c int) {}\n")],
    );

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("(3 > 2)"));
}

#[test]
fn func_len_flags_long_functions() {
    let mut body = String::new();
    for i in 0..40 {
        body.push_str(&format!("\tx{} := {}\n\t_ = x{}\n", i, i, i));
    }
    let source = format!("package pkg\n\nfunc long() {{\n{}}}\n", body);

    let config = Config::default();
    let diagnostics = run_rule(&FuncLenRule, &config, &[("pkg/a.go", source.as_str())]);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "GS004");
    assert!(diagnostics[0].message.contains("is too long"));
}

#[test]
fn func_len_accepts_short_functions() {
    let config = Config::default();
    let diagnostics = run_rule(
        &FuncLenRule,
        &config,
        &[("pkg/a.go", "package pkg\n\nfunc short() {\n\t_ = 1\n}\n")],
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn complexity_flags_branch_heavy_functions() {
    let mut config = Config::default();
    config.limits.max_complexity = 3;
    let source = r#"package pkg

func busy(a, b int) int {
	if a > 0 {
		return a
	}
	if b > 0 {
		return b
	}
	for i := 0; i < 10; i++ {
		a++
	}
	return 0
}
"#;
    let diagnostics = run_rule(&ComplexityRule, &config, &[("pkg/a.go", source)]);

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("cyclomatic complexity 4"));
}

#[test]
fn nesting_flags_deep_functions() {
    let mut config = Config::default();
    config.limits.max_nesting = 2;
    let source = r#"package pkg

func deep(a int) {
	if a > 0 {
		for i := 0; i < a; i++ {
			if i%2 == 0 {
				a++
			}
		}
	}
}
"#;
    let diagnostics = run_rule(&NestingRule, &config, &[("pkg/a.go", source)]);

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("nesting depth 3"));
}

#[test]
fn disabled_simple_rule_is_noop() {
    let mut config = Config::default();
    config.rules.naming.enabled = false;
    let diagnostics = run_rule(
        &NamingRule,
        &config,
        &[("pkg/a.go", "package pkg\n\nfunc parse_http_request() {}\n")],
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn rule_exclusion_patterns_apply_per_rule() {
    let mut config = Config::default();
    config.rules.naming.exclude.push("*_gen.go".to_string());

    let sources = [(
        "pkg/api_gen.go",
        "package pkg\n\nfunc parse_http_request() {}\n",
    )];

    let naming = run_rule(&NamingRule, &config, &sources);
    assert!(naming.is_empty());

    // The same file is still visible to other rules
    let mut limit_config = config.clone();
    limit_config.limits.max_params = 0;
    let sources_with_params = [(
        "pkg/api_gen.go",
        "package pkg\n\nfunc build(a int) {}\n",
    )];
    let params = run_rule(&MaxParamsRule, &limit_config, &sources_with_params);
    assert_eq!(params.len(), 1);
}
