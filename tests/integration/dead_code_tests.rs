//! Behavioral tests for the dead-code rule: every scenario a package can
//! present is driven through the rule with inline sources.

use gostrict::rules::dead_code::DeadCodeRule;
use gostrict::rules::{Rule, RuleContext};
use gostrict::{Config, Diagnostic, Diagnostics, GoPackage, GoParser, ParsedFile};
use std::path::Path;

fn parse(path: &str, source: &str) -> ParsedFile {
    GoParser::new()
        .parse(Path::new(path), source)
        .expect("parse failed")
}

fn analyze_with(config: &Config, sources: &[(&str, &str)]) -> Vec<Diagnostic> {
    let files = sources
        .iter()
        .map(|(path, source)| parse(path, source))
        .collect();
    let pkg = GoPackage::new("pkg", files);
    let ctx = RuleContext { config };
    let mut sink = Diagnostics::new();
    DeadCodeRule.check(&pkg, &ctx, &mut sink);
    sink.into_items()
}

fn analyze(sources: &[(&str, &str)]) -> Vec<Diagnostic> {
    analyze_with(&Config::default(), sources)
}

#[test]
fn scenario_uncalled_private_function_is_reported_once() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        "package pkg\n\nfunc helper() int {\n\treturn 1\n}\n",
    )]);

    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.code, "GS001");
    assert!(d.message.contains("private function 'helper'"));
    assert_eq!(d.line, 3);
}

#[test]
fn scenario_value_reference_counts_as_usage() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        "package pkg\n\nfunc helper() int {\n\treturn 1\n}\n\nvar _ = helper\n",
    )]);

    assert!(diagnostics.is_empty());
}

#[test]
fn scenario_member_call_silences_all_same_named_methods() {
    // compute on service is never called; compute on task is. Matching is
    // name-only, so neither is reported.
    let diagnostics = analyze(&[(
        "pkg/a.go",
        r#"package pkg

type service struct{}

func (s *service) compute() int {
	return 1
}

type task struct{}

func (t *task) compute() int {
	return 2
}

func Run(t *task) int {
	return t.compute()
}
"#,
    )]);

    assert!(diagnostics.is_empty());
}

#[test]
fn scenario_callback_argument_counts_as_usage() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        r#"package pkg

func dispatch() {}

func register(handler func()) {}

func Setup() {
	register(dispatch)
}
"#,
    )]);

    assert!(diagnostics.is_empty());
}

#[test]
fn scenario_main_is_never_reported() {
    let diagnostics = analyze(&[("cmd/main.go", "package main\n\nfunc main() {}\n")]);
    assert!(diagnostics.is_empty());
}

#[test]
fn init_is_never_reported() {
    let diagnostics = analyze(&[("pkg/a.go", "package pkg\n\nfunc init() {}\n")]);
    assert!(diagnostics.is_empty());
}

#[test]
fn exported_functions_are_never_considered() {
    let diagnostics = analyze(&[("pkg/a.go", "package pkg\n\nfunc Helper() {}\n")]);
    assert!(diagnostics.is_empty());
}

#[test]
fn declarations_in_test_files_are_never_reported() {
    let diagnostics = analyze(&[(
        "pkg/a_test.go",
        "package pkg\n\nfunc fixtureOnly() {}\n",
    )]);
    assert!(diagnostics.is_empty());
}

#[test]
fn usage_in_test_files_is_not_evidence() {
    let diagnostics = analyze(&[
        ("pkg/a.go", "package pkg\n\nfunc helper() {}\n"),
        (
            "pkg/a_test.go",
            "package pkg\n\nimport \"testing\"\n\nfunc TestHelper(t *testing.T) {\n\thelper()\n}\n",
        ),
    ]);

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("'helper'"));
}

#[test]
fn cross_file_call_counts_as_usage() {
    let diagnostics = analyze(&[
        ("pkg/a.go", "package pkg\n\nfunc helper() {}\n"),
        ("pkg/b.go", "package pkg\n\nfunc Run() {\n\thelper()\n}\n"),
    ]);

    assert!(diagnostics.is_empty());
}

#[test]
fn function_stored_in_composite_literal_is_live() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        r#"package pkg

func onEvent() {}

type handler struct {
	callback func()
}

func Build() handler {
	return handler{callback: onEvent}
}
"#,
    )]);

    assert!(diagnostics.is_empty());
}

#[test]
fn function_assigned_to_variable_is_live() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        r#"package pkg

func fallback() {}

func Pick() func() {
	var f func()
	f = fallback
	return f
}
"#,
    )]);

    assert!(diagnostics.is_empty());
}

#[test]
fn method_diagnostic_names_receiver_and_method() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        "package pkg\n\ntype cache struct{}\n\nfunc (c *cache) evict() {}\n",
    )]);

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("private method 'cache.evict'"));
}

#[test]
fn unsupported_receiver_shapes_are_silently_dropped() {
    let diagnostics = analyze(&[(
        "pkg/a.go",
        r#"package pkg

type box[T any] struct{}

func (b *box[T]) drain() {}
"#,
    )]);

    // The generic receiver excludes the method from consideration; no
    // report and no failure.
    assert!(diagnostics.is_empty());
}

#[test]
fn identical_declarations_are_reported_independently() {
    let diagnostics = analyze(&[
        ("pkg/a.go", "package pkg\n\nfunc dup() {}\n"),
        ("pkg/b.go", "package pkg\n\nfunc dup() {}\n"),
    ]);

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.message.contains("'dup'")));
}

#[test]
fn analysis_is_idempotent() {
    let sources = [
        ("pkg/a.go", "package pkg\n\nfunc helper() {}\n\nfunc orphan() {}\n"),
        ("pkg/b.go", "package pkg\n\nfunc Run() {\n\thelper()\n}\n"),
    ];

    let mut first: Vec<String> = analyze(&sources).into_iter().map(|d| d.message).collect();
    let mut second: Vec<String> = analyze(&sources).into_iter().map(|d| d.message).collect();
    first.sort();
    second.sort();

    assert_eq!(first, second);
}

#[test]
fn adding_usage_only_removes_diagnostics() {
    let without_usage = analyze(&[(
        "pkg/a.go",
        "package pkg\n\nfunc helper() {}\n\nfunc orphan() {}\n",
    )]);
    let with_usage = analyze(&[
        ("pkg/a.go", "package pkg\n\nfunc helper() {}\n\nfunc orphan() {}\n"),
        ("pkg/b.go", "package pkg\n\nfunc Run() {\n\thelper()\n}\n"),
    ]);

    assert_eq!(without_usage.len(), 2);
    assert_eq!(with_usage.len(), 1);

    // Every remaining diagnostic was already present before
    let before: Vec<&str> = without_usage.iter().map(|d| d.message.as_str()).collect();
    for d in &with_usage {
        assert!(before.contains(&d.message.as_str()));
    }
}

#[test]
fn disabled_rule_reports_nothing() {
    let mut config = Config::default();
    config.rules.dead_code.enabled = false;

    let diagnostics = analyze_with(
        &config,
        &[("pkg/a.go", "package pkg\n\nfunc helper() {}\n")],
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn rule_excluded_file_neither_collects_nor_witnesses() {
    let mut config = Config::default();
    config.rules.dead_code.exclude.push("*_gen.go".to_string());

    // Declarations in the excluded file are not collected...
    let diagnostics = analyze_with(
        &config,
        &[("pkg/api_gen.go", "package pkg\n\nfunc generated() {}\n")],
    );
    assert!(diagnostics.is_empty());

    // ...and usage evidence inside it does not keep other code alive.
    let diagnostics = analyze_with(
        &config,
        &[
            ("pkg/a.go", "package pkg\n\nfunc helper() {}\n"),
            ("pkg/api_gen.go", "package pkg\n\nfunc Boot() {\n\thelper()\n}\n"),
        ],
    );
    assert_eq!(diagnostics.len(), 1);
}
