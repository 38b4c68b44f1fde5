use rstest::rstest;
use serde_json::{json, Value};

use untext::projection::{project_module, ProjectionError, Settings};

use super::*;

fn arguments() -> Value {
    json!({"_type": "arguments"})
}

fn function(overrides: Value) -> Value {
    let mut definition = json!({
        "_type": "FunctionDef",
        "name": "f",
        "args": arguments(),
        "body": [pass()],
        "decorator_list": []
    });
    if let (Some(target), Some(source)) = (definition.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    definition
}

#[rstest]
#[case::named_expr(json!({"_type": "NamedExpr", "target": name("x"), "value": int(1)}), "NamedExpr")]
#[case::lambda(json!({"_type": "Lambda", "args": arguments(), "body": name("x")}), "Lambda")]
#[case::set_comp(
    json!({
        "_type": "SetComp",
        "elt": name("x"),
        "generators": [{"_type": "comprehension", "target": name("x"), "iter": name("xs")}]
    }),
    "SetComp"
)]
#[case::dict_comp(
    json!({
        "_type": "DictComp",
        "key": name("k"),
        "value": name("v"),
        "generators": [{"_type": "comprehension", "target": name("k"), "iter": name("ks")}]
    }),
    "DictComp"
)]
#[case::generator_exp(
    json!({
        "_type": "GeneratorExp",
        "elt": name("x"),
        "generators": [{"_type": "comprehension", "target": name("x"), "iter": name("xs")}]
    }),
    "GeneratorExp"
)]
#[case::await_(json!({"_type": "Await", "value": call("f")}), "Await")]
fn unsupported_expressions(#[case] fixture: Value, #[case] kind: &str) {
    let expression = expression(fixture);
    match project_expression(&expression) {
        Err(ProjectionError::UnsupportedConstruct {
            kind: rejected,
            detail: None,
        }) => assert_eq!(rejected, kind),
        other => panic!("expected {} to be rejected, got {:?}", kind, other),
    }
}

#[rstest]
#[case::async_function(
    {
        let mut definition = function(json!({}));
        definition["_type"] = json!("AsyncFunctionDef");
        definition
    },
    "AsyncFunctionDef"
)]
#[case::type_alias(
    json!({"_type": "TypeAlias", "name": name("T"), "type_params": [], "value": name("int")}),
    "TypeAlias"
)]
#[case::ann_assign(
    json!({"_type": "AnnAssign", "target": name("x"), "annotation": name("int"), "value": int(1), "simple": 1}),
    "AnnAssign"
)]
#[case::async_for(
    json!({"_type": "AsyncFor", "target": name("x"), "iter": name("xs"), "body": [pass()], "orelse": []}),
    "AsyncFor"
)]
#[case::async_with(
    json!({"_type": "AsyncWith", "items": [{"_type": "withitem", "context_expr": name("c")}], "body": [pass()]}),
    "AsyncWith"
)]
#[case::try_(
    json!({
        "_type": "Try",
        "body": [pass()],
        "handlers": [{"_type": "ExceptHandler", "type": name("E"), "name": null, "body": [pass()]}],
        "orelse": [],
        "finalbody": []
    }),
    "Try"
)]
#[case::try_star(
    json!({"_type": "TryStar", "body": [pass()], "handlers": [], "orelse": [], "finalbody": [pass()]}),
    "TryStar"
)]
#[case::match_mapping(
    json!({
        "_type": "Match",
        "subject": name("x"),
        "cases": [{
            "_type": "match_case",
            "pattern": {"_type": "MatchMapping", "keys": [], "patterns": [], "rest": "rest"},
            "body": [pass()]
        }]
    }),
    "MatchMapping"
)]
#[case::match_class(
    json!({
        "_type": "Match",
        "subject": name("x"),
        "cases": [{
            "_type": "match_case",
            "pattern": {"_type": "MatchClass", "cls": name("Point")},
            "body": [pass()]
        }]
    }),
    "MatchClass"
)]
#[case::match_star(
    json!({
        "_type": "Match",
        "subject": name("x"),
        "cases": [{
            "_type": "match_case",
            "pattern": {"_type": "MatchSequence", "patterns": [{"_type": "MatchStar", "name": "rest"}]},
            "body": [pass()]
        }]
    }),
    "MatchStar"
)]
fn unsupported_statements(#[case] fixture: Value, #[case] kind: &str) {
    let statement = statement(fixture);
    match project_statement(&statement) {
        Err(ProjectionError::UnsupportedConstruct {
            kind: rejected,
            detail: None,
        }) => assert_eq!(rejected, kind),
        other => panic!("expected {} to be rejected, got {:?}", kind, other),
    }
}

#[rstest]
#[case::decorators(
    function(json!({"decorator_list": [name("cache")]})),
    "FunctionDef",
    "decorators"
)]
#[case::type_comment(
    function(json!({"type_comment": "(int) -> None"})),
    "FunctionDef",
    "type comments"
)]
#[case::type_params(
    function(json!({"type_params": [{"_type": "TypeVar", "name": "T"}]})),
    "FunctionDef",
    "type parameters"
)]
#[case::positional_only(
    function(json!({"args": {"_type": "arguments", "posonlyargs": [{"_type": "arg", "arg": "a"}]}})),
    "FunctionDef",
    "positional-only parameters"
)]
#[case::keyword_only(
    function(json!({"args": {"_type": "arguments", "kwonlyargs": [{"_type": "arg", "arg": "k"}], "kw_defaults": [null]}})),
    "FunctionDef",
    "keyword-only parameters"
)]
#[case::varargs(
    function(json!({"args": {"_type": "arguments", "vararg": {"_type": "arg", "arg": "rest"}}})),
    "FunctionDef",
    "*args parameters"
)]
#[case::kwargs(
    function(json!({"args": {"_type": "arguments", "kwarg": {"_type": "arg", "arg": "options"}}})),
    "FunctionDef",
    "**kwargs parameters"
)]
#[case::class_decorators(
    json!({"_type": "ClassDef", "name": "C", "body": [pass()], "decorator_list": [name("dataclass")]}),
    "ClassDef",
    "decorators"
)]
#[case::multiple_targets(
    json!({"_type": "Assign", "targets": [name("a"), name("b")], "value": int(0)}),
    "Assign",
    "multiple targets"
)]
#[case::for_else(
    json!({"_type": "For", "target": name("x"), "iter": name("xs"), "body": [pass()], "orelse": [pass()]}),
    "For",
    "loop else"
)]
#[case::while_else(
    json!({"_type": "While", "test": name("a"), "body": [pass()], "orelse": [pass()]}),
    "While",
    "loop else"
)]
#[case::several_context_managers(
    json!({
        "_type": "With",
        "items": [
            {"_type": "withitem", "context_expr": name("a")},
            {"_type": "withitem", "context_expr": name("b")}
        ],
        "body": [pass()]
    }),
    "With",
    "multiple context managers"
)]
#[case::raise_from(
    json!({"_type": "Raise", "exc": name("E"), "cause": name("cause")}),
    "Raise",
    "exception chaining"
)]
#[case::assert_message(
    json!({"_type": "Assert", "test": name("a"), "msg": string("no")}),
    "Assert",
    "messages"
)]
#[case::case_guard(
    json!({
        "_type": "Match",
        "subject": name("x"),
        "cases": [{
            "_type": "match_case",
            "pattern": {"_type": "MatchAs", "name": "y"},
            "guard": name("y"),
            "body": [pass()]
        }]
    }),
    "match_case",
    "guards"
)]
#[case::async_comprehension(
    expr(json!({
        "_type": "ListComp",
        "elt": name("x"),
        "generators": [{"_type": "comprehension", "target": name("x"), "iter": name("xs"), "is_async": 1}]
    })),
    "comprehension",
    "async comprehensions"
)]
#[case::string_prefix(
    expr(json!({"_type": "Constant", "value": "x", "kind": "u"})),
    "Constant",
    "string prefixes"
)]
#[case::format_spec(
    expr(json!({
        "_type": "JoinedStr",
        "values": [{
            "_type": "FormattedValue",
            "value": name("x"),
            "conversion": -1,
            "format_spec": {"_type": "JoinedStr", "values": [string(".2f")]}
        }]
    })),
    "FormattedValue",
    "format specifications"
)]
fn guarded_variants(#[case] fixture: Value, #[case] kind: &str, #[case] detail: &str) {
    let statement = statement(fixture);
    match project_statement(&statement) {
        Err(ProjectionError::UnsupportedConstruct {
            kind: rejected,
            detail: Some(reason),
        }) => {
            assert_eq!(rejected, kind);
            assert_eq!(reason, detail);
        }
        other => panic!("expected {} ({}) to be rejected, got {:?}", kind, detail, other),
    }
}

#[test]
fn rejection_fails_the_whole_module() {
    // one unsupported statement deep inside still fails the module
    let module = module(vec![
        pass(),
        function(json!({
            "body": [{"_type": "Global", "names": ["x"]}, {"_type": "AnnAssign", "target": name("x"), "annotation": name("int"), "simple": 1}]
        })),
    ]);

    let error = project_module(&module, &Settings::default())
        .err()
        .unwrap();
    assert!(error.is_unsupported());
    assert_eq!(error.to_string(), "AnnAssign is not supported yet");
}

#[test]
fn type_ignores_are_rejected() {
    let module: Module = serde_json::from_value(json!({
        "_type": "Module",
        "body": [],
        "type_ignores": [{"_type": "TypeIgnore", "lineno": 3, "tag": ""}]
    }))
    .unwrap();

    let error = project_module(&module, &Settings::default())
        .err()
        .unwrap();
    assert_eq!(
        error,
        ProjectionError::UnsupportedConstruct {
            kind: "Module",
            detail: Some("type ignores")
        }
    );
}
