use rstest::rstest;
use serde_json::{json, Value};

use super::*;

#[rstest]
#[case::name(name("x"), "symbol=x")]
#[case::integer(int(1), "literal.number=1")]
#[case::float(json!({"_type": "Constant", "value": 2.5}), "literal.number=2.5")]
#[case::string(string("hi"), r#"literal.string="hi""#)]
#[case::empty_string(string(""), r#"literal.string="""#)]
#[case::boolean(json!({"_type": "Constant", "value": true}), "literal.boolean=True")]
#[case::none(json!({"_type": "Constant", "value": null}), "literal.none=None")]
#[case::bool_op(
    json!({"_type": "BoolOp", "op": {"_type": "And"}, "values": [name("a"), name("b")]}),
    "row.gap.and-sep[and](row.gap(symbol=a) row.gap(symbol=b))"
)]
#[case::bin_op(
    json!({"_type": "BinOp", "left": name("a"), "op": {"_type": "Add"}, "right": name("b")}),
    "operation.row.gap[+](row.gap(symbol=a) row.gap(symbol=b))"
)]
#[case::unary_op(
    json!({"_type": "UnaryOp", "op": {"_type": "Not"}, "operand": name("a")}),
    "unary.row[not](symbol=a)"
)]
#[case::if_exp(
    json!({"_type": "IfExp", "test": name("t"), "body": name("a"), "orelse": name("b")}),
    "ternary.row.gap(row.gap(symbol=a) if-prefix.row.gap(symbol=t) else-prefix.row.gap(symbol=b))"
)]
#[case::dict(
    json!({"_type": "Dict", "keys": [name("k"), null], "values": [name("v"), name("m")]}),
    "braces.row(comma-sep.row(row.gap(row.colon-suffix(symbol=k) row(symbol=v)) row.gap(double-star-prefix.row(symbol=m))))"
)]
#[case::set(
    json!({"_type": "Set", "elts": [name("a")]}),
    "braces.row(comma-sep.row(row.gap(symbol=a)))"
)]
#[case::list_comp(
    json!({
        "_type": "ListComp",
        "elt": name("x"),
        "generators": [{
            "_type": "comprehension",
            "target": name("x"),
            "iter": name("xs"),
            "ifs": [name("x")],
            "is_async": 0
        }]
    }),
    "brackets.row(row.gap(symbol=x comprehension.for-prefix.row.gap(in-sep.row.gap(row(symbol=x) row(symbol=xs)) if-prefix.row.gap(symbol=x))))"
)]
#[case::yield_value(
    json!({"_type": "Yield", "value": name("a")}),
    "yield-prefix.row.gap(symbol=a)"
)]
#[case::yield_bare(json!({"_type": "Yield"}), "yield-prefix.row.gap")]
#[case::yield_from(
    json!({"_type": "YieldFrom", "value": name("a")}),
    "yield-from-prefix.row.gap(symbol=a)"
)]
#[case::compare(
    json!({
        "_type": "Compare",
        "left": name("a"),
        "ops": [{"_type": "Lt"}, {"_type": "IsNot"}],
        "comparators": [name("b"), name("c")]
    }),
    "compare.row.gap(row.gap(symbol=a) comparator.row.gap[<](symbol=b) comparator.row.gap[is not](symbol=c))"
)]
#[case::call(
    json!({
        "_type": "Call",
        "func": name("f"),
        "args": [name("a")],
        "keywords": [
            {"_type": "keyword", "arg": "k", "value": name("b")},
            {"_type": "keyword", "arg": null, "value": name("m")}
        ]
    }),
    "call.row(symbol=f parens.row(comma-sep.row(row.gap(symbol=a) row.gap(equal-sep.row(symbol=k row(symbol=b))) row.gap(double-star-prefix.row(symbol=m)))))"
)]
#[case::call_without_arguments(call("f"), "call.row(symbol=f parens.row(comma-sep.row))")]
#[case::joined_str(
    json!({
        "_type": "JoinedStr",
        "values": [
            string("a"),
            {"_type": "FormattedValue", "value": name("x"), "conversion": 114, "format_spec": null}
        ]
    }),
    "f-prefix.row(quotes.row(fragment=a braces.row(formatted.repr-conversion(symbol=x))))"
)]
#[case::formatted_plain(
    json!({"_type": "FormattedValue", "value": name("x"), "conversion": -1}),
    "formatted(symbol=x)"
)]
#[case::attribute(
    json!({"_type": "Attribute", "value": name("a"), "attr": "b"}),
    "attribute.row.dot-sep(symbol=a row(symbol=b))"
)]
#[case::subscript(
    json!({"_type": "Subscript", "value": name("a"), "slice": name("i")}),
    "subscript.row(symbol=a brackets.row(symbol=i))"
)]
#[case::starred(
    json!({"_type": "Starred", "value": name("a")}),
    "star-prefix.row(symbol=a)"
)]
#[case::list(
    json!({"_type": "List", "elts": [name("a"), name("b")]}),
    "brackets.row(comma-sep.row(row.gap(symbol=a) row.gap(symbol=b)))"
)]
#[case::slice(
    json!({"_type": "Slice", "lower": int(1), "upper": int(2), "step": null}),
    "slice(row.colon-sep(row(literal.number=1) row(literal.number=2)))"
)]
#[case::slice_with_step(
    json!({"_type": "Slice", "step": int(2)}),
    "slice(row.colon-sep(row row row(literal.number=2)))"
)]
fn expression_shapes(#[case] fixture: Value, #[case] expected: &str) {
    let expression = expression(fixture);
    let node = project_expression(&expression).unwrap();
    assert_eq!(shape(&node), expected);
}

#[rstest]
#[case::pass(pass(), "keyword=pass")]
#[case::break_(json!({"_type": "Break"}), "keyword=break")]
#[case::continue_(json!({"_type": "Continue"}), "keyword=continue")]
#[case::return_value(
    json!({"_type": "Return", "value": name("a")}),
    "return-prefix.row.gap(symbol=a)"
)]
#[case::return_bare(json!({"_type": "Return", "value": null}), "return-prefix.row.gap")]
#[case::delete(
    json!({"_type": "Delete", "targets": [name("a"), name("b")]}),
    "del-prefix.row.gap(comma-sep.row(row.gap(symbol=a) row.gap(symbol=b)))"
)]
#[case::assign(
    json!({"_type": "Assign", "targets": [name("x")], "value": int(1), "type_comment": null}),
    "assign.row.equal-sep.gap(row.gap(symbol=x) row.gap(literal.number=1))"
)]
#[case::aug_assign(
    json!({"_type": "AugAssign", "target": name("x"), "op": {"_type": "Add"}, "value": int(1)}),
    "augassign.row.gap[+](row.gap(symbol=x) row.gap(literal.number=1))"
)]
#[case::for_loop(
    json!({"_type": "For", "target": name("x"), "iter": name("xs"), "body": [pass()], "orelse": []}),
    "for(row.colon-suffix(for-prefix.in-sep.row.gap(row(symbol=x) row(symbol=xs))) block(keyword=pass))"
)]
#[case::while_loop(
    json!({"_type": "While", "test": name("a"), "body": [pass()], "orelse": []}),
    "while(row.colon-suffix(while-prefix.row.gap(symbol=a)) block(keyword=pass))"
)]
#[case::if_alone(
    conditional("a", vec![pass()], vec![]),
    "if(row.colon-suffix(row.gap.if-prefix(symbol=a)) block(keyword=pass))"
)]
#[case::if_else(
    conditional("a", vec![pass()], vec![json!({"_type": "Break"})]),
    "if(row.colon-suffix(row.gap.if-prefix(symbol=a)) block(keyword=pass) row.colon-suffix(row.gap.else-prefix) block(keyword=break))"
)]
#[case::with_as(
    json!({
        "_type": "With",
        "items": [{"_type": "withitem", "context_expr": name("ctx"), "optional_vars": name("f")}],
        "body": [pass()]
    }),
    "with(row.colon-suffix(with-prefix.row.gap(as-sep.row.gap(row.gap(symbol=ctx) row.gap(symbol=f)))) block(keyword=pass))"
)]
#[case::with_plain(
    json!({
        "_type": "With",
        "items": [{"_type": "withitem", "context_expr": name("ctx")}],
        "body": [pass()]
    }),
    "with(row.colon-suffix(with-prefix.row.gap(row(symbol=ctx))) block(keyword=pass))"
)]
#[case::raise(
    json!({"_type": "Raise", "exc": name("E"), "cause": null}),
    "raise-prefix.row.gap(symbol=E)"
)]
#[case::assert(
    json!({"_type": "Assert", "test": name("a"), "msg": null}),
    "assert-prefix.row.gap(symbol=a)"
)]
#[case::import(
    json!({
        "_type": "Import",
        "names": [
            {"_type": "alias", "name": "os", "asname": null},
            {"_type": "alias", "name": "numpy", "asname": "np"}
        ]
    }),
    "import.import-prefix.row(aliases.row.comma-sep(row.gap(alias.unnamed-alias.symbol=os) row.gap(alias.named-alias.as-sep.row.gap(row.gap(symbol=numpy) row.gap(symbol=np)))))"
)]
#[case::import_from(
    json!({
        "_type": "ImportFrom",
        "module": "pkg",
        "names": [{"_type": "alias", "name": "a"}],
        "level": 1
    }),
    "importfrom.row.gap(from-prefix.row.gap(row(symbol=. symbol=pkg)) import-prefix.row.gap(aliases.row.comma-sep(row.gap(alias.unnamed-alias.symbol=a))))"
)]
#[case::global(
    json!({"_type": "Global", "names": ["a", "b"]}),
    "global-prefix.row.gap(row.comma-sep(row.gap(symbol=a) row.gap(symbol=b)))"
)]
#[case::nonlocal(
    json!({"_type": "Nonlocal", "names": ["a"]}),
    "nonlocal-prefix.row.gap(row.comma-sep(row.gap(symbol=a)))"
)]
#[case::expr(expr(call("f")), "expression.row(call.row(symbol=f parens.row(comma-sep.row)))")]
#[case::function_def(
    json!({
        "_type": "FunctionDef",
        "name": "f",
        "args": {
            "_type": "arguments",
            "posonlyargs": [],
            "args": [
                {"_type": "arg", "arg": "a"},
                {"_type": "arg", "arg": "b", "annotation": name("int")}
            ],
            "kwonlyargs": [],
            "kw_defaults": [],
            "defaults": [int(1)]
        },
        "body": [pass()],
        "decorator_list": [],
        "returns": name("int")
    }),
    "funcdef(row.colon-suffix(row.gap.return-type-arrow-sep(row(def-prefix.symbol=f parens.row(comma-sep.row(row.gap(parameter.symbol=a) row.gap(equal-sep.row.gap(parameter.row.gap(colon-suffix.symbol=b row(symbol=int)) row.gap(literal.number=1)))))) row.gap(symbol=int))) block(keyword=pass))"
)]
#[case::class_def(
    json!({
        "_type": "ClassDef",
        "name": "C",
        "bases": [name("B")],
        "keywords": [{"_type": "keyword", "arg": "metaclass", "value": name("M")}],
        "body": [pass()],
        "decorator_list": []
    }),
    "classdef(row.colon-suffix(class-prefix.row.gap(row(symbol=C parens.row(comma-sep.row(row.gap(symbol=B) row.gap(equal-sep.row(symbol=metaclass row(symbol=M)))))))) block(keyword=pass))"
)]
#[case::class_plain(
    json!({"_type": "ClassDef", "name": "C", "bases": [], "keywords": [], "body": [pass()]}),
    "classdef(row.colon-suffix(class-prefix.row.gap(row(symbol=C))) block(keyword=pass))"
)]
fn statement_shapes(#[case] fixture: Value, #[case] expected: &str) {
    let statement = statement(fixture);
    let node = project_statement(&statement).unwrap();
    assert_eq!(shape(&node), expected);
}

#[test]
fn match_with_patterns() {
    let statement = statement(json!({
        "_type": "Match",
        "subject": name("x"),
        "cases": [
            {
                "_type": "match_case",
                "pattern": {
                    "_type": "MatchOr",
                    "patterns": [
                        {"_type": "MatchValue", "value": int(1)},
                        {"_type": "MatchSingleton", "value": null}
                    ]
                },
                "body": [pass()]
            },
            {
                "_type": "match_case",
                "pattern": {
                    "_type": "MatchAs",
                    "pattern": {
                        "_type": "MatchSequence",
                        "patterns": [{"_type": "MatchAs", "name": "a"}]
                    },
                    "name": "b"
                },
                "body": [pass()]
            },
            {
                "_type": "match_case",
                "pattern": {"_type": "MatchAs"},
                "body": [pass()]
            }
        ]
    }));
    let node = project_statement(&statement).unwrap();

    assert_eq!(
        shape(&node),
        concat!(
            "match(row.colon-suffix(match-prefix.row.gap(symbol=x)) block(",
            "case(row.colon-suffix(case-prefix.row.gap(row.gap.pipe-sep(row.gap(row(literal.number=1)) row.gap(literal.none=None)))) block(keyword=pass)) ",
            "case(row.colon-suffix(case-prefix.row.gap(as-sep.row.gap(row.gap(brackets.row(comma-sep.row(row.gap(symbol=a)))) row.gap(symbol=b)))) block(keyword=pass)) ",
            "case(row.colon-suffix(case-prefix.row.gap(symbol=_)) block(keyword=pass))",
            "))"
        )
    );
}

#[test]
fn tuple_boundary() {
    let empty = expression(json!({"_type": "Tuple", "elts": []}));
    let single = expression(json!({"_type": "Tuple", "elts": [name("x")]}));
    let pair = expression(json!({"_type": "Tuple", "elts": [name("x"), name("y")]}));

    let empty = shape(&project_expression(&empty).unwrap());
    let single = shape(&project_expression(&single).unwrap());
    let pair = shape(&project_expression(&pair).unwrap());

    assert_eq!(empty, "parens.row.empty");
    assert_eq!(single, "parens.row(comma-sep.row(row(symbol=x) empty))");
    assert_eq!(
        pair,
        "parens.row(comma-sep.row(row.gap(symbol=x) row.gap(symbol=y)))"
    );

    assert_ne!(empty, single);
    assert_ne!(single, pair);
    assert_ne!(empty, pair);
}

#[test]
fn module_docstring_is_text() {
    let module = module(vec![expr(string("Tools.\n\nMore here.")), pass()]);
    let projection = untext::projection::project_module(&module, &Settings::default()).unwrap();

    assert_eq!(
        shape(projection.root()),
        r#"module(docstring(line="""Tools. line.empty-line= line=More here.""") keyword=pass)"#
    );
}

#[test]
fn prefixed_module_string_is_not_a_docstring() {
    let module = module(vec![expr(
        json!({"_type": "Constant", "value": "Tools.", "kind": "u"}),
    )]);

    let error = untext::projection::project_module(&module, &Settings::default())
        .err()
        .unwrap();
    assert_eq!(
        error,
        ProjectionError::unsupported_with("Constant", "string prefixes")
    );
}

#[test]
fn nested_string_is_not_a_docstring() {
    let statement = statement(json!({
        "_type": "FunctionDef",
        "name": "f",
        "args": {"_type": "arguments"},
        "body": [expr(string("Inner."))]
    }));
    let node = project_statement(&statement).unwrap();

    assert_eq!(
        shape(
            node.child(1)
                .unwrap()
        ),
        r#"block(expression.row(literal.string="Inner."))"#
    );
}

#[test]
fn literal_text_follows_layers() {
    use untext::encoding::Layers;
    use untext::presentation::Tag;

    let module = module(vec![json!({
        "_type": "Assign",
        "targets": [name("s")],
        "value": string("it's")
    })]);

    for (count, expected) in [(1, r#""it's""#), (2, r#""it\'s""#), (3, r#""it\\\'s""#)] {
        let settings = Settings {
            layers: Layers::new(count).unwrap(),
        };
        let projection = untext::projection::project_module(&module, &settings).unwrap();
        let literal = projection
            .root()
            .walk()
            .into_iter()
            .find(|node| node.has(Tag::Literal))
            .unwrap();
        assert_eq!(literal.text(), Some(expected));
    }
}

#[rstest]
#[case::beyond_i64("10000000000000000000")]
#[case::thirty_digits("123456789012345678901234567890")]
fn large_integers_are_exact(#[case] digits: &str) {
    let source = format!(r#"{{"_type": "Constant", "value": {}, "kind": null}}"#, digits);
    let expression: Expression = serde_json::from_str(&source).unwrap();

    let node = project_expression(&expression).unwrap();
    assert_eq!(shape(&node), format!("literal.number={}", digits));
}
