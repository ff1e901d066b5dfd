use cypher_dsl::expressions::operators::{
    Addition, Conjunction, Contains, Disjunction, Division, EndsWith, Equality,
    ExclusiveDisjunction, Exponentiation, GreaterThan, GreaterThanOrEqual, In, Inequality,
    LessThan, LessThanOrEqual, ModuloDivision, Multiplication, Regex, StartsWith, Subtraction,
};
use cypher_dsl::cast::{
    to_any_type, to_boolean_type, to_comparable_type, to_list_type, to_map_type, to_numeral_type,
    to_string_type,
};
use cypher_dsl::prelude::*;
use test_case::test_case;

fn a() -> Variable {
    Variable::new("a")
}

fn b() -> Variable {
    Variable::new("b")
}

// ============================================================================
// Leaf rendering
// ============================================================================

#[test]
fn test_property_access() {
    let property = Property::new(Variable::new("n"), Variable::new("age"));
    assert_eq!(property.to_query(), "n.age");
}

#[test]
fn test_expression_list() {
    let list = ExpressionList::new([Value::from(1), Value::from("a"), Value::from(Variable::new("x"))]);
    assert_eq!(list.to_query(), "[1, 'a', x]");
}

#[test]
fn test_alias() {
    assert_eq!(Alias::new(a(), b()).to_query(), "a AS b");
}

#[test]
fn test_empty_map() {
    assert_eq!(Literal::map(Vec::<(&str, Value)>::new()).to_query(), "{}");
}

#[test]
fn test_escaped_identifiers() {
    assert_eq!(Variable::new("my var").to_query(), "`my var`");
    assert_eq!(Variable::new("n").property("a`b").to_query(), "n.`a``b`");
}

// ============================================================================
// Binary operators
// ============================================================================

#[test_case(Addition::new(a(), b(), true).to_query(), "(a + b)" ; "addition")]
#[test_case(Subtraction::new(a(), b(), true).to_query(), "(a - b)" ; "subtraction")]
#[test_case(Multiplication::new(a(), b(), true).to_query(), "(a * b)" ; "multiplication")]
#[test_case(Division::new(a(), b(), true).to_query(), "(a / b)" ; "division")]
#[test_case(ModuloDivision::new(a(), b(), true).to_query(), "(a % b)" ; "modulo")]
#[test_case(Exponentiation::new(a(), b(), true).to_query(), "(a ^ b)" ; "exponentiation")]
#[test_case(Conjunction::new(a(), b(), true).to_query(), "(a AND b)" ; "and")]
#[test_case(Disjunction::new(a(), b(), true).to_query(), "(a OR b)" ; "or")]
#[test_case(ExclusiveDisjunction::new(a(), b(), true).to_query(), "(a XOR b)" ; "xor")]
#[test_case(Equality::new(a(), b(), true).to_query(), "(a = b)" ; "equality")]
#[test_case(Inequality::new(a(), b(), true).to_query(), "(a <> b)" ; "inequality")]
#[test_case(GreaterThan::new(a(), b(), true).to_query(), "(a > b)" ; "greater than")]
#[test_case(GreaterThanOrEqual::new(a(), b(), true).to_query(), "(a >= b)" ; "greater than or equal")]
#[test_case(LessThan::new(a(), b(), true).to_query(), "(a < b)" ; "less than")]
#[test_case(LessThanOrEqual::new(a(), b(), true).to_query(), "(a <= b)" ; "less than or equal")]
#[test_case(Contains::new(a(), b(), true).to_query(), "(a CONTAINS b)" ; "contains")]
#[test_case(StartsWith::new(a(), b(), true).to_query(), "(a STARTS WITH b)" ; "starts with")]
#[test_case(EndsWith::new(a(), b(), true).to_query(), "(a ENDS WITH b)" ; "ends with")]
#[test_case(Regex::new(a(), b(), true).to_query(), "(a =~ b)" ; "regex")]
#[test_case(In::new(a(), b(), true).to_query(), "(a IN b)" ; "in")]
fn test_binary_operator(rendered: String, expected: &str) {
    assert_eq!(rendered, expected);
}

#[test]
fn test_parentheses_flag_ignores_operand_complexity() {
    let nested = a().plus(1).times(b().minus(2));
    let bare = Multiplication::new(a().plus(1), b().minus(2), false);
    assert_eq!(nested.to_query(), "((a + 1) * (b - 2))");
    assert_eq!(bare.to_query(), "(a + 1) * (b - 2)");
}

#[test]
fn test_capability_methods_default_to_parentheses() {
    assert_eq!(a().equals(1).to_query(), "(a = 1)");
    assert_eq!(a().not_equals("x").to_query(), "(a <> 'x')");
    assert_eq!(a().in_list(vec![1, 2]).to_query(), "(a IN [1, 2])");
    assert_eq!(a().gte(2.5).to_query(), "(a >= 2.5)");
    assert_eq!(a().lte(b()).to_query(), "(a <= b)");
    assert_eq!(a().xor(true).to_query(), "(a XOR true)");
    assert_eq!(a().divide(2).to_query(), "(a / 2)");
    assert_eq!(a().modulo(2).to_query(), "(a % 2)");
    assert_eq!(a().exponentiate(2).to_query(), "(a ^ 2)");
    assert_eq!(a().contains("x").to_query(), "(a CONTAINS 'x')");
    assert_eq!(a().ends_with("z").to_query(), "(a ENDS WITH 'z')");
    assert_eq!(a().regex(".*").to_query(), "(a =~ '.*')");
}

#[test]
fn test_list_has() {
    let list = ExpressionList::new(vec![1, 2]);
    assert_eq!(list.has(a()).to_query(), "(a IN [1, 2])");
}

// ============================================================================
// Unary operators
// ============================================================================

#[test]
fn test_not() {
    assert_eq!(a().not().to_query(), "(NOT a)");
    assert_eq!(a().not().with_parentheses(false).to_query(), "NOT a");
}

#[test]
fn test_negate() {
    assert_eq!(a().negate().to_query(), "(- a)");
    assert_eq!(a().negate().with_parentheses(false).to_query(), "- a");
}

#[test]
fn test_null_checks() {
    assert_eq!(a().is_null().to_query(), "(a IS NULL)");
    assert_eq!(a().property("b").is_not_null().to_query(), "(a.b IS NOT NULL)");
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_operator_results_chain() {
    let n = Variable::new("n");
    let expression = n
        .property("age")
        .plus(1)
        .gt(18)
        .and(n.property("name").starts_with("A"))
        .not();
    assert_eq!(
        expression.to_query(),
        "(NOT (((n.age + 1) > 18) AND (n.name STARTS WITH 'A')))"
    );
}

#[test]
fn test_coerced_nodes_take_operators() {
    assert_eq!(to_numeral_type(3).unwrap().plus(1).to_query(), "(3 + 1)");
    assert_eq!(
        to_numeral_type(Variable::new("n")).unwrap().times(2).gt(4).to_query(),
        "((n * 2) > 4)"
    );
    assert_eq!(
        to_string_type("a").unwrap().starts_with("b").to_query(),
        "('a' STARTS WITH 'b')"
    );
    assert_eq!(
        to_boolean_type(Variable::new("flag")).unwrap().and(true).not().to_query(),
        "(NOT (flag AND true))"
    );
    assert_eq!(to_comparable_type(Variable::new("x")).unwrap().lte(5).to_query(), "(x <= 5)");
    assert_eq!(to_list_type(vec![1, 2]).unwrap().has(1).to_query(), "(1 IN [1, 2])");
    assert_eq!(
        to_map_type(Collection::from_pairs([("a", 1)])).unwrap().property("a").to_query(),
        "{a: 1}.a"
    );
    assert_eq!(to_any_type(Variable::new("n")).is_null().to_query(), "(n IS NULL)");
}

#[test]
fn test_coerced_operand_on_the_right() {
    let right = to_numeral_type(Variable::new("b")).unwrap();
    assert_eq!(a().minus(right).to_query(), "(a - b)");
}

#[test]
fn test_alias_of_operator() {
    let n = Variable::new("n");
    assert_eq!(n.property("price").times(2).alias("double").to_query(), "(n.price * 2) AS double");
}

#[test]
fn test_property_of_map_literal() {
    let map = Literal::map([("a", 1)]);
    assert_eq!(map.property("a").equals(1).to_query(), "({a: 1}.a = 1)");
}

#[test]
fn test_shared_subexpression() {
    let sum = a().plus(b());
    let left = sum.gt(1);
    let right = sum.lt(10);
    assert_eq!(left.and(right).to_query(), "(((a + b) > 1) AND ((a + b) < 10))");
}

#[test]
fn test_rendering_is_deterministic() {
    let expression = Procedure::all("x", vec![1, 2, 3], Variable::new("x").gt(0));
    assert_eq!(expression.to_query(), expression.to_query());
    assert_eq!(expression.to_string(), expression.to_query());
}

#[test]
fn test_trees_render_across_threads() {
    let expression = std::sync::Arc::new(a().plus(b()).gt(3));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expression = expression.clone();
            std::thread::spawn(move || expression.to_query())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "((a + b) > 3)");
    }
}

#[test]
fn test_property_assignment() {
    let n = Variable::new("n");
    let replacement = n.property("score").assign(n.property("score").plus(1));
    assert_eq!(replacement.to_query(), "n.score = (n.score + 1)");
}
