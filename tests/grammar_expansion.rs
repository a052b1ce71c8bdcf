// tests/grammar_expansion.rs
use symbios_turtle::Grammar;

fn branching() -> Grammar {
    Grammar::new("A")
        .with_rule('A', "B[+A]-A")
        .with_rule('B', "BB")
}

fn s(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn test_worked_example() {
    let grammar = branching();

    let first: String = grammar.expand_axiom(1).into_iter().collect();
    assert_eq!(first, "B[+A]-A");

    let second: String = grammar.expand_axiom(2).into_iter().collect();
    assert_eq!(second, "BB[+B[+A]-A]-B[+A]-A");
}

#[test]
fn test_order_zero_is_identity() {
    let grammar = branching();
    let input = s("AB+[X]");
    assert_eq!(grammar.expand(&input, 0), input);
}

#[test]
fn test_empty_input_stays_empty() {
    let grammar = branching();
    for order in 0..6 {
        assert!(grammar.expand(&[], order).is_empty());
    }
}

#[test]
fn test_identity_rules_reach_fixed_point() {
    // A -> A must not loop: exactly `times` rounds are applied.
    let grammar = Grammar::new("AB").with_rule('A', "A").with_rule('B', "B");
    for order in 0..10 {
        assert_eq!(grammar.expand_axiom(order), s("AB"));
    }
}

#[test]
fn test_terminals_pass_through() {
    let grammar = Grammar::new("F").with_rule('F', "F+F");
    let out: String = grammar.expand(&s("[F]"), 1).into_iter().collect();
    assert_eq!(out, "[F+F]");
}

#[test]
fn test_length_is_monotonic_without_deleting_rules() {
    let grammar = Grammar::new("X")
        .with_rule('X', "F+[[X]-X]-F[-FX]+X")
        .with_rule('F', "FF");

    let mut previous = grammar.expand_axiom(0).len();
    assert!(previous > 0);
    for order in 1..5 {
        let len = grammar.expand_axiom(order).len();
        assert!(len >= previous, "order {order}: {len} < {previous}");
        previous = len;
    }
}

#[test]
fn test_lazy_derivation_matches_expand() {
    let grammar = Grammar::new("X")
        .with_rule('X', "F+[[X]-X]-F[-FX]+X")
        .with_rule('F', "FF");

    for order in 0..5 {
        let eager = grammar.expand_axiom(order);
        let lazy: Vec<char> = grammar.derive(grammar.axiom(), order).collect();
        assert_eq!(lazy, eager, "mismatch at order {order}");
    }
}

#[test]
fn test_string_keyed_rules_must_be_single_chars() {
    let ok = Grammar::from_string_rules("A", [("A", "AB")]).unwrap();
    assert_eq!(ok.rule('A'), Some(&['A', 'B'][..]));

    let err = Grammar::from_string_rules("A", [("AB", "A")]).unwrap_err();
    assert!(matches!(
        err,
        symbios_turtle::LSystemError::InvalidSymbol { ref key } if key == "AB"
    ));
}

#[test]
fn test_self_rule_chain_keeps_one_open_level() {
    // A -> A descends `order` times; each exhausted level is replaced, not stacked.
    let grammar = Grammar::new("A").with_rule('A', "A");
    let mut derivation = grammar.derive(grammar.axiom(), 10_000);

    assert_eq!(derivation.next(), Some('A'));
    assert_eq!(derivation.open_levels(), 1);
    assert_eq!(derivation.next(), None);
}

#[test]
fn test_open_levels_track_branching_depth() {
    // The trailing symbol of each level is its last; only the leading B keeps its parent open.
    let grammar = Grammar::new("BA").with_rule('A', "BA").with_rule('B', "b");
    let derived: String = grammar.derive(grammar.axiom(), 50).collect();
    let expanded: String = grammar.expand_axiom(50).into_iter().collect();
    assert_eq!(derived, expanded);

    let mut derivation = grammar.derive(grammar.axiom(), 50);
    for _ in 0..20 {
        derivation.next();
        assert!(derivation.open_levels() <= 2, "{} levels", derivation.open_levels());
    }
}

#[test]
fn test_rules_lists_every_production() {
    let grammar = branching();
    let mut rules: Vec<(char, String)> = grammar
        .rules()
        .map(|(symbol, replacement)| (symbol, replacement.iter().collect()))
        .collect();
    rules.sort();
    assert_eq!(
        rules,
        vec![('A', "B[+A]-A".to_string()), ('B', "BB".to_string())]
    );
}
