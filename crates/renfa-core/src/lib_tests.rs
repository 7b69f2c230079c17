use super::*;

fn q(n: u32) -> StateId {
    StateId::new(n)
}

#[test]
fn new_has_only_start() {
    let nfa = Nfa::new(q(3));

    assert_eq!(nfa.start(), q(3));
    assert_eq!(nfa.states().collect::<Vec<_>>(), vec![q(3)]);
    assert_eq!(nfa.finals().count(), 0);
    assert_eq!(nfa.transition_count(), 0);
    assert!(nfa.check_invariants().is_ok());
}

#[test]
fn state_and_label_display() {
    insta::assert_snapshot!(q(12).to_string(), @"q12");
    insta::assert_snapshot!(Label::Epsilon.to_string(), @"ε");
    insta::assert_snapshot!(Label::Symbol('a').to_string(), @"a");
}

#[test]
fn add_transition_registers_endpoints() {
    let mut nfa = Nfa::new(q(0));
    nfa.add_transition(q(1), Label::Symbol('b'), q(2));

    assert!(nfa.contains(q(1)));
    assert!(nfa.contains(q(2)));
    assert_eq!(
        nfa.successors(q(1), Label::Symbol('b')).collect::<Vec<_>>(),
        vec![q(2)]
    );
    assert_eq!(nfa.successors(q(1), Label::Epsilon).count(), 0);
    assert_eq!(nfa.successors(q(0), Label::Symbol('b')).count(), 0);
}

#[test]
fn duplicate_transition_is_a_set() {
    let mut nfa = Nfa::new(q(0));
    nfa.add_transition(q(0), Label::Epsilon, q(1));
    nfa.add_transition(q(0), Label::Epsilon, q(1));
    nfa.add_transition(q(0), Label::Epsilon, q(2));

    assert_eq!(nfa.transition_count(), 2);
    assert_eq!(
        nfa.successors(q(0), Label::Epsilon).collect::<Vec<_>>(),
        vec![q(1), q(2)]
    );
}

#[test]
fn finals_flip() {
    let mut nfa = Nfa::new(q(0));
    nfa.add_final(q(1));
    nfa.add_final(q(2));

    assert!(nfa.is_final(q(1)));
    assert!(nfa.remove_final(q(1)));
    assert!(!nfa.remove_final(q(1)));
    assert!(!nfa.is_final(q(1)));
    // Demoted states stay in the automaton.
    assert!(nfa.contains(q(1)));
    assert_eq!(nfa.finals().collect::<Vec<_>>(), vec![q(2)]);
}

#[test]
fn set_start_adds_state() {
    let mut nfa = Nfa::new(q(0));
    nfa.set_start(q(7));

    assert_eq!(nfa.start(), q(7));
    assert!(nfa.contains(q(0)));
    assert!(nfa.contains(q(7)));
}

#[test]
fn absorb_merges_everything_but_start_and_alphabet() {
    let mut first = Nfa::new(q(0));
    first.add_transition(q(0), Label::Symbol('a'), q(1));
    first.add_final(q(1));
    first.extend_alphabet(['a']);

    let mut second = Nfa::new(q(2));
    second.add_transition(q(2), Label::Symbol('b'), q(3));
    second.add_transition(q(0), Label::Epsilon, q(2));
    second.add_final(q(3));
    second.extend_alphabet(['b']);

    first.absorb(second);

    assert_eq!(first.start(), q(0));
    assert_eq!(first.state_count(), 4);
    assert_eq!(first.finals().collect::<Vec<_>>(), vec![q(1), q(3)]);
    assert_eq!(first.transition_count(), 3);
    assert_eq!(
        first.successors(q(0), Label::Epsilon).collect::<Vec<_>>(),
        vec![q(2)]
    );
    assert_eq!(first.alphabet().collect::<Vec<_>>(), vec!['a']);
    assert!(first.check_invariants().is_ok());
}

#[test]
fn alphabet_excludes_epsilon_marker() {
    let mut nfa = Nfa::new(q(0));
    nfa.extend_alphabet(['b', EPSILON, 'a', 'b']);

    assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec!['a', 'b']);
}

#[test]
fn symbols() {
    assert!(is_symbol('a'));
    assert!(is_symbol('b'));
    assert!(!is_symbol(EPSILON));
    assert!(!is_symbol('*'));
}

#[test]
fn json_shape() {
    let mut nfa = Nfa::new(q(0));
    nfa.add_transition(q(0), Label::Symbol('a'), q(1));
    nfa.add_transition(q(1), Label::Epsilon, q(0));
    nfa.add_final(q(1));
    nfa.extend_alphabet(ALPHABET);

    let json = serde_json::to_string(&nfa).expect("serialization failed");

    assert_eq!(
        json,
        r#"{"start":"q0","states":["q0","q1"],"finals":["q1"],"alphabet":["a","b"],"transitions":[{"from":"q0","label":"a","to":"q1"},{"from":"q1","label":"ε","to":"q0"}]}"#
    );
}

#[test]
fn invariant_violation_messages() {
    let err = InvariantViolation::DanglingTransition {
        from: q(1),
        label: Label::Epsilon,
        to: q(9),
    };
    insta::assert_snapshot!(err.to_string(), @"transition q1 --ε--> q9 references an unknown state");
    insta::assert_snapshot!(
        InvariantViolation::StartNotInStates(q(4)).to_string(),
        @"start state q4 is not in the state set"
    );
}
