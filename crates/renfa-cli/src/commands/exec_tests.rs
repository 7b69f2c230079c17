use renfa_lib::{Simulator, compile};

use super::exec::{Verdict, evaluate, format_text};

fn verdicts(pattern: &str, inputs: &[String]) -> Vec<(String, bool)> {
    let nfa = compile(pattern).unwrap();
    evaluate(&Simulator::new(&nfa), inputs)
        .into_iter()
        .map(|v| (v.input.to_string(), v.accepted))
        .collect()
}

#[test]
fn evaluates_each_input() {
    let inputs: Vec<String> = ["bba", "ab", ""].iter().map(|s| s.to_string()).collect();

    assert_eq!(
        verdicts("(a|b)*a", &inputs),
        vec![
            ("bba".to_string(), true),
            ("ab".to_string(), false),
            ("".to_string(), false),
        ]
    );
}

#[test]
fn text_output() {
    let out = format_text(&[
        Verdict {
            input: "aa",
            accepted: true,
        },
        Verdict {
            input: "",
            accepted: false,
        },
    ]);

    insta::assert_snapshot!(out, @r#"
    accept "aa"
    reject ""
    "#);
}

#[test]
fn json_output() {
    let json = serde_json::to_string(&[Verdict {
        input: "ab",
        accepted: true,
    }])
    .unwrap();

    assert_eq!(json, r#"[{"input":"ab","accepted":true}]"#);
}
