use indoc::indoc;

use crate::tree::{DEFAULT_MAX_TREE_DEPTH, Match, ParseResult, TreeError};

const FIVE_LT_FIVE: &str = indoc! {r#"
    {
        "input": "5<5",
        "token": {
            "name": "rootToken",
            "block": {
                "discovered": 0,
                "end": 3,
                "lines": [{
                    "groups": [
                        { "matches": [{ "token": { "name": "five", "block": { "discovered": 0, "end": 1, "lines": [{ "groups": [{ "matches": [{ "value": 53 }] }] }] } } }] },
                        { "matches": [{ "token": { "name": "smallerThan", "block": { "discovered": 1, "end": 2, "lines": [{ "groups": [{ "matches": [{ "value": 60 }] }] }] } } }] },
                        { "matches": [{ "token": { "name": "five", "block": { "discovered": 2, "end": 3, "lines": [{ "groups": [{ "matches": [{ "value": 53 }] }] }] } } }] }
                    ]
                }]
            }
        }
    }
"#};

#[test]
fn parse_nested_tokens() {
    let result = ParseResult::from_json(FIVE_LT_FIVE).unwrap();
    assert!(result.is_success());

    let root = result.token();
    assert_eq!(root.name(), "rootToken");
    assert_eq!(root.block().consumed(), b"5<5");

    let groups = root.block().lines()[0].groups();
    assert_eq!(groups.len(), 3);

    let Match::Token(lt) = &groups[1].matches()[0] else {
        panic!("expected a token match");
    };
    assert_eq!(lt.name(), "smallerThan");
    assert_eq!(lt.block().consumed(), b"<");
    assert_eq!(lt.block().lines()[0].groups()[0].matches()[0], Match::Value(b'<'));
}

#[test]
fn success_flags_default_to_true_and_can_be_overridden() {
    let json = r#"{
        "input": "x",
        "token": {
            "name": "root",
            "block": {
                "success": false,
                "discovered": 0,
                "end": 0,
                "lines": [{ "success": false, "groups": [{ "success": false }] }]
            }
        }
    }"#;

    let result = ParseResult::from_json(json).unwrap();
    assert!(!result.is_success());
    let line = &result.token().block().lines()[0];
    assert!(!line.is_success());
    assert!(!line.groups()[0].is_success());
    assert!(!line.groups()[0].has_matches());
}

#[test]
fn input_as_byte_array() {
    let json = r#"{
        "input": [0, 255],
        "token": { "name": "root", "block": { "discovered": 0, "end": 2 } }
    }"#;

    let result = ParseResult::from_json(json).unwrap();
    assert_eq!(result.token().block().input(), b"\x00\xff");
}

#[test]
fn span_outside_input_is_rejected() {
    let json = r#"{
        "input": "ab",
        "token": { "name": "root", "block": { "discovered": 1, "end": 7 } }
    }"#;

    let err = ParseResult::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        TreeError::InvalidSpan { ref token, discovered: 1, end: 7, len: 2 } if token == "root"
    ));
    assert_eq!(
        err.to_string(),
        "token `root` has span 1..7 outside of the 2-byte input"
    );
}

#[test]
fn malformed_json_is_reported() {
    let err = ParseResult::from_json("{").unwrap_err();
    assert!(matches!(err, TreeError::Json(_)));
    assert!(err.to_string().starts_with("JSON parse error: "));
}

/// `depth` tokens: `wrap` tokens around one `five` token, all spanning `5`.
fn wrapped_five(depth: usize) -> String {
    let mut token =
        r#"{"name":"five","block":{"discovered":0,"end":1,"lines":[{"groups":[{"matches":[{"value":53}]}]}]}}"#
            .to_owned();
    for _ in 1..depth {
        token = format!(
            r#"{{"name":"wrap","block":{{"discovered":0,"end":1,"lines":[{{"groups":[{{"matches":[{{"token":{token}}}]}}]}}]}}}}"#
        );
    }
    format!(r#"{{"input":"5","token":{token}}}"#)
}

fn token_depth(result: &ParseResult) -> usize {
    let mut depth = 1;
    let mut token = result.token();
    while let Some(Match::Token(nested)) = token
        .block()
        .lines()
        .first()
        .and_then(|line| line.groups().first())
        .and_then(|group| group.matches().first())
    {
        depth += 1;
        token = nested;
    }
    depth
}

#[test]
fn deep_recursive_trees_load() {
    let result = ParseResult::from_json(&wrapped_five(64)).unwrap();
    assert_eq!(token_depth(&result), 64);
    assert_eq!(result.token().name(), "wrap");
    assert_eq!(result.token().block().consumed(), b"5");
}

#[test]
fn depth_cap_counts_tokens() {
    let result = ParseResult::from_json_with_depth(&wrapped_five(5), 5).unwrap();
    assert_eq!(token_depth(&result), 5);

    let err = ParseResult::from_json_with_depth(&wrapped_five(6), 5).unwrap_err();
    assert!(matches!(err, TreeError::TooDeep { limit: 5 }));
    assert_eq!(err.to_string(), "parse tree nests deeper than 5 tokens");

    let err = ParseResult::from_json(&wrapped_five(DEFAULT_MAX_TREE_DEPTH + 1)).unwrap_err();
    assert!(matches!(err, TreeError::TooDeep { limit: DEFAULT_MAX_TREE_DEPTH }));
}

#[test]
fn brackets_inside_strings_do_not_nest() {
    let json = r#"{
        "input": "[[[[[[[[[[[[{\"[[",
        "token": { "name": "root", "block": { "discovered": 0, "end": 2 } }
    }"#;

    let result = ParseResult::from_json_with_depth(json, 1).unwrap();
    assert_eq!(result.token().block().consumed(), b"[[");
}
