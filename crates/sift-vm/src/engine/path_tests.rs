use super::evaluator::Walker;
use super::fixtures::{self, Source, one};
use super::{EvalError, EvalLimits, NoopTracer, Resolution};

fn resolve(path: &[&str], result: &sift_core::ParseResult) -> Result<Resolution, EvalError> {
    let mut tracer = NoopTracer;
    let mut walker = Walker::new(EvalLimits::default(), &mut tracer);
    walker.resolve_name(path, result.token())
}

#[test]
fn raw_bytes_resolve_inline() {
    let src = Source::new("5");
    let five = src.byte("five", 0);
    let result = sift_core::ParseResult::new(five);

    let resolution = resolve(&["five"], &result).unwrap();
    assert_eq!(resolution, Resolution::Inline(vec![b"5".to_vec()]));
}

#[test]
fn forwarded_results_resolve_as_lines() {
    let resolution = resolve(&["rootToken", "five"], &fixtures::comparison()).unwrap();
    assert_eq!(
        resolution,
        Resolution::Lines(vec![b"5".to_vec(), b"5".to_vec()])
    );
    assert!(!resolution.is_inline());
    assert_eq!(resolution.entries().len(), 2);
}

#[test]
fn full_spans_resolve_inline() {
    let resolution = resolve(&["rootToken"], &fixtures::comparison()).unwrap();
    assert!(resolution.is_inline());
    assert_eq!(
        resolution.into_entries(),
        vec![b"5".to_vec(), b"<".to_vec(), b"5".to_vec()]
    );
}

#[test]
fn inline_child_results_merge_into_one_entry() {
    // number := digit+ where each digit is its own token
    let src = Source::new("42");
    let number = src.rule(
        "number",
        0..2,
        vec![vec![
            sift_core::Match::Token(src.byte("four", 0)),
            sift_core::Match::Token(src.byte("two", 1)),
        ]],
    );
    let amount = src.rule("amount", 0..2, vec![one(number)]);
    let result = sift_core::ParseResult::new(amount);

    let resolution = resolve(&["amount", "number"], &result).unwrap();
    assert_eq!(resolution, Resolution::Lines(vec![b"42".to_vec()]));
}

#[test]
fn empty_path_is_rejected() {
    let err = resolve(&[], &fixtures::comparison()).unwrap_err();
    assert_eq!(err, EvalError::EmptyPath);
    assert_eq!(
        err.to_string(),
        "the path is mandatory in order to retrieve the token's value, none provided"
    );
}

#[test]
fn failed_lines_are_skipped() {
    let result = fixtures::price_list();
    let resolution = resolve(&["rootToken", "openBracket"], &result).unwrap();
    assert_eq!(resolution.into_entries(), vec![b"[".to_vec()]);
}

#[test]
fn depth_is_released_between_siblings() {
    let mut tracer = NoopTracer;
    let limits = EvalLimits { recursion_limit: 2 };
    let mut walker = Walker::new(limits, &mut tracer);
    let result = fixtures::comparison();

    // Three sibling children each fit in the second level.
    let resolution = walker
        .resolve_name(&["rootToken", "five"], result.token())
        .unwrap();
    assert_eq!(resolution.entries().len(), 2);
}
