//! Hand-built parse trees for evaluator tests.

use std::ops::Range;
use std::sync::Arc;

use sift_core::{Block, Line, Match, MatchGroup, ParseResult, Token};

/// Shared input that tokens are carved from.
pub(super) struct Source {
    input: Arc<[u8]>,
}

impl Source {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: Arc::from(input.as_bytes()),
        }
    }

    /// A token matching the single raw byte at `at`.
    pub(super) fn byte(&self, name: &str, at: usize) -> Token {
        let value = Match::Value(self.input[at]);
        self.rule(name, at..at + 1, vec![vec![value]])
    }

    /// A token with one successful line, each inner vec being one match group.
    pub(super) fn rule(&self, name: &str, span: Range<usize>, groups: Vec<Vec<Match>>) -> Token {
        self.rule_lines(name, span, vec![line(groups)])
    }

    pub(super) fn rule_lines(&self, name: &str, span: Range<usize>, lines: Vec<Line>) -> Token {
        Token::new(name, Block::new(true, self.input.clone(), span, lines))
    }

    /// A token whose block did not succeed.
    pub(super) fn failed(&self, name: &str, span: Range<usize>) -> Token {
        Token::new(name, Block::new(false, self.input.clone(), span, Vec::new()))
    }
}

pub(super) fn line(groups: Vec<Vec<Match>>) -> Line {
    let groups = groups
        .into_iter()
        .map(|matches| MatchGroup::new(true, matches))
        .collect();
    Line::new(true, groups)
}

/// An alternative the grammar tried and abandoned.
pub(super) fn failed_line() -> Line {
    Line::new(false, vec![MatchGroup::new(false, Vec::new())])
}

/// One group holding a single nested token.
pub(super) fn one(token: Token) -> Vec<Match> {
    vec![Match::Token(token)]
}

/// `rootToken := five smallerThan five` over `5 < 5`.
pub(super) fn comparison() -> ParseResult {
    let src = Source::new("5 < 5");
    let root = src.rule(
        "rootToken",
        0..5,
        vec![
            one(src.byte("five", 0)),
            one(src.byte("smallerThan", 2)),
            one(src.byte("five", 4)),
        ],
    );
    ParseResult::new(root)
}

/// `rootToken := openParenthesis rootToken closeParenthesis | five smallerThan five`
/// over `(( 5 < 5 ))`.
pub(super) fn nested_comparison() -> ParseResult {
    let src = Source::new("(( 5 < 5 ))");
    let innermost = src.rule_lines(
        "rootToken",
        3..8,
        vec![
            failed_line(),
            line(vec![
                one(src.byte("five", 3)),
                one(src.byte("smallerThan", 5)),
                one(src.byte("five", 7)),
            ]),
        ],
    );
    let middle = src.rule(
        "rootToken",
        1..10,
        vec![
            one(src.byte("openParenthesis", 1)),
            one(innermost),
            one(src.byte("closeParenthesis", 9)),
        ],
    );
    let root = src.rule(
        "rootToken",
        0..11,
        vec![
            one(src.byte("openParenthesis", 0)),
            one(middle),
            one(src.byte("closeParenthesis", 10)),
        ],
    );
    ParseResult::new(root)
}

/// A bracketed list of `$` amounts over `[$100; $20; $30;]`:
///
/// ```text
/// rootToken         := openBracket bytes closeBracket
/// bytes             := byteWithSemiColon+
/// byteWithSemiColon := byte semiColon
/// byte              := dollar number
/// number            := digit+
/// ```
pub(super) fn price_list() -> ParseResult {
    let src = Source::new("[$100; $20; $30;]");
    let digit_name = |digit: u8| match digit {
        b'0' => "zero",
        b'1' => "one",
        b'2' => "two",
        _ => "three",
    };
    let amount = |dollar: usize, end: usize| {
        let digits = (dollar + 1..end)
            .map(|at| Match::Token(src.byte(digit_name(src.input[at]), at)))
            .collect();
        let number = src.rule("number", dollar + 1..end, vec![digits]);
        let byte = src.rule(
            "byte",
            dollar..end,
            vec![one(src.byte("dollar", dollar)), one(number)],
        );
        src.rule(
            "byteWithSemiColon",
            dollar..end + 1,
            vec![one(byte), one(src.byte("semiColon", end))],
        )
    };
    let items = vec![
        Match::Token(amount(1, 5)),
        Match::Token(amount(7, 10)),
        Match::Token(amount(12, 15)),
    ];
    let bytes = src.rule("bytes", 1..16, vec![items]);
    let root = src.rule_lines(
        "rootToken",
        0..17,
        vec![
            line(vec![
                one(src.byte("openBracket", 0)),
                one(bytes),
                one(src.byte("closeBracket", 16)),
            ]),
            failed_line(),
        ],
    );
    ParseResult::new(root)
}

/// A result whose root token did not succeed.
pub(super) fn failed_result() -> ParseResult {
    let src = Source::new("5 <");
    ParseResult::new(src.failed("rootToken", 0..3))
}
