//! Parser for the `$<...>` surface syntax.
//!
//! The parser is infallible: anything that is not a well-formed
//! expression stays literal text. In particular an unterminated `$<`
//! re-emits everything parsed so far as text and evaluators, so malformed
//! input round-trips through evaluation unchanged rather than erroring at
//! parse time.

use crate::ast::{Content, Evaluator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Text,
    BeginExpression,
    EndExpression,
    ColonSeparator,
    CommaSeparator,
}

#[derive(Clone, Copy, Debug)]
struct Token {
    kind: TokenKind,
    start: usize,
    len: usize,
}

fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    let flush = |tokens: &mut Vec<Token>, text_start: usize, pos: usize| {
        if text_start < pos {
            tokens.push(Token {
                kind: TokenKind::Text,
                start: text_start,
                len: pos - text_start,
            });
        }
    };

    while pos < bytes.len() {
        let (kind, len) = match bytes[pos] {
            b'$' if pos + 1 < bytes.len() && bytes[pos + 1] == b'<' => {
                (TokenKind::BeginExpression, 2)
            }
            b'>' => (TokenKind::EndExpression, 1),
            b':' => (TokenKind::ColonSeparator, 1),
            b',' => (TokenKind::CommaSeparator, 1),
            _ => {
                pos += 1;
                continue;
            }
        };
        flush(&mut tokens, text_start, pos);
        tokens.push(Token { kind, start: pos, len });
        pos += len;
        text_start = pos;
    }
    flush(&mut tokens, text_start, pos);

    tokens
}

pub(crate) fn parse(input: &str) -> Vec<Evaluator> {
    Parser::new(input).parse()
}

struct Parser<'i> {
    input: &'i str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str) -> Parser<'i> {
        Parser {
            input,
            tokens: tokenize(input),
            pos: 0,
        }
    }

    fn parse(mut self) -> Vec<Evaluator> {
        let mut result = Vec::new();
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::BeginExpression => self.parse_generator_expression(&mut result),
                // Separators outside any expression are literal text.
                _ => {
                    result.push(Evaluator::text(self.token_text(token)));
                    self.pos += 1;
                }
            }
        }
        result
    }

    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn token_text(&self, token: Token) -> &'i str {
        &self.input[token.start..token.start + token.len]
    }

    /// Parses starting at a `$<` token, appending either a single
    /// `Content` evaluator or, for unterminated input, the re-expanded
    /// text and sub-evaluators.
    fn parse_generator_expression(&mut self, result: &mut Vec<Evaluator>) {
        let start = self.current().expect("positioned at $<").start;
        self.pos += 1;

        let mut identifier = Vec::new();
        loop {
            let Some(token) = self.current() else {
                self.emit_unterminated(result, identifier, None);
                return;
            };
            match token.kind {
                TokenKind::Text | TokenKind::CommaSeparator => {
                    identifier.push(Evaluator::text(self.token_text(token)));
                    self.pos += 1;
                }
                TokenKind::BeginExpression => self.parse_generator_expression(&mut identifier),
                TokenKind::EndExpression => {
                    self.pos += 1;
                    let original = &self.input[start..token.start + token.len];
                    result.push(Evaluator::Content(Box::new(Content::new(
                        original,
                        identifier,
                        Vec::new(),
                    ))));
                    return;
                }
                TokenKind::ColonSeparator => {
                    self.pos += 1;
                    break;
                }
            }
        }

        let mut parameters: Vec<Vec<Evaluator>> = vec![Vec::new()];
        loop {
            let Some(token) = self.current() else {
                self.emit_unterminated(result, identifier, Some(parameters));
                return;
            };
            match token.kind {
                TokenKind::CommaSeparator => {
                    self.pos += 1;
                    parameters.push(Vec::new());
                }
                TokenKind::EndExpression => {
                    self.pos += 1;
                    let original = &self.input[start..token.start + token.len];
                    result.push(Evaluator::Content(Box::new(Content::new(
                        original,
                        identifier,
                        parameters,
                    ))));
                    return;
                }
                TokenKind::Text | TokenKind::ColonSeparator => {
                    let last = parameters.last_mut().expect("at least one parameter");
                    last.push(Evaluator::text(self.token_text(token)));
                    self.pos += 1;
                }
                TokenKind::BeginExpression => {
                    let last = parameters.last_mut().expect("at least one parameter");
                    self.parse_generator_expression(last);
                }
            }
        }
    }

    /// Unterminated expression: rebuild the consumed source as literal
    /// text around whatever nested evaluators already parsed.
    fn emit_unterminated(
        &self,
        result: &mut Vec<Evaluator>,
        identifier: Vec<Evaluator>,
        parameters: Option<Vec<Vec<Evaluator>>>,
    ) {
        result.push(Evaluator::text("$<"));
        result.extend(identifier);
        if let Some(parameters) = parameters {
            result.push(Evaluator::text(":"));
            for (i, parameter) in parameters.into_iter().enumerate() {
                if i > 0 {
                    result.push(Evaluator::text(","));
                }
                result.extend(parameter);
            }
        }
    }
}
