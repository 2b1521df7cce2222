//! Property path parser.
//!
//! Grammar: `token ('.' token)*`, where a token is an optional field name
//! followed by bracket groups. A group holds nothing (append), a non-negative
//! integer (index) or one or more `{key=value}` predicates (filter); `:` is
//! accepted in place of `=`.

use crate::error::PathError;
use crate::types::{Constraint, PropertyPath, Segment};

/// Parser facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyPathParser;

impl PropertyPathParser {
    /// Parse a property path such as `friends[{name=Ann}].addresses[0].city`.
    pub fn parse(path: &str) -> Result<PropertyPath, PathError> {
        if path.is_empty() {
            return Err(PathError::MissingRequiredArgument("path"));
        }
        let mut segments = Vec::new();
        for token in split_tokens(path)? {
            if token.is_empty() {
                return Err(PathError::syntax(path, "empty segment"));
            }
            parse_token(path, token, &mut segments)?;
        }
        Ok(PropertyPath::new(segments))
    }
}

/// Shorthand for [`PropertyPathParser::parse`].
pub fn parse(path: &str) -> Result<PropertyPath, PathError> {
    PropertyPathParser::parse(path)
}

/// Cursor over one token or bracket group.
#[derive(Debug, Clone)]
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count);
    }

    fn ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.skip(c.len_utf8());
        }
    }

    /// Consume and return everything up to (not including) `stop`.
    fn take_until(&mut self, stop: char) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let len = rest.find(stop)?;
        self.skip(len);
        Some(&rest[..len])
    }

    fn take_rest(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        rest
    }

    /// Consume a `[...]` group, honoring nested brackets, and return its
    /// contents.
    fn bracket_group(&mut self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let mut depth = 0usize;
        for (idx, c) in rest.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        self.skip(idx + 1);
                        return Some(&rest[1..idx]);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Split on `.` outside of brackets.
fn split_tokens(path: &str) -> Result<Vec<&str>, PathError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| PathError::syntax(path, format!("unmatched `]` at {idx}")))?;
            }
            '.' if depth == 0 => {
                tokens.push(&path[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(PathError::syntax(path, "unclosed `[`"));
    }
    tokens.push(&path[start..]);
    Ok(tokens)
}

fn parse_token(path: &str, token: &str, segments: &mut Vec<Segment>) -> Result<(), PathError> {
    let mut scanner = Scanner::new(token);
    let field = scanner.take_until('[').unwrap_or_else(|| scanner.take_rest());
    if !field.is_empty() {
        segments.push(Segment::Field(field.to_string()));
    }
    while !scanner.eof() {
        if scanner.peek() != Some('[') {
            return Err(PathError::syntax(
                path,
                format!("unexpected `{}` after `]` in `{token}`", scanner.take_rest()),
            ));
        }
        let group = scanner
            .bracket_group()
            .ok_or_else(|| PathError::syntax(path, "unclosed `[`"))?;
        segments.push(parse_group(path, group)?);
    }
    Ok(())
}

fn parse_group(path: &str, group: &str) -> Result<Segment, PathError> {
    if group.is_empty() {
        return Ok(Segment::Append);
    }
    if group.bytes().all(|b| b.is_ascii_digit()) {
        return group
            .parse::<usize>()
            .map(Segment::Index)
            .map_err(|_| PathError::syntax(path, format!("index `{group}` is out of range")));
    }
    if group.trim_start().starts_with('{') {
        return parse_filter(path, group).map(Segment::Filter);
    }
    Err(PathError::syntax(
        path,
        format!("index `{group}` is not a non-negative integer"),
    ))
}

fn parse_filter(path: &str, group: &str) -> Result<Vec<Constraint>, PathError> {
    let mut scanner = Scanner::new(group);
    let mut constraints = Vec::new();
    loop {
        scanner.ws();
        if scanner.peek() != Some('{') {
            return Err(PathError::syntax(
                path,
                format!("expected `{{` in filter `[{group}]`"),
            ));
        }
        scanner.skip(1);
        let predicate = scanner.take_until('}').ok_or_else(|| {
            PathError::syntax(path, format!("missing closing `}}` in filter `[{group}]`"))
        })?;
        scanner.skip(1);
        constraints.push(parse_constraint(path, predicate)?);

        scanner.ws();
        match scanner.peek() {
            None => break,
            Some(',') => scanner.skip(1),
            Some(other) => {
                return Err(PathError::syntax(
                    path,
                    format!("unexpected `{other}` between predicates in `[{group}]`"),
                ))
            }
        }
    }
    Ok(constraints)
}

fn parse_constraint(path: &str, predicate: &str) -> Result<Constraint, PathError> {
    let sep = predicate.find(['=', ':']).ok_or_else(|| {
        PathError::syntax(
            path,
            format!("predicate `{{{predicate}}}` has no `=` or `:` separator"),
        )
    })?;
    let (key, expected) = (&predicate[..sep], &predicate[sep + 1..]);
    if key.is_empty() {
        return Err(PathError::syntax(
            path,
            format!("predicate `{{{predicate}}}` has an empty key"),
        ));
    }
    Ok(Constraint::new(key, expected))
}
