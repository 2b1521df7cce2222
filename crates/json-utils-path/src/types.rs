//! Property path types: parsed segments and concrete locations.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::PathError;
use crate::parser::PropertyPathParser;

/// One `key=value` test inside a filter group: `{state=CA}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Field of the list element to test, possibly dotted (`address.state`).
    pub key: String,
    /// Expected value, compared against the stringified field.
    pub expected: String,
}

impl Constraint {
    pub fn new(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

/// Segment of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object key: `name`
    Field(String),
    /// List position: `[2]`
    Index(usize),
    /// One past the end of a list: `[]`
    Append,
    /// List elements matching every constraint: `[{state=CA},{zip=94599}]`
    Filter(Vec<Constraint>),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Append => f.write_str("[]"),
            Self::Filter(constraints) => {
                f.write_str("[")?;
                for (idx, constraint) in constraints.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{{{}={}}}", constraint.key, constraint.expected)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A parsed property path such as `friends[{name=Ann}].addresses[].city`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    pub segments: Vec<Segment>,
}

impl PropertyPath {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 && matches!(segment, Segment::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyPathParser::parse(s)
    }
}

/// A component of a concrete location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    Key(String),
    Index(usize),
}

impl From<&str> for PathComponent {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for PathComponent {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for PathComponent {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// Concrete position inside a document, resolved from a [`PropertyPath`].
///
/// A location may point at a slot that does not exist yet when it was
/// resolved for writing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    components: Vec<PathComponent>,
}

impl Location {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(components: Vec<PathComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn key(&self, key: &str) -> Self {
        self.child(PathComponent::Key(key.to_string()))
    }

    pub(crate) fn index(&self, index: usize) -> Self {
        self.child(PathComponent::Index(index))
    }

    fn child(&self, component: PathComponent) -> Self {
        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend_from_slice(&self.components);
        components.push(component);
        Self { components }
    }

    /// Value currently stored at this location, if any.
    pub fn lookup<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        document.pointer(&self.pointer())
    }

    /// This location as an RFC 6901 JSON Pointer.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for component in &self.components {
            out.push('/');
            match component {
                PathComponent::Key(key) => out.push_str(&escape_json_pointer_key(key)),
                PathComponent::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, component) in self.components.iter().enumerate() {
            match component {
                PathComponent::Key(key) if idx == 0 => f.write_str(key)?,
                PathComponent::Key(key) => write!(f, ".{key}")?,
                PathComponent::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

fn escape_json_pointer_key(key: &str) -> String {
    if !key.contains('/') && !key.contains('~') {
        return key.to_string();
    }
    key.replace('~', "~0").replace('/', "~1")
}
