use std::fmt;

use serde::{Serialize, Serializer};

/// Syntactic context a piece of text was found in.
///
/// The context decides how text is normalized before it becomes a catalog key
/// and which earlier occurrences count as duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextKind {
    /// String value of a JSX attribute: `<input placeholder="请输入" />`.
    JsxAttribute,
    /// Text between JSX tags: `<p>你好</p>`.
    JsxText,
    /// Plain string literal in a script position (assignment, property, argument...).
    Generic,
    /// Static template literal: `` `你好` ``.
    Template,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::JsxAttribute => "jsx-attribute",
            ContextKind::JsxText => "jsx-text",
            ContextKind::Generic => "generic",
            ContextKind::Template => "template",
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, ContextKind::JsxAttribute | ContextKind::JsxText)
    }

    /// Markup text is trimmed; script text is kept verbatim.
    pub fn normalize<'a>(&self, text: &'a str) -> &'a str {
        if self.is_markup() { text.trim() } else { text }
    }

    /// Kinds whose earlier occurrence at the same text and location suppresses
    /// a new occurrence of `self`.
    ///
    /// Only `Generic` merges across kinds: a script literal that was already
    /// reported as markup text is not reported twice.
    pub fn dedup_peers(&self) -> &'static [ContextKind] {
        match self {
            ContextKind::Generic => &[
                ContextKind::Generic,
                ContextKind::JsxText,
                ContextKind::JsxAttribute,
            ],
            ContextKind::JsxAttribute => &[ContextKind::JsxAttribute],
            ContextKind::JsxText => &[ContextKind::JsxText],
            ContextKind::Template => &[ContextKind::Template],
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntax node category that produced a detection. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOrigin {
    JsxAttribute,
    JsxText,
    AssignmentExpression,
    ObjectProperty,
    ArrayElement,
    NewExpression,
    CallExpression,
    SwitchCase,
    TemplateLiteral,
}

impl NodeOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeOrigin::JsxAttribute => "JSXAttribute",
            NodeOrigin::JsxText => "JSXText",
            NodeOrigin::AssignmentExpression => "AssignmentExpression",
            NodeOrigin::ObjectProperty => "ObjectProperty",
            NodeOrigin::ArrayElement => "ArrayExpression",
            NodeOrigin::NewExpression => "NewExpression",
            NodeOrigin::CallExpression => "CallExpression",
            NodeOrigin::SwitchCase => "SwitchCase",
            NodeOrigin::TemplateLiteral => "TemplateLiteral",
        }
    }
}

impl fmt::Display for NodeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source position of a detection.
///
/// `line` is 1-based, `column` is a 0-based character offset.
/// Displays (and serializes) as `file#line#column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}#{}", self.file, self.line, self.column)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw text found by a file traversal, before normalization and dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub text: String,
    pub kind: ContextKind,
    pub location: Location,
    pub origin: NodeOrigin,
}

/// A retained entry of the occurrence log.
///
/// `text` is already normalized for its kind. Identity is the
/// `(text, kind, location)` triple; `origin` is carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub text: String,
    pub kind: ContextKind,
    pub location: Location,
    pub origin: NodeOrigin,
}

impl Occurrence {
    /// Diagnostic line: `text#kind#file#line#column#NodeCategory`.
    pub fn diagnostic_line(&self) -> String {
        format!(
            "{}#{}#{}#{}",
            self.text, self.kind, self.location, self.origin
        )
    }
}
