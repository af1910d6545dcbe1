//! Per-category candidate rules.
//!
//! Every syntax node that can carry localizable text is lifted into the closed
//! `NodeCategory` enum. `dispatch` matches it exhaustively and returns the
//! candidate values at the node's value positions, together with whether the
//! node's subtree must be skipped.

use std::borrow::Cow;

use swc_common::{BytePos, Spanned};
use swc_ecma_ast::{
    ArrayLit, AssignExpr, CallExpr, Callee, Expr, ExprOrSpread, JSXAttr, JSXAttrName,
    JSXAttrValue, JSXText, KeyValueProp, Lit, NewExpr, SwitchCase, Tpl,
};

use crate::config::Config;
use crate::core::data::{ContextKind, NodeOrigin};
use crate::core::detect::TextDetector;
use crate::core::extract::template::{TemplateVerdict, analyze_template};

#[derive(Debug, Clone, Copy)]
pub enum NodeCategory<'a> {
    JsxAttribute(&'a JSXAttr),
    JsxText(&'a JSXText),
    Assignment(&'a AssignExpr),
    ObjectProperty(&'a KeyValueProp),
    ArrayLiteral(&'a ArrayLit),
    NewCall(&'a NewExpr),
    Call(&'a CallExpr),
    SwitchCase(&'a SwitchCase),
    Template(&'a Tpl),
}

impl NodeCategory<'_> {
    pub fn origin(&self) -> NodeOrigin {
        match self {
            NodeCategory::JsxAttribute(_) => NodeOrigin::JsxAttribute,
            NodeCategory::JsxText(_) => NodeOrigin::JsxText,
            NodeCategory::Assignment(_) => NodeOrigin::AssignmentExpression,
            NodeCategory::ObjectProperty(_) => NodeOrigin::ObjectProperty,
            NodeCategory::ArrayLiteral(_) => NodeOrigin::ArrayElement,
            NodeCategory::NewCall(_) => NodeOrigin::NewExpression,
            NodeCategory::Call(_) => NodeOrigin::CallExpression,
            NodeCategory::SwitchCase(_) => NodeOrigin::SwitchCase,
            NodeCategory::Template(_) => NodeOrigin::TemplateLiteral,
        }
    }
}

/// A value found at a node's value position, not yet checked by the detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub text: Cow<'a, str>,
    pub kind: ContextKind,
    pub pos: BytePos,
}

#[derive(Debug, Default)]
pub struct Dispatch<'a> {
    pub candidates: Vec<Candidate<'a>>,
    pub skip_subtree: bool,
}

/// Exemptions and switches applied by `dispatch`.
#[derive(Debug)]
pub struct DispatchRules<'a> {
    pub detector: &'a TextDetector,
    /// JSX attribute names never scanned (e.g. `defaultMessage`).
    pub reserved_attributes: &'a [String],
    /// Callee namespaces whose member calls are never scanned (e.g. `console`, `React`).
    pub exempt_namespaces: Vec<&'a str>,
    /// Call-site argument scanning; `new` expressions are always scanned.
    pub scan_call_arguments: bool,
}

impl<'a> DispatchRules<'a> {
    pub fn from_config(config: &'a Config, detector: &'a TextDetector) -> Self {
        Self {
            detector,
            reserved_attributes: &config.reserved_attributes,
            exempt_namespaces: config
                .logging_namespaces
                .iter()
                .chain(&config.render_namespaces)
                .map(String::as_str)
                .collect(),
            scan_call_arguments: config.scan_call_arguments,
        }
    }
}

pub fn dispatch<'a>(node: NodeCategory<'a>, rules: &DispatchRules<'_>) -> Dispatch<'a> {
    match node {
        NodeCategory::JsxAttribute(attr) => {
            if rules.reserved_attributes.contains(&attr_name(&attr.name)) {
                return Dispatch::default();
            }
            let text = match &attr.value {
                Some(JSXAttrValue::Str(s)) => s.value.as_str(),
                _ => None,
            };
            single(text, ContextKind::JsxAttribute, attr.span.lo)
        }
        NodeCategory::JsxText(text) => Dispatch {
            candidates: vec![Candidate {
                text: Cow::Borrowed(&*text.value),
                kind: ContextKind::JsxText,
                pos: text.span.lo,
            }],
            skip_subtree: false,
        },
        NodeCategory::Assignment(assign) => {
            single(literal_str(&assign.right), ContextKind::Generic, assign.span.lo)
        }
        NodeCategory::ObjectProperty(prop) => {
            single(literal_str(&prop.value), ContextKind::Generic, prop.span().lo)
        }
        NodeCategory::ArrayLiteral(arr) => Dispatch {
            candidates: arr
                .elems
                .iter()
                .flatten()
                .filter_map(|elem| {
                    argument_str(elem).map(|text| Candidate {
                        text: Cow::Borrowed(text),
                        kind: ContextKind::Generic,
                        pos: elem.expr.span().lo,
                    })
                })
                .collect(),
            skip_subtree: false,
        },
        NodeCategory::NewCall(new) => {
            let args = new.args.as_deref().unwrap_or_default();
            arguments(args, new.span.lo)
        }
        NodeCategory::Call(call) => {
            if !rules.scan_call_arguments || is_exempt_callee(&call.callee, rules) {
                return Dispatch::default();
            }
            arguments(&call.args, call.span.lo)
        }
        NodeCategory::SwitchCase(case) => {
            let text = case.test.as_deref().and_then(literal_str);
            single(text, ContextKind::Generic, case.span.lo)
        }
        NodeCategory::Template(tpl) => {
            let candidates = match analyze_template(tpl, rules.detector) {
                TemplateVerdict::Extract(text) => vec![Candidate {
                    text: Cow::Owned(text),
                    kind: ContextKind::Template,
                    pos: tpl.span.lo,
                }],
                TemplateVerdict::NoText | TemplateVerdict::Dynamic => Vec::new(),
            };
            Dispatch {
                candidates,
                skip_subtree: true,
            }
        }
    }
}

fn single(text: Option<&str>, kind: ContextKind, pos: BytePos) -> Dispatch<'_> {
    Dispatch {
        candidates: text
            .map(|text| Candidate {
                text: Cow::Borrowed(text),
                kind,
                pos,
            })
            .into_iter()
            .collect(),
        skip_subtree: false,
    }
}

/// Every literal argument, reported at the call's position.
fn arguments(args: &[ExprOrSpread], pos: BytePos) -> Dispatch<'_> {
    Dispatch {
        candidates: args
            .iter()
            .filter_map(argument_str)
            .map(|text| Candidate {
                text: Cow::Borrowed(text),
                kind: ContextKind::Generic,
                pos,
            })
            .collect(),
        skip_subtree: false,
    }
}

/// String value of a literal expression. Nested expressions yield `None`.
pub fn literal_str(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str(),
        _ => None,
    }
}

fn argument_str(arg: &ExprOrSpread) -> Option<&str> {
    if arg.spread.is_some() {
        return None;
    }
    literal_str(&arg.expr)
}

pub fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// `console.log(...)`, `React.createElement(...)` and other member calls on an
/// exempt namespace identifier.
fn is_exempt_callee(callee: &Callee, rules: &DispatchRules<'_>) -> bool {
    if let Callee::Expr(expr) = callee
        && let Expr::Member(member) = &**expr
        && let Expr::Ident(obj) = &*member.obj
    {
        return rules.exempt_namespaces.iter().any(|ns| *ns == &*obj.sym);
    }
    false
}
