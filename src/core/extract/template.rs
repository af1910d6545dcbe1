//! Template literal analysis.
//!
//! A template literal is only extracted when it can be moved into a catalog
//! as-is: every interpolation must be a plain literal value. Any variable,
//! call or other expression makes the literal "not cleanly extractable",
//! because substituting placeholders would require rewriting the call site.

use swc_common::Spanned;
use swc_ecma_ast::{Expr, Lit, Tpl};

use crate::core::detect::TextDetector;

/// Content of one template segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPart<'a> {
    /// Quasi text (cooked value).
    Literal(&'a str),
    /// Interpolation of a plain literal, folded to its string form.
    Static(String),
    /// Any other interpolation.
    Dynamic,
}

/// A template segment tagged with its source position (byte offset).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSegment<'a> {
    pub pos: u32,
    pub part: SegmentPart<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateVerdict {
    /// No literal segment contains detectable text.
    NoText,
    /// Detectable text is mixed with an interpolation that blocks extraction.
    Dynamic,
    /// Extractable text, line breaks collapsed to spaces.
    Extract(String),
}

/// Split a template literal into position-tagged segments.
pub fn segments(tpl: &Tpl) -> Vec<TemplateSegment<'_>> {
    let quasis = tpl.quasis.iter().map(|quasi| TemplateSegment {
        pos: quasi.span.lo.0,
        part: SegmentPart::Literal(
            quasi
                .cooked
                .as_ref()
                .and_then(|cooked| cooked.as_str())
                .unwrap_or(&quasi.raw),
        ),
    });
    let exprs = tpl.exprs.iter().map(|expr| TemplateSegment {
        pos: expr.span().lo.0,
        part: match static_value(expr) {
            Some(value) => SegmentPart::Static(value),
            None => SegmentPart::Dynamic,
        },
    });
    quasis.chain(exprs).collect()
}

/// Decide whether a template literal yields a candidate.
///
/// Segments may be given in any order; they are merged by position first.
pub fn analyze_segments(
    mut segments: Vec<TemplateSegment<'_>>,
    detector: &TextDetector,
) -> TemplateVerdict {
    let has_text = segments.iter().any(|segment| match segment.part {
        SegmentPart::Literal(text) => detector.is_match(text),
        _ => false,
    });
    if !has_text {
        return TemplateVerdict::NoText;
    }

    segments.sort_by_key(|segment| segment.pos);

    let mut text = String::new();
    for segment in &segments {
        match &segment.part {
            SegmentPart::Literal(literal) => text.push_str(literal),
            SegmentPart::Static(value) => text.push_str(value),
            SegmentPart::Dynamic => return TemplateVerdict::Dynamic,
        }
    }

    let text = collapse_line_breaks(&text);
    if text.trim().is_empty() {
        return TemplateVerdict::NoText;
    }
    TemplateVerdict::Extract(text)
}

pub fn analyze_template(tpl: &Tpl, detector: &TextDetector) -> TemplateVerdict {
    analyze_segments(segments(tpl), detector)
}

fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// String form of a literal interpolation, as JavaScript would print it.
fn static_value(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_owned),
        Expr::Lit(Lit::Num(n)) => Some(format_number(n.value)),
        Expr::Lit(Lit::Bool(b)) => Some(b.value.to_string()),
        Expr::Lit(Lit::Null(_)) => Some("null".to_owned()),
        Expr::Paren(paren) => static_value(&paren.expr),
        _ => None,
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
