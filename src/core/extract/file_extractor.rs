//! Single-pass text extraction over one file's AST.
//!
//! `FileExtractor` walks the module depth-first. For each node in a text-bearing
//! category it runs `dispatch`, passes every candidate through the detector and
//! records positive matches as `Detection`s in traversal order. Dedup happens
//! later, when detections are merged into the `ExtractionLog`.

use swc_common::SourceMap;
use swc_ecma_ast::{
    ArrayLit, AssignExpr, CallExpr, JSXAttr, JSXText, KeyValueProp, Module, NewExpr, SwitchCase,
    Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::{Detection, Location};
use crate::core::extract::category::{DispatchRules, NodeCategory, dispatch};

pub struct FileExtractor<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    rules: &'a DispatchRules<'a>,
    pub detections: Vec<Detection>,
}

impl<'a> FileExtractor<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, rules: &'a DispatchRules<'a>) -> Self {
        Self {
            file_path,
            source_map,
            rules,
            detections: Vec::new(),
        }
    }

    pub fn extract(mut self, module: &Module) -> Vec<Detection> {
        self.visit_module(module);
        self.detections
    }

    /// Returns true when the node's subtree must not be visited.
    fn handle(&mut self, node: NodeCategory<'_>) -> bool {
        let origin = node.origin();
        let result = dispatch(node, self.rules);

        for candidate in result.candidates {
            if !self.rules.detector.is_match(&candidate.text) {
                continue;
            }
            let loc = self.source_map.lookup_char_pos(candidate.pos);
            self.detections.push(Detection {
                text: candidate.text.into_owned(),
                kind: candidate.kind,
                location: Location::new(self.file_path, loc.line, loc.col.0),
                origin,
            });
        }

        result.skip_subtree
    }
}

impl Visit for FileExtractor<'_> {
    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        if !self.handle(NodeCategory::JsxAttribute(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        self.handle(NodeCategory::JsxText(node));
    }

    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        if !self.handle(NodeCategory::Assignment(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if !self.handle(NodeCategory::ObjectProperty(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_array_lit(&mut self, node: &ArrayLit) {
        if !self.handle(NodeCategory::ArrayLiteral(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        if !self.handle(NodeCategory::NewCall(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if !self.handle(NodeCategory::Call(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_switch_case(&mut self, node: &SwitchCase) {
        if !self.handle(NodeCategory::SwitchCase(node)) {
            node.visit_children_with(self);
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        if !self.handle(NodeCategory::Template(node)) {
            node.visit_children_with(self);
        }
    }
}
