//! ARIA wiring between a panel's header and content.

use foldom::Document;

use crate::panel::Panel;

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
pub const ARIA_HIDDEN: &str = "aria-hidden";

pub fn header_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-header-{index}")
}

pub fn content_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-content-{index}")
}

/// Cross-reference header and content, make the header a focusable button
/// and mark both as collapsed.
///
/// Must only ever run with the panel's own index; the cross-references
/// are derived from it.
pub fn annotate(doc: &mut Document, panel: &Panel, prefix: &str) {
    let header = header_id(prefix, panel.index);
    let content = content_id(prefix, panel.index);

    doc.set_attribute(panel.header, "id", header.clone());
    doc.set_attribute(panel.header, ARIA_CONTROLS, content.clone());
    doc.set_attribute(panel.header, "role", "button");
    doc.set_attribute(panel.header, "tabindex", "0");

    doc.set_attribute(panel.content, "id", content);
    doc.set_attribute(panel.content, ARIA_LABELLEDBY, header);

    set_expanded(doc, panel, false);
}

/// Flip the expanded/hidden pair.
pub fn set_expanded(doc: &mut Document, panel: &Panel, expanded: bool) {
    doc.set_attribute(panel.header, ARIA_EXPANDED, expanded.to_string());
    doc.set_attribute(panel.content, ARIA_HIDDEN, (!expanded).to_string());
}
