use super::item::{FileExtension, ItemLabel};

/// Ownership label placed as the first line of every generated file. A file
/// whose first line lacks this label is user-owned and excluded from
/// regeneration and cleanup.
pub const GENERATED_LABEL: &str = "<auto-generated>";

/// The two families of user-editable regions inside generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionFamily {
    /// Import/using preamble lines
    Imports,
    /// General body code
    Body,
}

impl RegionFamily {
    pub fn begin_tag(self) -> &'static str {
        match self {
            RegionFamily::Imports => "<custom-imports>",
            RegionFamily::Body => "<custom-body>",
        }
    }

    pub fn end_tag(self) -> &'static str {
        match self {
            RegionFamily::Imports => "</custom-imports>",
            RegionFamily::Body => "</custom-body>",
        }
    }
}

/// Render the header-label line for an extension.
pub fn header_line(ext: FileExtension, label: &ItemLabel) -> String {
    let text = match label {
        ItemLabel::Default => GENERATED_LABEL.to_string(),
        ItemLabel::Special(name) => format!("<auto-generated: {name}>"),
    };
    ext.comment_style().wrap(&text)
}

/// Whether a first line claims generator ownership (default or special
/// label, any comment style).
pub fn is_generated_header(line: &str) -> bool {
    line.contains("<auto-generated")
}

/// Begin-marker line for a region family in the given extension's comment
/// syntax.
pub fn begin_marker(ext: FileExtension, family: RegionFamily) -> String {
    ext.comment_style().wrap(family.begin_tag())
}

/// End-marker line for a region family.
pub fn end_marker(ext: FileExtension, family: RegionFamily) -> String {
    ext.comment_style().wrap(family.end_tag())
}

/// Classify a source line as a region marker.
///
/// Matching is comment-style agnostic so that regions survive a change of
/// emitted comment syntax; end tags are checked first because they embed the
/// family name.
pub fn marker_on_line(line: &str) -> Option<(RegionFamily, MarkerEdge)> {
    for family in [RegionFamily::Imports, RegionFamily::Body] {
        if line.contains(family.end_tag()) {
            return Some((family, MarkerEdge::End));
        }
        if line.contains(family.begin_tag()) {
            return Some((family, MarkerEdge::Begin));
        }
    }
    None
}

/// Which edge of a marker pair a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEdge {
    Begin,
    End,
}

/// Append an empty marker pair to `lines`, indented by `indent`.
pub fn push_empty_region(
    lines: &mut Vec<String>,
    ext: FileExtension,
    family: RegionFamily,
    indent: &str,
) {
    lines.push(format!("{indent}{}", begin_marker(ext, family)));
    lines.push(format!("{indent}{}", end_marker(ext, family)));
}
