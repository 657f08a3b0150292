//! Style renderers — trait-based format dispatch
//!
//! Each renderer is pure string building over a [`PackageDoc`]. Unexported
//! symbols are skipped unless `include_private` is set.

pub mod godoc;
pub mod html;
pub mod markdown;

use crate::config::DocStyle;
use crate::schema::PackageDoc;

/// Render a documentation model into one output format
pub trait DocRenderer {
    fn render(&self, pkg: &PackageDoc, include_private: bool) -> String;
    fn file_extension(&self) -> &'static str;
}

/// Renderer for the given style
pub fn renderer_for(style: DocStyle) -> Box<dyn DocRenderer> {
    match style {
        DocStyle::Markdown => Box::new(markdown::MarkdownRenderer),
        DocStyle::Html => Box::new(html::HtmlRenderer),
        DocStyle::Godoc => Box::new(godoc::GodocRenderer),
    }
}

/// Visibility filter shared by all renderers
pub(crate) fn visible(is_exported: bool, include_private: bool) -> bool {
    is_exported || include_private
}
