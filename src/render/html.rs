//! HTML renderer — standalone page with inline styling

use crate::render::{visible, DocRenderer};
use crate::schema::{FunctionDoc, PackageDoc, TypeDoc};

pub struct HtmlRenderer;

impl DocRenderer for HtmlRenderer {
    fn render(&self, pkg: &PackageDoc, include_private: bool) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&pkg.name)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>{}</h1>\n", escape(&pkg.name)));
        if !pkg.description.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape(&pkg.description)));
        }

        out.push_str("<h2>Installation</h2>\n");
        out.push_str(&format!("<pre>go get {}</pre>\n", escape(&pkg.path)));

        if !pkg.examples.is_empty() {
            out.push_str("<h2>Usage</h2>\n");
            for example in &pkg.examples {
                out.push_str(&format!("<pre>{}</pre>\n", escape(&example.code)));
            }
        }

        out.push_str("<h2>API Reference</h2>\n");

        let functions: Vec<&FunctionDoc> = pkg
            .functions
            .iter()
            .filter(|f| visible(f.is_exported, include_private))
            .collect();
        if !functions.is_empty() {
            out.push_str("<h3>Functions</h3>\n");
            for func in functions {
                render_function(&mut out, func);
            }
        }

        let types: Vec<&TypeDoc> = pkg
            .types
            .iter()
            .filter(|t| visible(t.is_exported, include_private))
            .collect();
        if !types.is_empty() {
            out.push_str("<h3>Types</h3>\n");
            for ty in types {
                render_type(&mut out, ty);
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

fn render_function(out: &mut String, func: &FunctionDoc) {
    out.push_str(&format!(
        "<h4 id=\"{}\">{}</h4>\n",
        anchor(&func.name),
        escape(&func.name)
    ));
    out.push_str(&format!("<pre>{}</pre>\n", escape(&func.signature)));
    if !func.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(&func.description)));
    }

    if !func.parameters.is_empty() {
        out.push_str("<ul>\n");
        for param in &func.parameters {
            out.push_str(&format!(
                "  <li><code>{}</code> {}</li>\n",
                escape(&param.name),
                escape(&param.ty)
            ));
        }
        out.push_str("</ul>\n");
    }

    for example in &func.examples {
        out.push_str(&format!("<pre>{}</pre>\n", escape(example.trim_end())));
    }
}

fn render_type(out: &mut String, ty: &TypeDoc) {
    out.push_str(&format!(
        "<h4 id=\"{}\">{}</h4>\n",
        anchor(&ty.name),
        escape(&ty.name)
    ));
    out.push_str(&format!(
        "<pre>type {} {}</pre>\n",
        escape(&ty.name),
        ty.kind.name()
    ));
    if !ty.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(&ty.description)));
    }

    if !ty.fields.is_empty() {
        out.push_str("<ul>\n");
        for field in &ty.fields {
            let name = if field.name.is_empty() {
                &field.ty
            } else {
                &field.name
            };
            out.push_str(&format!(
                "  <li><code>{}</code> {}</li>\n",
                escape(name),
                escape(&field.ty)
            ));
        }
        out.push_str("</ul>\n");
    }

    if !ty.methods.is_empty() {
        out.push_str("<ul>\n");
        for method in &ty.methods {
            out.push_str(&format!(
                "  <li><a href=\"#{}\">{}</a></li>\n",
                anchor(method),
                escape(method)
            ));
        }
        out.push_str("</ul>\n");
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn anchor(name: &str) -> String {
    name.to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "")
}
