//! godoc-style plain-text renderer

use crate::render::{visible, DocRenderer};
use crate::schema::PackageDoc;
use crate::utils::indent_lines;

pub struct GodocRenderer;

impl DocRenderer for GodocRenderer {
    fn render(&self, pkg: &PackageDoc, include_private: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!("PACKAGE {}\n\n", pkg.name));
        if !pkg.description.is_empty() {
            out.push_str(&format!("{}\n\n", indent_lines(&pkg.description, "    ")));
        }

        let constants: Vec<_> = pkg
            .constants
            .iter()
            .filter(|c| visible(c.is_exported, include_private))
            .collect();
        if !constants.is_empty() {
            out.push_str("CONSTANTS\n\n");
            for constant in constants {
                let mut line = format!("const {}", constant.name);
                if !constant.ty.is_empty() {
                    line.push_str(&format!(" {}", constant.ty));
                }
                if !constant.value.is_empty() {
                    line.push_str(&format!(" = {}", constant.value));
                }
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        let variables: Vec<_> = pkg
            .variables
            .iter()
            .filter(|v| visible(v.is_exported, include_private))
            .collect();
        if !variables.is_empty() {
            out.push_str("VARIABLES\n\n");
            for variable in variables {
                let mut line = format!("var {}", variable.name);
                if !variable.ty.is_empty() {
                    line.push_str(&format!(" {}", variable.ty));
                }
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        let functions: Vec<_> = pkg
            .functions
            .iter()
            .filter(|f| visible(f.is_exported, include_private))
            .collect();
        if !functions.is_empty() {
            out.push_str("FUNCTIONS\n\n");
            for func in functions {
                out.push_str(&func.signature);
                out.push('\n');
                if !func.description.is_empty() {
                    out.push_str(&indent_lines(&func.description, "    "));
                    out.push('\n');
                }
                out.push('\n');
            }
        }

        let types: Vec<_> = pkg
            .types
            .iter()
            .filter(|t| visible(t.is_exported, include_private))
            .collect();
        if !types.is_empty() {
            out.push_str("TYPES\n\n");
            for ty in types {
                out.push_str(&format!("type {} {}\n", ty.name, ty.kind.name()));
                if !ty.description.is_empty() {
                    out.push_str(&indent_lines(&ty.description, "    "));
                    out.push('\n');
                }
                for field in &ty.fields {
                    if field.name.is_empty() {
                        out.push_str(&format!("    {}\n", field.ty));
                    } else {
                        out.push_str(&format!("    {} {}\n", field.name, field.ty));
                    }
                }
                out.push('\n');
            }
        }

        out
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FunctionDoc;

    #[test]
    fn test_plain_text_layout() {
        let pkg = PackageDoc {
            name: "mathutil".to_string(),
            description: "Arithmetic helpers.".to_string(),
            functions: vec![FunctionDoc {
                name: "Add".to_string(),
                signature: "func Add(a int, b int) int".to_string(),
                description: "Add returns the sum.".to_string(),
                is_exported: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let output = GodocRenderer.render(&pkg, false);
        assert!(output.starts_with("PACKAGE mathutil\n"));
        assert!(output.contains("FUNCTIONS\n\nfunc Add(a int, b int) int\n    Add returns the sum.\n"));
    }
}
