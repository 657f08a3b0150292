//! GitHub-flavored markdown renderer

use crate::render::{visible, DocRenderer};
use crate::schema::{FunctionDoc, PackageDoc, TypeDoc};

pub struct MarkdownRenderer;

impl DocRenderer for MarkdownRenderer {
    fn render(&self, pkg: &PackageDoc, include_private: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", pkg.name));
        if !pkg.description.is_empty() {
            out.push_str(&format!("{}\n\n", pkg.description));
        }

        out.push_str("## Installation\n\n");
        out.push_str(&format!("```bash\ngo get {}\n```\n\n", pkg.path));

        if !pkg.examples.is_empty() {
            out.push_str("## Usage\n\n");
            for example in &pkg.examples {
                if !example.doc.is_empty() {
                    out.push_str(&format!("{}\n\n", example.doc));
                }
                out.push_str(&format!("```go\n{}\n```\n\n", example.code));
            }
        }

        out.push_str("## API Reference\n\n");

        let functions: Vec<&FunctionDoc> = pkg
            .functions
            .iter()
            .filter(|f| visible(f.is_exported, include_private))
            .collect();
        if !functions.is_empty() {
            out.push_str("### Functions\n\n");
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
            out.push_str("### Types\n\n");
            for ty in types {
                render_type(&mut out, ty);
            }
        }

        let constants: Vec<_> = pkg
            .constants
            .iter()
            .filter(|c| visible(c.is_exported, include_private))
            .collect();
        if !constants.is_empty() {
            out.push_str("### Constants\n\n");
            for constant in constants {
                let mut line = format!("- `{}`", constant.name);
                if !constant.ty.is_empty() {
                    line.push_str(&format!(" ({})", constant.ty));
                }
                if !constant.value.is_empty() {
                    line.push_str(&format!(" = `{}`", constant.value));
                }
                if !constant.description.is_empty() {
                    line.push_str(&format!(" - {}", first_line(&constant.description)));
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
            out.push_str("### Variables\n\n");
            for variable in variables {
                let mut line = format!("- `{}`", variable.name);
                if !variable.ty.is_empty() {
                    line.push_str(&format!(" ({})", variable.ty));
                }
                if !variable.description.is_empty() {
                    line.push_str(&format!(" - {}", first_line(&variable.description)));
                }
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}

fn render_function(out: &mut String, func: &FunctionDoc) {
    out.push_str(&format!("#### {}\n\n", func.name));
    out.push_str(&format!("```go\n{}\n```\n\n", func.signature));

    if !func.description.is_empty() {
        out.push_str(&format!("{}\n\n", func.description));
    }

    if !func.parameters.is_empty() {
        out.push_str("**Parameters:**\n\n");
        for param in &func.parameters {
            if param.name.is_empty() {
                out.push_str(&format!("- ({})\n", param.ty));
            } else {
                out.push_str(&format!("- `{}` ({})\n", param.name, param.ty));
            }
        }
        out.push('\n');
    }

    if !func.returns.is_empty() {
        out.push_str("**Returns:**\n\n");
        for ret in &func.returns {
            if ret.description.is_empty() {
                out.push_str(&format!("- {}\n", ret.ty));
            } else {
                out.push_str(&format!("- {} - {}\n", ret.ty, ret.description));
            }
        }
        out.push('\n');
    }

    if !func.examples.is_empty() {
        out.push_str("**Example:**\n\n");
        for example in &func.examples {
            out.push_str(&format!("```go\n{}\n```\n\n", example.trim_end()));
        }
    }
}

fn render_type(out: &mut String, ty: &TypeDoc) {
    out.push_str(&format!("#### {}\n\n", ty.name));
    out.push_str(&format!("```go\ntype {} {}\n```\n\n", ty.name, ty.kind.name()));

    if !ty.description.is_empty() {
        out.push_str(&format!("{}\n\n", ty.description));
    }

    if !ty.fields.is_empty() {
        out.push_str("**Fields:**\n\n");
        for field in &ty.fields {
            let name = if field.name.is_empty() {
                field.ty.clone()
            } else {
                field.name.clone()
            };
            let mut line = format!("- `{}` {}", name, field.ty);
            if !field.description.is_empty() {
                line.push_str(&format!(" - {}", first_line(&field.description)));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    if !ty.methods.is_empty() {
        out.push_str("**Methods:**\n\n");
        for method in &ty.methods {
            out.push_str(&format!("- [{}](#{})\n", method, method.to_lowercase()));
        }
        out.push('\n');
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConstantDoc, FieldDoc, ParamDoc, ReturnDoc, TypeKind};

    fn sample_package() -> PackageDoc {
        PackageDoc {
            name: "mathutil".to_string(),
            path: "github.com/acme/mathutil".to_string(),
            description: "Arithmetic helpers.".to_string(),
            functions: vec![
                FunctionDoc {
                    name: "Add".to_string(),
                    signature: "func Add(a int, b int) int".to_string(),
                    description: "Add returns the sum.".to_string(),
                    parameters: vec![
                        ParamDoc {
                            name: "a".to_string(),
                            ty: "int".to_string(),
                        },
                        ParamDoc {
                            name: "b".to_string(),
                            ty: "int".to_string(),
                        },
                    ],
                    returns: vec![ReturnDoc {
                        ty: "int".to_string(),
                        description: String::new(),
                    }],
                    is_exported: true,
                    ..Default::default()
                },
                FunctionDoc {
                    name: "helper".to_string(),
                    signature: "func helper()".to_string(),
                    ..Default::default()
                },
            ],
            types: vec![TypeDoc {
                name: "Accumulator".to_string(),
                kind: TypeKind::Struct,
                fields: vec![FieldDoc {
                    name: "Total".to_string(),
                    ty: "int".to_string(),
                    ..Default::default()
                }],
                methods: vec!["Add".to_string()],
                is_exported: true,
                ..Default::default()
            }],
            constants: vec![ConstantDoc {
                name: "MaxValue".to_string(),
                value: "1024".to_string(),
                is_exported: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_installation_block() {
        let output = MarkdownRenderer.render(&sample_package(), false);
        assert!(output.contains("## Installation"));
        assert!(output.contains("go get github.com/acme/mathutil"));
    }

    #[test]
    fn test_exported_only_by_default() {
        let output = MarkdownRenderer.render(&sample_package(), false);
        assert!(output.contains("#### Add"));
        assert!(!output.contains("#### helper"));
    }

    #[test]
    fn test_private_flag_includes_unexported() {
        let output = MarkdownRenderer.render(&sample_package(), true);
        assert!(output.contains("#### helper"));
    }

    #[test]
    fn test_type_section_with_method_links() {
        let output = MarkdownRenderer.render(&sample_package(), false);
        assert!(output.contains("type Accumulator struct"));
        assert!(output.contains("- `Total` int"));
        assert!(output.contains("- [Add](#add)"));
    }

    #[test]
    fn test_constants_section() {
        let output = MarkdownRenderer.render(&sample_package(), false);
        assert!(output.contains("### Constants"));
        assert!(output.contains("- `MaxValue` = `1024`"));
    }
}
