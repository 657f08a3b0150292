//! Go source parsing
//!
//! Parses `.go` files with tree-sitter and lowers the CST into the closed
//! syntax model in [`crate::syntax`]. This module is the only place that
//! touches raw tree nodes or the file system; the extractor downstream
//! works purely on [`ParsedPackage`].

use std::fs;
use std::path::Path;

use tracing::warn;
use tree_sitter::{Node, Parser, Tree};

use crate::error::{DocsmithError, Result};
use crate::syntax::{
    ChanDir, Decl, FieldNode, FuncDecl, ParsedPackage, TypeBody, TypeDecl, TypeExpr, ValueExpr,
    ValueGroup,
};

/// Parse every non-test Go file in a directory into one package
///
/// Files are visited in sorted order. Files that fail to read or parse are
/// skipped with a warning; files belonging to a `_test`-suffixed package
/// variant are ignored. Yields `NoPackageFound` when nothing usable remains.
pub fn parse_dir(dir: &Path) -> Result<ParsedPackage> {
    let mut paths: Vec<_> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| is_go_source(p))
            .collect(),
        Err(_) => Vec::new(),
    };
    paths.sort();

    let mut parser = go_parser()?;
    let mut pkg = ParsedPackage {
        path: dir.display().to_string(),
        ..Default::default()
    };

    for path in paths {
        let source = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };
        let Some(tree) = parser.parse(&source, None) else {
            warn!("skipping unparseable file {}", path.display());
            continue;
        };

        lower_file(&tree, &source, &mut pkg);
    }

    if pkg.name.is_empty() {
        return Err(DocsmithError::NoPackageFound {
            path: dir.display().to_string(),
        });
    }

    Ok(pkg)
}

/// Parse a single in-memory Go source into a package (used by tests and
/// embedding callers that already hold source text)
pub fn parse_str(source: &str, path: &str) -> Result<ParsedPackage> {
    let mut parser = go_parser()?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| DocsmithError::ParseFailure {
            message: format!("failed to parse {}", path),
        })?;

    let mut pkg = ParsedPackage {
        path: path.to_string(),
        ..Default::default()
    };
    lower_file(&tree, source, &mut pkg);

    if pkg.name.is_empty() {
        return Err(DocsmithError::NoPackageFound {
            path: path.to_string(),
        });
    }

    Ok(pkg)
}

fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| DocsmithError::ParseFailure {
            message: format!("failed to load Go grammar: {:?}", e),
        })?;
    Ok(parser)
}

fn is_go_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}

// ============================================================================
// File lowering
// ============================================================================

/// Lower one parsed file into the accumulating package
fn lower_file(tree: &Tree, source: &str, pkg: &mut ParsedPackage) {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let children: Vec<Node> = root.children(&mut cursor).collect();

    // Package clause decides whether this file participates at all
    let Some(clause_idx) = children.iter().position(|n| n.kind() == "package_clause") else {
        return;
    };
    let file_package = package_name(&children[clause_idx], source);
    if file_package.is_empty() || file_package.ends_with("_test") {
        return;
    }
    if pkg.name.is_empty() {
        pkg.name = file_package;
    } else if file_package != pkg.name {
        // Stray second package in the same directory
        return;
    }

    if pkg.doc.is_empty() {
        pkg.doc = doc_comment_above(&children, clause_idx, source);
    }

    let mut imports = Vec::new();

    for (idx, node) in children.iter().enumerate() {
        match node.kind() {
            "import_declaration" => collect_imports(node, source, &mut imports),
            "function_declaration" | "method_declaration" => {
                let doc = doc_comment_above(&children, idx, source);
                if let Some(func) = lower_function(node, source, doc) {
                    pkg.decls.push(Decl::Func(func));
                }
            }
            "type_declaration" => {
                let doc = doc_comment_above(&children, idx, source);
                lower_type_declaration(node, source, &doc, &mut pkg.decls);
            }
            "const_declaration" => {
                let doc = doc_comment_above(&children, idx, source);
                lower_value_declaration(node, source, &doc, "const_spec", &mut pkg.decls, true);
            }
            "var_declaration" => {
                let doc = doc_comment_above(&children, idx, source);
                lower_value_declaration(node, source, &doc, "var_spec", &mut pkg.decls, false);
            }
            _ => {}
        }
    }

    pkg.file_imports.push(imports);
}

fn package_name(clause: &Node, source: &str) -> String {
    let mut cursor = clause.walk();
    let name = clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")
        .map(|n| node_text(&n, source))
        .unwrap_or_default();
    name
}

fn collect_imports(node: &Node, source: &str, imports: &mut Vec<String>) {
    visit_all(node, &mut |n| {
        if n.kind() == "import_spec" {
            if let Some(path) = n.child_by_field_name("path") {
                let raw = node_text(&path, source);
                imports.push(raw.trim_matches('"').to_string());
            }
        }
    });
}

// ============================================================================
// Declaration lowering
// ============================================================================

fn lower_function(node: &Node, source: &str, doc: String) -> Option<FuncDecl> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))?;

    let receiver = node
        .child_by_field_name("receiver")
        .and_then(|list| lower_parameter_list(&list, source).into_iter().next());

    let params = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameter_list(&list, source))
        .unwrap_or_default();

    let results = node
        .child_by_field_name("result")
        .map(|result| lower_result(&result, source))
        .unwrap_or_default();

    Some(FuncDecl {
        name,
        receiver,
        params,
        results,
        doc,
    })
}

/// A result is either a parenthesized field list or a single bare type
fn lower_result(node: &Node, source: &str) -> Vec<FieldNode> {
    if node.kind() == "parameter_list" {
        lower_parameter_list(node, source)
    } else {
        vec![FieldNode {
            ty: lower_type(node, source),
            ..Default::default()
        }]
    }
}

fn lower_parameter_list(node: &Node, source: &str) -> Vec<FieldNode> {
    let mut fields = Vec::new();
    let mut cursor = node.walk();

    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "parameter_declaration" => {
                let names = field_names(&child, source);
                let ty = child
                    .child_by_field_name("type")
                    .map(|t| lower_type(&t, source))
                    .unwrap_or(TypeExpr::Unknown);
                fields.push(FieldNode {
                    names,
                    ty,
                    ..Default::default()
                });
            }
            "variadic_parameter_declaration" => {
                let names = field_names(&child, source);
                let elem = child
                    .child_by_field_name("type")
                    .map(|t| lower_type(&t, source))
                    .unwrap_or(TypeExpr::Unknown);
                fields.push(FieldNode {
                    names,
                    ty: TypeExpr::Variadic(Box::new(elem)),
                    ..Default::default()
                });
            }
            _ => {}
        }
    }

    fields
}

fn field_names(node: &Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|n| node_text(&n, source))
        .collect()
}

fn lower_type_declaration(node: &Node, source: &str, decl_doc: &str, decls: &mut Vec<Decl>) {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();

    for (idx, child) in children.iter().enumerate() {
        if child.kind() != "type_spec" && child.kind() != "type_alias" {
            continue;
        }
        let Some(name) = child
            .child_by_field_name("name")
            .map(|n| node_text(&n, source))
        else {
            continue;
        };

        let body = child
            .child_by_field_name("type")
            .map(|t| lower_type_body(&t, source))
            .unwrap_or(TypeBody::Other(TypeExpr::Unknown));

        // A spec's own comment wins over the group comment
        let spec_doc = doc_comment_above(&children, idx, source);
        let doc = if spec_doc.is_empty() {
            decl_doc.to_string()
        } else {
            spec_doc
        };

        decls.push(Decl::Type(TypeDecl { name, body, doc }));
    }
}

fn lower_type_body(node: &Node, source: &str) -> TypeBody {
    match node.kind() {
        "struct_type" => TypeBody::Struct(lower_struct_fields(node, source)),
        "interface_type" => TypeBody::Interface,
        _ => TypeBody::Other(lower_type(node, source)),
    }
}

fn lower_struct_fields(node: &Node, source: &str) -> Vec<FieldNode> {
    let Some(list) = node
        .named_child(0)
        .filter(|n| n.kind() == "field_declaration_list")
    else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let children: Vec<Node> = list.children(&mut cursor).collect();
    let mut fields = Vec::new();

    for (idx, child) in children.iter().enumerate() {
        if child.kind() != "field_declaration" {
            continue;
        }

        let names = field_names(child, source);
        let mut ty = child
            .child_by_field_name("type")
            .map(|t| lower_type(&t, source))
            .unwrap_or(TypeExpr::Unknown);

        // Embedded pointer fields carry the star as a bare token
        if names.is_empty() && has_token_child(child, "*") {
            ty = TypeExpr::Pointer(Box::new(ty));
        }

        let tag = child
            .child_by_field_name("tag")
            .map(|t| node_text(&t, source))
            .unwrap_or_default();

        let doc = doc_comment_above(&children, idx, source);

        fields.push(FieldNode {
            names,
            ty,
            tag,
            doc,
        });
    }

    fields
}

fn lower_value_declaration(
    node: &Node,
    source: &str,
    decl_doc: &str,
    spec_kind: &str,
    decls: &mut Vec<Decl>,
    is_const: bool,
) {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();

    for (idx, child) in children.iter().enumerate() {
        if child.kind() != spec_kind {
            continue;
        }

        let names = field_names(child, source);
        if names.is_empty() {
            continue;
        }

        let ty = child
            .child_by_field_name("type")
            .map(|t| lower_type(&t, source));

        let values = child
            .child_by_field_name("value")
            .map(|list| lower_expression_list(&list, source))
            .unwrap_or_default();

        let spec_doc = doc_comment_above(&children, idx, source);
        let doc = if spec_doc.is_empty() {
            decl_doc.to_string()
        } else {
            spec_doc
        };

        let group = ValueGroup {
            names,
            ty,
            values,
            doc,
        };
        decls.push(if is_const {
            Decl::Const(group)
        } else {
            Decl::Var(group)
        });
    }
}

fn lower_expression_list(node: &Node, source: &str) -> Vec<ValueExpr> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| lower_value(&child, source))
        .collect()
}

fn lower_value(node: &Node, source: &str) -> ValueExpr {
    match node.kind() {
        "int_literal"
        | "float_literal"
        | "imaginary_literal"
        | "rune_literal"
        | "interpreted_string_literal"
        | "raw_string_literal"
        | "true"
        | "false"
        | "nil"
        | "iota" => ValueExpr::Lit(node_text(node, source)),
        "identifier" => ValueExpr::Ident(node_text(node, source)),
        "selector_expression" => {
            let operand = node
                .child_by_field_name("operand")
                .map(|o| lower_value(&o, source))
                .unwrap_or(ValueExpr::Other);
            let field = node
                .child_by_field_name("field")
                .map(|f| node_text(&f, source))
                .unwrap_or_default();
            ValueExpr::Selector(Box::new(operand), field)
        }
        "call_expression" => {
            let callee = node
                .child_by_field_name("function")
                .map(|f| lower_value(&f, source))
                .unwrap_or(ValueExpr::Other);
            ValueExpr::Call(Box::new(callee))
        }
        _ => ValueExpr::Other,
    }
}

// ============================================================================
// Type expression lowering
// ============================================================================

fn lower_type(node: &Node, source: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Named(node_text(node, source)),
        "pointer_type" => TypeExpr::Pointer(Box::new(lower_inner(node, source))),
        "slice_type" | "array_type" => {
            // Array lengths are dropped; both shapes render as []T
            let elem = node
                .child_by_field_name("element")
                .map(|e| lower_type(&e, source))
                .unwrap_or(TypeExpr::Unknown);
            TypeExpr::Slice(Box::new(elem))
        }
        "map_type" => {
            let key = node
                .child_by_field_name("key")
                .map(|k| lower_type(&k, source))
                .unwrap_or(TypeExpr::Unknown);
            let value = node
                .child_by_field_name("value")
                .map(|v| lower_type(&v, source))
                .unwrap_or(TypeExpr::Unknown);
            TypeExpr::Map(Box::new(key), Box::new(value))
        }
        "qualified_type" => {
            let package = node
                .child_by_field_name("package")
                .map(|p| node_text(&p, source))
                .unwrap_or_default();
            let name = node
                .child_by_field_name("name")
                .map(|n| node_text(&n, source))
                .unwrap_or_default();
            TypeExpr::Qualified { package, name }
        }
        "interface_type" => TypeExpr::Interface,
        "channel_type" => {
            let elem = node
                .child_by_field_name("value")
                .map(|v| lower_type(&v, source))
                .unwrap_or(TypeExpr::Unknown);
            TypeExpr::Chan(channel_direction(node), Box::new(elem))
        }
        "function_type" => {
            let params = node
                .child_by_field_name("parameters")
                .map(|list| lower_parameter_list(&list, source))
                .unwrap_or_default();
            let results = node
                .child_by_field_name("result")
                .map(|result| lower_result(&result, source))
                .unwrap_or_default();
            TypeExpr::Func { params, results }
        }
        "generic_type" => node
            .child_by_field_name("type")
            .map(|t| lower_type(&t, source))
            .unwrap_or(TypeExpr::Unknown),
        "parenthesized_type" => lower_inner(node, source),
        _ => TypeExpr::Unknown,
    }
}

fn lower_inner(node: &Node, source: &str) -> TypeExpr {
    node.named_child(0)
        .map(|inner| lower_type(&inner, source))
        .unwrap_or(TypeExpr::Unknown)
}

/// `chan T` / `chan<- T` / `<-chan T`, decided by where the arrow token sits
fn channel_direction(node: &Node) -> ChanDir {
    if node.child(0).map(|c| c.kind()) == Some("<-") {
        return ChanDir::Recv;
    }
    let mut cursor = node.walk();
    if node.children(&mut cursor).any(|c| c.kind() == "<-") {
        ChanDir::Send
    } else {
        ChanDir::Both
    }
}

fn has_token_child(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == token);
    found
}

// ============================================================================
// Doc comment attachment
// ============================================================================

/// Collect the contiguous comment run ending on the line directly above
/// `children[idx]`, markers stripped and inner indentation preserved
fn doc_comment_above(children: &[Node], idx: usize, source: &str) -> String {
    let Some(target) = children.get(idx) else {
        return String::new();
    };
    let mut expected_row = target.start_position().row;
    let mut parts: Vec<String> = Vec::new();
    let mut i = idx;

    while i > 0 {
        let prev = children[i - 1];
        if prev.kind() != "comment" || prev.end_position().row + 1 != expected_row {
            break;
        }
        // A comment sharing a line with earlier code is a trailing comment,
        // not part of this declaration's doc
        if i >= 2 {
            let before = children[i - 2];
            if before.kind() != "comment"
                && before.end_position().row == prev.start_position().row
            {
                break;
            }
        }
        parts.push(comment_text(&node_text(&prev, source)));
        expected_row = prev.start_position().row;
        i -= 1;
    }

    parts.reverse();
    parts.join("\n")
}

/// Strip comment markers: `//` plus at most one following space for line
/// comments, the delimiters for block comments
fn comment_text(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("//") {
        return rest.strip_prefix(' ').unwrap_or(rest).to_string();
    }
    if let Some(inner) = raw.strip_prefix("/*").and_then(|t| t.strip_suffix("*/")) {
        return inner.trim_matches('\n').to_string();
    }
    raw.to_string()
}

// ============================================================================
// Node utilities
// ============================================================================

fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

fn visit_all<F>(node: &Node, visitor: &mut F)
where
    F: FnMut(&Node),
{
    visitor(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_all(&child, visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestr::{function_signature, type_to_string};

    fn first_func(pkg: &ParsedPackage) -> &FuncDecl {
        pkg.decls
            .iter()
            .find_map(|d| match d {
                Decl::Func(f) => Some(f),
                _ => None,
            })
            .expect("no function declaration found")
    }

    #[test]
    fn test_package_clause_and_doc() {
        let source = "// Package mathutil provides helpers.\npackage mathutil\n";
        let pkg = parse_str(source, "mathutil.go").unwrap();
        assert_eq!(pkg.name, "mathutil");
        assert_eq!(pkg.doc, "Package mathutil provides helpers.");
    }

    #[test]
    fn test_test_package_rejected() {
        let source = "package mathutil_test\n";
        let err = parse_str(source, "x_test.go").unwrap_err();
        assert!(matches!(err, DocsmithError::NoPackageFound { .. }));
    }

    #[test]
    fn test_function_lowering() {
        let source = "package p\n\n// Add returns the sum.\nfunc Add(a, b int) int { return a + b }\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(func.name, "Add");
        assert_eq!(func.doc, "Add returns the sum.");
        assert_eq!(function_signature(func), "func Add(a int, b int) int");
    }

    #[test]
    fn test_method_receiver() {
        let source = "package p\n\ntype Server struct{}\n\nfunc (s *Server) Start(addr string) error { return nil }\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(func.name, "Start");
        let recv = func.receiver.as_ref().unwrap();
        assert_eq!(recv.names, vec!["s".to_string()]);
        assert_eq!(recv.ty.base_name(), Some("Server"));
        assert_eq!(
            function_signature(func),
            "func (s *Server) Start(addr string) error"
        );
    }

    #[test]
    fn test_nested_type_expression() {
        let source = "package p\n\nfunc F(m map[string][]*int, ch <-chan []byte) {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(type_to_string(&func.params[0].ty), "map[string][]*int");
        assert_eq!(type_to_string(&func.params[1].ty), "<-chan []byte");
    }

    #[test]
    fn test_send_channel_direction() {
        let source = "package p\n\nfunc F(out chan<- int, both chan int) {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(type_to_string(&func.params[0].ty), "chan<- int");
        assert_eq!(type_to_string(&func.params[1].ty), "chan int");
    }

    #[test]
    fn test_variadic_parameter() {
        let source = "package p\n\nfunc F(args ...string) {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(type_to_string(&func.params[0].ty), "...string");
    }

    #[test]
    fn test_function_type_parameter() {
        let source = "package p\n\nfunc F(cb func(int) error) {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(type_to_string(&func.params[0].ty), "func(int) error");
    }

    #[test]
    fn test_qualified_and_interface_types() {
        let source = "package p\n\nfunc F(r io.Reader, v interface{}) {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(type_to_string(&func.params[0].ty), "io.Reader");
        assert_eq!(type_to_string(&func.params[1].ty), "interface{}");
    }

    #[test]
    fn test_struct_fields_and_tags() {
        let source = concat!(
            "package p\n\n",
            "// Config holds settings.\n",
            "type Config struct {\n",
            "\t// Name of the project.\n",
            "\tName string `json:\"name\"`\n",
            "\tio.Reader\n",
            "}\n",
        );
        let pkg = parse_str(source, "p.go").unwrap();
        let Decl::Type(ty) = &pkg.decls[0] else {
            panic!("expected type declaration");
        };
        assert_eq!(ty.name, "Config");
        assert_eq!(ty.doc, "Config holds settings.");
        let TypeBody::Struct(fields) = &ty.body else {
            panic!("expected struct body");
        };
        assert_eq!(fields[0].names, vec!["Name".to_string()]);
        assert_eq!(fields[0].tag, "`json:\"name\"`");
        assert_eq!(fields[0].doc, "Name of the project.");
        assert!(fields[1].names.is_empty());
        assert_eq!(type_to_string(&fields[1].ty), "io.Reader");
    }

    #[test]
    fn test_const_group_with_iota() {
        let source = concat!(
            "package p\n\n",
            "// Severity levels.\n",
            "const (\n",
            "\tLow = iota\n",
            "\tHigh\n",
            ")\n",
        );
        let pkg = parse_str(source, "p.go").unwrap();
        let groups: Vec<_> = pkg
            .decls
            .iter()
            .filter_map(|d| match d {
                Decl::Const(g) => Some(g),
                _ => None,
            })
            .collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].names, vec!["Low".to_string()]);
        assert_eq!(groups[0].values, vec![ValueExpr::Lit("iota".to_string())]);
        assert!(groups[1].values.is_empty());
        // Both specs inherit the group doc
        assert_eq!(groups[0].doc, "Severity levels.");
        assert_eq!(groups[1].doc, "Severity levels.");
    }

    #[test]
    fn test_imports_collected_with_full_paths() {
        let source = "package p\n\nimport (\n\t\"fmt\"\n\t\"net/http\"\n)\n";
        let pkg = parse_str(source, "p.go").unwrap();
        assert_eq!(
            pkg.file_imports,
            vec![vec!["fmt".to_string(), "net/http".to_string()]]
        );
    }

    #[test]
    fn test_trailing_comment_not_attached() {
        let source = "package p\n\nvar x = 1 // trailing\n// F does a thing.\nfunc F() {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        let func = first_func(&pkg);
        assert_eq!(func.doc, "F does a thing.");
    }

    #[test]
    fn test_blank_line_breaks_doc_attachment() {
        let source = "package p\n\n// stale comment\n\nfunc F() {}\n";
        let pkg = parse_str(source, "p.go").unwrap();
        assert_eq!(first_func(&pkg).doc, "");
    }
}
