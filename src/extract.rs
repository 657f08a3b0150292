//! Declaration extraction
//!
//! Walks a parsed package and assembles the documentation model: plain
//! functions first, then types with their methods appended to the running
//! function list, then constant groups, then variable groups. Extraction
//! is single-pass, synchronous, and holds no state across calls; one
//! malformed declaration never prevents extraction of the rest.

use std::collections::BTreeSet;
use std::path::Path;

use crate::docs::{mine_examples, normalize_doc};
use crate::error::Result;
use crate::schema::{
    is_exported_name, ConstantDoc, FieldDoc, FunctionDoc, PackageDoc, ParamDoc, ReturnDoc,
    TypeDoc, TypeKind, VariableDoc,
};
use crate::syntax::{Decl, FieldNode, FuncDecl, ParsedPackage, TypeBody, TypeExpr, ValueGroup};
use crate::typestr::{function_signature, type_to_string, value_to_string};

/// Analyze the Go package in a directory and build its documentation model
///
/// Convenience entry point combining [`crate::parse::parse_dir`] with
/// [`build_package_doc`].
pub fn analyze_package(dir: &Path) -> Result<PackageDoc> {
    let parsed = crate::parse::parse_dir(dir)?;
    Ok(build_package_doc(&parsed))
}

/// Build the documentation model for one parsed package
pub fn build_package_doc(pkg: &ParsedPackage) -> PackageDoc {
    let mut doc = PackageDoc {
        name: pkg.name.clone(),
        path: pkg.path.clone(),
        description: normalize_doc(&pkg.doc),
        imports: dedupe_imports(&pkg.file_imports),
        ..Default::default()
    };

    // Plain functions first
    for decl in &pkg.decls {
        if let Decl::Func(func) = decl {
            if func.receiver.is_none() {
                doc.functions.push(function_doc(func, ""));
            }
        }
    }

    // Types next; each type's methods join the function list tagged with
    // their receiver name, and the type records the method names
    for decl in &pkg.decls {
        if let Decl::Type(ty) = decl {
            let mut entry = type_doc(ty);
            for method in methods_of(pkg, &ty.name) {
                entry.methods.push(method.name.clone());
                doc.functions.push(function_doc(method, &ty.name));
            }
            doc.types.push(entry);
        }
    }

    for decl in &pkg.decls {
        if let Decl::Const(group) = decl {
            doc.constants.extend(constant_docs(group));
        }
    }

    for decl in &pkg.decls {
        if let Decl::Var(group) = decl {
            doc.variables.extend(variable_docs(group));
        }
    }

    doc
}

/// Methods declared on `type_name`, in source order
fn methods_of<'a>(pkg: &'a ParsedPackage, type_name: &str) -> Vec<&'a FuncDecl> {
    pkg.decls
        .iter()
        .filter_map(|decl| match decl {
            Decl::Func(func) => {
                let recv = func.receiver.as_ref()?;
                (recv.ty.base_name() == Some(type_name)).then_some(func)
            }
            _ => None,
        })
        .collect()
}

fn function_doc(func: &FuncDecl, receiver: &str) -> FunctionDoc {
    FunctionDoc {
        name: func.name.clone(),
        signature: function_signature(func),
        description: normalize_doc(&func.doc),
        parameters: expand_parameters(&func.params),
        returns: func
            .results
            .iter()
            .map(|field| ReturnDoc {
                ty: type_to_string(&field.ty),
                description: String::new(),
            })
            .collect(),
        examples: mine_examples(&func.doc),
        is_exported: is_exported_name(&func.name),
        is_method: !receiver.is_empty(),
        receiver: receiver.to_string(),
    }
}

/// Expand a parameter field list: one entry per name, anonymous parameters
/// keep an empty name
fn expand_parameters(fields: &[FieldNode]) -> Vec<ParamDoc> {
    let mut params = Vec::new();
    for field in fields {
        let ty = type_to_string(&field.ty);
        if field.names.is_empty() {
            params.push(ParamDoc {
                name: String::new(),
                ty,
            });
        } else {
            for name in &field.names {
                params.push(ParamDoc {
                    name: name.clone(),
                    ty: ty.clone(),
                });
            }
        }
    }
    params
}

fn type_doc(ty: &crate::syntax::TypeDecl) -> TypeDoc {
    let (kind, fields) = match &ty.body {
        TypeBody::Struct(field_nodes) => (TypeKind::Struct, expand_struct_fields(field_nodes)),
        TypeBody::Interface => (TypeKind::Interface, Vec::new()),
        TypeBody::Other(expr) => (kind_of(expr), Vec::new()),
    };

    TypeDoc {
        name: ty.name.clone(),
        kind,
        description: normalize_doc(&ty.doc),
        fields,
        methods: Vec::new(),
        is_exported: is_exported_name(&ty.name),
    }
}

fn kind_of(expr: &TypeExpr) -> TypeKind {
    match expr {
        TypeExpr::Slice(_) => TypeKind::Array,
        TypeExpr::Map(_, _) => TypeKind::Map,
        TypeExpr::Chan(_, _) => TypeKind::Channel,
        TypeExpr::Func { .. } => TypeKind::Function,
        TypeExpr::Interface => TypeKind::Interface,
        _ => TypeKind::Alias,
    }
}

/// Expand struct fields: one entry per name; embedded fields become a
/// single entry with an empty name, identified by their rendered type
fn expand_struct_fields(fields: &[FieldNode]) -> Vec<FieldDoc> {
    let mut out = Vec::new();
    for field in fields {
        let ty = type_to_string(&field.ty);
        let description = normalize_doc(&field.doc);
        if field.names.is_empty() {
            out.push(FieldDoc {
                name: String::new(),
                ty,
                tag: field.tag.clone(),
                description,
            });
        } else {
            for name in &field.names {
                out.push(FieldDoc {
                    name: name.clone(),
                    ty: ty.clone(),
                    tag: field.tag.clone(),
                    description: description.clone(),
                });
            }
        }
    }
    out
}

/// Expand a constant group: every name inherits the shared doc; a value is
/// attached only when one exists at the name's index
fn constant_docs(group: &ValueGroup) -> Vec<ConstantDoc> {
    let ty = group.ty.as_ref().map(type_to_string).unwrap_or_default();
    let description = normalize_doc(&group.doc);

    group
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| ConstantDoc {
            name: name.clone(),
            ty: ty.clone(),
            value: group.values.get(i).map(value_to_string).unwrap_or_default(),
            description: description.clone(),
            is_exported: is_exported_name(name),
        })
        .collect()
}

fn variable_docs(group: &ValueGroup) -> Vec<VariableDoc> {
    let ty = group.ty.as_ref().map(type_to_string).unwrap_or_default();
    let description = normalize_doc(&group.doc);

    group
        .names
        .iter()
        .map(|name| VariableDoc {
            name: name.clone(),
            ty: ty.clone(),
            description: description.clone(),
            is_exported: is_exported_name(name),
        })
        .collect()
}

fn dedupe_imports(file_imports: &[Vec<String>]) -> Vec<String> {
    let set: BTreeSet<&String> = file_imports.iter().flatten().collect();
    set.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    fn build(source: &str) -> PackageDoc {
        build_package_doc(&parse_str(source, "test.go").unwrap())
    }

    #[test]
    fn test_add_function_end_to_end() {
        let pkg = build("package mathutil\n\nfunc Add(a, b int) int { return a + b }\n");
        assert_eq!(pkg.functions.len(), 1);
        let func = &pkg.functions[0];
        assert_eq!(func.name, "Add");
        assert_eq!(func.signature, "func Add(a int, b int) int");
        assert!(func.is_exported);
        assert!(!func.is_method);
        assert_eq!(
            func.parameters,
            vec![
                ParamDoc {
                    name: "a".to_string(),
                    ty: "int".to_string()
                },
                ParamDoc {
                    name: "b".to_string(),
                    ty: "int".to_string()
                },
            ]
        );
        assert_eq!(func.returns.len(), 1);
        assert_eq!(func.returns[0].ty, "int");
    }

    #[test]
    fn test_methods_follow_functions_and_resolve_receiver() {
        let source = concat!(
            "package p\n\n",
            "func helper() {}\n\n",
            "type Server struct{}\n\n",
            "func (s *Server) Start() error { return nil }\n\n",
            "func (s *Server) Stop() {}\n",
        );
        let pkg = build(source);

        let names: Vec<_> = pkg.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["helper", "Start", "Stop"]);

        let start = pkg.function_by_name("Start").unwrap();
        assert!(start.is_method);
        assert_eq!(start.receiver, "Server");
        assert_eq!(start.signature, "func (s *Server) Start() error");

        let server = pkg.type_by_name("Server").unwrap();
        assert_eq!(server.methods, vec!["Start", "Stop"]);
    }

    #[test]
    fn test_constant_group_positional_values() {
        let pkg = build("package p\n\n// Limits.\nconst A, B, C = 1, 2\n");
        assert_eq!(pkg.constants.len(), 3);
        assert_eq!(pkg.constants[0].value, "1");
        assert_eq!(pkg.constants[1].value, "2");
        assert_eq!(pkg.constants[2].value, "");
        for constant in &pkg.constants {
            assert_eq!(constant.description, "Limits.");
            assert!(constant.is_exported);
        }
    }

    #[test]
    fn test_typed_constant() {
        let pkg = build("package p\n\nconst timeout time.Duration = 30\n");
        assert_eq!(pkg.constants[0].ty, "time.Duration");
        assert_eq!(pkg.constants[0].value, "30");
        assert!(!pkg.constants[0].is_exported);
    }

    #[test]
    fn test_variables_carry_no_value() {
        let pkg = build("package p\n\nvar Debug bool\n");
        assert_eq!(pkg.variables.len(), 1);
        assert_eq!(pkg.variables[0].name, "Debug");
        assert_eq!(pkg.variables[0].ty, "bool");
        assert!(pkg.variables[0].is_exported);
    }

    #[test]
    fn test_embedded_field_has_empty_name() {
        let source = concat!(
            "package p\n\n",
            "type Handler struct {\n",
            "\tio.Reader\n",
            "\tName string\n",
            "}\n",
        );
        let pkg = build(source);
        let fields = &pkg.types[0].fields;
        assert_eq!(fields[0].name, "");
        assert_eq!(fields[0].ty, "io.Reader");
        assert_eq!(fields[1].name, "Name");
    }

    #[test]
    fn test_type_kinds() {
        let source = concat!(
            "package p\n\n",
            "type S struct{}\n",
            "type I interface{ Close() }\n",
            "type L []int\n",
            "type M map[string]int\n",
            "type C chan int\n",
            "type F func() error\n",
            "type A = string\n",
        );
        let pkg = build(source);
        let kinds: Vec<_> = pkg.types.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TypeKind::Struct,
                TypeKind::Interface,
                TypeKind::Array,
                TypeKind::Map,
                TypeKind::Channel,
                TypeKind::Function,
                TypeKind::Alias,
            ]
        );
    }

    #[test]
    fn test_function_examples_mined_from_doc() {
        let source = concat!(
            "package p\n\n",
            "// Run starts the loop.\n",
            "//\n",
            "// Example:\n",
            "//     Run()\n",
            "//\n",
            "func Run() {}\n",
        );
        let pkg = build(source);
        assert_eq!(pkg.functions[0].examples, vec!["Run()\n".to_string()]);
        assert_eq!(
            pkg.functions[0].description,
            "Run starts the loop.\nExample:\nRun()"
        );
    }

    #[test]
    fn test_exported_flag_is_pure_name_function() {
        let pkg = build("package p\n\nfunc Public() {}\n\nfunc private() {}\n");
        assert!(pkg.functions[0].is_exported);
        assert!(!pkg.functions[1].is_exported);
    }
}
