//! Canonical text rendering for type expressions and signatures
//!
//! Produces the exact source-text forms used in signatures, field lists,
//! and constant values. Rendering is pure and total: every variant of the
//! closed syntax model has a textual form, with `unknown` as the fallback.

use crate::syntax::{ChanDir, FieldNode, FuncDecl, TypeExpr, ValueExpr};

/// Render a type expression to its canonical source text
pub fn type_to_string(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Pointer(inner) => format!("*{}", type_to_string(inner)),
        TypeExpr::Slice(elem) => format!("[]{}", type_to_string(elem)),
        TypeExpr::Map(key, value) => {
            format!("map[{}]{}", type_to_string(key), type_to_string(value))
        }
        TypeExpr::Qualified { package, name } => format!("{}.{}", package, name),
        TypeExpr::Interface => "interface{}".to_string(),
        TypeExpr::Chan(dir, elem) => {
            let prefix = match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            };
            format!("{}{}", prefix, type_to_string(elem))
        }
        TypeExpr::Func { params, results } => func_type_string(params, results),
        TypeExpr::Variadic(elem) => format!("...{}", type_to_string(elem)),
        TypeExpr::Unknown => "unknown".to_string(),
    }
}

/// Render a field list the way it appears inside parentheses
///
/// Every name gets its own `name type` pair; names are never grouped by
/// shared type. Unnamed entries render the type alone.
pub fn field_list_to_string(fields: &[FieldNode]) -> String {
    let mut parts = Vec::new();
    for field in fields {
        let ty = type_to_string(&field.ty);
        if field.names.is_empty() {
            parts.push(ty);
        } else {
            for name in &field.names {
                parts.push(format!("{} {}", name, ty));
            }
        }
    }
    parts.join(", ")
}

/// Build the single-line signature of a function or method
pub fn function_signature(decl: &FuncDecl) -> String {
    let mut sig = String::from("func ");

    if let Some(recv) = &decl.receiver {
        sig.push('(');
        sig.push_str(&field_list_to_string(std::slice::from_ref(recv)));
        sig.push_str(") ");
    }

    sig.push_str(&decl.name);
    sig.push('(');
    sig.push_str(&field_list_to_string(&decl.params));
    sig.push(')');
    push_results(&mut sig, &decl.results);

    sig
}

/// Render a function type (`func(int) error`, `func() (int, error)`)
fn func_type_string(params: &[FieldNode], results: &[FieldNode]) -> String {
    let mut out = format!("func({})", field_list_to_string(params));
    push_results(&mut out, results);
    out
}

/// Append a result list: bare for exactly one unnamed result, otherwise
/// parenthesized; nothing at all for zero results
fn push_results(out: &mut String, results: &[FieldNode]) {
    if results.is_empty() {
        return;
    }
    out.push(' ');
    if results.len() == 1 && results[0].names.is_empty() {
        out.push_str(&field_list_to_string(results));
    } else {
        out.push('(');
        out.push_str(&field_list_to_string(results));
        out.push(')');
    }
}

/// Render a constant initializer expression
pub fn value_to_string(value: &ValueExpr) -> String {
    match value {
        ValueExpr::Lit(text) | ValueExpr::Ident(text) => text.clone(),
        ValueExpr::Selector(operand, name) => {
            format!("{}.{}", value_to_string(operand), name)
        }
        ValueExpr::Call(callee) => format!("{}(...)", value_to_string(callee)),
        ValueExpr::Other => "...".to_string(),
    }
}
