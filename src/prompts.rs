//! Prompt templates for the enhancement pass

use crate::schema::{FunctionDoc, PackageDoc, TypeDoc};

/// Prompt for an improved package-level description
pub fn package_description(pkg: &PackageDoc) -> String {
    format!(
        "Analyze this Go package and write a clear, concise description (2-3 sentences):\n\n\
         Package: {}\n\
         Path: {}\n\n\
         Functions: {}\n\
         Types: {}\n\n\
         Write a professional description that explains:\n\
         1. What this package does\n\
         2. Who would use it\n\
         3. Key capabilities\n\n\
         Keep it under 200 words and avoid marketing language.",
        pkg.name,
        pkg.path,
        join(pkg.functions.iter().map(|f| f.name.as_str())),
        join(pkg.types.iter().map(|t| t.name.as_str())),
    )
}

/// Prompt for an improved function description
pub fn function_description(func: &FunctionDoc) -> String {
    let parameters = join(
        func.parameters
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty)),
    );
    let returns = join(func.returns.iter().map(|r| r.ty.as_str()));

    format!(
        "Write a clear description for this Go function:\n\n\
         Function: {}\n\
         Signature: {}\n\
         Parameters: {}\n\
         Returns: {}\n\n\
         Describe what it does, when to use it, and any important behavior.\n\
         Keep it concise (1-2 sentences).",
        func.name, func.signature, parameters, returns,
    )
}

/// Prompt for an improved type description
pub fn type_description(ty: &TypeDoc) -> String {
    let fields = join(ty.fields.iter().map(|f| format!("{} {}", f.name, f.ty)));
    let methods = join(ty.methods.iter().map(String::as_str));

    format!(
        "Write a clear description for this Go type:\n\n\
         Type: {} ({})\n\
         Fields: {}\n\
         Methods: {}\n\n\
         Describe what it represents and how it's used.\n\
         Keep it concise (1-2 sentences).",
        ty.name,
        ty.kind.name(),
        fields,
        methods,
    )
}

/// Prompt for a package-level usage example
pub fn package_example(pkg: &PackageDoc) -> String {
    let functions = join(
        pkg.functions
            .iter()
            .filter(|f| f.is_exported)
            .map(|f| f.name.as_str()),
    );
    let types = join(
        pkg.types
            .iter()
            .filter(|t| t.is_exported)
            .map(|t| t.name.as_str()),
    );

    format!(
        "Create a realistic Go code example showing how to use this package:\n\n\
         Package: {}\n\
         Description: {}\n\
         Key Functions: {}\n\
         Key Types: {}\n\n\
         Write a complete, runnable example that shows:\n\
         1. Import statement\n\
         2. Basic usage\n\
         3. Error handling\n\
         4. Realistic use case\n\n\
         Return only the Go code, no explanations.",
        pkg.name, pkg.description, functions, types,
    )
}

/// Prompt for a single-function usage example
pub fn function_example(func: &FunctionDoc, package: &str) -> String {
    let parameters = join(
        func.parameters
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty)),
    );

    format!(
        "Create a Go code example for this function:\n\n\
         Function: {}\n\
         Signature: {}\n\
         Package: {}\n\
         Parameters: {}\n\n\
         Write a realistic example showing how to call this function.\n\
         Include proper error handling if needed.\n\
         Return only the Go code snippet.",
        func.name, func.signature, package, parameters,
    )
}

fn join<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    items
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParamDoc;

    #[test]
    fn test_function_prompt_mentions_signature() {
        let func = FunctionDoc {
            name: "Add".to_string(),
            signature: "func Add(a int, b int) int".to_string(),
            parameters: vec![ParamDoc {
                name: "a".to_string(),
                ty: "int".to_string(),
            }],
            ..Default::default()
        };
        let prompt = function_description(&func);
        assert!(prompt.contains("func Add(a int, b int) int"));
        assert!(prompt.contains("a int"));
    }

    #[test]
    fn test_package_example_lists_exported_only() {
        let pkg = PackageDoc {
            name: "mathutil".to_string(),
            functions: vec![
                FunctionDoc {
                    name: "Add".to_string(),
                    is_exported: true,
                    ..Default::default()
                },
                FunctionDoc {
                    name: "helper".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let prompt = package_example(&pkg);
        assert!(prompt.contains("Add"));
        assert!(!prompt.contains("helper"));
    }
}
