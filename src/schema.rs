//! Documentation model
//!
//! The serializable output of package analysis. One `PackageDoc` owns every
//! child entity; cross-references (a method's receiver, a type's method list)
//! are plain names resolved by lookup against the flat lists, never pointers.
//! The model is built in a single pass and not mutated afterwards, except by
//! the enhancement pass which rewrites description/example fields in place.

use serde::{Deserialize, Serialize};

/// Complete documentation for one Go package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDoc {
    pub name: String,
    pub path: String,
    pub description: String,
    pub functions: Vec<FunctionDoc>,
    pub types: Vec<TypeDoc>,
    pub constants: Vec<ConstantDoc>,
    pub variables: Vec<VariableDoc>,
    pub examples: Vec<ExampleDoc>,
    pub imports: Vec<String>,
}

impl PackageDoc {
    /// Look up a type by name (receiver resolution at render time)
    pub fn type_by_name(&self, name: &str) -> Option<&TypeDoc> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Look up a function or method by name
    pub fn function_by_name(&self, name: &str) -> Option<&FunctionDoc> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// A function or method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,
    pub signature: String,
    pub description: String,
    pub parameters: Vec<ParamDoc>,
    pub returns: Vec<ReturnDoc>,
    pub examples: Vec<String>,
    pub is_exported: bool,
    pub is_method: bool,
    /// Name of the receiver type; empty for plain functions
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,
}

/// Kind of a type declaration's underlying type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Struct,
    Interface,
    Array,
    Map,
    Channel,
    Function,
    #[default]
    Alias,
}

impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Array => "array",
            Self::Map => "map",
            Self::Channel => "channel",
            Self::Function => "function",
            Self::Alias => "alias",
        }
    }
}

/// A type declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDoc {
    pub name: String,
    pub kind: TypeKind,
    pub description: String,
    /// Struct fields; empty for non-struct kinds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDoc>,
    /// Names of methods declared on this type, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    pub is_exported: bool,
}

/// A struct field; `name` is empty for embedded fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    pub description: String,
}

/// A function parameter; `name` is empty for anonymous parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A function return value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnDoc {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A constant declaration entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantDoc {
    pub name: String,
    /// Rendered type; empty when inferred from the value
    #[serde(rename = "type")]
    pub ty: String,
    /// Value expression text; empty beyond the last explicit value in a group
    pub value: String,
    pub description: String,
    pub is_exported: bool,
}

/// A variable declaration entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    pub is_exported: bool,
}

/// A package-level code example
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleDoc {
    pub name: String,
    pub code: String,
    pub doc: String,
}

/// Go visibility rule: exported iff the first character is uppercase
pub fn is_exported_name(name: &str) -> bool {
    name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}
