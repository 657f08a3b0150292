//! Docsmith: AI-enhanced documentation generator for Go packages
//!
//! This library analyzes Go source code with tree-sitter and extracts a
//! structured documentation model per package: functions, methods, types,
//! struct fields, constants, variables, imports, and doc-comment examples.
//! The model can be enhanced by an external LLM (descriptions, usage
//! examples) and rendered to Markdown, HTML, or godoc-style text.
//!
//! # Example
//!
//! ```ignore
//! use docsmith::{analyze_package, DocStyle};
//! use docsmith::docgen::{GenOptions, Generator};
//! use std::path::Path;
//!
//! let pkg = analyze_package(Path::new("./pkg/server"))?;
//! println!("{} exports {} functions", pkg.name, pkg.functions.len());
//!
//! let generator = Generator::new(None);
//! let markdown = generator.generate(&pkg, &GenOptions::default());
//! println!("{}", markdown);
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discover;
pub mod docgen;
pub mod docs;
pub mod enhance;
pub mod error;
pub mod extract;
pub mod parse;
pub mod prompts;
pub mod render;
pub mod schema;
pub mod syntax;
pub mod typestr;
pub mod utils;
pub mod watch;

// Re-export commonly used types
pub use app::App;
pub use cli::Cli;
pub use config::{Config, DocStyle};
pub use error::{DocsmithError, Result};
pub use extract::{analyze_package, build_package_doc};
pub use parse::{parse_dir, parse_str};
pub use schema::{
    is_exported_name, ConstantDoc, ExampleDoc, FieldDoc, FunctionDoc, PackageDoc, ParamDoc,
    ReturnDoc, TypeDoc, TypeKind, VariableDoc,
};
