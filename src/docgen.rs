//! Documentation generation pipeline
//!
//! Couples the optional enhancement pass with style rendering. The
//! extracted model is cloned before enhancement so the caller's copy
//! stays untouched.

use crate::config::DocStyle;
use crate::enhance::Enhancer;
use crate::render;
use crate::schema::PackageDoc;

/// Options controlling one generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenOptions {
    pub style: DocStyle,
    pub include_private: bool,
    pub generate_examples: bool,
}

/// Turns package models into rendered documentation
pub struct Generator {
    enhancer: Option<Enhancer>,
}

impl Generator {
    pub fn new(enhancer: Option<Enhancer>) -> Generator {
        Generator { enhancer }
    }

    /// Render one package, running the enhancement pass first when an
    /// enhancer is configured
    pub fn generate(&self, pkg: &PackageDoc, opts: &GenOptions) -> String {
        let mut enhanced = pkg.clone();

        if let Some(enhancer) = &self.enhancer {
            enhancer.enhance_package(&mut enhanced, opts.generate_examples);
        }

        render::renderer_for(opts.style).render(&enhanced, opts.include_private)
    }
}
