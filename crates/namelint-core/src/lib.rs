//! namelint core - naming-convention checks over JavaScript/TypeScript syntax trees
//!
//! Parses source with SWC, walks the tree with explicit parent context and runs
//! the naming rules (hook callbacks, async functions, module constants, SVG icon
//! imports) to produce diagnostics.

pub mod analysis;
pub mod config;
pub mod diagnostic;
pub mod disable_comments;
pub mod naming;
pub mod parser;
pub mod rules;
pub mod visitor;
