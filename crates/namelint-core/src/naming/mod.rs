//! Naming analysis shared by the rules.
//!
//! - [`node`]: closed views over function-like nodes and their immediate parent
//! - [`hooks`]: classification of hook call targets
//! - [`resolve`]: effective-name inference for function-like nodes

pub mod hooks;
pub mod node;
pub mod resolve;

pub use hooks::{is_hook, is_hook_name};
pub use node::{FunctionCursor, FunctionNode, ParentNode, strip_parens};
pub use resolve::{FunctionName, get_function_name};
