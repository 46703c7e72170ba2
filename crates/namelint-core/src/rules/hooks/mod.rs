//! Rules for hook call conventions

pub mod hook_func_name;

pub use hook_func_name::HookFuncName;
