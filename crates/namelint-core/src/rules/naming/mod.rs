//! Rules for identifier naming conventions

pub mod async_func_name;
pub mod const_naming_convention;
pub mod svg_file_name;

pub use async_func_name::AsyncFuncName;
pub use const_naming_convention::ConstNamingConvention;
pub use svg_file_name::SvgFileName;
