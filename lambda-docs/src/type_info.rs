//! Store of metadata for generating API reference documents
//!
//! Every documented function is described by a [FunctionInfo] embedded at
//! compile time with [inventory::submit!](https://docs.rs/inventory/latest/inventory/macro.submit.html),
//! usually through [crate::submit_functions!]. At runtime
//! [inventory::iter](https://docs.rs/inventory/latest/inventory/struct.iter.html)
//! gathers them into a [crate::Namespace].

use std::fmt;

/// Info of a function argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgInfo {
    pub name: &'static str,
    /// Default value as written in the registration, e.g. `None` or `1`
    pub default: Option<&'static str>,
}

/// What kind of callable a documented name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    /// Callable class, e.g. a generator object built from its arguments
    Class,
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// Info of a documented function
#[derive(Debug)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub kind: FunctionKind,
    /// Library namespace the function is exposed from, e.g. `LambdaData`
    pub namespace: &'static str,
    pub args: &'static [ArgInfo],
    /// Return annotation, if the registration declares one
    pub r#return: Option<&'static str>,
    /// Raw rustdoc text, one `///` line per line
    pub doc: &'static str,
}

inventory::collect!(FunctionInfo);
