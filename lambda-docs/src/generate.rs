//! Generate markdown API reference documents.

mod describe;
mod doc_set;
mod docstring;
mod error;
mod function;
mod group;
mod namespace;

pub use describe::*;
pub use doc_set::*;
pub use error::*;
pub use function::*;
pub use group::*;
pub use namespace::*;

fn indent() -> &'static str {
    "    "
}
