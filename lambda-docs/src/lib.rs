//! Markdown API reference generator for function catalogs
//!
//! Documentation generation takes two steps:
//!
//! Store metadata (compile time)
//! ------------------------------
//! Each documented function is registered as a [type_info::FunctionInfo] with
//! the [submit_functions!] macro, which embeds its name, signature and rustdoc
//! text through [inventory::submit!](https://docs.rs/inventory/latest/inventory/macro.submit.html).
//!
//! Gather metadata and emit markdown (runtime)
//! -------------------------------------------
//! A [DocPlan] lists the documentation groups in presentation order.
//! [DocSet] resolves every group member against the registered [Namespace]
//! and writes one markdown section per group:
//!
//! ````text
//!
//! ## Generators
//!
//! ### `LambdaData.iota`
//! ```
//! Help on function iota in module LambdaData:
//!
//! iota(start, stop=None, step=1) -> Iterator
//!     ...
//!
//! ```
//! ````

mod generate;
mod macros;
mod plan;
pub mod type_info;

#[doc(hidden)]
pub use inventory;

pub type Result<T> = anyhow::Result<T>;
pub use generate::*;
pub use plan::*;
