/// Register documented functions of a library namespace.
///
/// Every entry reads like a function signature without a body, introduced by
/// `fn` or, for callable classes, `class`. Default values and the return
/// annotation are kept as written, and the rustdoc comments become the
/// documentation text.
///
/// ```
/// lambda_docs::submit_functions! {
///     "LambdaData";
///
///     /// Infinite arithmetic sequence.
///     fn iota(start, stop = None, step = 1) -> "Iterator";
///
///     fn shuffle(array);
///
///     fn generate_n(n, func, *args, **kwargs) -> "Iterator";
///
///     class TruffleShuffle(data);
/// }
/// ```
#[macro_export]
macro_rules! submit_functions {
    (
        $namespace:literal;
        $(
            $(#[doc = $doc:literal])*
            $kind:ident $name:ident ( $($args:tt)* ) $(-> $ret:literal)? ;
        )*
    ) => {
        $(
            $crate::inventory::submit! {
                $crate::type_info::FunctionInfo {
                    name: stringify!($name),
                    kind: $crate::__kind!($kind),
                    namespace: $namespace,
                    args: $crate::__args!(@acc [] $($args)*),
                    r#return: $crate::__optional!($($ret)?),
                    doc: concat!($($doc, "\n",)* ""),
                }
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kind {
    (fn) => {
        $crate::type_info::FunctionKind::Function
    };
    (class) => {
        $crate::type_info::FunctionKind::Class
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __optional {
    () => {
        None
    };
    ($value:expr) => {
        Some($value)
    };
}

/// Munch an argument list like `a, b = 1, *args, **kwargs` into `&[ArgInfo]`.
#[doc(hidden)]
#[macro_export]
macro_rules! __args {
    (@acc [$($out:expr,)*]) => {
        &[$($out,)*]
    };
    (@acc [$($out:expr,)*] * * $arg:ident $(, $($rest:tt)*)?) => {
        $crate::__args!(@acc [$($out,)* $crate::__arg!(concat!("**", stringify!($arg))),] $($($rest)*)?)
    };
    (@acc [$($out:expr,)*] * $arg:ident $(, $($rest:tt)*)?) => {
        $crate::__args!(@acc [$($out,)* $crate::__arg!(concat!("*", stringify!($arg))),] $($($rest)*)?)
    };
    (@acc [$($out:expr,)*] $arg:ident = $default:tt $(, $($rest:tt)*)?) => {
        $crate::__args!(@acc [$($out,)* $crate::__arg!(stringify!($arg), stringify!($default)),] $($($rest)*)?)
    };
    (@acc [$($out:expr,)*] $arg:ident $(, $($rest:tt)*)?) => {
        $crate::__args!(@acc [$($out,)* $crate::__arg!(stringify!($arg)),] $($($rest)*)?)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __arg {
    ($name:expr) => {
        $crate::type_info::ArgInfo {
            name: $name,
            default: None,
        }
    };
    ($name:expr, $default:expr) => {
        $crate::type_info::ArgInfo {
            name: $name,
            default: Some($default),
        }
    };
}

/// Define a function gathering the functions registered in the calling crate.
///
/// The plan file is resolved relative to the calling crate's manifest
/// directory and embedded at compile time. [inventory] only sees registrations
/// linked into the final binary, so the gatherer has to live in the crate that
/// calls [submit_functions!].
///
/// ```ignore
/// lambda_docs::define_doc_gatherer!(doc_set, "make_docs.toml");
///
/// fn main() -> lambda_docs::Result<()> {
///     doc_set()?.generate(std::io::stdout().lock())
/// }
/// ```
#[macro_export]
macro_rules! define_doc_gatherer {
    ($function_name:ident, $plan:literal) => {
        /// Gather the registered functions named by the embedded documentation plan
        pub fn $function_name() -> $crate::Result<$crate::DocSet> {
            let plan = $crate::DocPlan::from_toml_str(include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/",
                $plan
            )))?;
            Ok($crate::DocSet::from_registry(plan))
        }
    };
}
