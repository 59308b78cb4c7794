/// Capability of a callable to describe itself in the generated reference.
pub trait Describe {
    /// Namespace-qualified display name, e.g. `LambdaData.iota`
    fn qualified_name(&self) -> String;

    /// Help text shown in the fenced block under the callable's heading
    fn describe(&self) -> String;
}

