use crate::{generate::*, type_info::*};
use itertools::Itertools;
use std::fmt;

/// Definition of a documented function.
///
/// [fmt::Display] renders the signature line, e.g. `iota(start, step=1) -> Iterator`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: &'static str,
    pub kind: FunctionKind,
    pub namespace: &'static str,
    pub args: Vec<ArgInfo>,
    pub r#return: Option<&'static str>,
    pub doc: &'static str,
}

impl From<&FunctionInfo> for FunctionDef {
    fn from(info: &FunctionInfo) -> Self {
        Self {
            name: info.name,
            kind: info.kind,
            namespace: info.namespace,
            args: info.args.to_vec(),
            r#return: info.r#return,
            doc: info.doc,
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let args = self
            .args
            .iter()
            .map(|arg| match arg.default {
                Some(default) => format!("{}={}", arg.name, default),
                None => arg.name.to_string(),
            })
            .join(", ");
        write!(f, "{}({args})", self.name)?;
        if let Some(ret) = self.r#return {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

impl Describe for FunctionDef {
    fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    fn describe(&self) -> String {
        HelpText(self).to_string()
    }
}

/// pydoc-style help page of a function
struct HelpText<'a>(&'a FunctionDef);

impl fmt::Display for HelpText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let def = self.0;
        writeln!(
            f,
            "Help on {} {} in module {}:",
            def.kind, def.name, def.namespace
        )?;
        writeln!(f)?;
        writeln!(f, "{def}")?;
        docstring::write_docstring(f, def.doc, indent())?;
        writeln!(f)
    }
}
