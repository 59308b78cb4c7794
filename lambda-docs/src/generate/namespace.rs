use crate::{generate::*, type_info::*};
use std::collections::BTreeMap;

/// Functions exposed by a library namespace, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub function: BTreeMap<&'static str, FunctionDef>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function: BTreeMap::new(),
        }
    }

    /// Gather every registered [FunctionInfo] of the namespace `name`.
    pub fn gather(name: &str) -> Self {
        let mut namespace = Self::new(name);
        for info in inventory::iter::<FunctionInfo> {
            if info.namespace == name {
                namespace.add_function(info);
            }
        }
        if namespace.function.is_empty() {
            log::warn!("No function is registered in namespace `{name}`");
        }
        namespace
    }

    /// Add a function. The first registration of a name wins.
    pub fn add_function(&mut self, info: &FunctionInfo) {
        if self.function.contains_key(info.name) {
            log::warn!(
                "Function `{}.{}` is registered twice, the latter is ignored",
                self.name,
                info.name
            );
            return;
        }
        self.function.insert(info.name, FunctionDef::from(info));
    }

    pub fn resolve(&self, name: &str) -> Result<&FunctionDef, UnresolvedReference> {
        self.function.get(name).ok_or_else(|| UnresolvedReference {
            namespace: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Resolve every name in order, failing on the first missing one.
    pub fn resolve_all<'a>(
        &'a self,
        names: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Vec<&'a FunctionDef>, UnresolvedReference> {
        names
            .into_iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::btreeset;
    use std::collections::BTreeSet;

    crate::submit_functions! {
        "NamespaceTest";

        /// First registration
        fn partition(predicate, array);

        fn reduce(array, func);

        class Shuffler(data);
    }

    fn info(name: &'static str) -> FunctionInfo {
        FunctionInfo {
            name,
            kind: FunctionKind::Function,
            namespace: "LambdaData",
            args: &[],
            r#return: None,
            doc: "",
        }
    }

    #[test]
    fn test_gather() {
        let namespace = Namespace::gather("NamespaceTest");
        assert_eq!(namespace.name, "NamespaceTest");
        assert_eq!(
            namespace.function.keys().copied().collect::<BTreeSet<_>>(),
            btreeset! {"partition", "reduce", "Shuffler"}
        );
        assert_eq!(
            namespace.resolve("Shuffler").unwrap().kind,
            FunctionKind::Class
        );
        let partition = namespace.resolve("partition").unwrap();
        assert_eq!(partition.to_string(), "partition(predicate, array)");
        assert_eq!(partition.doc, " First registration\n");
    }

    #[test]
    fn test_gather_unknown_namespace() {
        assert!(Namespace::gather("NoSuchNamespace").function.is_empty());
    }

    #[test]
    fn test_resolve_missing() {
        let mut namespace = Namespace::new("LambdaData");
        namespace.add_function(&info("iota"));
        let err = namespace.resolve("iotta").unwrap_err();
        assert_eq!(
            err,
            UnresolvedReference {
                namespace: "LambdaData".to_string(),
                name: "iotta".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "module 'LambdaData' has no attribute 'iotta'"
        );
    }

    #[test]
    fn test_resolve_all_keeps_order_and_duplicates() {
        let mut namespace = Namespace::new("LambdaData");
        namespace.add_function(&info("iota"));
        namespace.add_function(&info("generate"));

        let names = namespace
            .resolve_all(["generate", "iota", "generate"])
            .unwrap()
            .into_iter()
            .map(|def| def.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["generate", "iota", "generate"]);

        let err = namespace
            .resolve_all(["iota", "missing", "also_missing"])
            .unwrap_err();
        assert_eq!(err.name, "missing");
    }

    #[test]
    fn test_first_registration_wins() {
        let mut namespace = Namespace::new("LambdaData");
        namespace.add_function(&FunctionInfo {
            doc: "first",
            ..info("shuffle")
        });
        namespace.add_function(&FunctionInfo {
            doc: "second",
            ..info("shuffle")
        });
        assert_eq!(namespace.resolve("shuffle").unwrap().doc, "first");
    }
}
