use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Curated presentation order of a namespace's functions.
///
/// ```toml
/// namespace = "LambdaData"
///
/// [[group]]
/// title = "Generators"
/// members = ["iota", "generate", "generate_n"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocPlan {
    pub namespace: String,
    #[serde(rename = "group", default)]
    pub groups: Vec<GroupPlan>,
}

/// One documentation group: a heading and its members, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupPlan {
    pub title: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl DocPlan {
    pub fn parse_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid plan {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let plan: Self = toml::de::from_str(content)?;
        if plan.namespace.trim().is_empty() {
            bail!("Plan namespace must not be empty")
        }
        Ok(plan)
    }
}
