use crate::{generate::*, plan::*};
use anyhow::{Context, Result};
use std::io::Write;

/// A namespace of documented functions together with the plan presenting them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSet {
    pub namespace: Namespace,
    pub plan: DocPlan,
}

impl DocSet {
    /// Pair the plan with the functions registered under its namespace.
    pub fn from_registry(plan: DocPlan) -> Self {
        Self {
            namespace: Namespace::gather(&plan.namespace),
            plan,
        }
    }

    pub fn new(namespace: Namespace, plan: DocPlan) -> Self {
        Self { namespace, plan }
    }

    /// Write every group of the plan in order.
    ///
    /// Members of a group are resolved before its heading is written, so a
    /// missing name stops the run with the earlier groups already written.
    pub fn generate(&self, mut out: impl Write) -> Result<()> {
        log::info!(
            "Generate reference of `{}` with {} groups",
            self.namespace.name,
            self.plan.groups.len()
        );
        for group in &self.plan.groups {
            let members = self.resolve_group(group)?;
            emit_group(
                &mut out,
                &group.title,
                members.iter().map(|def| *def as &dyn Describe),
            )
            .with_context(|| format!("Failed to write group `{}`", group.title))?;
            log::debug!("Wrote group `{}` ({} members)", group.title, members.len());
        }
        Ok(())
    }

    /// Render the whole reference into a string.
    pub fn render(&self) -> Result<String> {
        let mut out = Vec::new();
        self.generate(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Check that every member of every group resolves, without writing anything.
    pub fn validate(&self) -> Result<()> {
        for group in &self.plan.groups {
            self.resolve_group(group)?;
        }
        Ok(())
    }

    fn resolve_group(&self, group: &GroupPlan) -> Result<Vec<&FunctionDef>> {
        let members = self
            .namespace
            .resolve_all(&group.members)
            .with_context(|| format!("Cannot document group `{}`", group.title))?;
        Ok(members)
    }
}
