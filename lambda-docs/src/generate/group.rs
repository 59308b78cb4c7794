use crate::generate::*;
use std::{fmt, io};

/// A titled, ordered bundle of callables documented under one heading.
///
/// Members keep the given order and are never deduplicated.
pub struct DocGroup<'a> {
    pub title: &'a str,
    pub members: Vec<&'a dyn Describe>,
}

impl<'a> DocGroup<'a> {
    pub fn new(title: &'a str, members: impl IntoIterator<Item = &'a dyn Describe>) -> Self {
        Self {
            title,
            members: members.into_iter().collect(),
        }
    }
}

impl fmt::Display for DocGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        for member in &self.members {
            writeln!(f, "### `{}`", member.qualified_name())?;
            writeln!(f, "```")?;
            write!(f, "{}", member.describe())?;
            writeln!(f, "```")?;
        }
        Ok(())
    }
}

/// Write the markdown section of one documentation group.
pub fn emit_group<'a>(
    out: &mut impl io::Write,
    title: &'a str,
    members: impl IntoIterator<Item = &'a dyn Describe>,
) -> io::Result<()> {
    write!(out, "{}", DocGroup::new(title, members))?;
    out.flush()
}
