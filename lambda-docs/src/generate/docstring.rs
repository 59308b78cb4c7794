use std::fmt;

/// Remove surrounding blank lines and the indentation shared by all non-blank lines.
///
/// Rustdoc comments keep the space after `///`, so `/// foo` arrives as ` foo`.
pub fn clean_doc(doc: &str) -> String {
    let lines: Vec<&str> = doc.lines().map(str::trim_end).collect();
    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);
    let lines = &lines[first..=last];

    let margin = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| strip_margin(line, margin))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the first `margin` chars. Only blank lines are shorter than the margin.
fn strip_margin(line: &str, margin: usize) -> &str {
    match line.char_indices().nth(margin) {
        Some((start, _)) => &line[start..],
        None => "",
    }
}

pub fn write_docstring(f: &mut fmt::Formatter, doc: &str, indent: &str) -> fmt::Result {
    let doc = clean_doc(doc);
    if doc.is_empty() {
        return writeln!(f, "{indent}No documentation available.");
    }
    for line in doc.lines() {
        if line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "{indent}{line}")?;
        }
    }
    Ok(())
}
