use anyhow::{Context, Result};
use salescript_core::ScriptSections;
use std::io::Read;
use std::path::Path;

pub(crate) fn run(file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        },
    };
    let sections = ScriptSections::parse(&raw);
    if sections.is_empty() {
        tracing::warn!("no section markers found");
    }
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}
