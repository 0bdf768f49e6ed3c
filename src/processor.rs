use crate::{
    args::OutputFormat,
    discovery::Document,
    error::Error,
    sort::{compare_group_versions_fn, GroupVersion},
};
use itertools::Itertools;
use std::io::Write;

pub fn process<P: AsRef<str>>(documents: &[Document], preferred_only: bool, patterns: &[P]) -> Vec<GroupVersion> {
    documents
        .iter()
        .flat_map(|document| document.group_versions(preferred_only))
        .unique()
        .sorted_by(compare_group_versions_fn(patterns))
        .collect()
}

pub fn render<W: Write>(mut out: W, group_versions: &[GroupVersion], format: OutputFormat) -> Result<(), Error> {
    match format {
        OutputFormat::Text => {
            if !group_versions.is_empty() {
                writeln!(out, "{}", group_versions.iter().join("\n"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, group_versions)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut out, group_versions)?,
    }
    Ok(())
}
