//! Anchors command: show the effective anchor table.

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use dl_core::AnchorTable;

use crate::{Config, OutputFormat};

/// Runs the anchors command.
pub fn run(config: &Config, json: bool) -> Result<()> {
    let anchors = &config.layout.anchors;
    let mut stdout = io::stdout().lock();

    match config.output_format(json) {
        OutputFormat::Json => {
            let table: BTreeMap<&str, String> = anchors
                .iter()
                .map(|(anchor, time)| (anchor.as_str(), time.to_string()))
                .collect();
            serde_json::to_writer_pretty(&mut stdout, &table)
                .context("failed to serialize anchors")?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => stdout.write_all(format_anchors(anchors).as_bytes())?,
    }

    Ok(())
}

/// Formats the anchor table, marking configured times.
pub fn format_anchors(anchors: &AnchorTable) -> String {
    anchors
        .iter()
        .map(|(anchor, time)| {
            if anchors.is_overridden(anchor) {
                format!("{:<14}{time}  (configured)\n", anchor.as_str())
            } else {
                format!("{:<14}{time}\n", anchor.as_str())
            }
        })
        .collect()
}
