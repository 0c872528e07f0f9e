//! Pipeline output emission for a resolved release

use crate::domain::ReleaseRecord;
use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Output keys and values for a resolved release, in emission order
pub fn output_pairs(record: &ReleaseRecord) -> Vec<(&'static str, String)> {
    vec![
        ("release_id", record.id.to_string()),
        ("release_title", record.title.clone()),
        ("release_tag", record.tag_name.clone()),
        ("release_sha", record.commit_sha.clone()),
    ]
}

/// Emit the pipeline outputs for a resolved release
///
/// Appends `key=value` lines to the file named by `GITHUB_OUTPUT` when that
/// variable is set; otherwise falls back to the legacy `::set-output`
/// workflow commands on stdout. When no release was resolved the caller emits
/// nothing - absence of outputs is informational, not an error.
pub fn emit(record: &ReleaseRecord) -> Result<()> {
    match env::var_os("GITHUB_OUTPUT") {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            for (key, value) in output_pairs(record) {
                writeln!(file, "{}={}", key, value)?;
            }
        }
        None => {
            println!("::set-output name=release_id::{}", record.id);
            println!("::set-output name=release_title::'{}'", record.title);
            println!("::set-output name=release_tag::{}", record.tag_name);
            println!("::set-output name=release_sha::{}", record.commit_sha);
        }
    }
    Ok(())
}
