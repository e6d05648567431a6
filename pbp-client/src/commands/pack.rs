//! `pack` command: assemble a container from input files.

use std::path::{Path, PathBuf};

use pbp::{SECTION_COUNT, SlotSource, pack};

use crate::output::{OutputStyle, format_success};

/// Command-line sentinel marking an absent slot.
const ABSENT: &str = "NULL";

pub fn handle(output: &Path, inputs: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let sources: [SlotSource; SECTION_COUNT] = inputs
        .iter()
        .map(|arg| {
            if arg == ABSENT {
                SlotSource::Absent
            } else {
                SlotSource::File(PathBuf::from(arg))
            }
        })
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| format!("expected exactly {SECTION_COUNT} inputs, got {}", inputs.len()))?;

    let summary = pack(output, &sources)?;

    let style = OutputStyle::default();
    println!(
        "{}",
        format_success(
            &format!(
                "Packed {} section(s) into '{}' ({} bytes)",
                summary.sections,
                output.display(),
                summary.total_len
            ),
            &style
        )
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_input_count_is_rejected() {
        let inputs = vec!["a.sfo".to_string(); 3];
        let err = handle(Path::new("out.pbp"), &inputs).unwrap_err();
        assert!(err.to_string().contains("expected exactly 8 inputs"));
    }
}
