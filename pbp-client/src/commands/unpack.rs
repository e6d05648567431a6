//! `unpack` command: split a container into its sections.

use std::path::Path;

use pbp::unpack;

use crate::output::{OutputStyle, format_success, format_warning};

pub fn handle(input: &Path, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let summary = unpack(input, output_dir)?;
    let style = OutputStyle::default();

    for (name, size) in &summary.written {
        println!("{}", format_success(&format!("{name} ({size} bytes)"), &style));
    }

    if !summary.skipped.is_empty() {
        eprintln!(
            "{}",
            format_warning(
                &format!("Skipped sections: {}", summary.skipped.join(", ")),
                &style
            )
        );
    }

    println!(
        "Unpacked {} section(s) into '{}'",
        summary.written.len(),
        output_dir.display()
    );

    Ok(())
}
