//! `analyze` command: print header and section metadata without
//! extracting any data.

use std::path::Path;

use pbp::{ContainerInfo, inspect};

use crate::OutputFormat;
use crate::output::{
    OutputStyle, absent_cell, create_table, format_header, format_key_value, header_cell,
    numeric_cell, regular_cell,
};

pub fn handle(input: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let info = inspect(input)?;

    match format {
        OutputFormat::Text => print_text(&info),
        OutputFormat::Json | OutputFormat::JsonPretty => print_json(&info, format)?,
    }

    Ok(())
}

/// Render the raw signature as 4 characters, escaping the conventional
/// leading NUL byte.
fn render_signature(signature: [u8; 4]) -> String {
    signature
        .iter()
        .flat_map(|b| b.escape_ascii())
        .map(char::from)
        .collect()
}

fn print_text(info: &ContainerInfo) {
    let style = OutputStyle::default();

    println!("{}", format_header("PBP Header", &style));
    println!(
        "{}",
        format_key_value("Signature", &render_signature(info.header.signature()), &style)
    );
    println!(
        "{}",
        format_key_value(
            "Version",
            &format!("{}.{}", info.header.major(), info.header.minor()),
            &style
        )
    );
    println!(
        "{}",
        format_key_value("Length", &format!("{} bytes", info.total_len), &style)
    );

    let mut table = create_table(&style);
    table.set_header(vec![
        header_cell("Section", &style),
        header_cell("Offset", &style),
        header_cell("Size", &style),
    ]);

    for entry in info.layout.iter() {
        if entry.is_present() {
            table.add_row(vec![
                regular_cell(entry.id.name()),
                numeric_cell(&entry.offset.to_string()),
                numeric_cell(&entry.size.to_string()),
            ]);
        } else {
            table.add_row(vec![
                regular_cell(entry.id.name()),
                absent_cell("NULL", &style),
                absent_cell("-", &style),
            ]);
        }
    }

    println!("{table}");
}

fn print_json(info: &ContainerInfo, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let json_data = serde_json::json!({
        "signature": render_signature(info.header.signature()),
        "version": format!("{}.{}", info.header.major(), info.header.minor()),
        "length": info.total_len,
        "sections": info.layout.iter().map(|entry| {
            serde_json::json!({
                "name": entry.id.name(),
                "present": entry.is_present(),
                "offset": entry.is_present().then_some(entry.offset),
                "size": entry.is_present().then_some(entry.size),
            })
        }).collect::<Vec<_>>(),
    });

    let output = if matches!(format, OutputFormat::JsonPretty) {
        serde_json::to_string_pretty(&json_data)?
    } else {
        serde_json::to_string(&json_data)?
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_signature_escapes_leading_nul() {
        assert_eq!(render_signature([0x00, b'P', b'B', b'P']), "\\x00PBP");
        assert_eq!(render_signature([b'_', b'P', b'B', b'P']), "_PBP");
    }
}
