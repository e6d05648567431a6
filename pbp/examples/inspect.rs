//! Print the section layout of a PBP container.
//!
//! Usage: cargo run --example inspect -- <file.pbp>

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: inspect <file.pbp>")?;

    let info = pbp::inspect(&path)?;
    println!(
        "{path}: version {}.{}, {} bytes",
        info.header.major(),
        info.header.minor(),
        info.total_len
    );
    for entry in info.layout.iter() {
        if entry.is_present() {
            println!("  {:<10} offset {:>8}, {} bytes", entry.id.name(), entry.offset, entry.size);
        } else {
            println!("  {:<10} absent", entry.id.name());
        }
    }
    Ok(())
}
