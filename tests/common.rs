// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn svgcombine_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("svgcombine"))
}

// Helper to lay out one icon variant under <root>/<class>/<file>
#[allow(dead_code)]
pub fn write_variant(
    root: &std::path::Path,
    class: &str,
    file: &str,
    markup: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = root.join(class);
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join(file), markup)?;
    Ok(())
}
