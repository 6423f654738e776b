mod constants;
mod icon;
mod png;
mod raster;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vocab-icons")]
#[command(about = "Generate the VocabBuilder extension icons as PNG files", long_about = None)]
struct Cli {
    /// Directory to write the icons into (defaults to `icons/` next to the executable)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

/// The fixed output location: an `icons/` directory beside the program
/// itself, falling back to the working directory when the executable path
/// cannot be resolved.
fn default_out_dir() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("icons")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let out_dir = cli.out_dir.unwrap_or_else(default_out_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    for &size in &constants::icon::SIZES {
        let grid = icon::draw_icon(size);
        let bytes = png::encode(&grid)?;

        let path = out_dir.join(format!("icon{}.png", size));
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Created {} ({}x{})", path.display(), size, size);
    }

    println!("All icons generated successfully!");
    Ok(())
}
