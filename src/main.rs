use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::path::PathBuf;

mod parse;
mod types;
mod write;

use parse::parse_dump;
use write::write_files;

fn main() -> Result<()> {
    let matches = Command::new("md2r")
        .version("0.1.0")
        .about("md2r: rebuilds a full directory tree from a single flat ===FILE: dump.")
        .arg(
            Arg::new("dump")
                .help("Dump file containing ===FILE:/===END sections")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .help("Directory to reconstruct the tree under")
                .required(true),
        )
        .try_get_matches()
        // usage errors exit with 1, not clap's default 2
        .unwrap_or_else(|err| {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        });

    let dump_path = matches
        .get_one::<String>("dump")
        .map(PathBuf::from)
        .context("missing dump file argument")?;
    let out_root = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .context("missing output directory argument")?;

    if !dump_path.exists() {
        bail!("Dump file not found: {}", dump_path.display());
    }

    let text = fs::read_to_string(&dump_path)
        .with_context(|| format!("reading {}", dump_path.display()))?;
    let files = parse_dump(&text);

    println!(
        "[INFO] Parsed {} files from {}",
        files.len(),
        dump_path.display()
    );

    fs::create_dir_all(&out_root)
        .with_context(|| format!("creating output root {}", out_root.display()))?;
    write_files(&files, &out_root)?;

    println!("[DONE] Repo reconstructed.");
    Ok(())
}
