use std::{fs, path::PathBuf};

use clap::Parser;
use text_wash::{WashConfig, WashMode, wash};

#[derive(Parser, Debug)]
#[command(name = "fixtures")]
#[command(about = "Create or validate fixture files", long_about = None)]
struct Args {
    /// Write fixtures instead of validating them
    #[arg(long, short)]
    write: bool,

    /// Path to the fixtures directory (defaults to "./fixtures")
    #[arg(long, default_value = "fixtures")]
    dir: PathBuf,

    /// Modes to generate outputs for (repeatable)
    #[arg(long = "mode", short, default_values = ["inputText", "inputLine", "leadingAndTrailing"])]
    modes: Vec<WashMode>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Read all input files in the fixtures directory
    let mut input_files = Vec::new();
    for entry in fs::read_dir(&args.dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;

        // Skip .out. files and anything that is not plain text
        if filename.contains(".out.") || !filename.ends_with(".txt") {
            continue;
        }

        input_files.push(path);
    }

    input_files.sort();

    let mut mismatches = Vec::new();
    let mut count = 0usize;

    println!(
        "{} fixtures...",
        if args.write { "Creating" } else { "Validating" }
    );
    for input_path in &input_files {
        let filename = input_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;
        let basename = filename
            .strip_suffix(".txt")
            .ok_or("filename missing extension")?;

        let source = fs::read_to_string(input_path)?;

        for &mode in &args.modes {
            let out = wash(&source, &WashConfig::with_mode(mode));
            let out_path = args.dir.join(format!("{basename}.{mode}.out.txt"));
            count += 1;

            if args.write {
                fs::write(&out_path, &out)?;
                println!("  Created {}", out_path.display());
                continue;
            }

            if !out_path.exists() {
                mismatches.push(format!(
                    "{filename} ({mode}): missing output file {}",
                    out_path.display()
                ));
            } else if fs::read(&out_path)? != out.as_bytes() {
                mismatches.push(format!("{filename} ({mode}): output mismatch"));
            } else {
                println!("  ✓ {filename} ({mode})");
            }
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\nValidation failed:");
        for mismatch in &mismatches {
            eprintln!("  ✗ {mismatch}");
        }
        return Err(format!("{} validation error(s)", mismatches.len()).into());
    }

    if args.write {
        println!("Done creating {count} fixtures.");
    } else {
        println!("\nAll {count} fixtures validated successfully!");
    }

    Ok(())
}
