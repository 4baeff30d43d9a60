//! wwlib-cli - Command-line interface for wwlib
//!
//! A command-line tool for decompressing legacy game asset payloads and
//! producing minimal Format80 streams.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use wwlib::{blast_decompress, format2_decode, format40_decode, format80_decode, format80_encode};

#[derive(Parser)]
#[command(name = "wwlib-cli")]
#[command(about = "A CLI tool for legacy game asset decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress a compressed asset payload
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Compression format of the input
        #[arg(short = 'F', long, value_enum)]
        format: CliFormat,

        /// Decompressed size in bytes (required for every format except
        /// blast; archives store it next to the payload)
        #[arg(short, long)]
        size: Option<usize>,

        /// Previous-frame file to seed the destination with (format40)
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Encode a file as a Format80 stream of literal runs
    Compress {
        /// Input file to encode
        input: PathBuf,

        /// Output Format80 file
        output: PathBuf,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Get information about a Blast-compressed file
    Info {
        /// Compressed file to analyze
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CliFormat {
    /// Huffman/LZ archive payloads
    Blast,
    /// Literal/zero-run sprites
    Format2,
    /// XOR-delta animation frames
    Format40,
    /// LZ77 sprite frames and map tiles
    Format80,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decompress {
            input,
            output,
            format,
            size,
            base,
            force,
        } => decompress_file(
            &input,
            &output,
            format,
            size,
            base.as_deref(),
            force,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Compress {
            input,
            output,
            force,
        } => compress_file(&input, &output, force, cli.verbose, cli.quiet),
        Commands::Info { input } => show_file_info(&input, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(
    input: &PathBuf,
    output: &PathBuf,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }
    Ok(())
}

fn spinner(quiet: bool, input_size: usize, message: &'static str) -> Option<ProgressBar> {
    if quiet || input_size <= 1024 * 1024 {
        return None;
    }
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    Some(pb)
}

#[allow(clippy::too_many_arguments)]
fn decompress_file(
    input: &PathBuf,
    output: &PathBuf,
    format: CliFormat,
    size: Option<usize>,
    base: Option<&std::path::Path>,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    if verbose {
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = spinner(quiet, input_size, "Decompressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let decompressed_data = match format {
        CliFormat::Blast => {
            blast_decompress(&compressed_data).map_err(|e| format!("Decompression failed: {}", e))?
        }
        CliFormat::Format2 | CliFormat::Format40 | CliFormat::Format80 => {
            let size =
                size.ok_or("--size is required for format2/format40/format80 decompression")?;
            let mut dest = vec![0u8; size];

            if format == CliFormat::Format40 {
                let base_path =
                    base.ok_or("--base previous-frame file is required for format40")?;
                let base_data = fs::read(base_path)?;
                if base_data.len() != size {
                    return Err(format!(
                        "Base frame is {} bytes but --size is {}",
                        base_data.len(),
                        size
                    )
                    .into());
                }
                dest.copy_from_slice(&base_data);
            }

            let written = match format {
                CliFormat::Format2 => format2_decode(&compressed_data, &mut dest),
                CliFormat::Format40 => format40_decode(&compressed_data, &mut dest),
                _ => format80_decode(&compressed_data, &mut dest),
            }
            .map_err(|e| format!("Decompression failed: {}", e))?;

            if format != CliFormat::Format40 {
                dest.truncate(written);
            }
            dest
        }
    };

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    let decompression_time = start_time.elapsed();
    let output_size = decompressed_data.len();

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Time:   {:.2?}", decompression_time);
    }

    Ok(())
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!("Encoding '{}' to '{}'", input.display(), output.display());
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    let progress = spinner(quiet, input_size, "Encoding...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let encoded_data = format80_encode(&input_data);

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Encoding complete");
    }

    fs::write(output, &encoded_data)?;

    let encoding_time = start_time.elapsed();
    let output_size = encoded_data.len();

    if !quiet {
        println!("✓ Encoding successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Time:   {:.2?}", encoding_time);
        println!("  Note: literal-run encoding only; output is slightly larger than the input");
    }

    Ok(())
}

fn show_file_info(input: &PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let file_size = data.len();

    if data.len() < 2 {
        return Err("File too small to be a valid Blast compressed file".into());
    }

    let literal_flag = data[0];
    let dict_log = data[1];

    let literal_str = match literal_flag {
        0 => "raw",
        1 => "Huffman-coded",
        _ => "unknown",
    };

    let dict_size_str = match dict_log {
        4 => "1KB (1024 bytes)",
        5 => "2KB (2048 bytes)",
        6 => "4KB (4096 bytes)",
        _ => "unknown",
    };

    println!("Blast File Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", file_size);
    println!("  Literals: {} ({})", literal_str, literal_flag);
    println!("  Dictionary: {} (log {})", dict_size_str, dict_log);

    if verbose {
        println!("  Header bytes: {:02x} {:02x}", data[0], data[1]);
    }

    match blast_decompress(&data) {
        Ok(decompressed) => {
            let decompressed_size = decompressed.len();
            let ratio = (file_size as f64 / decompressed_size.max(1) as f64) * 100.0;
            println!("  Decompressed Size: {} bytes", decompressed_size);
            println!("  Compression Ratio: {:.1}%", ratio);
            println!("  Status: ✓ Valid Blast stream");
        }
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted Blast stream");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}
