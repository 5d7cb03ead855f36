use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use text_compressor::{compress_file, decompress_file, CompressionStats};

/// Huffman text compressor
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// print a size summary after the operation
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// compresses a UTF-8 text file
    #[command(alias = "compress")]
    Encode { input: PathBuf, output: PathBuf },

    /// restores a text file from a compressed container
    #[command(alias = "decompress")]
    Decode { input: PathBuf, output: PathBuf },
}

/// Lowercases the mode argument when it names a subcommand in any case, so
/// `ENCODE` and `Decode` are accepted like `encode` and `decode`.
fn lowercase_mode(mut argv: Vec<OsString>) -> Vec<OsString> {
    let command = Args::command();
    let known: Vec<String> = command
        .get_subcommands()
        .flat_map(|sub| std::iter::once(sub.get_name()).chain(sub.get_all_aliases()))
        .map(str::to_string)
        .collect();

    let mode = argv
        .iter_mut()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'));
    if let Some(arg) = mode {
        let lower = arg.to_string_lossy().to_lowercase();
        if known.contains(&lower) {
            *arg = OsString::from(lower);
        }
    }
    argv
}

fn print_stats(stats: &CompressionStats) {
    println!(
        "{} symbols ({} distinct), {} bytes of text, {} bits packed, {} byte container",
        stats.symbols,
        stats.distinct_symbols,
        stats.original_bytes,
        stats.bit_len,
        stats.compressed_bytes
    );
    if let Some(ratio) = stats.ratio() {
        println!("container is {:.1}% of the original", ratio * 100.0);
    }
}

fn main() -> ExitCode {
    let args = Args::parse_from(lowercase_mode(std::env::args_os().collect()));

    let result = match &args.mode {
        Mode::Encode { input, output } => compress_file(input, output),
        Mode::Decode { input, output } => decompress_file(input, output),
    };

    match result {
        Ok(stats) => {
            if args.stats {
                print_stats(&stats);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        let argv = argv.iter().map(OsString::from).collect();
        Args::try_parse_from(lowercase_mode(argv))
    }

    #[test]
    fn mode_is_case_insensitive() {
        let args = parse(&["text_compressor", "ENCODE", "in.txt", "out.bin"]).unwrap();
        assert!(matches!(args.mode, Mode::Encode { .. }));

        let args = parse(&["text_compressor", "--stats", "Decode", "out.bin", "in.txt"]).unwrap();
        assert!(args.stats);
        assert!(matches!(args.mode, Mode::Decode { .. }));

        let args = parse(&["text_compressor", "Compress", "in.txt", "out.bin"]).unwrap();
        assert!(matches!(args.mode, Mode::Encode { .. }));
    }

    #[test]
    fn file_names_keep_their_case() {
        let args = parse(&["text_compressor", "encode", "ENCODE", "Out.bin"]).unwrap();
        match args.mode {
            Mode::Encode { input, output } => {
                assert_eq!(input, PathBuf::from("ENCODE"));
                assert_eq!(output, PathBuf::from("Out.bin"));
            }
            Mode::Decode { .. } => panic!("parsed as decode"),
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(parse(&["text_compressor", "squash", "in.txt", "out.bin"]).is_err());
    }
}
