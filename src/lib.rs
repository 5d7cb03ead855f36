//! # text_compressor
//!
//! Lossless text compression with static Huffman coding.
//!
//! ```rust
//! use text_compressor::{decode, encode};
//!
//! let payload = encode("abracadabra")?;
//! assert_eq!(decode(&payload)?, "abracadabra");
//! # Ok::<(), text_compressor::HuffmanError>(())
//! ```
//!
//! Each symbol is one `char`. The [`ContainerPayload`] holds the code table,
//! the exact bit count and the packed bits, and is persisted with bincode.

pub mod bitstream;
pub mod codes;
pub mod container;
pub mod error;
pub mod frequency;
pub mod tree;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, log_enabled, warn, Level};

pub use codes::CodeTable;
pub use container::ContainerPayload;
pub use error::{DecodeError, HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use tree::{HuffNode, HuffmanTree};

/// Compresses `text`. Empty input gives [`ContainerPayload::empty`].
pub fn encode(text: &str) -> Result<ContainerPayload> {
    let frequencies = FrequencyTable::from_symbols(text);
    let Some(tree) = HuffmanTree::from_frequencies(&frequencies) else {
        debug!("empty input, producing empty container");
        return Ok(ContainerPayload::empty());
    };
    let codes = CodeTable::from_tree(&tree);
    let (bit_len, bits) = bitstream::into_padded_bytes(bitstream::encode_symbols(text, &codes)?);

    if log_enabled!(Level::Debug) {
        debug!(
            "encoded {} symbols ({} distinct, tree depth {}) into {} bits",
            frequencies.total(),
            frequencies.len(),
            tree.depth(),
            bit_len
        );
    }
    Ok(ContainerPayload {
        codes,
        bit_len,
        bits,
    })
}

/// Restores the text held by `payload`. The code table is checked before any
/// bits are read, so an ambiguous table is an error rather than a guess.
pub fn decode(payload: &ContainerPayload) -> Result<String> {
    if payload.is_empty() {
        debug!("empty container, producing empty output");
        return Ok(String::new());
    }
    let text = bitstream::decode_symbols(&payload.codes, payload.bit_len, &payload.bits)
        .map_err(|e| {
            warn!("failed to decode {} bits: {}", payload.bit_len, e);
            e
        })?;
    debug!(
        "decoded {} bits into {} symbols",
        payload.bit_len,
        text.chars().count()
    );
    Ok(text)
}

/// Summary of a file compression or decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub symbols: u64,
    pub distinct_symbols: usize,
    pub bit_len: u64,
}

impl CompressionStats {
    fn new(text: &str, payload: &ContainerPayload, compressed_bytes: u64) -> Self {
        CompressionStats {
            original_bytes: text.len() as u64,
            compressed_bytes,
            symbols: text.chars().count() as u64,
            distinct_symbols: payload.codes.len(),
            bit_len: payload.bit_len,
        }
    }

    /// Compressed size as a fraction of the original, or `None` for empty
    /// input.
    pub fn ratio(&self) -> Option<f64> {
        if self.original_bytes == 0 {
            return None;
        }
        Some(self.compressed_bytes as f64 / self.original_bytes as f64)
    }
}

/// Reads UTF-8 text from `src` and writes its compressed container to `dst`.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<CompressionStats> {
    let mut in_file = BufReader::new(File::open(src)?);
    let mut buffer = Vec::new();
    in_file.read_to_end(&mut buffer)?;
    let text = String::from_utf8(buffer).map_err(|_| HuffmanError::InvalidUtf8)?;

    let payload = encode(&text)?;

    let out_file = BufWriter::new(File::create(dst)?);
    payload.write_to(out_file)?;

    let compressed_bytes = payload.serialized_size()?;
    Ok(CompressionStats::new(&text, &payload, compressed_bytes))
}

/// Reads a container from `src` and writes the restored text to `dst`.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
) -> Result<CompressionStats> {
    let in_file = BufReader::new(File::open(src)?);
    let payload = ContainerPayload::read_from(in_file)?;

    let text = decode(&payload)?;

    let mut out_file = BufWriter::new(File::create(dst)?);
    out_file.write_all(text.as_bytes())?;
    out_file.flush()?;

    let compressed_bytes = payload.serialized_size()?;
    Ok(CompressionStats::new(&text, &payload, compressed_bytes))
}
