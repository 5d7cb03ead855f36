//! Bit-level packing of codewords and the prefix-matching decoder.
//!
//! Bits are packed most significant bit first. The last byte is padded with
//! zeros, so the exact bit count always travels next to the bytes.

use std::collections::HashMap;

use bitvec::prelude::*;

use crate::codes::CodeTable;
use crate::error::{DecodeError, HuffmanError, Result};

/// Packed code stream, most significant bit first in each byte.
pub type Bits = BitVec<u8, Msb0>;

/// Splits a stream into its exact bit count and its bytes, with the unused
/// tail of the last byte cleared.
pub fn into_padded_bytes(mut bits: Bits) -> (u64, Vec<u8>) {
    let bit_len = bits.len() as u64;
    bits.set_uninitialized(false);
    (bit_len, bits.into_vec())
}

/// Concatenates the code of every symbol of `text`, in order.
pub fn encode_symbols(text: &str, codes: &CodeTable) -> Result<Bits> {
    let mut bits = Bits::new();
    for symbol in text.chars() {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::MissingCode { symbol })?;
        bits.extend(code.bytes().map(|digit| digit == b'1'));
    }
    Ok(bits)
}

/// Reads exactly `bit_len` bits from `bytes`, emitting a symbol each time the
/// accumulated bits equal a code.
///
/// The table is validated first. Once it is known to be prefix-free, at most
/// one code can ever match the accumulator and no backtracking is needed.
pub fn decode_symbols(codes: &CodeTable, bit_len: u64, bytes: &[u8]) -> Result<String> {
    if codes.is_empty() {
        if bit_len > 0 {
            return Err(DecodeError::BitsWithoutCodes { bit_len }.into());
        }
        return Ok(String::new());
    }

    codes.validate()?;

    let available = bytes.len() as u64 * 8;
    if bit_len > available {
        return Err(DecodeError::BitLengthOverflow {
            declared: bit_len,
            available,
        }
        .into());
    }
    let stream = &bytes.view_bits::<Msb0>()[..bit_len as usize];

    let inverse: HashMap<&str, char> = codes.iter().map(|(symbol, code)| (code, symbol)).collect();
    let longest = codes.max_code_len();

    let mut text = String::new();
    let mut current = String::with_capacity(longest);
    for bit in stream.iter().by_vals() {
        current.push(if bit { '1' } else { '0' });
        if let Some(&symbol) = inverse.get(current.as_str()) {
            text.push(symbol);
            current.clear();
        } else if current.len() >= longest {
            return Err(DecodeError::UnmatchedCode { bits: current }.into());
        }
    }

    if !current.is_empty() {
        return Err(DecodeError::DanglingBits { bits: current }.into());
    }
    Ok(text)
}
