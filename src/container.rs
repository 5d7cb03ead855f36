use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::codes::CodeTable;
use crate::error::Result;

/// Everything needed to rebuild the original text: the code table, the exact
/// number of meaningful bits, and the packed bits themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPayload {
    pub codes: CodeTable,
    pub bit_len: u64,
    pub bits: Vec<u8>,
}

impl ContainerPayload {
    /// The payload for empty input.
    pub fn empty() -> Self {
        ContainerPayload::default()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.bit_len == 0
    }

    /// Serializes with bincode. The empty payload is written as zero bytes.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.is_empty() {
            writer.flush()?;
            return Ok(());
        }
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a payload written by [`write_to`](Self::write_to). A source with
    /// no bytes at all is the empty payload.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        if data.is_empty() {
            return Ok(ContainerPayload::empty());
        }
        Ok(bincode::deserialize(&data)?)
    }

    /// Size of the serialized form in bytes.
    pub fn serialized_size(&self) -> Result<u64> {
        if self.is_empty() {
            return Ok(0);
        }
        Ok(bincode::serialized_size(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HuffmanError;

    fn sample() -> ContainerPayload {
        ContainerPayload {
            codes: [('a', "0".to_string()), ('b', "1".to_string())]
                .into_iter()
                .collect(),
            bit_len: 3,
            bits: vec![0b0100_0000],
        }
    }

    #[test]
    fn empty_payload_writes_nothing() {
        let mut out = Vec::new();
        ContainerPayload::empty().write_to(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(ContainerPayload::empty().serialized_size().unwrap(), 0);
    }

    #[test]
    fn zero_bytes_read_back_as_empty() {
        let payload = ContainerPayload::read_from(&[][..]).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn survives_write_and_read() {
        let payload = sample();
        let mut out = Vec::new();
        payload.write_to(&mut out).unwrap();
        assert!(!out.is_empty());
        assert_eq!(out.len() as u64, payload.serialized_size().unwrap());
        assert_eq!(ContainerPayload::read_from(out.as_slice()).unwrap(), payload);
    }

    #[test]
    fn garbage_bytes_are_a_container_error() {
        let result = ContainerPayload::read_from(&[0xff, 0xff, 0xff][..]);
        assert!(matches!(result, Err(HuffmanError::Container(_))));
    }
}
