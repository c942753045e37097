use crate::{Error, Result, EMPTY_LIST_CODE, EMPTY_STRING_CODE};
use bytes::{Buf, BufMut};

/// The header of an RLP item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// True if list, false otherwise.
    pub list: bool,
    /// Length of the payload in bytes.
    pub payload_length: usize,
}

impl Header {
    /// Encodes the header into the `out` buffer.
    pub fn encode(&self, out: &mut dyn BufMut) {
        if self.payload_length < 56 {
            let code = if self.list { EMPTY_LIST_CODE } else { EMPTY_STRING_CODE };
            out.put_u8(code + self.payload_length as u8);
        } else {
            let be = self.payload_length.to_be_bytes();
            let be = &be[(self.payload_length.leading_zeros() / 8) as usize..];
            let code = if self.list { 0xF7 } else { 0xB7 };
            out.put_u8(code + be.len() as u8);
            out.put_slice(be);
        }
    }

    /// Returns the length of the encoded header.
    #[inline]
    pub const fn length(&self) -> usize {
        crate::length_of_length(self.payload_length)
    }

    /// Returns the total length of the encoded header and payload.
    #[inline]
    pub const fn length_with_payload(&self) -> usize {
        self.length() + self.payload_length
    }

    /// Decodes an RLP header from the given buffer, advancing it past the
    /// consumed bytes.
    ///
    /// A single byte below [`EMPTY_STRING_CODE`] is its own payload; in that
    /// case the buffer is not advanced, and the returned header reports a
    /// one-byte string payload.
    ///
    /// Rejects every encoding that is not the shortest possible form.
    pub fn decode(buf: &mut &[u8]) -> Result<Self> {
        let payload_length;
        let mut list = false;
        match *buf.first().ok_or(Error::InputTooShort)? {
            0x00..=0x7F => payload_length = 1,
            b @ EMPTY_STRING_CODE..=0xB7 => {
                buf.advance(1);
                payload_length = (b - EMPTY_STRING_CODE) as usize;
                if payload_length == 1
                    && *buf.first().ok_or(Error::InputTooShort)? < EMPTY_STRING_CODE
                {
                    return Err(Error::NonCanonicalSingleByte);
                }
            }
            b @ 0xB8..=0xBF => {
                buf.advance(1);
                payload_length = decode_length(buf, (b - 0xB7) as usize)?;
            }
            b @ EMPTY_LIST_CODE..=0xF7 => {
                buf.advance(1);
                list = true;
                payload_length = (b - EMPTY_LIST_CODE) as usize;
            }
            b => {
                buf.advance(1);
                list = true;
                payload_length = decode_length(buf, (b - 0xF7) as usize)?;
            }
        }

        if buf.len() < payload_length {
            return Err(Error::InputTooShort);
        }

        Ok(Self { list, payload_length })
    }

    /// Decodes the next item's header and returns its payload, advancing the
    /// buffer past both. Errors if the item is not of the expected kind.
    pub fn decode_bytes<'a>(buf: &mut &'a [u8], is_list: bool) -> Result<&'a [u8]> {
        let Self { list, payload_length } = Self::decode(buf)?;
        if list != is_list {
            return Err(if is_list { Error::UnexpectedString } else { Error::UnexpectedList });
        }
        if buf.len() < payload_length {
            return Err(Error::InputTooShort);
        }
        let (payload, rest) = buf.split_at(payload_length);
        *buf = rest;
        Ok(payload)
    }
}

/// Reads the explicit long-form length. The length must itself be minimal:
/// no leading zero byte, and a value that would have fit the short form is
/// rejected.
fn decode_length(buf: &mut &[u8], length_of_length: usize) -> Result<usize> {
    if buf.len() < length_of_length {
        return Err(Error::InputTooShort);
    }
    if buf[0] == 0 {
        return Err(Error::LeadingZero);
    }
    let mut length = 0u64;
    for &byte in &buf[..length_of_length] {
        length = (length << 8) | u64::from(byte);
    }
    buf.advance(length_of_length);
    if length < 56 {
        return Err(Error::NonCanonicalSize);
    }
    usize::try_from(length).map_err(|_| Error::Overflow)
}
