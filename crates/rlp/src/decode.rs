use crate::{Error, Header, Result, EMPTY_STRING_CODE};
use bytes::{Buf, Bytes, BytesMut};

use alloc::{string::String, vec::Vec};

/// A type that can be decoded from an RLP blob.
///
/// Decoding is the exact inverse of [`Encodable`](crate::Encodable): every
/// accepted input re-encodes to itself, and any non-canonical form is
/// rejected.
pub trait Decodable: Sized {
    /// Decodes the blob into the appropriate type, advancing the buffer past
    /// the consumed item.
    fn decode(buf: &mut &[u8]) -> Result<Self>;
}

impl Decodable for bool {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        match u8::decode(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::Custom("invalid bool value, must be 0 or 1")),
        }
    }
}

impl<const N: usize> Decodable for [u8; N] {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let bytes = Header::decode_bytes(buf, false)?;
        if bytes.len() != N {
            return Err(Error::UnexpectedLength);
        }
        let mut arr = [0; N];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }
}

macro_rules! uint_impl {
    ($($t:ty),+ $(,)?) => {$(
        impl Decodable for $t {
            #[inline]
            fn decode(buf: &mut &[u8]) -> Result<Self> {
                let first = *buf.first().ok_or(Error::InputTooShort)?;
                match first {
                    0 => Err(Error::LeadingZero),
                    0x01..=0x7F => {
                        buf.advance(1);
                        Ok(first as $t)
                    }
                    EMPTY_STRING_CODE => {
                        buf.advance(1);
                        Ok(0)
                    }
                    _ => {
                        let bytes = Header::decode_bytes(buf, false)?;
                        static_left_pad(bytes).map(<$t>::from_be_bytes)
                    }
                }
            }
        }
    )+};
}

uint_impl!(u8, u16, u32, u64, usize, u128);

impl Decodable for Bytes {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        Header::decode_bytes(buf, false).map(Self::copy_from_slice)
    }
}

impl Decodable for BytesMut {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        Header::decode_bytes(buf, false).map(Self::from)
    }
}

impl Decodable for String {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let bytes = Header::decode_bytes(buf, false)?;
        core::str::from_utf8(bytes)
            .map(Into::into)
            .map_err(|_| Error::Custom("invalid utf8 string"))
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let mut payload = Header::decode_bytes(buf, true)?;
        let mut vec = Self::new();
        while !payload.is_empty() {
            vec.push(T::decode(&mut payload)?);
        }
        Ok(vec)
    }
}

impl<T: Decodable> Decodable for alloc::boxed::Box<T> {
    #[inline]
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        T::decode(buf).map(Self::new)
    }
}

/// Decodes the entire input, ensuring no trailing bytes remain.
#[inline]
pub fn decode_exact<T: Decodable>(bytes: impl AsRef<[u8]>) -> Result<T> {
    let mut buf = bytes.as_ref();
    let out = T::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(Error::UnexpectedLength);
    }
    Ok(out)
}

/// Left-pads a slice to a statically known size array.
///
/// Errors if the slice is too long or carries a leading zero byte.
#[inline]
fn static_left_pad<const N: usize>(data: &[u8]) -> Result<[u8; N]> {
    if data.len() > N {
        return Err(Error::Overflow);
    }

    let mut v = [0; N];

    if data.is_empty() {
        return Ok(v);
    }

    if data[0] == 0 {
        return Err(Error::LeadingZero);
    }

    v[N - data.len()..].copy_from_slice(data);
    Ok(v)
}
