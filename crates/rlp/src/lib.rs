//! Recursive Length Prefix (RLP) serialization.
//!
//! RLP is the canonical binary encoding of the Ethereum protocol. It encodes
//! exactly two kinds of item: byte strings, and lists of items, nested to any
//! depth. Interpreting the bytes (integers, addresses, ...) is left to higher
//! layers; the convention used here and by the protocol is minimal big-endian
//! with no leading zero byte, the value zero being the empty string.
//!
//! Encoding uses three regimes, selected by payload size:
//!
//! - a single byte below [`EMPTY_STRING_CODE`] is its own encoding;
//! - payloads shorter than 56 bytes get a one-byte header carrying the length;
//! - longer payloads get a header carrying the length of the length, then the
//!   length itself in minimal big-endian form.
//!
//! The 55/56 boundary and the eight-byte cap on the length-of-length are
//! protocol constants; decoding rejects any input that does not use the
//! shortest possible form.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod decode;
pub use decode::{decode_exact, Decodable};

mod encode;
pub use encode::{encode, encode_list, length_of_length, list_length, Encodable};

mod error;
pub use error::{Error, Result};

mod header;
pub use header::Header;

#[doc(no_inline)]
pub use bytes::{self, Buf, BufMut, Bytes, BytesMut};

/// RLP prefix byte for a 0-length string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// RLP prefix byte for a 0-length list.
pub const EMPTY_LIST_CODE: u8 = 0xC0;
