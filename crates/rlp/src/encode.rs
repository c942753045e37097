use crate::{Header, EMPTY_STRING_CODE};
use bytes::{BufMut, Bytes, BytesMut};
use core::borrow::Borrow;

use alloc::{string::String, vec::Vec};

/// A type that can be encoded via RLP.
pub trait Encodable {
    /// Encodes the type into the `out` buffer.
    fn encode(&self, out: &mut dyn BufMut);

    /// Returns the length of the encoding of this type in bytes.
    ///
    /// The default implementation computes this by encoding the type;
    /// implementers should override it with a direct computation when
    /// possible.
    fn length(&self) -> usize {
        let mut out = Vec::new();
        self.encode(&mut out);
        out.len()
    }
}

fn _assert_trait_object(_b: &dyn Encodable) {}

impl Encodable for [u8] {
    #[inline]
    fn length(&self) -> usize {
        let mut len = self.len();
        if len != 1 || self[0] >= EMPTY_STRING_CODE {
            len += length_of_length(len);
        }
        len
    }

    #[inline]
    fn encode(&self, out: &mut dyn BufMut) {
        if self.len() != 1 || self[0] >= EMPTY_STRING_CODE {
            Header { list: false, payload_length: self.len() }.encode(out);
        }
        out.put_slice(self);
    }
}

impl<const N: usize> Encodable for [u8; N] {
    #[inline]
    fn length(&self) -> usize {
        self[..].length()
    }

    #[inline]
    fn encode(&self, out: &mut dyn BufMut) {
        self[..].encode(out);
    }
}

impl Encodable for str {
    #[inline]
    fn length(&self) -> usize {
        self.as_bytes().length()
    }

    #[inline]
    fn encode(&self, out: &mut dyn BufMut) {
        self.as_bytes().encode(out)
    }
}

impl Encodable for bool {
    #[inline]
    fn length(&self) -> usize {
        // a `bool` is always below `EMPTY_STRING_CODE`
        1
    }

    #[inline]
    fn encode(&self, out: &mut dyn BufMut) {
        out.put_u8(if *self { 1 } else { EMPTY_STRING_CODE });
    }
}

macro_rules! uint_impl {
    ($($t:ty),+ $(,)?) => {$(
        impl Encodable for $t {
            #[inline]
            fn length(&self) -> usize {
                let x = *self;
                if x < EMPTY_STRING_CODE as $t {
                    1
                } else {
                    1 + (<$t>::BITS as usize / 8) - (x.leading_zeros() as usize / 8)
                }
            }

            #[inline]
            fn encode(&self, out: &mut dyn BufMut) {
                let x = *self;
                if x == 0 {
                    out.put_u8(EMPTY_STRING_CODE);
                } else if x < EMPTY_STRING_CODE as $t {
                    out.put_u8(x as u8);
                } else {
                    let be = x.to_be_bytes();
                    let be = &be[(x.leading_zeros() / 8) as usize..];
                    out.put_u8(EMPTY_STRING_CODE + be.len() as u8);
                    out.put_slice(be);
                }
            }
        }
    )+};
}

uint_impl!(u8, u16, u32, u64, usize, u128);

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        list_length(self)
    }

    #[inline]
    fn encode(&self, out: &mut dyn BufMut) {
        encode_list(self, out)
    }
}

macro_rules! deref_impl {
    ($([$($gen:tt)*] $t:ty),+ $(,)?) => {$(
        impl<$($gen)*> Encodable for $t {
            #[inline]
            fn length(&self) -> usize {
                (**self).length()
            }

            #[inline]
            fn encode(&self, out: &mut dyn BufMut) {
                (**self).encode(out)
            }
        }
    )+};
}

deref_impl! {
    [] String,
    [] Bytes,
    [] BytesMut,
    [T: ?Sized + Encodable] &T,
    [T: ?Sized + Encodable] &mut T,
    [T: ?Sized + Encodable] alloc::boxed::Box<T>,
}

/// Encode a value into a fresh buffer.
#[inline]
pub fn encode<T: Encodable>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.length());
    value.encode(&mut out);
    out
}

/// Calculate the length of an encoded list.
#[inline]
pub fn list_length<B, T>(list: &[B]) -> usize
where
    B: Borrow<T>,
    T: ?Sized + Encodable,
{
    let payload_length = payload_length(list);
    payload_length + length_of_length(payload_length)
}

/// Encode a list of items, in the given order.
#[inline]
pub fn encode_list<B, T>(values: &[B], out: &mut dyn BufMut)
where
    B: Borrow<T>,
    T: ?Sized + Encodable,
{
    Header { list: true, payload_length: payload_length(values) }.encode(out);
    for value in values {
        value.borrow().encode(out);
    }
}

/// Determine the length in bytes of the length prefix of an RLP item.
#[inline]
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length < 56 {
        1
    } else {
        1 + (usize::BITS as usize / 8) - payload_length.leading_zeros() as usize / 8
    }
}

#[inline]
fn payload_length<B, T>(values: &[B]) -> usize
where
    B: Borrow<T>,
    T: ?Sized + Encodable,
{
    let mut length = 0;
    for value in values {
        length += value.borrow().length();
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn encoded_list<T: Encodable + Clone>(t: &[T]) -> Vec<u8> {
        let mut out1 = Vec::new();
        encode_list(t, &mut out1);

        let v = t.to_vec();
        assert_eq!(out1.len(), v.length());

        let out2 = encode(&v);
        assert_eq!(out1, out2);

        out1
    }

    #[test]
    fn rlp_str() {
        assert_eq!(encode("")[..], hex!("80")[..]);
        assert_eq!(encode("{")[..], hex!("7b")[..]);
        assert_eq!(encode("dog")[..], hex!("83646f67")[..]);
        assert_eq!(encode("test str")[..], hex!("887465737420737472")[..]);
    }

    #[test]
    fn rlp_strings() {
        assert_eq!(encode(hex!(""))[..], hex!("80")[..]);
        assert_eq!(encode(hex!("00"))[..], hex!("00")[..]);
        assert_eq!(encode(hex!("7b"))[..], hex!("7b")[..]);
        assert_eq!(encode(hex!("80"))[..], hex!("8180")[..]);
        assert_eq!(encode(hex!("abba"))[..], hex!("82abba")[..]);
    }

    #[test]
    fn rlp_long_string() {
        // the canonical 56 byte example: shortest input in long form
        let lorem = "Lorem ipsum dolor sit amet, consectetur adipisicing elit";
        let out = encode(lorem);
        assert_eq!(out[..2], hex!("b838")[..]);
        assert_eq!(out[2..], *lorem.as_bytes());

        let kilo = [0xFFu8; 1024];
        let out = encode(&kilo[..]);
        assert_eq!(out[..3], hex!("b90400")[..]);
        assert_eq!(out.len(), 3 + 1024);
    }

    #[test]
    fn rlp_bool() {
        assert_eq!(encode(true), hex!("01"));
        assert_eq!(encode(false), hex!("80"));
    }

    fn c<T, U: From<T>>(
        it: impl IntoIterator<Item = (T, &'static [u8])>,
    ) -> impl Iterator<Item = (U, &'static [u8])> {
        it.into_iter().map(|(k, v)| (k.into(), v))
    }

    fn u8_fixtures() -> impl IntoIterator<Item = (u8, &'static [u8])> {
        vec![
            (0, &hex!("80")[..]),
            (1, &hex!("01")[..]),
            (0x7F, &hex!("7f")[..]),
            (0x80, &hex!("8180")[..]),
        ]
    }

    fn u16_fixtures() -> impl IntoIterator<Item = (u16, &'static [u8])> {
        c(u8_fixtures()).chain(vec![(0x400, &hex!("820400")[..])])
    }

    fn u32_fixtures() -> impl IntoIterator<Item = (u32, &'static [u8])> {
        c(u16_fixtures())
            .chain(vec![(0xFFCCB5, &hex!("83ffccb5")[..]), (0xFFCCB5DD, &hex!("84ffccb5dd")[..])])
    }

    fn u64_fixtures() -> impl IntoIterator<Item = (u64, &'static [u8])> {
        c(u32_fixtures()).chain(vec![
            (0xFFCCB5DDFF, &hex!("85ffccb5ddff")[..]),
            (0xFFCCB5DDFFEE1483, &hex!("88ffccb5ddffee1483")[..]),
        ])
    }

    fn u128_fixtures() -> impl IntoIterator<Item = (u128, &'static [u8])> {
        c(u64_fixtures()).chain(vec![(
            0x10203E405060708090A0B0C0D0E0F2,
            &hex!("8f10203e405060708090a0b0c0d0e0f2")[..],
        )])
    }

    macro_rules! uint_rlp_test {
        ($fixtures:expr) => {
            for (input, output) in $fixtures {
                assert_eq!(encode(input), output, "encode({input})");
                assert_eq!(input.length(), output.len(), "length({input})");
            }
        };
    }

    #[test]
    fn rlp_uints() {
        uint_rlp_test!(u8_fixtures());
        uint_rlp_test!(u16_fixtures());
        uint_rlp_test!(u32_fixtures());
        uint_rlp_test!(u64_fixtures());
        uint_rlp_test!(u128_fixtures());
    }

    #[test]
    fn rlp_list() {
        assert_eq!(encoded_list::<u64>(&[]), &hex!("c0")[..]);
        assert_eq!(encoded_list::<u8>(&[0x00u8]), &hex!("c180")[..]);
        assert_eq!(encoded_list(&[0xFFCCB5_u64, 0xFFC0B5_u64]), &hex!("c883ffccb583ffc0b5")[..]);
        assert_eq!(encoded_list(&["cat", "dog"]), &hex!("c88363617483646f67")[..]);
    }

    #[test]
    fn rlp_list_order_matters() {
        assert_ne!(encoded_list(&["cat", "dog"]), encoded_list(&["dog", "cat"]));
    }

    #[test]
    fn rlp_nested_list() {
        // [ [], [[]], [ [], [[]] ] ]
        let empty: [&dyn Encodable; 0] = [];
        let mut inner1 = Vec::new();
        encode_list::<_, dyn Encodable>(&empty, &mut inner1);

        let mut inner2 = Vec::new();
        Header { list: true, payload_length: inner1.len() }.encode(&mut inner2);
        inner2.extend_from_slice(&inner1);

        let mut inner3 = Vec::new();
        Header { list: true, payload_length: inner1.len() + inner2.len() }.encode(&mut inner3);
        inner3.extend_from_slice(&inner1);
        inner3.extend_from_slice(&inner2);

        let mut out = Vec::new();
        let len = inner1.len() + inner2.len() + inner3.len();
        Header { list: true, payload_length: len }.encode(&mut out);
        out.extend_from_slice(&inner1);
        out.extend_from_slice(&inner2);
        out.extend_from_slice(&inner3);

        assert_eq!(out, hex!("c7c0c1c0c3c0c1c0"));
    }

    #[test]
    fn rlp_long_list() {
        // 60 single-byte items: payload fits short items but needs a long list header
        let items = vec![0x01u8; 60];
        let out = encoded_list(&items);
        assert_eq!(out[..2], hex!("f83c")[..]);
        assert_eq!(out.len(), 2 + 60);
    }

    #[test]
    fn rlp_dyn_heterogeneous_list() {
        let nonce = 0u64;
        let payload = hex!("abba");
        let items: [&dyn Encodable; 3] = [&nonce, &&payload[..], &"cat"];
        let mut out = Vec::new();
        encode_list::<_, dyn Encodable>(&items, &mut out);
        assert_eq!(out, hex!("c88082abba83636174"));
        assert_eq!(list_length::<_, dyn Encodable>(&items), out.len());
    }
}
