//! Keccak hashing as used by the Ethereum protocol.
//!
//! Note that these are the original Keccak submissions, not the padded
//! FIPS-202 SHA-3 variants.

use crate::Address;
use ethkey_rlp::{encode_list, Encodable};
use sha3::{Digest, Keccak256, Keccak512};

/// Computes the Keccak-256 hash of the input.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}

/// Computes the Keccak-512 hash of the input.
pub fn keccak512(data: impl AsRef<[u8]>) -> [u8; 64] {
    Keccak512::digest(data.as_ref()).into()
}

/// The address of a contract created by `sender` with account `nonce`:
/// the last 20 bytes of `keccak256(rlp([sender, nonce]))`.
pub fn contract_address(sender: &Address, nonce: u64) -> Address {
    let sender_bytes = sender.as_bytes();
    let items: [&dyn Encodable; 2] = [&sender_bytes, &nonce];
    let mut encoded = Vec::new();
    encode_list::<_, dyn Encodable>(&items, &mut encoded);

    let digest = keccak256(encoded);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..]);
    Address::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keccak256_empty_input() {
        assert_eq!(
            keccak256([]),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn keccak512_empty_input() {
        assert_eq!(
            keccak512([]),
            hex!(
                "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304"
                "c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
            )
        );
    }

    #[test]
    fn contract_addresses() {
        let sender = Address::new(hex!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0"));
        assert_eq!(
            contract_address(&sender, 0).as_bytes(),
            hex!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
        );
        assert_eq!(
            contract_address(&sender, 1).as_bytes(),
            hex!("343c43a37d37dff08ae8c4a11544c718abb4fcf8")
        );
    }
}
