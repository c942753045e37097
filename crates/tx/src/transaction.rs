use crate::{hash::keccak256, Address, Error, Result, Signer};
use bytes::Bytes;
use ethkey_rlp::{encode_list, Encodable};
use log::debug;

/// Recovery value base for legacy (pre-EIP-155) signatures.
const LOWER_REAL_V: u64 = 27;

/// EIP-155 offset: `v = chain_id * 2 + 35 + recovery_id`.
const CHAIN_ID_INC: u64 = 35;

const EMPTY: &[u8] = &[];

/// The `v`, `r`, `s` parts of an attached transaction signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxSignature {
    v: u64,
    r: [u8; 32],
    s: [u8; 32],
}

impl TxSignature {
    /// The recovery value, EIP-155 adjusted when the chain id is non-zero.
    pub fn v(&self) -> u64 {
        self.v
    }

    /// The `r` scalar, big-endian.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The `s` scalar, big-endian.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }
}

/// A legacy Ethereum transaction.
///
/// Fields are held as minimal big-endian byte strings, the form they take on
/// the wire. A transaction starts unsigned, is signed exactly once, and is
/// immutable from then on; re-signing is rejected.
#[derive(Clone, Debug)]
pub struct Transaction {
    nonce: Bytes,
    gas_price: Bytes,
    gas_limit: Bytes,
    to: Bytes,
    value: Bytes,
    data: Bytes,
    chain_id: u64,
    signature: Option<TxSignature>,
}

impl Transaction {
    /// Creates an unsigned transaction from raw field encodings.
    ///
    /// `to` must be exactly 20 bytes, or empty for contract creation. The
    /// integer-valued fields are normalized to minimal form: leading zero
    /// bytes are stripped, so a caller-supplied `[0x00]` nonce becomes the
    /// empty string.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        nonce: &[u8],
        gas_price: &[u8],
        gas_limit: &[u8],
        to: &[u8],
        value: &[u8],
        data: &[u8],
        chain_id: u64,
    ) -> Result<Self> {
        if !to.is_empty() && to.len() != Address::LEN {
            return Err(Error::InvalidAddress(format!(
                "expected {} bytes, got {}",
                Address::LEN,
                to.len()
            )));
        }

        Ok(Self {
            nonce: minimal(nonce),
            gas_price: minimal(gas_price),
            gas_limit: minimal(gas_limit),
            to: Bytes::copy_from_slice(to),
            value: minimal(value),
            data: Bytes::copy_from_slice(data),
            chain_id,
            signature: None,
        })
    }

    /// The account nonce, minimal big-endian.
    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    /// The gas price in wei, minimal big-endian.
    pub fn gas_price(&self) -> &[u8] {
        &self.gas_price
    }

    /// The gas limit, minimal big-endian.
    pub fn gas_limit(&self) -> &[u8] {
        &self.gas_limit
    }

    /// The destination address, or empty for contract creation.
    pub fn to(&self) -> &[u8] {
        &self.to
    }

    /// The transferred value in wei, minimal big-endian.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// The call data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The chain id; zero selects the legacy, replay-prone format.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The attached signature, if any.
    pub fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    /// Whether a signature is attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// The RLP preimage that is hashed for signing.
    ///
    /// With a non-zero chain id this is the nine-item EIP-155 list
    /// `[nonce, gasPrice, gasLimit, to, value, data, chain_id, "", ""]`;
    /// with chain id zero it is the six-field legacy list.
    pub fn encoded_unsigned(&self) -> Vec<u8> {
        self.encode_fields(None)
    }

    /// The canonical encoding: the signed wire format once a signature is
    /// attached, the signing preimage before that.
    pub fn encoded(&self) -> Vec<u8> {
        self.encode_fields(self.signature.as_ref())
    }

    /// The Keccak-256 digest of the unsigned preimage; the value handed to
    /// the signer.
    pub fn sighash(&self) -> [u8; 32] {
        keccak256(self.encoded_unsigned())
    }

    /// Signs the transaction, attaching `v`, `r` and `s`.
    ///
    /// With a non-zero chain id the recovery value is bound to the chain per
    /// EIP-155: `v = chain_id * 2 + 35 + recovery_id`. Signer failures are
    /// surfaced verbatim and never retried. Errors with
    /// [`Error::AlreadySigned`] if a signature is already attached.
    pub fn sign<S: Signer + ?Sized>(&mut self, signer: &S) -> Result<()> {
        if self.signature.is_some() {
            return Err(Error::AlreadySigned);
        }

        let digest = self.sighash();
        let sig = signer.sign_digest(&digest)?;

        let v = if self.chain_id > 0 {
            self.chain_id * 2 + CHAIN_ID_INC + u64::from(sig.recovery_id)
        } else {
            LOWER_REAL_V + u64::from(sig.recovery_id)
        };

        debug!("attached signature, chain_id={}, v={v}", self.chain_id);
        self.signature = Some(TxSignature { v, r: sig.r, s: sig.s });
        Ok(())
    }

    /// The transaction id: the Keccak-256 hash of the signed encoding.
    ///
    /// Only defined for signed transactions; errors with
    /// [`Error::NotSigned`] otherwise.
    pub fn hash(&self) -> Result<[u8; 32]> {
        if self.signature.is_none() {
            return Err(Error::NotSigned);
        }
        Ok(keccak256(self.encoded()))
    }

    fn encode_fields(&self, signature: Option<&TxSignature>) -> Vec<u8> {
        let mut out = Vec::new();
        match signature {
            Some(sig) => {
                let r = strip_leading_zeros(&sig.r);
                let s = strip_leading_zeros(&sig.s);
                let items: [&dyn Encodable; 9] = [
                    &self.nonce,
                    &self.gas_price,
                    &self.gas_limit,
                    &self.to,
                    &self.value,
                    &self.data,
                    &sig.v,
                    &r,
                    &s,
                ];
                encode_list::<_, dyn Encodable>(&items, &mut out);
            }
            None if self.chain_id > 0 => {
                let items: [&dyn Encodable; 9] = [
                    &self.nonce,
                    &self.gas_price,
                    &self.gas_limit,
                    &self.to,
                    &self.value,
                    &self.data,
                    &self.chain_id,
                    &EMPTY,
                    &EMPTY,
                ];
                encode_list::<_, dyn Encodable>(&items, &mut out);
            }
            None => {
                let items: [&dyn Encodable; 6] = [
                    &self.nonce,
                    &self.gas_price,
                    &self.gas_limit,
                    &self.to,
                    &self.value,
                    &self.data,
                ];
                encode_list::<_, dyn Encodable>(&items, &mut out);
            }
        }
        out
    }
}

/// Minimal big-endian encoding of an unsigned integer; zero is empty.
pub(crate) fn minimal_be_bytes(x: u128) -> Bytes {
    let be = x.to_be_bytes();
    Bytes::copy_from_slice(&be[(x.leading_zeros() / 8) as usize..])
}

fn minimal(bytes: &[u8]) -> Bytes {
    Bytes::copy_from_slice(strip_leading_zeros(bytes))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
