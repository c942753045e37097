use crate::{hash::keccak256, Address, Error, Result};
use k256::{
    ecdsa::{RecoveryId, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use rand_core::OsRng;
use zeroize::Zeroizing;

/// A recoverable ECDSA signature over the secp256k1 curve.
///
/// `r` and `s` are big-endian curve scalars. `recovery_id` identifies which
/// of the two candidate public keys produced the signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// The `r` scalar.
    pub r: [u8; 32],
    /// The `s` scalar.
    pub s: [u8; 32],
    /// The recovery discriminant, 0 or 1.
    pub recovery_id: u8,
}

/// The capability to sign 32 byte digests.
///
/// Implementations must use deterministic (RFC 6979) or cryptographically
/// sound nonce generation: a digest must never be signed twice with different
/// randomness, so callers surface failures verbatim instead of retrying.
pub trait Signer {
    /// Signs the given digest.
    fn sign_digest(&self, digest: &[u8; 32]) -> Result<RecoverableSignature>;
}

/// An in-process [`Signer`] backed by a secp256k1 private key.
///
/// Signatures are deterministic per RFC 6979 with low-s normalization. The
/// wrapped key is zeroed when the signer is dropped.
pub struct LocalSigner {
    key: SigningKey,
}

impl LocalSigner {
    /// Creates a signer from a raw 32 byte private key.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self { key })
    }

    /// Creates a signer from a hex encoded private key, with or without a
    /// `0x` prefix. The intermediate buffer is zeroed.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = Zeroizing::new(hex::decode(digits).map_err(|e| Error::InvalidKey(e.to_string()))?);
        let bytes: &[u8; 32] = raw
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidKey(format!("expected 32 bytes, got {}", raw.len())))?;
        Self::from_bytes(bytes)
    }

    /// Generates a signer with a fresh random key from the system RNG.
    pub fn random() -> Self {
        Self { key: SigningKey::random(&mut OsRng) }
    }

    /// The raw private key bytes. Handle with care.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.key.to_bytes().into())
    }

    /// The uncompressed public key without the SEC1 tag byte.
    pub fn public_key(&self) -> [u8; 64] {
        uncompressed_point(self.key.verifying_key())
    }

    /// The account address: the last 20 bytes of the Keccak-256 hash of the
    /// uncompressed public key.
    pub fn address(&self) -> Address {
        address_of(self.key.verifying_key())
    }
}

impl Signer for LocalSigner {
    fn sign_digest(&self, digest: &[u8; 32]) -> Result<RecoverableSignature> {
        let (sig, recovery_id): (_, RecoveryId) = self
            .key
            .sign_prehash_recoverable(digest)
            .map_err(|e| Error::Signing(e.to_string()))?;

        Ok(RecoverableSignature {
            r: sig.r().to_bytes().into(),
            s: sig.s().to_bytes().into(),
            recovery_id: recovery_id.to_byte(),
        })
    }
}

pub(crate) fn uncompressed_point(key: &VerifyingKey) -> [u8; 64] {
    let point = key.to_encoded_point(false);
    let mut out = [0u8; 64];
    // skip the 0x04 tag
    out.copy_from_slice(&point.as_bytes()[1..]);
    out
}

pub(crate) fn address_of(key: &VerifyingKey) -> Address {
    let digest = keccak256(uncompressed_point(key));
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..]);
    Address::new(out)
}
