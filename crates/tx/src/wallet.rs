use crate::{
    signer::{address_of, uncompressed_point},
    Address, Error, LocalSigner, Result,
};
use k256::ecdsa::VerifyingKey;

/// An account reference: an address, and optionally the public key and the
/// key material needed to sign.
///
/// Watch-only wallets (loaded from an address or a public key) can serve as
/// transfer destinations but cannot sign.
pub struct Wallet {
    address: Address,
    public_key: Option<[u8; 64]>,
    signer: Option<LocalSigner>,
}

impl Wallet {
    /// Generates a wallet with a fresh random key.
    pub fn generate() -> Self {
        let signer = LocalSigner::random();
        Self { address: signer.address(), public_key: Some(signer.public_key()), signer: Some(signer) }
    }

    /// Loads a wallet from a hex encoded private key, deriving the public
    /// key and address.
    pub fn from_private_key(s: &str) -> Result<Self> {
        let signer = LocalSigner::from_hex(s)?;
        Ok(Self {
            address: signer.address(),
            public_key: Some(signer.public_key()),
            signer: Some(signer),
        })
    }

    /// Loads a watch-only wallet from a hex encoded uncompressed SEC1 public
    /// key (the 130 character `04...` form).
    pub fn from_public_key(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let key = VerifyingKey::from_sec1_bytes(&raw).map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self {
            address: address_of(&key),
            public_key: Some(uncompressed_point(&key)),
            signer: None,
        })
    }

    /// Loads a watch-only wallet holding just an address.
    pub fn from_address(s: &str) -> Result<Self> {
        Ok(Self { address: s.parse()?, public_key: None, signer: None })
    }

    /// The account address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The uncompressed public key without the SEC1 tag byte, if known.
    pub fn public_key(&self) -> Option<&[u8; 64]> {
        self.public_key.as_ref()
    }

    /// The signer, if the wallet holds a private key.
    pub fn signer(&self) -> Option<&LocalSigner> {
        self.signer.as_ref()
    }
}
