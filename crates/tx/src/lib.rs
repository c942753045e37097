//! Legacy Ethereum transaction building and signing.
//!
//! This crate assembles the seven-field legacy transaction, RLP-encodes the
//! EIP-155 signing preimage via [`ethkey_rlp`], signs the Keccak-256 digest
//! through a [`Signer`] capability, and produces the signed wire encoding and
//! transaction id.
//!
//! ```
//! use ethkey_tx::{chain, TransactionBuilder, TxDefaults, Wallet};
//!
//! # fn main() -> Result<(), ethkey_tx::Error> {
//! let from = Wallet::generate();
//!
//! let defaults = TxDefaults { chain_id: chain::MAINNET, ..TxDefaults::default() };
//! let mut tx = TransactionBuilder::new(defaults)
//!     .nonce(0)
//!     .build("0x718863e4fFC6D9CC4c40ba6ABE6EE5A2ec5a395c", 1_000_000_000_000_000_000)?;
//!
//! tx.sign(from.signer().unwrap())?;
//! let raw = tx.encoded();
//! let id = tx.hash()?;
//! # let _ = (raw, id);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod address;
pub use address::Address;

mod builder;
pub use builder::{TransactionBuilder, TxDefaults};

mod error;
pub use error::{Error, Result};

pub mod hash;

mod signer;
pub use signer::{LocalSigner, RecoverableSignature, Signer};

mod transaction;
pub use transaction::{Transaction, TxSignature};

mod wallet;
pub use wallet::Wallet;

/// Well known chain ids.
pub mod chain {
    /// Ethereum mainnet.
    pub const MAINNET: u64 = 1;
    /// Morden, the retired first public testnet.
    pub const MORDEN: u64 = 2;
    /// Expanse mainnet.
    pub const EXPANSE_MAINNET: u64 = 2;
    /// Ropsten testnet.
    pub const ROPSTEN: u64 = 3;
    /// Rinkeby testnet.
    pub const RINKEBY: u64 = 4;
    /// Rootstock mainnet.
    pub const ROOTSTOCK_MAINNET: u64 = 30;
    /// Rootstock testnet.
    pub const ROOTSTOCK_TESTNET: u64 = 31;
    /// Kovan testnet.
    pub const KOVAN: u64 = 42;
    /// Ethereum Classic mainnet.
    pub const CLASSIC_MAINNET: u64 = 61;
    /// Ethereum Classic testnet.
    pub const CLASSIC_TESTNET: u64 = 62;
    /// Default chain id of a private geth network.
    pub const GETH_PRIVATE_DEFAULT: u64 = 1337;
}
