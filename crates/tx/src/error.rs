use thiserror::Error as ThisError;

/// Transaction layer result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by transaction building and signing.
///
/// Every failure is reported synchronously to the caller and nothing is
/// retried: each variant indicates either a broken caller-supplied invariant
/// or an unavailable cryptographic capability.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The destination did not decode to a 20 byte address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Key material that does not parse to a valid curve point or scalar.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The external signer failed. Propagated verbatim, never retried.
    #[error("signing failed: {0}")]
    Signing(String),

    /// `sign` was invoked on a transaction that already carries a signature.
    #[error("transaction is already signed")]
    AlreadySigned,

    /// The operation is only defined for signed transactions.
    #[error("transaction is not signed")]
    NotSigned,
}
