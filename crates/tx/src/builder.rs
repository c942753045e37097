use crate::{transaction::minimal_be_bytes, Address, Result, Transaction};
use log::debug;

/// Gas and chain parameters applied when the caller does not set them.
///
/// Held by value and passed to the builder explicitly; there is no
/// process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxDefaults {
    /// Gas price in wei.
    pub gas_price: u128,
    /// Gas limit in units of gas.
    pub gas_limit: u64,
    /// EIP-155 chain id; zero selects the legacy format.
    pub chain_id: u64,
}

impl Default for TxDefaults {
    /// 5 Gwei, the plain-transfer gas limit, mainnet.
    fn default() -> Self {
        Self { gas_price: 5_000_000_000, gas_limit: 21_000, chain_id: crate::chain::MAINNET }
    }
}

/// Assembles well-formed unsigned [`Transaction`]s.
///
/// Every numeric input is stored as its minimal big-endian encoding, so a
/// zero nonce or value becomes the empty byte string on the wire.
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    defaults: TxDefaults,
    nonce: u64,
    data: Vec<u8>,
    gas_price: Option<u128>,
    gas_limit: Option<u64>,
    chain_id: Option<u64>,
}

impl TransactionBuilder {
    /// Creates a builder over the given defaults.
    pub fn new(defaults: TxDefaults) -> Self {
        Self { defaults, nonce: 0, data: Vec::new(), gas_price: None, gas_limit: None, chain_id: None }
    }

    /// Sets the account nonce. Defaults to zero.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the call data. Defaults to empty.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Overrides the default gas price, in wei.
    pub fn gas_price(mut self, wei: u128) -> Self {
        self.gas_price = Some(wei);
        self
    }

    /// Overrides the default gas limit.
    pub fn gas_limit(mut self, gas: u64) -> Self {
        self.gas_limit = Some(gas);
        self
    }

    /// Overrides the default chain id.
    pub fn chain_id(mut self, id: u64) -> Self {
        self.chain_id = Some(id);
        self
    }

    /// Builds an unsigned transfer of `value_wei` to `to`.
    ///
    /// `to` is a hex address, with or without a `0x` prefix; it must decode
    /// to exactly 20 bytes or the build fails with
    /// [`Error::InvalidAddress`](crate::Error::InvalidAddress). Byte-level
    /// callers can construct via [`Transaction::from_raw`] instead.
    pub fn build(self, to: &str, value_wei: u128) -> Result<Transaction> {
        let to: Address = to.parse()?;
        let gas_price = self.gas_price.unwrap_or(self.defaults.gas_price);
        let gas_limit = self.gas_limit.unwrap_or(self.defaults.gas_limit);
        let chain_id = self.chain_id.unwrap_or(self.defaults.chain_id);

        debug!(
            "building transfer to {to}, value={value_wei}, nonce={}, chain_id={chain_id}",
            self.nonce
        );

        Transaction::from_raw(
            &minimal_be_bytes(self.nonce.into()),
            &minimal_be_bytes(gas_price),
            &minimal_be_bytes(gas_limit.into()),
            to.as_bytes(),
            &minimal_be_bytes(value_wei),
            &self.data,
            chain_id,
        )
    }
}
