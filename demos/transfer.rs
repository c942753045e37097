use ethkey_tx::{chain, Error, TransactionBuilder, TxDefaults, Wallet};

fn main() -> Result<(), Error> {
    let from = Wallet::generate();
    let to = Wallet::from_address("0x718863e4fFC6D9CC4c40ba6ABE6EE5A2ec5a395c")?;

    println!("from: {}", from.address());
    println!("to:   {}", to.address());

    let defaults = TxDefaults { chain_id: chain::ROPSTEN, ..TxDefaults::default() };
    let mut tx = TransactionBuilder::new(defaults)
        .nonce(0)
        .build(&to.address().to_checksum(), 1_000_000_000_000_000_000)?;

    println!("preimage: 0x{}", hex::encode(tx.encoded_unsigned()));

    tx.sign(from.signer().expect("generated wallets hold a key"))?;

    println!("raw:  0x{}", hex::encode(tx.encoded()));
    println!("txid: 0x{}", hex::encode(tx.hash()?));
    Ok(())
}
