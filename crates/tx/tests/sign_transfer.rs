//! End-to-end test of the build, sign, encode pipeline against a
//! transaction that was accepted on the Ropsten network.

use ethkey_tx::{chain, hash::keccak256, TransactionBuilder, TxDefaults, Wallet};
use hex_literal::hex;

const FROM_KEY: &str = "d20486c9ab8fdfff4d4645563b9ef617d7c69e23d3ded425bf1391acb93b6696";
const TO: &str = "0x718863e4fFC6D9CC4c40ba6ABE6EE5A2ec5a395c";

#[test]
fn ropsten_transfer_end_to_end() {
    let from = Wallet::from_private_key(FROM_KEY).unwrap();
    let to = Wallet::from_address(TO).unwrap();

    let defaults = TxDefaults { chain_id: chain::ROPSTEN, ..TxDefaults::default() };
    let mut tx = TransactionBuilder::new(defaults)
        .build(&to.address().to_checksum(), 1_000_000_000_000_000_000)
        .unwrap();

    assert_eq!(
        tx.encoded(),
        hex!(
            "ec8085012a05f20082520894718863e4ffc6d9cc4c40ba6abe6ee5a2ec5a395c"
            "880de0b6b3a764000080038080"
        )
    );

    tx.sign(from.signer().unwrap()).unwrap();

    let raw = tx.encoded();
    assert_eq!(
        raw,
        hex!(
            "f86c8085012a05f20082520894718863e4ffc6d9cc4c40ba6abe6ee5a2ec5a39"
            "5c880de0b6b3a7640000802aa0ad1c2dba8fe9737ca996404d38f1579adb949c"
            "4fe81115d53c3cad0753015a9ba028fe692859afa6fa72fbcd687af96c366fc3"
            "1a7e0ac2a6ab61336ae10f3adf7c"
        )[..]
    );

    // https://ropsten.etherscan.io/tx/0x8d22dd92542c47053d095a4e3509523da035c978f507b4303751bab859518f99
    assert_eq!(
        tx.hash().unwrap(),
        hex!("8d22dd92542c47053d095a4e3509523da035c978f507b4303751bab859518f99")
    );

    // the id is the keccak of the wire bytes
    assert_eq!(tx.hash().unwrap(), keccak256(raw));
}

#[test]
fn fresh_wallet_signs_its_own_transfers() {
    let from = Wallet::generate();
    let mut tx = TransactionBuilder::new(TxDefaults::default())
        .nonce(1)
        .build(TO, 42)
        .unwrap();

    tx.sign(from.signer().unwrap()).unwrap();

    let sig = tx.signature().unwrap();
    let expected = [chain::MAINNET * 2 + 35, chain::MAINNET * 2 + 36];
    assert!(expected.contains(&sig.v()));
    assert!(tx.hash().is_ok());
}
