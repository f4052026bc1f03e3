// wallet-core/src/chains/mod.rs
//
// Chain-specific address, encoding and signing logic

pub mod cosmos;
