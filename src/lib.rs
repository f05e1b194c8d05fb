#![allow(unused)]

pub mod account;
pub mod address;
pub mod asset;
pub mod assembled_transaction;
pub mod auth;
pub mod claimant;
pub mod contract;
pub mod contract_client;
pub mod contract_spec;
pub mod error;
pub mod get_liquidity_pool;
pub mod hashing;
pub mod keypair;
pub mod liquidity_pool_asset;
pub mod liquidity_pool_id;
pub mod memo;
pub mod muxed_account;
pub mod network;
pub mod op_list;
pub mod operation;
pub mod rpc;
pub mod scval;
pub mod signer_key;
pub mod signing;
pub mod soroban;
pub mod soroban_data_builder;
pub mod transaction;
pub mod transaction_builder;
pub mod utils;
pub mod xdr;
