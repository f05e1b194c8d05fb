//! Re-export of the XDR type tree used throughout this crate.
//!
//! All ledger, transaction and Soroban XDR types come straight from
//! `stellar-xdr`. This module exists so the rest of the crate can write
//! `crate::xdr::Foo` without caring which `stellar-xdr` revision backs it;
//! switching the `next` feature on swaps the whole tree in one place.
#[cfg(not(feature = "next"))]
pub use stellar_xdr::curr::*;

#[cfg(feature = "next")]
pub use stellar_xdr::next::*;
