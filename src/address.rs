//! Strongly typed wrapper around the two address flavors Soroban accepts:
//! classic Ed25519 accounts and contract addresses.
use stellar_strkey::{ed25519::PublicKey as StrkeyPublicKey, Contract as StrkeyContract, Strkey};

use crate::xdr::{AccountId, Hash, PublicKey, ScAddress, ScVal, Uint256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Account,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    address_type: AddressType,
    key: [u8; 32],
}

pub trait AddressTrait {
    /// Creates a new Address instance from a string representation.
    fn new(address: &str) -> Result<Self, String>
    where
        Self: Sized;

    /// Parses a string and returns an Address object.
    fn from_string(address: &str) -> Result<Self, String>
    where
        Self: Sized;

    /// Creates a new account Address object from a buffer of raw bytes.
    fn account(buffer: [u8; 32]) -> Self
    where
        Self: Sized;

    /// Creates a new contract Address object from a buffer of raw bytes.
    fn contract(buffer: [u8; 32]) -> Self
    where
        Self: Sized;

    /// Convert from an xdr.ScVal type.
    fn from_sc_val(sc_val: &ScVal) -> Result<Self, String>
    where
        Self: Sized;

    /// Convert from an xdr.ScAddress type.
    fn from_sc_address(sc_address: &ScAddress) -> Result<Self, String>
    where
        Self: Sized;

    /// Serialize an address to string.
    fn to_string(&self) -> String;

    /// Convert the Address to an xdr.ScVal type.
    fn to_sc_val(&self) -> Result<ScVal, String>;

    /// Convert the Address to an xdr.ScAddress type.
    fn to_sc_address(&self) -> Result<ScAddress, String>;

    /// Return the raw public key or contract hash bytes for this address.
    fn to_buffer(&self) -> [u8; 32];
}

impl AddressTrait for Address {
    fn new(address: &str) -> Result<Self, String> {
        match Strkey::from_string(address).map_err(|e| e.to_string())? {
            Strkey::PublicKeyEd25519(public_key) => Ok(Self {
                address_type: AddressType::Account,
                key: public_key.0,
            }),
            Strkey::Contract(contract) => Ok(Self {
                address_type: AddressType::Contract,
                key: contract.0,
            }),
            Strkey::MuxedAccountEd25519(_) => Err("Unsupported address type MuxedAccount".into()),
            _ => Err("Unsupported address type".into()),
        }
    }

    fn from_string(address: &str) -> Result<Self, String> {
        Self::new(address)
    }

    fn account(buffer: [u8; 32]) -> Self {
        Self {
            address_type: AddressType::Account,
            key: buffer,
        }
    }

    fn contract(buffer: [u8; 32]) -> Self {
        Self {
            address_type: AddressType::Contract,
            key: buffer,
        }
    }

    fn from_sc_val(sc_val: &ScVal) -> Result<Self, String> {
        match sc_val {
            ScVal::Address(sc_address) => Self::from_sc_address(sc_address),
            _ => Err("ScVal is not an address".into()),
        }
    }

    fn from_sc_address(sc_address: &ScAddress) -> Result<Self, String> {
        match sc_address {
            ScAddress::Account(account_id) => {
                let PublicKey::PublicKeyTypeEd25519(Uint256(bytes)) = &account_id.0;
                Ok(Self::account(*bytes))
            }
            ScAddress::Contract(Hash(bytes)) => Ok(Self::contract(*bytes)),
            _ => Err("Unsupported ScAddress variant".into()),
        }
    }

    fn to_string(&self) -> String {
        match self.address_type {
            AddressType::Account => {
                Strkey::PublicKeyEd25519(StrkeyPublicKey(self.key)).to_string()
            }
            AddressType::Contract => Strkey::Contract(StrkeyContract(self.key)).to_string(),
        }
    }

    fn to_sc_val(&self) -> Result<ScVal, String> {
        Ok(ScVal::Address(self.to_sc_address()?))
    }

    fn to_sc_address(&self) -> Result<ScAddress, String> {
        match self.address_type {
            AddressType::Account => Ok(ScAddress::Account(AccountId(
                PublicKey::PublicKeyTypeEd25519(Uint256(self.key)),
            ))),
            AddressType::Contract => Ok(ScAddress::Contract(Hash(self.key))),
        }
    }

    fn to_buffer(&self) -> [u8; 32] {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GBBM6BKZPEHWYO3E3YKREDPQXMS4VK35YLNU7NFBRI26RAN7GI5POFBB";
    const CONTRACT: &str = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";
    const MUXED_ADDRESS: &str =
        "MA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVAAAAAAAAAAAAAJLK";

    #[test]
    fn test_invalid_address_creation() {
        let result = Address::new("GBBB");
        assert!(result.is_err(), "Should fail for invalid address");
    }

    #[test]
    fn test_account_address_creation() {
        let account = Address::new(ACCOUNT).expect("Should create account address");
        assert_eq!(account.to_string(), ACCOUNT);
    }

    #[test]
    fn test_contract_address_creation() {
        let contract = Address::new(CONTRACT).expect("Should create contract address");
        assert_eq!(contract.to_string(), CONTRACT);
    }

    #[test]
    fn test_muxed_account_creation_fails() {
        let result = Address::new(MUXED_ADDRESS);
        assert!(result.is_err(), "Should fail for muxed account address");
        match result {
            Err(error_msg) => {
                assert!(
                    error_msg.contains("MuxedAccount"),
                    "Error should mention MuxedAccount"
                );
            }
            _ => panic!("Should have failed for muxed account address"),
        }
    }

    #[test]
    fn test_sc_address_round_trip() {
        let account = Address::new(ACCOUNT).unwrap();
        let sc_address = account.to_sc_address().unwrap();
        let round_tripped = Address::from_sc_address(&sc_address).unwrap();
        assert_eq!(account, round_tripped);

        let contract = Address::new(CONTRACT).unwrap();
        let sc_address = contract.to_sc_address().unwrap();
        let round_tripped = Address::from_sc_address(&sc_address).unwrap();
        assert_eq!(contract, round_tripped);
    }

    #[test]
    fn test_sc_val_round_trip() {
        let contract = Address::new(CONTRACT).unwrap();
        let sc_val = contract.to_sc_val().unwrap();
        let round_tripped = Address::from_sc_val(&sc_val).unwrap();
        assert_eq!(contract, round_tripped);
    }
}
