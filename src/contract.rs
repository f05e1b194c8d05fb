use std::str::FromStr;

use crate::address::{Address, AddressTrait};
use crate::xdr;
use stellar_strkey::Contract as StrkeyContract;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contracts {
    id: [u8; 32],
}

pub trait ContractBehavior {
    /// Creates a new Contract instance from a string representation of the contract ID.
    fn new(contract_id: &str) -> Result<Self, String>
    where
        Self: Sized;

    /// Returns the Stellar contract ID as a string.
    fn contract_id(&self) -> String;

    /// Returns the contract ID as a string (similar to contract_id method).
    fn to_string(&self) -> String;

    /// Returns the wrapped address of this contract.
    fn address(&self) -> Address;

    /// Invokes a contract call with the specified method and parameters.
    fn call(&self, method: &str, params: Option<Vec<xdr::ScVal>>) -> xdr::Operation;

    /// Returns the read-only footprint entries necessary for invocations to this contract.
    fn get_footprint(&self) -> xdr::LedgerKey;
}

impl ContractBehavior for Contracts {
    fn new(contract_id: &str) -> Result<Self, String> {
        let decoded =
            StrkeyContract::from_str(contract_id).map_err(|_| "Failed to decode contract ID")?;
        Ok(Self { id: decoded.0 })
    }

    fn call(&self, method: &str, params: Option<Vec<xdr::ScVal>>) -> xdr::Operation {
        xdr::Operation {
            source_account: None,
            body: xdr::OperationBody::InvokeHostFunction(xdr::InvokeHostFunctionOp {
                host_function: xdr::HostFunction::InvokeContract(xdr::InvokeContractArgs {
                    contract_address: xdr::ScAddress::Contract(xdr::Hash(self.id)),
                    function_name: xdr::ScSymbol::from(xdr::StringM::from_str(method).unwrap()),
                    args: xdr::VecM::<xdr::ScVal>::try_from(params.unwrap_or_default()).unwrap(),
                }),
                auth: xdr::VecM::<xdr::SorobanAuthorizationEntry>::try_from(Vec::new()).unwrap(),
            }),
        }
    }

    fn contract_id(&self) -> String {
        StrkeyContract(self.id).to_string()
    }

    fn to_string(&self) -> String {
        self.contract_id()
    }

    fn address(&self) -> Address {
        Address::contract(self.id)
    }

    fn get_footprint(&self) -> xdr::LedgerKey {
        xdr::LedgerKey::ContractData(xdr::LedgerKeyContractData {
            contract: xdr::ScAddress::Contract(xdr::Hash(self.id)),
            key: xdr::ScVal::LedgerKeyContractInstance,
            durability: xdr::ContractDataDurability::Persistent,
        })
    }
}

pub fn contract_id_strkey(contract_id: &str) -> stellar_strkey::Contract {
    stellar_strkey::Contract::from_string(contract_id).unwrap()
}
