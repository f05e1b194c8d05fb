use crate::address::{Address, AddressTrait};
use crate::operation::Operation;
use crate::utils::decode_encode_muxed_account::decode_address_to_muxed_account_fix_for_g_address;
use crate::xdr;
use std::str::FromStr;

impl Operation {
    /// Invokes a host function, the sole operation carried by every Soroban
    /// contract call and contract/Wasm upload transaction.
    ///
    /// Threshold: Medium
    pub fn invoke_host_function(
        func: xdr::HostFunction,
        auth: Option<xdr::VecM<xdr::SorobanAuthorizationEntry>>,
        source: Option<String>,
    ) -> Result<xdr::Operation, String> {
        let auth = auth.unwrap_or_default();

        let body = xdr::OperationBody::InvokeHostFunction(xdr::InvokeHostFunctionOp {
            host_function: func,
            auth,
        });

        let source_account = source
            .as_deref()
            .map(decode_address_to_muxed_account_fix_for_g_address);

        Ok(xdr::Operation {
            source_account,
            body,
        })
    }

    /// Builds an `invokeHostFunction` operation that calls a single contract
    /// function with the given positional arguments — the canonical
    /// constructor every Soroban invocation (including the `AssembledTransaction`
    /// pipeline) starts from.
    pub fn invoke_contract_function(
        contract_address: &str,
        function_name: &str,
        params: Vec<xdr::ScVal>,
        source: Option<String>,
    ) -> Result<xdr::Operation, String> {
        let address = Address::new(contract_address)?;
        let contract_address = address.to_sc_address()?;
        let function_name = xdr::ScSymbol::from(
            xdr::StringM::from_str(function_name).map_err(|_| "invalid function name".to_string())?,
        );
        let args = params
            .try_into()
            .map_err(|_| "too many arguments".to_string())?;

        let func = xdr::HostFunction::InvokeContract(xdr::InvokeContractArgs {
            contract_address,
            function_name,
            args,
        });

        Self::invoke_host_function(func, None, source)
    }
}
