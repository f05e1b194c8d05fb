//! A typed facade over a deployed contract: builds an invocation from a
//! contract's spec, drives it through [`crate::assembled_transaction`], and
//! decodes the result back into native JSON.
//!
//! Grounded on `invoke.rs`'s account-fetch → build-args → assemble → sign →
//! submit flow and `deploy.rs`'s upload/create-contract pair, generalized
//! away from CLI argument parsing onto [`ContractSpec`]'s native value
//! conversions.
use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::account::{Account, AccountBehavior};
use crate::address::{Address, AddressTrait};
use crate::assembled_transaction::AssembledTransaction;
use crate::contract_spec::ContractSpec;
use crate::error::{Error, Result};
use crate::keypair::Keypair;
use crate::operation::Operation;
use crate::rpc::Server;
use crate::transaction_builder::{TransactionBuilder, TransactionBuilderBehavior};
use crate::xdr::{self, HostFunction, ReadXdr, VecM};

const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

/// Wraps a contract id, its parsed spec, and enough network context to build
/// and submit invocations against it.
pub struct ContractClient {
    contract_id: String,
    spec: ContractSpec,
    server: Server,
    network_passphrase: String,
    submit_timeout_secs: u64,
}

impl ContractClient {
    /// Builds a client for a contract whose spec entries have already been
    /// retrieved (e.g. via `getLedgerEntries` + WASM spec extraction).
    pub fn new(
        contract_id: impl Into<String>,
        spec: ContractSpec,
        server: Server,
        network_passphrase: impl Into<String>,
    ) -> Self {
        ContractClient {
            contract_id: contract_id.into(),
            spec,
            server,
            network_passphrase: network_passphrase.into(),
            submit_timeout_secs: DEFAULT_SUBMIT_TIMEOUT_SECS,
        }
    }

    pub fn with_submit_timeout(mut self, secs: u64) -> Self {
        self.submit_timeout_secs = secs;
        self
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    pub fn spec(&self) -> &ContractSpec {
        &self.spec
    }

    /// Looks up the invoking account's current sequence number and wraps it
    /// for use by [`TransactionBuilder`].
    async fn source_account(&self, source: &Keypair) -> Result<Rc<RefCell<Account>>> {
        use crate::keypair::KeypairBehavior;
        let public_key = source.public_key();
        let entries = self
            .server
            .get_ledger_entries(&[Self::account_ledger_key(&public_key)?])
            .await?;
        let entry = entries
            .entries
            .first()
            .ok_or_else(|| Error::invalid_input("account not found"))?;
        let ledger_entry = xdr::LedgerEntryData::from_xdr_base64(&entry.xdr, xdr::Limits::none())?;
        let xdr::LedgerEntryData::Account(account_entry) = ledger_entry else {
            return Err(Error::invalid_input("unexpected ledger entry type"));
        };
        let sequence = account_entry.seq_num.0.to_string();
        let account = Account::new(&public_key, &sequence).map_err(|e| Error::invalid_input(e.to_string()))?;
        Ok(Rc::new(RefCell::new(account)))
    }

    fn account_ledger_key(public_key: &str) -> Result<String> {
        use crate::xdr::WriteXdr;
        let address = Address::new(public_key).map_err(Error::invalid_input)?;
        let xdr::ScAddress::Account(account_id) = address.to_sc_address().map_err(Error::invalid_input)? else {
            return Err(Error::invalid_input("expected an account address"));
        };
        let key = xdr::LedgerKey::Account(xdr::LedgerKeyAccount { account_id });
        key.to_xdr_base64(xdr::Limits::none())
            .map_err(Error::Xdr)
    }

    fn build_assembled(
        &self,
        account: Rc<RefCell<Account>>,
        op: xdr::Operation,
        signer: Keypair,
    ) -> AssembledTransaction {
        let mut builder = TransactionBuilder::new(account, &self.network_passphrase, None);
        builder.add_operation(op);
        builder.fee(100u32);
        AssembledTransaction::new(builder.build(), self.submit_timeout_secs)
            .with_transaction_signer(signer)
    }

    /// Invokes `function` with named `args`, converting them to `ScVal`s via
    /// the contract's spec, and drives the full simulate/sign/submit cycle
    /// with `source` as both fee payer and sole signer.
    ///
    /// Read-only invocations (no ledger writes in the footprint) are
    /// simulated but not submitted — the decoded result of the simulation is
    /// returned directly.
    pub async fn invoke(
        &self,
        source: &Keypair,
        function: &str,
        args: &Map<String, Value>,
    ) -> Result<Value> {
        let sc_args = self.spec.func_args_to_sc_vals(function, args)?;
        let account = self.source_account(source).await?;

        let op = Operation::invoke_contract_function(
            &self.contract_id,
            function,
            sc_args,
            None,
        )
        .map_err(Error::invalid_input)?;

        let mut assembled = self.build_assembled(account, op, source.clone());
        assembled.simulate(&self.server).await?;

        if assembled.is_read_call() {
            let result = assembled.result()?;
            return self
                .spec
                .func_res_to_native(function, &result)
                .map_err(Error::from);
        }

        use crate::keypair::KeypairBehavior;
        let public_key: [u8; 32] = source
            .raw_public_key()
            .clone()
            .try_into()
            .map_err(|_| Error::crypto("public key was not 32 bytes"))?;

        let ledger = self.server.get_latest_ledger().await?;
        let valid_until = ledger.sequence + 100;
        assembled.sign_auth_entries(source, &public_key, valid_until)?;

        let response = assembled
            .sign_and_submit(&[source.clone()], &self.server, false)
            .await?;
        let meta = response
            .result_meta
            .ok_or_else(|| Error::invalid_input("transaction result carried no metadata"))?;
        let return_value = extract_return_value(&meta)?;
        self.spec
            .func_res_to_native(function, &return_value)
            .map_err(Error::from)
    }

    /// Uploads WASM bytecode and returns the resulting contract code hash.
    pub async fn install(&self, source: &Keypair, wasm: Vec<u8>) -> Result<[u8; 32]> {
        let account = self.source_account(source).await?;
        let op = xdr::Operation {
            source_account: None,
            body: xdr::OperationBody::InvokeHostFunction(xdr::InvokeHostFunctionOp {
                host_function: HostFunction::UploadContractWasm(
                    wasm.try_into().map_err(|_| Error::invalid_input("wasm too large"))?,
                ),
                auth: VecM::default(),
            }),
        };
        let mut assembled = self.build_assembled(account, op, source.clone());
        assembled.simulate(&self.server).await?;
        let response = assembled
            .sign_and_submit(&[source.clone()], &self.server, false)
            .await?;
        let meta = response
            .result_meta
            .ok_or_else(|| Error::invalid_input("transaction result carried no metadata"))?;
        let value = extract_return_value(&meta)?;
        match value {
            xdr::ScVal::Bytes(bytes) => {
                let arr: [u8; 32] = bytes
                    .to_vec()
                    .try_into()
                    .map_err(|_| Error::invalid_input("wasm hash was not 32 bytes"))?;
                Ok(arr)
            }
            other => Err(Error::invalid_input(format!(
                "expected an upload result hash, got {other:?}"
            ))),
        }
    }

    /// Creates a contract instance from a previously uploaded WASM hash.
    /// `salt` defaults to 32 fresh CSPRNG bytes when `None`. Supplying
    /// `constructor_args` switches the host function from `CreateContract`
    /// to `CreateContractV2`, matching the reference CLI's deploy path.
    pub async fn deploy_from_wasm_id(
        &self,
        source: &Keypair,
        wasm_hash: [u8; 32],
        constructor_args: Vec<xdr::ScVal>,
        salt: Option<[u8; 32]>,
    ) -> Result<String> {
        use crate::keypair::KeypairBehavior;
        let account = self.source_account(source).await?;
        let deployer = Address::new(&source.public_key()).map_err(Error::invalid_input)?;
        let salt = salt.unwrap_or_else(random_salt);

        let contract_id_preimage = xdr::ContractIdPreimage::Address(xdr::ContractIdPreimageFromAddress {
            address: deployer.to_sc_address().map_err(Error::invalid_input)?,
            salt: xdr::Uint256(salt),
        });
        let host_function = if constructor_args.is_empty() {
            HostFunction::CreateContract(xdr::CreateContractArgs {
                contract_id_preimage,
                executable: xdr::ContractExecutable::Wasm(xdr::Hash(wasm_hash)),
            })
        } else {
            HostFunction::CreateContractV2(xdr::CreateContractArgsV2 {
                contract_id_preimage,
                executable: xdr::ContractExecutable::Wasm(xdr::Hash(wasm_hash)),
                constructor_args: constructor_args
                    .try_into()
                    .map_err(|_| Error::invalid_input("too many constructor arguments"))?,
            })
        };

        let op = xdr::Operation {
            source_account: None,
            body: xdr::OperationBody::InvokeHostFunction(xdr::InvokeHostFunctionOp {
                host_function,
                auth: VecM::default(),
            }),
        };
        let mut assembled = self.build_assembled(account, op, source.clone());
        assembled.simulate(&self.server).await?;
        let response = assembled
            .sign_and_submit(&[source.clone()], &self.server, false)
            .await?;
        let meta = response
            .result_meta
            .ok_or_else(|| Error::invalid_input("transaction result carried no metadata"))?;
        let value = extract_return_value(&meta)?;
        match value {
            xdr::ScVal::Address(xdr::ScAddress::Contract(xdr::Hash(id))) => {
                Ok(Address::contract(id).to_string())
            }
            other => Err(Error::invalid_input(format!(
                "expected a contract address result, got {other:?}"
            ))),
        }
    }

    /// One-step deploy: uploads `wasm` (or reuses it if the RPC already has
    /// an entry for its hash — install is idempotent) and creates an
    /// instance from it in the same call.
    pub async fn deploy(
        &self,
        source: &Keypair,
        wasm: Vec<u8>,
        constructor_args: Vec<xdr::ScVal>,
        salt: Option<[u8; 32]>,
    ) -> Result<String> {
        let wasm_hash = self.install(source, wasm).await?;
        self.deploy_from_wasm_id(source, wasm_hash, constructor_args, salt)
            .await
    }

    /// The power-user invocation path: caller supplies already-converted
    /// positional `ScVal` arguments instead of going through the contract's
    /// spec, and gets the `AssembledTransaction` back for manual control of
    /// the sign/submit steps instead of having this type drive them.
    pub async fn invoke_with_xdr(
        &self,
        source: &Keypair,
        function: &str,
        args: Vec<xdr::ScVal>,
    ) -> Result<AssembledTransaction> {
        let account = self.source_account(source).await?;
        let op = Operation::invoke_contract_function(&self.contract_id, function, args, None)
            .map_err(Error::invalid_input)?;
        let mut assembled = self.build_assembled(account, op, source.clone());
        assembled.simulate(&self.server).await?;
        Ok(assembled)
    }
}

fn random_salt() -> [u8; 32] {
    use rand_core::{OsRng, RngCore};
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

fn extract_return_value(meta: &xdr::TransactionMeta) -> Result<xdr::ScVal> {
    match meta {
        xdr::TransactionMeta::V3(xdr::TransactionMetaV3 {
            soroban_meta: Some(soroban_meta),
            ..
        }) => Ok(soroban_meta.return_value.clone()),
        xdr::TransactionMeta::V4(xdr::TransactionMetaV4 {
            soroban_meta: Some(soroban_meta),
            ..
        }) => Ok(soroban_meta.return_value.clone()),
        _ => Err(Error::invalid_input(
            "transaction metadata carried no soroban return value",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_return_value_requires_soroban_meta() {
        let meta = xdr::TransactionMeta::V0(VecM::default());
        assert!(extract_return_value(&meta).is_err());
    }
}
