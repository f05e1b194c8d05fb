//! Orchestrates the simulate → (restore) → sign → submit lifecycle a
//! Soroban contract invocation has to go through before it lands on chain.
//!
//! Grounded on the `Assembled`/`handle_restore` pipeline for classic
//! transaction objects, generalized to the async `Server` client and the
//! explicit state machine below (the upstream reference tracks state
//! implicitly through which fields are populated).
use std::time::Duration;

use crate::auth::{self, Signer};
use crate::error::{Error, Result};
use crate::keypair::Keypair;
use crate::rpc::{Server, SimulateTransactionResponse};
use crate::transaction::{Transaction, TransactionBehavior};
use crate::xdr::{
    self, InvokeHostFunctionOp, Memo, OperationBody, Preconditions, ReadXdr, RestoreFootprintOp,
    ScVal, SequenceNumber, SorobanAuthorizationEntry, SorobanTransactionData, TransactionExt,
    VecM, WriteXdr,
};

const DEFAULT_CLASSIC_TX_FEE: u32 = 100;
const INITIAL_POLL_DELAY: Duration = Duration::from_secs(1);
const MAX_POLL_DELAY: Duration = Duration::from_secs(60);

/// Where an `AssembledTransaction` sits in its lifecycle. Every stage is a
/// concrete variant — there is no "in-between" state left to a stray bool.
#[derive(Debug, Clone, PartialEq)]
pub enum AssembledState {
    Created,
    Simulated,
    Signed,
    Submitted,
}

/// Owns a built [`Transaction`] as it's carried through simulation, Soroban
/// authorization signing, and submission.
pub struct AssembledTransaction {
    tx: Transaction,
    simulation: Option<SimulateTransactionResponse>,
    state: AssembledState,
    submit_timeout_secs: u64,
    send_result: Option<crate::rpc::GetTransactionResponse>,
    restored: bool,
    transaction_signer: Option<Keypair>,
}

impl AssembledTransaction {
    /// Wraps an unsimulated, single-operation transaction. `submit_timeout_secs`
    /// bounds the exponential-backoff poll loop in [`Self::submit`].
    pub fn new(tx: Transaction, submit_timeout_secs: u64) -> Self {
        AssembledTransaction {
            tx,
            simulation: None,
            state: AssembledState::Created,
            submit_timeout_secs,
            send_result: None,
            restored: false,
            transaction_signer: None,
        }
    }

    /// Configures the signer used to sign and submit the automatic restore
    /// sub-pipeline `simulate` may run. Required for writes against
    /// contracts whose footprint can carry expired entries; read calls
    /// never reach the restore path.
    pub fn with_transaction_signer(mut self, signer: Keypair) -> Self {
        self.transaction_signer = Some(signer);
        self
    }

    pub fn state(&self) -> &AssembledState {
        &self.state
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn simulation(&self) -> Option<&SimulateTransactionResponse> {
        self.simulation.as_ref()
    }

    fn single_operation(&self) -> Result<&xdr::Operation> {
        let ops = self
            .tx
            .tx
            .as_ref()
            .ok_or_else(|| Error::invalid_input("transaction has not been built"))?
            .operations
            .as_slice();
        match ops {
            [op] => Ok(op),
            other => Err(Error::invalid_input(format!(
                "expected exactly one operation, found {}",
                other.len()
            ))),
        }
    }

    /// Runs `simulateTransaction` and merges the result onto the inner
    /// transaction: authorization entries (if the invocation didn't already
    /// carry its own), the minimum resource fee, and the Soroban transaction
    /// data extension.
    ///
    /// If the simulation reports a `restorePreamble` and this isn't a read
    /// call, runs the restore sub-pipeline once and re-simulates — see
    /// [`Self::restore_footprint`].
    pub async fn simulate(&mut self, server: &Server) -> Result<&mut Self> {
        self.simulate_inner(server, true).await?;
        Ok(self)
    }

    async fn simulate_inner(&mut self, server: &Server, restore: bool) -> Result<()> {
        let envelope = self.tx.to_envelope().map_err(Error::invalid_input)?;
        let sim = server.simulate_transaction(&envelope).await?;

        self.assemble(&sim)?;
        self.simulation = Some(sim);
        self.state = AssembledState::Simulated;

        if restore && !self.restored && self.needs_restore() && !self.is_read_call() {
            self.restore_footprint(server).await?;
        }

        Ok(())
    }

    /// Builds the sibling `restoreFootprint` transaction, simulates it
    /// (without recursing into restore again), signs it with the configured
    /// [`Self::with_transaction_signer`], and submits it to completion.
    /// Bumps this transaction's sequence number and re-simulates exactly
    /// once with `restore=false`.
    async fn restore_footprint(&mut self, server: &Server) -> Result<()> {
        let restore_tx = self.restore_transaction()?.ok_or_else(|| {
            Error::RestorationFailure("no restore preamble present".to_string())
        })?;
        let signer = self.transaction_signer.clone().ok_or_else(|| {
            Error::RestorationFailure(
                "automatic restore requires a transaction signer".to_string(),
            )
        })?;

        let mut restore_assembled = AssembledTransaction::new(restore_tx, self.submit_timeout_secs);
        restore_assembled
            .simulate_inner(server, false)
            .await
            .map_err(|e| Error::RestorationFailure(e.to_string()))?;
        if restore_assembled.needs_restore() {
            return Err(Error::RestorationFailure(
                "restore transaction itself requires restoration".to_string(),
            ));
        }
        restore_assembled
            .sign(&[signer], true)
            .map_err(|e| Error::RestorationFailure(e.to_string()))?;
        restore_assembled
            .submit(server)
            .await
            .map_err(|e| Error::RestorationFailure(e.to_string()))?;

        if let Some(tx) = self.tx.tx.as_mut() {
            tx.seq_num = SequenceNumber(tx.seq_num.0 + 1);
        }
        self.restored = true;
        self.simulate_inner(server, false).await
    }

    fn assemble(&mut self, sim: &SimulateTransactionResponse) -> Result<()> {
        let transaction_data = sim.parsed_transaction_data()?;
        let parsed_results = sim.parsed_results()?;

        let tx = self
            .tx
            .tx
            .as_mut()
            .ok_or_else(|| Error::invalid_input("transaction has not been built"))?;

        if tx.operations.len() != 1 {
            return Err(Error::invalid_input(format!(
                "expected exactly one operation, found {}",
                tx.operations.len()
            )));
        }

        let mut op = tx.operations[0].clone();
        if let OperationBody::InvokeHostFunction(ref mut body) = op.body {
            if body.auth.is_empty() {
                if parsed_results.len() == 1 {
                    let auths: VecM<SorobanAuthorizationEntry> =
                        parsed_results[0].auth.clone().try_into().map_err(|_| {
                            Error::invalid_input("too many authorization entries")
                        })?;
                    if !auths.is_empty() {
                        body.auth = auths;
                    }
                }
            }
        }

        let classic_fee: u64 = DEFAULT_CLASSIC_TX_FEE.into();
        let min_resource_fee = sim.min_resource_fee() as u64;
        let candidate = classic_fee + min_resource_fee;
        tx.fee = tx.fee.max(u32::try_from(candidate).unwrap_or(u32::MAX));

        tx.operations = vec![op]
            .try_into()
            .map_err(|_| Error::invalid_input("failed to rebuild operations"))?;
        tx.ext = TransactionExt::V1(transaction_data);

        self.tx.fee = tx.fee;
        self.tx.soroban_data = match &tx.ext {
            TransactionExt::V1(data) => Some(data.clone()),
            TransactionExt::V0 => None,
        };

        Ok(())
    }

    /// True if simulation reported ledger entries that have expired and need
    /// restoring before this transaction can be signed.
    pub fn needs_restore(&self) -> bool {
        self.simulation
            .as_ref()
            .is_some_and(|s| s.restore_preamble.is_some())
    }

    /// Builds the `restoreFootprint` transaction described by the
    /// simulation's `restorePreamble`, if any.
    pub fn restore_transaction(&self) -> Result<Option<Transaction>> {
        let Some(sim) = &self.simulation else {
            return Err(Error::NotYetSimulated);
        };
        let Some(preamble) = &sim.restore_preamble else {
            return Ok(None);
        };

        let parent = self
            .tx
            .tx
            .as_ref()
            .ok_or_else(|| Error::invalid_input("transaction has not been built"))?;

        let transaction_data = SorobanTransactionData::from_xdr_base64(
            &preamble.transaction_data,
            xdr::Limits::none(),
        )?;
        let restore_fee: u32 = preamble
            .min_resource_fee
            .parse()
            .map_err(|_| Error::invalid_input("invalid restore preamble fee"))?;
        let fee = parent
            .fee
            .checked_add(restore_fee)
            .ok_or_else(|| Error::invalid_input("restore fee overflow"))?;

        let restore_op = xdr::Operation {
            source_account: None,
            body: OperationBody::RestoreFootprint(RestoreFootprintOp {
                ext: xdr::ExtensionPoint::V0,
            }),
        };

        let tx_obj = xdr::Transaction {
            source_account: parent.source_account.clone(),
            fee,
            seq_num: parent.seq_num.clone(),
            cond: Preconditions::None,
            memo: Memo::None,
            operations: vec![restore_op]
                .try_into()
                .map_err(|_| Error::invalid_input("failed to build restore operation"))?,
            ext: TransactionExt::V1(transaction_data),
        };

        Ok(Some(Transaction {
            tx: Some(tx_obj),
            network_passphrase: self.tx.network_passphrase.clone(),
            fee,
            ..Default::default()
        }))
    }

    /// Addresses the simulation says must sign Soroban authorization entries
    /// beyond the transaction's own source-account signature. Unless
    /// `include_already_signed`, an entry whose `signature` field is no
    /// longer `ScVal::Void` is dropped from the set.
    pub fn needs_non_invoker_signing_by(&self, include_already_signed: bool) -> Result<Vec<String>> {
        let op = self.single_operation()?;
        let OperationBody::InvokeHostFunction(InvokeHostFunctionOp { auth, .. }) = &op.body else {
            return Ok(Vec::new());
        };

        let mut addresses = Vec::new();
        for entry in auth.iter() {
            if let crate::xdr::SorobanCredentials::Address(creds) = &entry.credentials {
                let already_signed = !matches!(creds.signature, ScVal::Void);
                if already_signed && !include_already_signed {
                    continue;
                }
                let address = <crate::address::Address as crate::address::AddressTrait>::from_sc_address(
                    &creds.address,
                )
                .map_err(Error::invalid_input)?;
                addresses.push(<crate::address::Address as crate::address::AddressTrait>::to_string(
                    &address,
                ));
            }
        }
        Ok(addresses)
    }

    /// True if the invocation touches no ledger state for writing and the
    /// simulation carried no authorization entries, i.e. it's a read-only
    /// (simulate-only) call that needs neither signing nor submission.
    pub fn is_read_call(&self) -> bool {
        let Some(tx) = &self.tx.tx else { return false };
        let footprint_empty = match &tx.ext {
            TransactionExt::V1(data) => data.resources.footprint.read_write.is_empty(),
            TransactionExt::V0 => return false,
        };
        if !footprint_empty {
            return false;
        }
        self.simulation
            .as_ref()
            .map(|sim| sim.results.iter().all(|r| r.auth.is_empty()))
            .unwrap_or(true)
    }

    /// The decoded return value of the simulated host-function invocation,
    /// taken from the first entry of the simulation's `results`. For a read
    /// call this is the final answer; for a write call it's the same value
    /// the submitted transaction is expected to produce on success.
    pub fn result(&self) -> Result<ScVal> {
        let sim = self
            .simulation
            .as_ref()
            .ok_or_else(|| Error::invalid_input("transaction has not been simulated yet"))?;
        sim.parsed_results()?
            .into_iter()
            .next()
            .map(|r| r.xdr)
            .ok_or_else(|| Error::invalid_input("simulation returned no result"))
    }

    /// Signs every Soroban authorization entry this signer is able to sign,
    /// via [`crate::auth::authorize_entry`]. Rebuilding the operation
    /// changes the envelope hash, so any previous envelope signature is
    /// cleared — the caller must re-sign with [`Self::sign`].
    pub fn sign_auth_entries<S: Signer>(
        &mut self,
        signer: &S,
        signer_public_key: &[u8; 32],
        valid_until_ledger_seq: u32,
    ) -> Result<&mut Self> {
        let network_passphrase = self.tx.network_passphrase.clone();
        let tx = self
            .tx
            .tx
            .as_mut()
            .ok_or_else(|| Error::invalid_input("transaction has not been built"))?;

        if tx.operations.len() != 1 {
            return Ok(self);
        }
        let mut op = tx.operations[0].clone();
        if let OperationBody::InvokeHostFunction(ref mut body) = op.body {
            let mut signed = Vec::with_capacity(body.auth.len());
            for entry in body.auth.iter() {
                if auth::needs_signature(entry, signer_public_key) {
                    signed.push(
                        auth::authorize_entry(
                            entry,
                            signer,
                            valid_until_ledger_seq,
                            &network_passphrase,
                        )
                        .map_err(Error::crypto)?,
                    );
                } else {
                    signed.push(entry.clone());
                }
            }
            body.auth = signed
                .try_into()
                .map_err(|_| Error::invalid_input("too many authorization entries"))?;
        }
        tx.operations = vec![op]
            .try_into()
            .map_err(|_| Error::invalid_input("failed to rebuild operations"))?;

        self.tx.signatures.clear();
        if self.state == AssembledState::Signed {
            self.state = AssembledState::Simulated;
        }
        Ok(self)
    }

    /// Signs the transaction envelope with the source account's (or
    /// co-signers') keys.
    ///
    /// Fails with [`Error::NoSignatureNeeded`] for a read call unless
    /// `force`, with [`Error::ExpiredState`] if the simulation needed a
    /// restore that hasn't run yet, and with
    /// [`Error::NeedsMoreSignatures`] if authorization entries still need
    /// other signers.
    pub fn sign(&mut self, signers: &[Keypair], force: bool) -> Result<&mut Self> {
        if self.tx.tx.is_none() {
            return Err(Error::invalid_input("transaction has not been built"));
        }
        if self.is_read_call() && !force {
            return Err(Error::NoSignatureNeeded);
        }
        if self.needs_restore() {
            return Err(Error::ExpiredState);
        }
        let pending = self.accounts_pending_signature()?;
        if !pending.is_empty() {
            return Err(Error::NeedsMoreSignatures { addresses: pending });
        }

        self.tx.sign(signers);
        self.state = AssembledState::Signed;
        Ok(self)
    }

    /// [`Self::needs_non_invoker_signing_by`], minus any entry credentialed
    /// to a contract address. Those entries are satisfied by the invoked
    /// contract's own `__check_auth`, not a keypair signature, so `sign`
    /// must not block on them.
    fn accounts_pending_signature(&self) -> Result<Vec<String>> {
        let op = self.single_operation()?;
        let OperationBody::InvokeHostFunction(InvokeHostFunctionOp { auth, .. }) = &op.body else {
            return Ok(Vec::new());
        };

        let mut addresses = Vec::new();
        for entry in auth.iter() {
            if let crate::xdr::SorobanCredentials::Address(creds) = &entry.credentials {
                if matches!(creds.address, crate::xdr::ScAddress::Contract(_)) {
                    continue;
                }
                if !matches!(creds.signature, ScVal::Void) {
                    continue;
                }
                let address = <crate::address::Address as crate::address::AddressTrait>::from_sc_address(
                    &creds.address,
                )
                .map_err(Error::invalid_input)?;
                addresses.push(<crate::address::Address as crate::address::AddressTrait>::to_string(
                    &address,
                ));
            }
        }
        Ok(addresses)
    }

    /// Submits the signed envelope and polls `getTransaction` with
    /// exponential backoff (1s initial delay, doubling, capped at 60s)
    /// until it lands or `submit_timeout_secs` elapses.
    pub async fn submit(&mut self, server: &Server) -> Result<crate::rpc::GetTransactionResponse> {
        if self.state != AssembledState::Signed {
            return Err(Error::invalid_input(
                "transaction must be signed before it can be submitted",
            ));
        }

        let envelope = self.tx.to_envelope().map_err(Error::invalid_input)?;
        let sent = server.send_transaction(&envelope).await?;
        tracing::trace!(hash = %sent.hash, "submitted transaction, entering poll loop");

        let deadline = tokio::time::Instant::now() + Duration::from_secs(self.submit_timeout_secs);
        let mut delay = INITIAL_POLL_DELAY;

        loop {
            let response = server.get_transaction(&sent.hash).await?;
            match response.status.as_str() {
                "SUCCESS" => {
                    self.state = AssembledState::Submitted;
                    self.send_result = Some(response.clone());
                    return Ok(response);
                }
                "FAILED" => {
                    tracing::error!(hash = %sent.hash, result = ?response.result, "transaction failed on-chain");
                    return Err(Error::TransactionFailed {
                        result_code: format!("{:?}", response.result),
                    });
                }
                "NOT_FOUND" => {}
                other => {
                    return Err(Error::SendTransactionFailed {
                        status: other.to_string(),
                    });
                }
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(Error::TransactionStillPending { hash: sent.hash });
            }

            tracing::trace!(hash = %sent.hash, delay_secs = delay.as_secs(), "transaction not yet final, backing off");
            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(MAX_POLL_DELAY);
        }
    }

    /// Convenience wrapper: signs with `signers` and submits in one call.
    pub async fn sign_and_submit(
        &mut self,
        signers: &[Keypair],
        server: &Server,
        force: bool,
    ) -> Result<crate::rpc::GetTransactionResponse> {
        self.sign(signers, force)?;
        self.submit(server).await
    }
}
