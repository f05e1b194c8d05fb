//! A signed or signable transaction envelope, as produced by [`crate::transaction_builder::TransactionBuilder`].
use crate::hashing::hash;
use crate::keypair::{Keypair, KeypairBehavior};
use crate::xdr::{
    self, DecoratedSignature, EnvelopeType, FeeBumpTransactionEnvelope, FeeBumpTransactionInnerTx,
    LedgerBounds, Limits, Memo, MuxedAccount, ReadXdr, SorobanTransactionData, TimeBounds,
    TransactionEnvelope, TransactionV0Envelope, TransactionV1Envelope, VecM, WriteXdr,
};

#[derive(Debug, Clone)]
pub struct Transaction {
    pub tx: Option<xdr::Transaction>,
    pub tx_v0: Option<xdr::TransactionV0>,
    pub network_passphrase: String,
    pub signatures: Vec<DecoratedSignature>,
    pub fee: u32,
    pub envelope_type: EnvelopeType,
    pub memo: Option<Memo>,
    pub sequence: Option<String>,
    pub source: Option<String>,
    pub time_bounds: Option<TimeBounds>,
    pub ledger_bounds: Option<LedgerBounds>,
    pub min_account_sequence: Option<String>,
    pub min_account_sequence_age: Option<u32>,
    pub min_account_sequence_ledger_gap: Option<u32>,
    pub extra_signers: Option<Vec<xdr::AccountId>>,
    pub operations: Option<Vec<xdr::Operation>>,
    pub hash: Option<[u8; 32]>,
    pub soroban_data: Option<SorobanTransactionData>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            tx: None,
            tx_v0: None,
            network_passphrase: String::new(),
            signatures: Vec::new(),
            fee: 0,
            envelope_type: EnvelopeType::Tx,
            memo: None,
            sequence: None,
            source: None,
            time_bounds: None,
            ledger_bounds: None,
            min_account_sequence: None,
            min_account_sequence_age: None,
            min_account_sequence_ledger_gap: None,
            extra_signers: None,
            operations: None,
            hash: None,
            soroban_data: None,
        }
    }
}

pub trait TransactionBehavior {
    /// Computes the signature base (network id || envelope type || tx body) this
    /// transaction's signatures are made over.
    fn signature_base(&self) -> Vec<u8>;

    /// sha256 of [`TransactionBehavior::signature_base`] — what every signature signs.
    fn hash(&self) -> [u8; 32];

    /// Appends a `DecoratedSignature` produced elsewhere (e.g. a hardware wallet).
    fn add_signature(&mut self, signature: DecoratedSignature);

    /// Signs with each keypair and appends the resulting decorated signatures.
    fn sign(&mut self, signers: &[Keypair]);

    /// Assembles the signed XDR envelope (`TransactionV0Envelope` or `TransactionV1Envelope`).
    fn to_envelope(&self) -> Result<TransactionEnvelope, String>;

    /// Base64 XDR of [`TransactionBehavior::to_envelope`].
    fn to_xdr(&self) -> Result<String, String>;

    /// Rebuilds a `Transaction` from a signed envelope plus the network it was built for.
    fn from_xdr_envelope(
        envelope: TransactionEnvelope,
        network_passphrase: &str,
    ) -> Result<Self, String>
    where
        Self: Sized;
}

impl TransactionBehavior for Transaction {
    fn signature_base(&self) -> Vec<u8> {
        let network_id = hash(&self.network_passphrase);

        let mut base = Vec::new();
        base.extend_from_slice(&network_id);
        base.extend_from_slice(
            &EnvelopeType::Tx
                .to_xdr(Limits::none())
                .expect("EnvelopeType always encodes"),
        );

        if let Some(tx) = &self.tx {
            base.extend_from_slice(
                &tx.to_xdr(Limits::none())
                    .expect("a built Transaction always encodes"),
            );
        } else if let Some(tx_v0) = &self.tx_v0 {
            base.extend_from_slice(
                &tx_v0
                    .to_xdr(Limits::none())
                    .expect("a built TransactionV0 always encodes"),
            );
        }

        base
    }

    fn hash(&self) -> [u8; 32] {
        hash(self.signature_base())
    }

    fn add_signature(&mut self, signature: DecoratedSignature) {
        self.signatures.push(signature);
    }

    fn sign(&mut self, signers: &[Keypair]) {
        let hash = self.hash();
        for signer in signers {
            self.signatures.push(signer.sign_decorated(&hash));
        }
    }

    fn to_envelope(&self) -> Result<TransactionEnvelope, String> {
        let signatures: VecM<DecoratedSignature> = self
            .signatures
            .clone()
            .try_into()
            .map_err(|_| "too many signatures".to_string())?;

        if let Some(tx) = &self.tx {
            return Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
                tx: tx.clone(),
                signatures,
            }));
        }

        if let Some(tx_v0) = &self.tx_v0 {
            return Ok(TransactionEnvelope::TxV0(TransactionV0Envelope {
                tx: tx_v0.clone(),
                signatures,
            }));
        }

        Err("transaction has not been built".to_string())
    }

    fn to_xdr(&self) -> Result<String, String> {
        self.to_envelope()?
            .to_xdr_base64(Limits::none())
            .map_err(|e| e.to_string())
    }

    fn from_xdr_envelope(
        envelope: TransactionEnvelope,
        network_passphrase: &str,
    ) -> Result<Self, String> {
        match envelope {
            TransactionEnvelope::Tx(env) => Ok(Self {
                fee: env.tx.fee,
                sequence: Some(env.tx.seq_num.0.to_string()),
                operations: Some(env.tx.operations.to_vec()),
                memo: Some(env.tx.memo.clone()),
                time_bounds: match &env.tx.cond {
                    xdr::Preconditions::Time(tb) => Some(tb.clone()),
                    xdr::Preconditions::V2(v2) => v2.time_bounds.clone(),
                    xdr::Preconditions::None => None,
                },
                signatures: env.signatures.to_vec(),
                envelope_type: EnvelopeType::Tx,
                network_passphrase: network_passphrase.to_string(),
                tx: Some(env.tx),
                ..Default::default()
            }),
            TransactionEnvelope::TxV0(env) => Ok(Self {
                fee: env.tx.fee,
                sequence: Some(env.tx.seq_num.0.to_string()),
                operations: Some(env.tx.operations.to_vec()),
                memo: Some(env.tx.memo.clone()),
                signatures: env.signatures.to_vec(),
                envelope_type: EnvelopeType::TxV0,
                network_passphrase: network_passphrase.to_string(),
                tx_v0: Some(env.tx),
                ..Default::default()
            }),
            TransactionEnvelope::TxFeeBump(_) => {
                Err("fee bump envelopes are handled by FeeBumpTransaction".to_string())
            }
        }
    }
}

/// Wraps a v1 [`Transaction`] envelope bit-for-bit and re-pays its fee,
/// without altering the inner transaction's contents or signatures.
#[derive(Debug, Clone)]
pub struct FeeBumpTransaction {
    pub fee_source: MuxedAccount,
    pub base_fee: i64,
    pub inner_tx: xdr::TransactionV1Envelope,
    pub network_passphrase: String,
    pub signatures: Vec<DecoratedSignature>,
}

pub trait FeeBumpTransactionBehavior {
    fn new(
        fee_source: MuxedAccount,
        base_fee: i64,
        inner_tx: xdr::TransactionV1Envelope,
        network_passphrase: &str,
    ) -> Self;

    /// Computes the signature base (network id || fee-bump envelope type ||
    /// fee-bump tx body) this transaction's own signatures are made over —
    /// distinct from the inner transaction's hash.
    fn signature_base(&self) -> Vec<u8>;
    fn hash(&self) -> [u8; 32];
    fn add_signature(&mut self, signature: DecoratedSignature);
    fn sign(&mut self, signers: &[Keypair]);
    fn to_envelope(&self) -> TransactionEnvelope;
    fn to_xdr(&self) -> Result<String, String>;
    fn from_xdr_envelope(
        envelope: TransactionEnvelope,
        network_passphrase: &str,
    ) -> Result<Self, String>
    where
        Self: Sized;
}

impl FeeBumpTransactionBehavior for FeeBumpTransaction {
    fn new(
        fee_source: MuxedAccount,
        base_fee: i64,
        inner_tx: xdr::TransactionV1Envelope,
        network_passphrase: &str,
    ) -> Self {
        Self {
            fee_source,
            base_fee,
            inner_tx,
            network_passphrase: network_passphrase.to_string(),
            signatures: Vec::new(),
        }
    }

    fn signature_base(&self) -> Vec<u8> {
        let network_id = hash(&self.network_passphrase);
        let tx = xdr::FeeBumpTransaction {
            fee_source: self.fee_source.clone(),
            fee: self.base_fee,
            inner_tx: FeeBumpTransactionInnerTx::Tx(self.inner_tx.clone()),
            ext: xdr::FeeBumpTransactionExt::V0,
        };

        let mut base = Vec::new();
        base.extend_from_slice(&network_id);
        base.extend_from_slice(
            &EnvelopeType::TxFeeBump
                .to_xdr(Limits::none())
                .expect("EnvelopeType always encodes"),
        );
        base.extend_from_slice(
            &tx.to_xdr(Limits::none())
                .expect("a built FeeBumpTransaction always encodes"),
        );
        base
    }

    fn hash(&self) -> [u8; 32] {
        hash(self.signature_base())
    }

    fn add_signature(&mut self, signature: DecoratedSignature) {
        self.signatures.push(signature);
    }

    fn sign(&mut self, signers: &[Keypair]) {
        let hash = self.hash();
        for signer in signers {
            self.signatures.push(signer.sign_decorated(&hash));
        }
    }

    fn to_envelope(&self) -> TransactionEnvelope {
        TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
            tx: xdr::FeeBumpTransaction {
                fee_source: self.fee_source.clone(),
                fee: self.base_fee,
                inner_tx: FeeBumpTransactionInnerTx::Tx(self.inner_tx.clone()),
                ext: xdr::FeeBumpTransactionExt::V0,
            },
            signatures: self
                .signatures
                .clone()
                .try_into()
                .unwrap_or_else(|_| VecM::default()),
        })
    }

    fn to_xdr(&self) -> Result<String, String> {
        self.to_envelope()
            .to_xdr_base64(Limits::none())
            .map_err(|e| e.to_string())
    }

    fn from_xdr_envelope(
        envelope: TransactionEnvelope,
        network_passphrase: &str,
    ) -> Result<Self, String> {
        match envelope {
            TransactionEnvelope::TxFeeBump(env) => {
                let FeeBumpTransactionInnerTx::Tx(inner_tx) = env.tx.inner_tx;
                Ok(Self {
                    fee_source: env.tx.fee_source,
                    base_fee: env.tx.fee,
                    inner_tx,
                    network_passphrase: network_passphrase.to_string(),
                    signatures: env.signatures.to_vec(),
                })
            }
            _ => Err("envelope is not a fee-bump transaction".to_string()),
        }
    }
}
