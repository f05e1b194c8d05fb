//! Signs `SorobanAuthorizationEntry`s: the "I authorize this invocation"
//! credentials a contract call's `require_auth` checks attach to a
//! transaction.
use rand_core::{OsRng, RngCore};

use crate::hashing::hash;
use crate::xdr::{
    AccountId, HashIdPreimage, HashIdPreimageSorobanAuthorization, Hash as XdrHash, Limits,
    PublicKey, ScAddress, ScMap, ScMapEntry, ScSymbol, ScVal, SorobanAddressCredentials,
    SorobanAuthorizationEntry, SorobanAuthorizedInvocation, SorobanCredentials, StringM, Uint256,
    WriteXdr,
};

/// A detached ed25519 signature over an arbitrary payload, produced by
/// whatever holds the private key — a [`crate::keypair::Keypair`], a remote
/// signing service, a hardware wallet.
pub struct Signature {
    pub public_key: [u8; 32],
    pub signature: [u8; 64],
}

/// Abstraction over "something that can sign an authorization payload",
/// implemented by [`crate::keypair::Keypair`] for local signing and free to
/// be implemented against a remote signer or hardware wallet.
pub trait Signer {
    fn sign_auth_entry(&self, preimage: &[u8]) -> Result<Signature, String>;
}

impl Signer for crate::keypair::Keypair {
    fn sign_auth_entry(&self, preimage: &[u8]) -> Result<Signature, String> {
        use crate::keypair::KeypairBehavior;
        if !self.can_sign() {
            return Err("keypair does not have a secret key".to_string());
        }
        let digest = hash(preimage);
        let signature = self.sign(&digest);
        let public_key: [u8; 32] = self
            .raw_public_key()
            .try_into()
            .map_err(|_| "public key was not 32 bytes".to_string())?;
        let signature: [u8; 64] = signature
            .try_into()
            .map_err(|_| "signature was not 64 bytes".to_string())?;
        Ok(Signature {
            public_key,
            signature,
        })
    }
}

/// Generates a fresh 64-bit nonce for a new authorization entry, drawn from a
/// CSPRNG as the Soroban host expects nonces to be unpredictable.
pub fn generate_nonce() -> i64 {
    let mut bytes = [0u8; 8];
    OsRng.fill_bytes(&mut bytes);
    i64::from_le_bytes(bytes)
}

fn account_address_bytes(address: &ScAddress) -> Option<[u8; 32]> {
    match address {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(bytes)))) => {
            Some(*bytes)
        }
        _ => None,
    }
}

/// Signs a single `SorobanAuthorizationEntry` for a source-account-invoker
/// or address-credential invocation.
///
/// Entries whose credentials are [`SorobanCredentials::SourceAccount`]
/// require no signature (the source account's transaction signature already
/// covers them) and are returned unchanged. Entries addressed to a contract
/// (custom account abstraction) have no key for this function to sign with
/// and are also returned unchanged — the caller is expected to recognize
/// that case via [`needs_signature`] first.
pub fn authorize_entry<S: Signer>(
    entry: &SorobanAuthorizationEntry,
    signer: &S,
    valid_until_ledger_seq: u32,
    network_passphrase: &str,
) -> Result<SorobanAuthorizationEntry, String> {
    let mut entry = entry.clone();
    let SorobanCredentials::Address(ref mut credentials) = entry.credentials else {
        return Ok(entry);
    };

    credentials.signature_expiration_ledger = valid_until_ledger_seq;

    let network_id = hash(network_passphrase);
    let preimage = HashIdPreimage::SorobanAuthorization(HashIdPreimageSorobanAuthorization {
        network_id: XdrHash(network_id),
        nonce: credentials.nonce,
        signature_expiration_ledger: credentials.signature_expiration_ledger,
        invocation: entry.root_invocation.clone(),
    });
    let payload = preimage
        .to_xdr(Limits::none())
        .map_err(|e| e.to_string())?;

    let signed = signer.sign_auth_entry(&payload)?;

    let credential_key = account_address_bytes(&credentials.address)
        .ok_or_else(|| "entry credentials are not an account address".to_string())?;
    let verifier = crate::keypair::Keypair::new(Some(credential_key), None)
        .map_err(|e| e.to_string())?;
    if !verifier.verify(&hash(&payload), &signed.signature) {
        return Err("signature verification failed for authorization entry".to_string());
    }

    let public_key_key = ScVal::Symbol(ScSymbol(
        "public_key".try_into().map_err(|_: crate::xdr::Error| "invalid symbol".to_string())?,
    ));
    let signature_key = ScVal::Symbol(ScSymbol(
        "signature".try_into().map_err(|_: crate::xdr::Error| "invalid symbol".to_string())?,
    ));
    let public_key_val = ScVal::Bytes(
        signed
            .public_key
            .to_vec()
            .try_into()
            .map_err(|_| "public key encoding failed".to_string())?,
    );
    let signature_val = ScVal::Bytes(
        signed
            .signature
            .to_vec()
            .try_into()
            .map_err(|_| "signature encoding failed".to_string())?,
    );

    let map: ScMap = vec![
        ScMapEntry {
            key: public_key_key,
            val: public_key_val,
        },
        ScMapEntry {
            key: signature_key,
            val: signature_val,
        },
    ]
    .try_into()
    .map_err(|e: crate::xdr::Error| e.to_string())?;

    credentials.signature = ScVal::Vec(Some(
        vec![ScVal::Map(Some(map))]
            .try_into()
            .map_err(|e: crate::xdr::Error| e.to_string())?,
    ));

    Ok(entry)
}

/// True if this entry's address-credentials belong to the given ed25519
/// public key and still need a signature attached.
pub fn needs_signature(entry: &SorobanAuthorizationEntry, public_key: &[u8; 32]) -> bool {
    match &entry.credentials {
        SorobanCredentials::Address(SorobanAddressCredentials { address, .. }) => {
            account_address_bytes(address).as_ref() == Some(public_key)
        }
        SorobanCredentials::SourceAccount => false,
    }
}

/// Builds the `SorobanAuthorizedInvocation` tree's root for a direct
/// contract-function invocation with no sub-invocations — the common case
/// for simple calls that don't themselves call into other authorized
/// contracts.
pub fn root_invocation_for_leaf(
    function: crate::xdr::SorobanAuthorizedFunction,
) -> SorobanAuthorizedInvocation {
    SorobanAuthorizedInvocation {
        function,
        sub_invocations: crate::xdr::VecM::default(),
    }
}
