//! JSON-RPC client for a Soroban RPC endpoint.
//!
//! The transport itself is out of scope here — callers plug in whatever
//! HTTP stack they already have (`reqwest`, `hyper`, a test double) by
//! implementing [`HttpClient`]. [`Server`] only knows how to shape
//! JSON-RPC envelopes and parse the typed responses described below; it
//! never opens a socket itself.
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::xdr::{self, Limits, ReadXdr, SorobanAuthorizationEntry, TransactionEnvelope, WriteXdr};

/// Transport seam: one JSON-RPC round trip, request body in, raw JSON
/// response out. Implementors own connection pooling, retries at the
/// transport level, TLS, and auth headers; `Server` only calls this once
/// per RPC method.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: Value) -> std::result::Result<Value, String>;
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
struct JsonRpcResponse<T> {
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetHealthResponse {
    pub status: String,
    #[serde(rename = "latestLedger", default)]
    pub latest_ledger: u32,
    #[serde(rename = "oldestLedger", default)]
    pub oldest_ledger: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetNetworkResponse {
    #[serde(rename = "friendbotUrl", skip_serializing_if = "Option::is_none", default)]
    pub friendbot_url: Option<String>,
    pub passphrase: String,
    #[serde(rename = "protocolVersion")]
    pub protocol_version: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetLatestLedgerResponse {
    pub id: String,
    #[serde(rename = "protocolVersion")]
    pub protocol_version: u32,
    pub sequence: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LedgerEntryResult {
    pub key: String,
    pub xdr: String,
    #[serde(rename = "lastModifiedLedgerSeq")]
    pub last_modified_ledger: u32,
    #[serde(rename = "liveUntilLedgerSeq", skip_serializing_if = "Option::is_none", default)]
    pub live_until_ledger_seq: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GetLedgerEntriesResponse {
    #[serde(default)]
    pub entries: Vec<LedgerEntryResult>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Cost {
    #[serde(rename = "cpuInsns", default)]
    pub cpu_insns: String,
    #[serde(rename = "memBytes", default)]
    pub mem_bytes: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SimulateHostFunctionResultRaw {
    #[serde(default)]
    pub auth: Vec<String>,
    pub xdr: String,
}

#[derive(Debug, Clone)]
pub struct SimulateHostFunctionResult {
    pub auth: Vec<SorobanAuthorizationEntry>,
    pub xdr: xdr::ScVal,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RestorePreamble {
    #[serde(rename = "transactionData")]
    pub transaction_data: String,
    #[serde(rename = "minResourceFee")]
    pub min_resource_fee: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SimulateTransactionResponse {
    #[serde(rename = "minResourceFee", default)]
    pub min_resource_fee: String,
    #[serde(default)]
    pub cost: Cost,
    #[serde(default)]
    pub results: Vec<SimulateHostFunctionResultRaw>,
    #[serde(rename = "transactionData", default)]
    pub transaction_data: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(rename = "restorePreamble", skip_serializing_if = "Option::is_none", default)]
    pub restore_preamble: Option<RestorePreamble>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl SimulateTransactionResponse {
    pub fn parsed_results(&self) -> Result<Vec<SimulateHostFunctionResult>> {
        self.results
            .iter()
            .map(|r| {
                Ok(SimulateHostFunctionResult {
                    auth: r
                        .auth
                        .iter()
                        .map(|a| SorobanAuthorizationEntry::from_xdr_base64(a, Limits::none()))
                        .collect::<std::result::Result<_, _>>()?,
                    xdr: xdr::ScVal::from_xdr_base64(&r.xdr, Limits::none())?,
                })
            })
            .collect()
    }

    pub fn parsed_transaction_data(&self) -> Result<xdr::SorobanTransactionData> {
        Ok(xdr::SorobanTransactionData::from_xdr_base64(
            &self.transaction_data,
            Limits::none(),
        )?)
    }

    pub fn min_resource_fee(&self) -> i64 {
        self.min_resource_fee.parse().unwrap_or(0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SendTransactionResponse {
    pub hash: String,
    pub status: String,
    #[serde(rename = "errorResultXdr", skip_serializing_if = "Option::is_none", default)]
    pub error_result_xdr: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetTransactionResponseRaw {
    pub status: String,
    #[serde(rename = "envelopeXdr", skip_serializing_if = "Option::is_none", default)]
    pub envelope_xdr: Option<String>,
    #[serde(rename = "resultXdr", skip_serializing_if = "Option::is_none", default)]
    pub result_xdr: Option<String>,
    #[serde(rename = "resultMetaXdr", skip_serializing_if = "Option::is_none", default)]
    pub result_meta_xdr: Option<String>,
    #[serde(rename = "latestLedger", default)]
    pub latest_ledger: u32,
}

#[derive(Debug, Clone)]
pub struct GetTransactionResponse {
    pub status: String,
    pub envelope: Option<TransactionEnvelope>,
    pub result: Option<xdr::TransactionResult>,
    pub result_meta: Option<xdr::TransactionMeta>,
    pub latest_ledger: u32,
}

impl TryFrom<GetTransactionResponseRaw> for GetTransactionResponse {
    type Error = Error;

    fn try_from(raw: GetTransactionResponseRaw) -> Result<Self> {
        Ok(GetTransactionResponse {
            status: raw.status,
            envelope: raw
                .envelope_xdr
                .map(|v| TransactionEnvelope::from_xdr_base64(v, Limits::none()))
                .transpose()?,
            result: raw
                .result_xdr
                .map(|v| xdr::TransactionResult::from_xdr_base64(v, Limits::none()))
                .transpose()?,
            result_meta: raw
                .result_meta_xdr
                .map(|v| xdr::TransactionMeta::from_xdr_base64(v, Limits::none()))
                .transpose()?,
            latest_ledger: raw.latest_ledger,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EventFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(rename = "contractIds", skip_serializing_if = "Vec::is_empty", default)]
    pub contract_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub topics: Vec<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub ledger: String,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: String,
    #[serde(rename = "contractId")]
    pub contract_id: String,
    #[serde(rename = "pagingToken")]
    pub paging_token: String,
    pub topic: Vec<String>,
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetEventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: u32,
}

/// Thin JSON-RPC wrapper over a Soroban RPC endpoint.
///
/// Holds no connection state of its own beyond the endpoint URL and the
/// [`HttpClient`] used to reach it; every call is a single request/response
/// round trip, matching the stateless RPC surface the protocol exposes.
pub struct Server {
    url: String,
    http: Box<dyn HttpClient>,
}

impl Server {
    pub fn new(url: impl Into<String>, http: Box<dyn HttpClient>) -> Self {
        Server {
            url: url.into(),
            http,
        }
    }

    async fn call<P: Serialize, T: DeserializeOwned>(&self, method: &'static str, params: P) -> Result<T> {
        tracing::trace!(method, url = %self.url, "rpc call");

        let body = serde_json::to_value(JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: serde_json::to_value(params).map_err(|e| Error::network(e.to_string()))?,
        })
        .map_err(|e| Error::network(e.to_string()))?;

        let raw = self
            .http
            .post_json(&self.url, body)
            .await
            .map_err(Error::network)?;

        let parsed: JsonRpcResponse<T> =
            serde_json::from_value(raw).map_err(|e| Error::network(e.to_string()))?;

        match (parsed.result, parsed.error) {
            (Some(result), _) => Ok(result),
            (None, Some(err)) => {
                tracing::error!(method, code = err.code, message = %err.message, "rpc call returned an error");
                Err(Error::Rpc {
                    code: err.code,
                    message: err.message,
                    data: err.data,
                })
            }
            (None, None) => Err(Error::network("empty jsonrpc response")),
        }
    }

    pub async fn get_health(&self) -> Result<GetHealthResponse> {
        self.call("getHealth", Value::Null).await
    }

    pub async fn get_network(&self) -> Result<GetNetworkResponse> {
        self.call("getNetwork", Value::Null).await
    }

    pub async fn get_latest_ledger(&self) -> Result<GetLatestLedgerResponse> {
        self.call("getLatestLedger", Value::Null).await
    }

    pub async fn get_ledger_entries(&self, keys: &[String]) -> Result<GetLedgerEntriesResponse> {
        self.call("getLedgerEntries", serde_json::json!({ "keys": keys }))
            .await
    }

    pub async fn simulate_transaction(
        &self,
        tx: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse> {
        let base64_tx = tx.to_xdr_base64(Limits::none())?;
        let response: SimulateTransactionResponse = self
            .call("simulateTransaction", serde_json::json!({ "transaction": base64_tx }))
            .await?;
        match &response.error {
            None => Ok(response),
            Some(e) => Err(Error::SimulationFailed(e.clone())),
        }
    }

    pub async fn send_transaction(&self, tx: &TransactionEnvelope) -> Result<SendTransactionResponse> {
        let base64_tx = tx.to_xdr_base64(Limits::none())?;
        let response: SendTransactionResponse = self
            .call("sendTransaction", serde_json::json!({ "transaction": base64_tx }))
            .await?;

        // Only PENDING hands off to the poll loop; DUPLICATE, TRY_AGAIN_LATER
        // and ERROR are all terminal failures here.
        if response.status != "PENDING" {
            let status = if response.status == "ERROR" {
                response
                    .error_result_xdr
                    .clone()
                    .unwrap_or_else(|| response.status.clone())
            } else {
                response.status.clone()
            };
            return Err(Error::SendTransactionFailed { status });
        }
        Ok(response)
    }

    pub async fn get_transaction(&self, hash: &str) -> Result<GetTransactionResponse> {
        let raw: GetTransactionResponseRaw = self
            .call("getTransaction", serde_json::json!({ "hash": hash }))
            .await?;
        raw.try_into()
    }

    pub async fn get_events(&self, filters: &[EventFilter], start_ledger: Option<u32>) -> Result<GetEventsResponse> {
        self.call(
            "getEvents",
            serde_json::json!({ "startLedger": start_ledger, "filters": filters }),
        )
        .await
    }
}
