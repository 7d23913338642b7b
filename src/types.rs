//! Structured arguments accepted by some daemon calls.
//!
//! Most calls take scalars; these types cover the handful that take lists of
//! outpoints or address/amount maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Destination address to amount (in XST).
pub type AddressAmounts = BTreeMap<String, f64>;

/// A previous transaction output, `{"txid": ..., "vout": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: String,
    pub vout: u32,
}

impl OutPoint {
    /// Outpoint `vout` of transaction `txid`.
    pub fn new(txid: impl Into<String>, vout: u32) -> Self {
        Self {
            txid: txid.into(),
            vout,
        }
    }
}

impl From<&OutPoint> for Value {
    fn from(outpoint: &OutPoint) -> Self {
        json!({ "txid": outpoint.txid, "vout": outpoint.vout })
    }
}

/// Previous output description used when signing a raw transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrevTx {
    pub txid: String,
    pub vout: u32,
    pub script_pub_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeem_script: Option<String>,
}

impl From<&PrevTx> for Value {
    fn from(prev: &PrevTx) -> Self {
        let mut map = Map::new();
        map.insert("txid".to_string(), Value::from(prev.txid.as_str()));
        map.insert("vout".to_string(), Value::from(prev.vout));
        map.insert(
            "scriptPubKey".to_string(),
            Value::from(prev.script_pub_key.as_str()),
        );
        if let Some(redeem_script) = &prev.redeem_script {
            map.insert("redeemScript".to_string(), Value::from(redeem_script.as_str()));
        }
        Value::Object(map)
    }
}

/// Optional trailing arguments of `purchasestaker`.
///
/// When `delegate` and `controller` are unset the daemon takes them from the
/// owner key; when `amount` is unset it is computed from the current price.
/// Either the owner key alone or all three keys plus `payout` must be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseStakerOptions {
    pub amount: Option<f64>,
    /// Compressed delegate pubkey.
    pub delegate: Option<String>,
    /// Compressed controller pubkey.
    pub controller: Option<String>,
    /// Delegate share of block rewards, in percent.
    pub payout: Option<f64>,
}

/// `[{"txid": ..., "vout": n}, ...]`
pub(crate) fn outpoints_value(outpoints: &[OutPoint]) -> Value {
    Value::Array(outpoints.iter().map(Value::from).collect())
}

/// `[{"txid": ..., "vout": n, "scriptPubKey": ...}, ...]`
pub(crate) fn prev_txs_value(prev_txs: &[PrevTx]) -> Value {
    Value::Array(prev_txs.iter().map(Value::from).collect())
}

/// `{"address": amount, ...}`
pub(crate) fn amounts_value(amounts: &AddressAmounts) -> Value {
    Value::Object(
        amounts
            .iter()
            .map(|(address, amount)| (address.clone(), Value::from(*amount)))
            .collect(),
    )
}

/// Comma-joined list, as the daemon expects for key and outpoint lists.
pub(crate) fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
