//! qPoS staker registry: purchase, key management and balances.
//!
//! Registry operations spend a wallet output identified by `txid`/`vout`
//! and name the staker by its (case-insensitive) alias.

use crate::client::{PendingCall, StealthClient};
use crate::rpc::Params;
use crate::types::PurchaseStakerOptions;

impl StealthClient {
    /// Claim a staker's qPoS balance to a wallet output.
    pub fn claimqposbalance(&self, txid: &str, vout: u32, amount: f64) -> PendingCall {
        self.request(
            "claimqposbalance",
            Params::new().arg(txid).arg(vout).arg(amount),
        )
    }

    /// Disable a staker so it stops producing blocks.
    pub fn disablestaker(&self, txid: &str, vout: u32, alias: &str) -> PendingCall {
        self.request("disablestaker", registry_params(txid, vout, alias))
    }

    /// Re-enable a disabled staker.
    ///
    /// Sent as `enablestaker`. Earlier clients sent this call as
    /// `disablestaker`.
    pub fn enablestaker(&self, txid: &str, vout: u32, alias: &str) -> PendingCall {
        self.request("enablestaker", registry_params(txid, vout, alias))
    }

    /// qPoS balance claimable by `pubkey`.
    pub fn getqposbalance(&self, pubkey: &str) -> PendingCall {
        self.request("getqposbalance", Params::new().arg(pubkey))
    }

    /// qPoS state at `height`, or at the tip when unset.
    pub fn getqposinfo(&self, height: Option<u64>) -> PendingCall {
        self.request("getqposinfo", Params::new().opt(height))
    }

    /// Numeric staker id for `alias`.
    pub fn getstakerid(&self, alias: &str) -> PendingCall {
        self.request("getstakerid", Params::new().arg(alias))
    }

    /// Registry entry for `alias`.
    pub fn getstakerinfo(&self, alias: &str) -> PendingCall {
        self.request("getstakerinfo", Params::new().arg(alias))
    }

    /// Current price of a new staker, in XST.
    pub fn getstakerprice(&self) -> PendingCall {
        self.request("getstakerprice", Params::new())
    }

    /// Register a new staker under `alias`, owned by `owner` (compressed
    /// pubkey). Unset fields of `options` are left out and later ones move
    /// up, so the daemon sees only what was given.
    pub fn purchasestaker(
        &self,
        txid: &str,
        vout: u32,
        alias: &str,
        owner: &str,
        options: &PurchaseStakerOptions,
    ) -> PendingCall {
        self.request(
            "purchasestaker",
            registry_params(txid, vout, alias)
                .arg(owner)
                .opt(options.amount)
                .opt_str(options.delegate.as_deref())
                .opt_str(options.controller.as_deref())
                .opt(options.payout),
        )
    }

    /// Replace the controller key of a staker.
    pub fn setstakercontroller(
        &self,
        txid: &str,
        vout: u32,
        alias: &str,
        controller: &str,
    ) -> PendingCall {
        self.request(
            "setstakercontroller",
            registry_params(txid, vout, alias).arg(controller),
        )
    }

    /// Set the delegate key and its `payout` share, in millipercent.
    pub fn setstakerdelegate(
        &self,
        txid: &str,
        vout: u32,
        alias: &str,
        delegate: &str,
        payout: u32,
    ) -> PendingCall {
        self.request(
            "setstakerdelegate",
            registry_params(txid, vout, alias).arg(delegate).arg(payout),
        )
    }

    /// Set the metadata `key` of a staker to `value`.
    pub fn setstakermeta(
        &self,
        txid: &str,
        vout: u32,
        alias: &str,
        key: &str,
        value: &str,
    ) -> PendingCall {
        self.request(
            "setstakermeta",
            registry_params(txid, vout, alias).arg(key).arg(value),
        )
    }

    /// Transfer ownership of a staker. The daemon requires the literal
    /// acknowledgement `"iunderstand"`, which is always appended.
    pub fn setstakerowner(&self, txid: &str, vout: u32, alias: &str, owner: &str) -> PendingCall {
        self.request(
            "setstakerowner",
            registry_params(txid, vout, alias)
                .arg(owner)
                .arg(OWNER_TRANSFER_ACK),
        )
    }
}

const OWNER_TRANSFER_ACK: &str = "iunderstand";

fn registry_params(txid: &str, vout: u32, alias: &str) -> Params {
    Params::new().arg(txid).arg(vout).arg(alias)
}

#[cfg(test)]
mod tests {
    use crate::client::test_util::{recording_client, sent};
    use crate::types::PurchaseStakerOptions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_enable_and_disable_staker_methods() {
        let (client, transport) = recording_client();

        let (method, params) = sent(client.enablestaker("aa11", 1, "alice"), &transport).await;
        assert_eq!(method, "enablestaker");
        assert_eq!(params, vec![json!("aa11"), json!(1), json!("alice")]);

        let (method, _) = sent(client.disablestaker("aa11", 1, "alice"), &transport).await;
        assert_eq!(method, "disablestaker");
    }

    #[tokio::test]
    async fn test_purchasestaker_owner_only() {
        let (client, transport) = recording_client();
        let (_, params) = sent(
            client.purchasestaker("aa11", 0, "alice", "02owner", &PurchaseStakerOptions::default()),
            &transport,
        )
        .await;
        assert_eq!(
            params,
            vec![json!("aa11"), json!(0), json!("alice"), json!("02owner")]
        );
    }

    #[tokio::test]
    async fn test_purchasestaker_all_keys() {
        let (client, transport) = recording_client();
        let options = PurchaseStakerOptions {
            amount: Some(0.0),
            delegate: Some("02delegate".to_string()),
            controller: Some("03controller".to_string()),
            payout: Some(12.5),
        };

        let (_, params) = sent(
            client.purchasestaker("aa11", 0, "alice", "02owner", &options),
            &transport,
        )
        .await;
        assert_eq!(
            params,
            vec![
                json!("aa11"),
                json!(0),
                json!("alice"),
                json!("02owner"),
                json!(0.0),
                json!("02delegate"),
                json!("03controller"),
                json!(12.5),
            ]
        );
    }

    #[tokio::test]
    async fn test_setstakerowner_appends_ack() {
        let (client, transport) = recording_client();
        let (_, params) = sent(
            client.setstakerowner("aa11", 2, "alice", "02new"),
            &transport,
        )
        .await;
        assert_eq!(params.last(), Some(&json!("iunderstand")));
        assert_eq!(params.len(), 5);
    }

    #[tokio::test]
    async fn test_getqposinfo_height() {
        let (client, transport) = recording_client();

        let (_, params) = sent(client.getqposinfo(None), &transport).await;
        assert!(params.is_empty());

        let (_, params) = sent(client.getqposinfo(Some(0)), &transport).await;
        assert_eq!(params, vec![json!(0)]);
    }
}
