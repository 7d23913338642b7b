//! Transaction construction, signing, broadcasting and history.

use crate::client::{PendingCall, StealthClient};
use crate::rpc::Params;
use crate::types::{
    amounts_value, join_list, outpoints_value, prev_txs_value, AddressAmounts, OutPoint, PrevTx,
};

impl StealthClient {
    /// Build an unsigned raw transaction spending `inputs` to `outputs`.
    pub fn createrawtransaction(
        &self,
        inputs: &[OutPoint],
        outputs: &AddressAmounts,
    ) -> PendingCall {
        self.request(
            "createrawtransaction",
            Params::new()
                .arg(outpoints_value(inputs))
                .arg(amounts_value(outputs)),
        )
    }

    /// Decode a hex-serialized transaction.
    pub fn decoderawtransaction(&self, hex: &str) -> PendingCall {
        self.request("decoderawtransaction", Params::new().arg(hex))
    }

    /// Raw transaction by id; non-zero `verbose` (default 0) returns the
    /// decoded object instead of hex.
    pub fn getrawtransaction(&self, txid: &str, verbose: Option<u32>) -> PendingCall {
        self.request(
            "getrawtransaction",
            Params::new().arg(txid).arg(verbose.unwrap_or(0)),
        )
    }

    /// Wallet transaction by id.
    pub fn gettransaction(&self, txid: &str) -> PendingCall {
        self.request("gettransaction", Params::new().arg(txid))
    }

    /// Wallet transactions since `block_hash` (default `""`, i.e. all).
    pub fn listsinceblock(
        &self,
        block_hash: Option<&str>,
        target_confirmations: Option<u32>,
    ) -> PendingCall {
        self.request(
            "listsinceblock",
            Params::new()
                .arg(block_hash.unwrap_or(""))
                .arg(target_confirmations.unwrap_or(0)),
        )
    }

    /// Most recent wallet transactions.
    ///
    /// # Arguments
    ///
    /// * `account` - account filter (default `""`)
    /// * `count` - number of transactions (default 10)
    /// * `from` - number to skip (default 0)
    pub fn listtransactions(
        &self,
        account: Option<&str>,
        count: Option<u32>,
        from: Option<u32>,
    ) -> PendingCall {
        self.request(
            "listtransactions",
            Params::new()
                .arg(account.unwrap_or(""))
                .arg(count.unwrap_or(10))
                .arg(from.unwrap_or(0)),
        )
    }

    /// Unspent outputs with confirmations in `[min_conf, max_conf]`
    /// (defaults 1 and 9999999), optionally restricted to `tx_outs`, which
    /// are sent comma-joined.
    pub fn listunspent(
        &self,
        min_conf: Option<u32>,
        max_conf: Option<u32>,
        tx_outs: &[&str],
    ) -> PendingCall {
        self.request(
            "listunspent",
            Params::new()
                .arg(min_conf.unwrap_or(1))
                .arg(max_conf.unwrap_or(9_999_999))
                .arg(join_list(tx_outs)),
        )
    }

    /// Move funds between wallet accounts. `min_conf` defaults to 1 and
    /// `comment` to `""`.
    pub fn r#move(
        &self,
        from_account: &str,
        to_account: &str,
        amount: f64,
        min_conf: Option<u32>,
        comment: Option<&str>,
    ) -> PendingCall {
        self.request(
            "move",
            Params::new()
                .arg(from_account)
                .arg(to_account)
                .arg(amount)
                .arg(min_conf.unwrap_or(1))
                .arg(comment.unwrap_or("")),
        )
    }

    /// Rebroadcast wallet transactions that are not yet in a block.
    pub fn resendtx(&self) -> PendingCall {
        self.request("resendtx", Params::new())
    }

    /// Send `amount` from an account to an address. `min_conf` defaults to
    /// 1 and both comments to `""`.
    pub fn sendfrom(
        &self,
        from_account: &str,
        to_address: &str,
        amount: f64,
        min_conf: Option<u32>,
        comment: Option<&str>,
        comment_to: Option<&str>,
    ) -> PendingCall {
        self.request(
            "sendfrom",
            Params::new()
                .arg(from_account)
                .arg(to_address)
                .arg(amount)
                .arg(min_conf.unwrap_or(1))
                .arg(comment.unwrap_or(""))
                .arg(comment_to.unwrap_or("")),
        )
    }

    /// Pay several addresses from one account. The address/amount map is
    /// sent as a JSON-encoded string.
    pub fn sendmany(
        &self,
        from_account: &str,
        amounts: &AddressAmounts,
        min_conf: Option<u32>,
        comment: Option<&str>,
    ) -> PendingCall {
        self.request(
            "sendmany",
            Params::new()
                .arg(from_account)
                .arg(amounts_value(amounts).to_string())
                .arg(min_conf.unwrap_or(1))
                .arg(comment.unwrap_or("")),
        )
    }

    /// Broadcast a signed hex transaction.
    pub fn sendrawtransaction(&self, hex: &str) -> PendingCall {
        self.request("sendrawtransaction", Params::new().arg(hex))
    }

    /// Send `amount` to `address`; comments default to `""`.
    pub fn sendtoaddress(
        &self,
        address: &str,
        amount: f64,
        comment: Option<&str>,
        comment_to: Option<&str>,
    ) -> PendingCall {
        self.request(
            "sendtoaddress",
            Params::new()
                .arg(address)
                .arg(amount)
                .arg(comment.unwrap_or(""))
                .arg(comment_to.unwrap_or("")),
        )
    }

    /// Send to a stealth address. `narration` is stored encrypted in the
    /// transaction; the comments stay local to the wallet.
    pub fn sendtostealthaddress(
        &self,
        address: &str,
        amount: f64,
        narration: Option<&str>,
        comment: Option<&str>,
        comment_to: Option<&str>,
    ) -> PendingCall {
        self.request(
            "sendtostealthaddress",
            Params::new()
                .arg(address)
                .arg(amount)
                .arg(narration.unwrap_or(""))
                .arg(comment.unwrap_or(""))
                .arg(comment_to.unwrap_or("")),
        )
    }

    /// Sign a raw transaction.
    ///
    /// `prev_txs` is sent as a JSON-encoded string, `private_keys`
    /// comma-joined, and `sighash_type` defaults to `"ALL"`.
    pub fn signrawtransaction(
        &self,
        hex: &str,
        prev_txs: &[PrevTx],
        private_keys: &[&str],
        sighash_type: Option<&str>,
    ) -> PendingCall {
        self.request(
            "signrawtransaction",
            Params::new()
                .arg(hex)
                .arg(prev_txs_value(prev_txs).to_string())
                .arg(join_list(private_keys))
                .arg(sighash_type.unwrap_or("ALL")),
        )
    }
}
