//! Wallet, account and key management.

use serde_json::Value;

use crate::client::{PendingCall, StealthClient};
use crate::rpc::Params;
use crate::types::join_list;

impl StealthClient {
    /// Add an n-of-m multisig address to the wallet.
    ///
    /// `keys` are addresses or hex pubkeys and are sent comma-joined.
    /// `account` defaults to `""`.
    pub fn addmultisigaddress(
        &self,
        n_required: u32,
        keys: &[&str],
        account: Option<&str>,
    ) -> PendingCall {
        self.request(
            "addmultisigaddress",
            Params::new()
                .arg(n_required)
                .arg(join_list(keys))
                .arg(account.unwrap_or("")),
        )
    }

    /// Copy the wallet file to `destination` on the daemon host.
    pub fn backupwallet(&self, destination: &str) -> PendingCall {
        self.request("backupwallet", Params::new().arg(destination))
    }

    /// Check the wallet for integrity problems.
    pub fn checkwallet(&self) -> PendingCall {
        self.request("checkwallet", Params::new())
    }

    /// Remove all transactions from the wallet.
    pub fn clearwallettransactions(&self) -> PendingCall {
        self.request("clearwallettransactions", Params::new())
    }

    /// Private key for `address`, in wallet import format.
    ///
    /// Sent as `dumpprivkey`. Earlier clients sent this call as
    /// `disablestaker`.
    pub fn dumpprivkey(&self, address: &str) -> PendingCall {
        self.request("dumpprivkey", Params::new().arg(address))
    }

    /// Encrypt the wallet with `passphrase`. The daemon stops afterwards.
    pub fn encryptwallet(&self, passphrase: &str) -> PendingCall {
        self.request("encryptwallet", Params::new().arg(passphrase))
    }

    /// Account that `address` belongs to.
    pub fn getaccount(&self, address: &str) -> PendingCall {
        self.request("getaccount", Params::new().arg(address))
    }

    /// Current receiving address of `account`.
    pub fn getaccountaddress(&self, account: &str) -> PendingCall {
        self.request("getaccountaddress", Params::new().arg(account))
    }

    /// All addresses of `account`.
    pub fn getaddressesbyaccount(&self, account: &str) -> PendingCall {
        self.request("getaddressesbyaccount", Params::new().arg(account))
    }

    /// Balance with at least `min_conf` confirmations (default 1).
    ///
    /// `account` is `"*"` for every account. When `None` it is left out and
    /// the daemon reports the whole wallet.
    pub fn getbalance(&self, account: Option<&str>, min_conf: Option<u32>) -> PendingCall {
        self.request(
            "getbalance",
            Params::new().opt(account).arg(min_conf.unwrap_or(1)),
        )
    }

    /// Derive child `child` of an extended key. `network_byte` is only sent
    /// when given.
    pub fn getchildkey(
        &self,
        extended_key: &str,
        child: u32,
        network_byte: Option<u8>,
    ) -> PendingCall {
        self.request(
            "getchildkey",
            Params::new().arg(extended_key).arg(child).opt(network_byte),
        )
    }

    /// HD account details for `extended_key`.
    ///
    /// The key is always forwarded. Earlier clients dropped it and sent no
    /// params.
    pub fn gethdaccount(&self, extended_key: &str) -> PendingCall {
        self.request("gethdaccount", Params::new().arg(extended_key))
    }

    /// New receiving address, in `account` when given and non-empty.
    pub fn getnewaddress(&self, account: Option<&str>) -> PendingCall {
        self.request("getnewaddress", Params::new().opt_str(account))
    }

    /// New public key, in `account` when given and non-empty.
    pub fn getnewpubkey(&self, account: Option<&str>) -> PendingCall {
        self.request("getnewpubkey", Params::new().opt_str(account))
    }

    /// New stealth address, labelled `label` when given and non-empty.
    pub fn getnewstealthaddress(&self, label: Option<&str>) -> PendingCall {
        self.request("getnewstealthaddress", Params::new().opt_str(label))
    }

    /// Total received by `account` with at least `min_conf` confirmations
    /// (default 1).
    pub fn getreceivedbyaccount(&self, account: &str, min_conf: Option<u32>) -> PendingCall {
        self.request(
            "getreceivedbyaccount",
            Params::new().arg(account).arg(min_conf.unwrap_or(1)),
        )
    }

    /// Total received by `address` with at least `min_conf` confirmations
    /// (default 1).
    pub fn getreceivedbyaddress(&self, address: &str, min_conf: Option<u32>) -> PendingCall {
        self.request(
            "getreceivedbyaddress",
            Params::new().arg(address).arg(min_conf.unwrap_or(1)),
        )
    }

    /// Import a WIF private key under `label` (default `""`).
    ///
    /// Sent as `importprivkey`. Earlier clients sent this call as
    /// `disablestaker`.
    pub fn importprivkey(&self, private_key: &str, label: Option<&str>) -> PendingCall {
        self.request(
            "importprivkey",
            Params::new().arg(private_key).arg(label.unwrap_or("")),
        )
    }

    /// Import an owned stealth address from its scan and spend secrets,
    /// labelled `label` (default `""`).
    pub fn importstealthaddress(
        &self,
        scan_secret: &str,
        spend_secret: &str,
        label: Option<&str>,
    ) -> PendingCall {
        self.request(
            "importstealthaddress",
            Params::new()
                .arg(scan_secret)
                .arg(spend_secret)
                .arg(label.unwrap_or("")),
        )
    }

    /// Refill the key pool. An unset size is sent as `""`, which the daemon
    /// treats as its configured default.
    pub fn keypoolrefill(&self, new_size: Option<u32>) -> PendingCall {
        self.request("keypoolrefill", Params::new().arg(or_empty(new_size)))
    }

    /// Balance per account, counting payments with at least `min_conf`
    /// confirmations (default 1).
    pub fn listaccounts(&self, min_conf: Option<u32>) -> PendingCall {
        self.request("listaccounts", Params::new().arg(min_conf.unwrap_or(1)))
    }

    /// Addresses grouped by common ownership.
    pub fn listaddressgroupings(&self) -> PendingCall {
        self.request("listaddressgroupings", Params::new())
    }

    /// Amounts received per account.
    ///
    /// # Arguments
    ///
    /// * `min_conf` - minimum confirmations before payments count (default 1)
    /// * `include_empty` - include accounts that received nothing
    pub fn listreceivedbyaccount(
        &self,
        min_conf: Option<u32>,
        include_empty: bool,
    ) -> PendingCall {
        self.request(
            "listreceivedbyaccount",
            Params::new().arg(min_conf.unwrap_or(1)).arg(include_empty),
        )
    }

    /// Amounts received per address; arguments as
    /// [`StealthClient::listreceivedbyaccount`].
    pub fn listreceivedbyaddress(
        &self,
        min_conf: Option<u32>,
        include_empty: bool,
    ) -> PendingCall {
        self.request(
            "listreceivedbyaddress",
            Params::new().arg(min_conf.unwrap_or(1)).arg(include_empty),
        )
    }

    /// Wallet stealth addresses, with secrets when `show_secrets` is set.
    /// An unset flag is sent as `""`.
    pub fn liststealthaddresses(&self, show_secrets: Option<bool>) -> PendingCall {
        self.request(
            "liststealthaddresses",
            Params::new().arg(or_empty(show_secrets)),
        )
    }

    /// Fix the problems reported by [`StealthClient::checkwallet`].
    pub fn repairwallet(&self) -> PendingCall {
        self.request("repairwallet", Params::new())
    }

    /// Reserve (or release) balance from staking. Both arguments are only
    /// sent when given.
    pub fn reservebalance(&self, reserve: Option<bool>, amount: Option<f64>) -> PendingCall {
        self.request("reservebalance", Params::new().opt(reserve).opt(amount))
    }

    /// Rescan for wallet transactions from `from_height` (default 0).
    pub fn scanforalltxns(&self, from_height: Option<u64>) -> PendingCall {
        self.request(
            "scanforalltxns",
            Params::new().arg(from_height.unwrap_or(0)),
        )
    }

    /// Rescan for stealth transactions from `from_height` (default 0).
    pub fn scanforstealthtxns(&self, from_height: Option<u64>) -> PendingCall {
        self.request(
            "scanforstealthtxns",
            Params::new().arg(from_height.unwrap_or(0)),
        )
    }

    /// Move `address` into `account`.
    pub fn setaccount(&self, address: &str, account: &str) -> PendingCall {
        self.request("setaccount", Params::new().arg(address).arg(account))
    }

    /// Transaction fee per kB, in XST.
    pub fn settxfee(&self, amount: f64) -> PendingCall {
        self.request("settxfee", Params::new().arg(amount))
    }

    /// Sign `message` with the key of `address`.
    pub fn signmessage(&self, address: &str, message: &str) -> PendingCall {
        self.request("signmessage", Params::new().arg(address).arg(message))
    }

    /// Check a signature made by [`StealthClient::signmessage`].
    pub fn verifymessage(&self, address: &str, signature: &str, message: &str) -> PendingCall {
        self.request(
            "verifymessage",
            Params::new().arg(address).arg(signature).arg(message),
        )
    }
}

/// The value itself, or `""` when unset.
fn or_empty<T: Into<Value>>(value: Option<T>) -> Value {
    value.map(Into::into).unwrap_or_else(|| Value::from(""))
}
