//! Node control, peer and utility calls.

use crate::client::{PendingCall, StealthClient};
use crate::rpc::Params;

impl StealthClient {
    /// General node and wallet state.
    pub fn getinfo(&self) -> PendingCall {
        self.request("getinfo", Params::new())
    }

    /// Number of connected peers.
    pub fn getconnectioncount(&self) -> PendingCall {
        self.request("getconnectioncount", Params::new())
    }

    /// Details of each connected peer.
    pub fn getpeerinfo(&self) -> PendingCall {
        self.request("getpeerinfo", Params::new())
    }

    /// Network-adjusted time, in unix seconds.
    pub fn getadjustedtime(&self) -> PendingCall {
        self.request("getadjustedtime", Params::new())
    }

    /// Command list, or help for `command` when given and non-empty.
    pub fn help(&self, command: Option<&str>) -> PendingCall {
        self.request("help", Params::new().opt_str(command))
    }

    /// Stop the daemon. `detach` leaves the process detached from the
    /// controlling terminal while shutting down.
    pub fn stop(&self, detach: bool) -> PendingCall {
        self.request("stop", Params::new().arg(detach))
    }

    /// Leave replay mode.
    pub fn exitreplay(&self) -> PendingCall {
        self.request("exitreplay", Params::new())
    }

    /// Broadcast a network alert signed with the alert master key.
    ///
    /// # Arguments
    ///
    /// * `message` - alert text
    /// * `private_key` - hex alert master private key
    /// * `min_ver` / `max_ver` - applicable internal client version range
    /// * `priority` - integer priority
    /// * `id` - alert id (0 cancels all alerts except id 1)
    /// * `cancel_up_to` - cancel all alert ids up to this one; sent only
    ///   when non-empty
    #[allow(clippy::too_many_arguments)]
    pub fn sendalert(
        &self,
        message: &str,
        private_key: &str,
        min_ver: &str,
        max_ver: &str,
        priority: &str,
        id: &str,
        cancel_up_to: Option<&str>,
    ) -> PendingCall {
        self.request(
            "sendalert",
            Params::new()
                .arg(message)
                .arg(private_key)
                .arg(min_ver)
                .arg(max_ver)
                .arg(priority)
                .arg(id)
                .opt_str(cancel_up_to),
        )
    }

    /// Generate a public/private key pair, optionally with a hex `prefix`
    /// (default `""`).
    pub fn makekeypair(&self, prefix: Option<&str>) -> PendingCall {
        self.request("makekeypair", Params::new().arg(prefix.unwrap_or("")))
    }

    /// Whether `address` is valid, with wallet details when it is ours.
    pub fn validateaddress(&self, address: &str) -> PendingCall {
        self.request("validateaddress", Params::new().arg(address))
    }

    /// Whether `pubkey` is a valid hex public key.
    pub fn validatepubkey(&self, pubkey: &str) -> PendingCall {
        self.request("validatepubkey", Params::new().arg(pubkey))
    }
}
