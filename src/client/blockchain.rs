//! Chain, block and address-index queries.

use crate::client::{PendingCall, StealthClient};
use crate::rpc::Params;

impl StealthClient {
    /// Balance of any address, tracked by the daemon's address index.
    pub fn getaddressbalance(&self, address: &str) -> PendingCall {
        self.request("getaddressbalance", Params::new().arg(address))
    }

    /// Address index summary for `address`.
    pub fn getaddressinfo(&self, address: &str) -> PendingCall {
        self.request("getaddressinfo", Params::new().arg(address))
    }

    /// Inputs spending from `address`, paged.
    ///
    /// # Arguments
    ///
    /// * `start` - 1-based index of the first input (default 1)
    /// * `max` - page size (default 100)
    ///
    /// `start = 101, max = 100` returns the second hundred inputs.
    pub fn getaddressinputs(
        &self,
        address: &str,
        start: Option<u64>,
        max: Option<u64>,
    ) -> PendingCall {
        self.request(
            "getaddressinputs",
            Params::new()
                .arg(address)
                .arg(start.unwrap_or(1))
                .arg(max.unwrap_or(100)),
        )
    }

    /// Outputs paying to `address`, paged.
    ///
    /// # Arguments
    ///
    /// * `start` - index of the first output (default 0)
    /// * `max` - page size (default 100)
    pub fn getaddressoutputs(
        &self,
        address: &str,
        start: Option<u64>,
        max: Option<u64>,
    ) -> PendingCall {
        self.request(
            "getaddressoutputs",
            Params::new()
                .arg(address)
                .arg(start.unwrap_or(0))
                .arg(max.unwrap_or(100)),
        )
    }

    /// Hash of the tip of the longest chain.
    pub fn getbestblockhash(&self) -> PendingCall {
        self.request("getbestblockhash", Params::new())
    }

    /// Block by hash; `tx_info` includes full transaction details.
    pub fn getblock(&self, hash: &str, tx_info: bool) -> PendingCall {
        self.request("getblock", Params::new().arg(hash).arg(tx_info))
    }

    /// Block by height; `tx_info` includes full transaction details.
    pub fn getblockbynumber(&self, number: u64, tx_info: bool) -> PendingCall {
        self.request("getblockbynumber", Params::new().arg(number).arg(tx_info))
    }

    /// Number of blocks in the longest chain.
    pub fn getblockcount(&self) -> PendingCall {
        self.request("getblockcount", Params::new())
    }

    /// Hash of the block at height `index`.
    pub fn getblockhash(&self, index: u64) -> PendingCall {
        self.request("getblockhash", Params::new().arg(index))
    }

    /// Block intervals over a sliding window.
    ///
    /// # Arguments
    ///
    /// * `period` - number of blocks to look back
    /// * `window_size` - blocks per window
    /// * `window_spacing` - blocks between window starts
    pub fn getblockinterval(
        &self,
        period: u64,
        window_size: u64,
        window_spacing: u64,
    ) -> PendingCall {
        self.request(
            "getblockinterval",
            window_params(period, window_size, window_spacing),
        )
    }

    /// Mean block interval; see [`StealthClient::getblockinterval`].
    pub fn getblockintervalmean(
        &self,
        period: u64,
        window_size: u64,
        window_spacing: u64,
    ) -> PendingCall {
        self.request(
            "getblockintervalmean",
            window_params(period, window_size, window_spacing),
        )
    }

    /// RMSD of block intervals; see [`StealthClient::getblockinterval`].
    pub fn getblockintervalrmsd(
        &self,
        period: u64,
        window_size: u64,
        window_spacing: u64,
    ) -> PendingCall {
        self.request(
            "getblockintervalrmsd",
            window_params(period, window_size, window_spacing),
        )
    }

    /// Latest synchronized checkpoint.
    pub fn getcheckpoint(&self) -> PendingCall {
        self.request("getcheckpoint", Params::new())
    }

    /// Proof-of-work and proof-of-stake difficulty.
    pub fn getdifficulty(&self) -> PendingCall {
        self.request("getdifficulty", Params::new())
    }

    /// Recent hashing rate of this node's miner.
    pub fn gethashespersec(&self) -> PendingCall {
        self.request("gethashespersec", Params::new())
    }

    /// Mining and staking state of this node.
    pub fn getmininginfo(&self) -> PendingCall {
        self.request("getmininginfo", Params::new())
    }

    /// Newest block whose timestamp is before `time` (unix seconds).
    pub fn getnewestblockbeforetime(&self, time: u64) -> PendingCall {
        self.request("getnewestblockbeforetime", Params::new().arg(time))
    }

    /// Transaction ids in the memory pool.
    pub fn getrawmempool(&self) -> PendingCall {
        self.request("getrawmempool", Params::new())
    }

    /// Richest addresses, ranked.
    ///
    /// # Arguments
    ///
    /// * `start` - rank to start from (default 0)
    /// * `max` - number of entries (default 10)
    pub fn getrichlist(&self, start: Option<u64>, max: Option<u64>) -> PendingCall {
        self.request(
            "getrichlist",
            Params::new().arg(start.unwrap_or(0)).arg(max.unwrap_or(10)),
        )
    }

    /// Number of addresses holding at least `minimum` (default 0).
    pub fn getrichlistsize(&self, minimum: Option<u64>) -> PendingCall {
        self.request("getrichlistsize", Params::new().arg(minimum.unwrap_or(0)))
    }

    /// Block subsidy; `n_target` is only sent when non-empty.
    pub fn getsubsidy(&self, n_target: Option<&str>) -> PendingCall {
        self.request("getsubsidy", Params::new().opt_str(n_target))
    }

    /// Transaction counts over a sliding window; see
    /// [`StealthClient::getblockinterval`] for the window arguments.
    pub fn gettxvolume(&self, period: u64, window_size: u64, window_spacing: u64) -> PendingCall {
        self.request(
            "gettxvolume",
            window_params(period, window_size, window_spacing),
        )
    }

    /// XST volume over a sliding window.
    pub fn getxstvolume(&self, period: u64, window_size: u64, window_spacing: u64) -> PendingCall {
        self.request(
            "getxstvolume",
            window_params(period, window_size, window_spacing),
        )
    }
}

fn window_params(period: u64, window_size: u64, window_spacing: u64) -> Params {
    Params::new().arg(period).arg(window_size).arg(window_spacing)
}
