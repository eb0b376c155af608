//! Events for the English auction (CEP-88 compliant)

use alloc::string::String;
use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted once when the auction is created
#[odra::event]
pub struct AuctionStarted {
    pub item_name: String,
    pub start_price: U512,
    /// Configured duration in minutes
    pub duration: u64,
}

/// Emitted when a bid becomes the new highest bid
#[odra::event]
pub struct NewBid {
    pub bidder: Address,
    pub amount: U512,
}

/// Emitted when an outbid bidder reclaims their pending returns
#[odra::event]
pub struct Withdrawal {
    pub bidder: Address,
    pub amount: U512,
}

/// Emitted when the seller closes the auction
#[odra::event]
pub struct AuctionEnded {
    /// `None` when the auction closed without any bid
    pub winner: Option<Address>,
    pub amount: U512,
}
