//! Error definitions for the English auction

use odra::prelude::*;

/// Auction errors
///
/// Every variant is returned synchronously by the engine and turned into a
/// revert by the contract. A failed call never leaves partial state behind.
#[odra::odra_error]
pub enum Error {
    /// Construction argument out of range (zero duration, end time overflow)
    InvalidParameter = 1,
    /// There already is a higher or equal bid, or the first bid is below the start price
    BidTooLow = 2,
    /// Bid submitted at or after the auction end time
    AuctionExpired = 3,
    /// Bid submitted after the auction was closed
    AuctionClosed = 4,
    /// Close attempted before the auction end time
    AuctionNotYetExpired = 5,
    /// Close attempted on an already closed auction
    AuctionAlreadyClosed = 6,
    /// Caller is not the seller
    NotSeller = 7,
    /// Seller cannot bid on their own auction
    SellerCannotBid = 8,
    /// Arithmetic overflow
    ArithmeticOverflow = 9,
    /// Auction state not set
    AuctionNotInitialized = 10,
    /// Transition would break an auction invariant
    InvariantViolation = 11,
}
