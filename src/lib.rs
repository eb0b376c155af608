//! English Auction - single-item auction contract for Casper Network
//!
//! This crate provides an English auction where:
//! - The deployer (seller) lists one item with a start price and a duration
//! - Bidders outbid each other with attached CSPR until the deadline
//! - Outbid bidders withdraw their refundable balances at any time
//! - The seller closes the auction once and receives the winning bid

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod engine;
pub mod english_auction;
pub mod errors;
pub mod events;

// Re-export main types for external use
pub use engine::{AuctionDetails, AuctionState};
pub use english_auction::EnglishAuction;
pub use errors::*;
pub use events::*;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use english_auction::{EnglishAuctionHostRef, EnglishAuctionInitArgs};
