//! EnglishAuction - on-chain host for the auction engine
//!
//! One deployed contract holds one auction; its contract address is the
//! auction id. The contract reads caller, attached value and block time from
//! the environment, runs the engine transition, commits storage and only then
//! moves CSPR out of the contract purse.

use alloc::string::{String, ToString};
use odra::prelude::*;
use odra::casper_types::U512;

use crate::engine::{self, AuctionDetails, AuctionState, Effects, Observation, PendingReturns};
use crate::errors::Error;
use crate::events::{AuctionEnded, AuctionStarted, NewBid, Withdrawal};

/// EnglishAuction - single-item English auction
#[odra::module(
    events = [AuctionStarted, NewBid, Withdrawal, AuctionEnded],
    errors = Error
)]
pub struct EnglishAuction {
    // Auction state (immutable terms + current leader)
    auction: Var<AuctionState>,

    // Refundable balances of outbid bidders
    pending_returns: Mapping<Address, U512>,
}

impl PendingReturns for Mapping<Address, U512> {
    fn balance_of(&self, bidder: &Address) -> U512 {
        self.get(bidder).unwrap_or_default()
    }

    fn set_balance(&mut self, bidder: &Address, amount: U512) {
        self.set(bidder, amount);
    }
}

#[odra::module]
impl EnglishAuction {
    /// Initialize the auction. The deployer becomes the seller.
    ///
    /// # Arguments
    /// * `item_name` - Label of the item on sale
    /// * `start_price` - Minimum acceptable first bid (in motes)
    /// * `duration_minutes` - Bidding window, counted from the deploy block time
    pub fn init(&mut self, item_name: String, start_price: U512, duration_minutes: u64) {
        let seller = self.env().caller();
        let now = self.env().get_block_time();

        let created = AuctionState::create(item_name, start_price, duration_minutes, seller, now);
        let (state, effects) = self.revert_on_error(created);

        self.auction.set(state);
        self.apply(effects);
    }

    // ============ CORE FUNCTIONS ============

    /// Bid the attached value on the item
    #[odra(payable)]
    pub fn bid(&mut self) {
        let bidder = self.env().caller();
        let amount = self.env().attached_value();
        let now = self.env().get_block_time();

        let mut state = self.state();
        let result = state.bid(&mut self.pending_returns, bidder, amount, now);
        let effects = self.revert_on_error(result);

        self.auction.set(state);
        self.apply(effects);
    }

    /// Withdraw the caller's pending returns. Returns the amount released.
    pub fn withdraw(&mut self) -> U512 {
        let caller = self.env().caller();

        // Ledger entry is zeroed in storage before any transfer (CEI pattern)
        let effects = engine::withdraw(&mut self.pending_returns, caller);
        let released = effects.released();

        self.apply(effects);
        released
    }

    /// Close the auction and pay the highest bid to the seller
    pub fn end_auction(&mut self) {
        let caller = self.env().caller();
        let now = self.env().get_block_time();

        let mut state = self.state();
        let result = state.end_auction(caller, now);
        let effects = self.revert_on_error(result);

        // Mark ended BEFORE releasing proceeds (CEI pattern)
        self.auction.set(state);
        self.apply(effects);
    }

    // ============ VIEW FUNCTIONS ============

    pub fn get_auction_details(&self) -> AuctionDetails {
        self.state().details()
    }

    pub fn get_pending_returns(&self, bidder: Address) -> U512 {
        engine::pending_returns(&self.pending_returns, &bidder)
    }

    pub fn get_seller(&self) -> Address {
        self.state().seller()
    }

    pub fn get_item_name(&self) -> String {
        self.state().item_name().to_string()
    }

    pub fn get_start_price(&self) -> U512 {
        self.state().start_price()
    }

    /// Block time (ms) at which bidding closes
    pub fn get_end_time(&self) -> u64 {
        self.state().end_time()
    }

    pub fn get_highest_bid(&self) -> U512 {
        self.state().highest_bid()
    }

    pub fn get_highest_bidder(&self) -> Option<Address> {
        self.state().highest_bidder()
    }

    pub fn is_ended(&self) -> bool {
        self.state().is_ended()
    }

    /// Milliseconds left to bid at the current block time
    pub fn get_time_left(&self) -> u64 {
        self.state().time_left(self.env().get_block_time())
    }
}

// ============ INTERNAL FUNCTIONS ============

impl EnglishAuction {
    fn state(&self) -> AuctionState {
        self.auction
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AuctionNotInitialized)
    }

    fn revert_on_error<T>(&self, result: Result<T, Error>) -> T {
        result.unwrap_or_else(|error| self.env().revert(error))
    }

    /// Release the payout, then publish the observation
    fn apply(&self, effects: Effects) {
        if let Some(payout) = effects.payout {
            self.env().transfer_tokens(&payout.to, &payout.amount);
        }

        match effects.observation {
            Some(Observation::AuctionStarted {
                item_name,
                start_price,
                duration,
            }) => self.env().emit_event(AuctionStarted {
                item_name,
                start_price,
                duration,
            }),
            Some(Observation::NewBid { bidder, amount }) => {
                self.env().emit_event(NewBid { bidder, amount })
            }
            Some(Observation::Withdrawal { bidder, amount }) => {
                self.env().emit_event(Withdrawal { bidder, amount })
            }
            Some(Observation::AuctionEnded { winner, amount }) => {
                self.env().emit_event(AuctionEnded { winner, amount })
            }
            None => {}
        }
    }
}
