//! Auction engine - single-item English auction state machine
//!
//! The engine owns no storage and never reads a clock. Each transition takes
//! the current block time as an argument, validates everything up front and
//! returns the payout and observation it produced as data. The caller commits
//! the new state before it performs the payout.

use alloc::string::String;
use alloc::collections::BTreeMap;
use odra::casper_types::U512;
use odra::prelude::*;

use crate::errors::Error;

/// Casper block time is expressed in milliseconds
pub const MS_PER_MINUTE: u64 = 60 * 1000;

/// Authoritative state of one auction
#[odra::odra_type]
pub struct AuctionState {
    item_name: String,
    seller: Address,
    start_price: U512,
    end_time: u64,
    highest_bid: U512,
    highest_bidder: Option<Address>,
    ended: bool,
}

/// Read-only snapshot returned by `get_auction_details`
#[odra::odra_type]
pub struct AuctionDetails {
    pub item_name: String,
    pub start_price: U512,
    pub end_time: u64,
    pub ended: bool,
    pub highest_bidder: Option<Address>,
    pub highest_bid: U512,
}

/// Refundable balances owed to outbid bidders
pub trait PendingReturns {
    /// Balance owed to `bidder`, zero when unknown
    fn balance_of(&self, bidder: &Address) -> U512;
    fn set_balance(&mut self, bidder: &Address, amount: U512);
}

impl PendingReturns for BTreeMap<Address, U512> {
    fn balance_of(&self, bidder: &Address) -> U512 {
        self.get(bidder).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, bidder: &Address, amount: U512) {
        self.insert(*bidder, amount);
    }
}

/// Value the caller must release after committing the transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub to: Address,
    pub amount: U512,
}

/// Observation produced by a committed transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    AuctionStarted {
        item_name: String,
        start_price: U512,
        duration: u64,
    },
    NewBid {
        bidder: Address,
        amount: U512,
    },
    Withdrawal {
        bidder: Address,
        amount: U512,
    },
    AuctionEnded {
        winner: Option<Address>,
        amount: U512,
    },
}

/// Effects produced by a transition (data, not side effects)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effects {
    pub payout: Option<Payout>,
    pub observation: Option<Observation>,
}

impl Effects {
    fn observe(observation: Observation) -> Self {
        Self {
            payout: None,
            observation: Some(observation),
        }
    }

    /// Amount released by the payout, zero when there is none
    pub fn released(&self) -> U512 {
        self.payout.map(|p| p.amount).unwrap_or_default()
    }
}

impl AuctionState {
    /// Open a new auction ending `duration_minutes` after `now`
    pub fn create(
        item_name: String,
        start_price: U512,
        duration_minutes: u64,
        seller: Address,
        now: u64,
    ) -> Result<(Self, Effects), Error> {
        if duration_minutes == 0 {
            return Err(Error::InvalidParameter);
        }
        let end_time = duration_minutes
            .checked_mul(MS_PER_MINUTE)
            .and_then(|duration| now.checked_add(duration))
            .ok_or(Error::InvalidParameter)?;

        let state = Self {
            item_name: item_name.clone(),
            seller,
            start_price,
            end_time,
            highest_bid: U512::zero(),
            highest_bidder: None,
            ended: false,
        };
        check_invariants(&state)?;

        let effects = Effects::observe(Observation::AuctionStarted {
            item_name,
            start_price,
            duration: duration_minutes,
        });
        Ok((state, effects))
    }

    /// Place `amount` as the new highest bid
    ///
    /// The displaced bidder is credited with their previous bid. Nothing is
    /// written to `self` or `ledger` unless every check passes.
    pub fn bid<L: PendingReturns>(
        &mut self,
        ledger: &mut L,
        bidder: Address,
        amount: U512,
        now: u64,
    ) -> Result<Effects, Error> {
        if self.ended {
            return Err(Error::AuctionClosed);
        }
        if now >= self.end_time {
            return Err(Error::AuctionExpired);
        }
        if bidder == self.seller {
            return Err(Error::SellerCannotBid);
        }
        // Later bids exceed a highest bid that already met the start price.
        if amount <= self.highest_bid || amount < self.start_price {
            return Err(Error::BidTooLow);
        }

        let refund = match self.highest_bidder {
            Some(previous) => {
                let credited = ledger
                    .balance_of(&previous)
                    .checked_add(self.highest_bid)
                    .ok_or(Error::ArithmeticOverflow)?;
                Some((previous, credited))
            }
            None => None,
        };

        let mut next = self.clone();
        next.highest_bid = amount;
        next.highest_bidder = Some(bidder);
        check_invariants(&next)?;

        if let Some((previous, credited)) = refund {
            ledger.set_balance(&previous, credited);
        }
        *self = next;

        Ok(Effects::observe(Observation::NewBid { bidder, amount }))
    }

    /// Close the auction and hand the highest bid to the seller
    pub fn end_auction(&mut self, caller: Address, now: u64) -> Result<Effects, Error> {
        if caller != self.seller {
            return Err(Error::NotSeller);
        }
        if self.ended {
            return Err(Error::AuctionAlreadyClosed);
        }
        if now < self.end_time {
            return Err(Error::AuctionNotYetExpired);
        }

        self.ended = true;

        let payout = self.highest_bidder.map(|_| Payout {
            to: self.seller,
            amount: self.highest_bid,
        });
        Ok(Effects {
            payout,
            observation: Some(Observation::AuctionEnded {
                winner: self.highest_bidder,
                amount: self.highest_bid,
            }),
        })
    }

    pub fn details(&self) -> AuctionDetails {
        AuctionDetails {
            item_name: self.item_name.clone(),
            start_price: self.start_price,
            end_time: self.end_time,
            ended: self.ended,
            highest_bidder: self.highest_bidder,
            highest_bid: self.highest_bid,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn seller(&self) -> Address {
        self.seller
    }

    pub fn start_price(&self) -> U512 {
        self.start_price
    }

    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    pub fn highest_bid(&self) -> U512 {
        self.highest_bid
    }

    pub fn highest_bidder(&self) -> Option<Address> {
        self.highest_bidder
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Milliseconds until bidding closes, zero once expired
    pub fn time_left(&self, now: u64) -> u64 {
        self.end_time.saturating_sub(now)
    }
}

/// Release everything owed to `caller`
///
/// The balance is zeroed before the payout is handed back, so a re-entrant
/// second call finds nothing to release. A caller with nothing owed gets
/// empty effects.
pub fn withdraw<L: PendingReturns>(ledger: &mut L, caller: Address) -> Effects {
    let amount = ledger.balance_of(&caller);
    if amount.is_zero() {
        return Effects::default();
    }

    ledger.set_balance(&caller, U512::zero());

    Effects {
        payout: Some(Payout { to: caller, amount }),
        observation: Some(Observation::Withdrawal {
            bidder: caller,
            amount,
        }),
    }
}

pub fn pending_returns<L: PendingReturns>(ledger: &L, bidder: &Address) -> U512 {
    ledger.balance_of(bidder)
}

/// Check all state invariants. Returns Err if any is violated.
pub fn check_invariants(state: &AuctionState) -> Result<(), Error> {
    // NoBidMeansNoBidder
    if state.highest_bid.is_zero() != state.highest_bidder.is_none() {
        return Err(Error::InvariantViolation);
    }

    // HighestBidMeetsStartPrice
    if !state.highest_bid.is_zero() && state.highest_bid < state.start_price {
        return Err(Error::InvariantViolation);
    }

    // SellerNeverLeads
    if state.highest_bidder == Some(state.seller) {
        return Err(Error::InvariantViolation);
    }

    Ok(())
}
