//! bloomfund - campaign performance and incentive calculations
//!
//! Turns seller, order and campaign rows of a flower fundraiser into
//! leaderboard standings, goal progress, milestone badges and payout
//! breakdowns. The calculators in [`calculator`] are pure; [`services`]
//! wires them to the stores in [`storage`].

pub mod calculator;
pub mod config;
pub mod interfaces;
pub mod model;
pub mod services;
pub mod storage;
pub mod utils;
