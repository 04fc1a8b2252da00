#![no_std]

mod allowance;
mod balance;
mod contract;
mod controller;
mod events;
mod math;
mod staking_pool;
pub mod storage;

pub use contract::{ StakingPool, StakingPoolClient };
