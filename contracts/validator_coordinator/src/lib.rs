#![no_std]

mod contract;
mod controller;
mod events;
pub mod storage;
mod validator_coordinator;

pub use contract::{ ValidatorCoordinator, ValidatorCoordinatorClient };
