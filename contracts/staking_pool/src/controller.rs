pub mod fees;
pub mod ledger;
pub mod rebalance;
pub mod treasury;
pub mod unlock;
