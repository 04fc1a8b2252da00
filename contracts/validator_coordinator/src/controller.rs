pub mod delegation;
pub mod registry;
