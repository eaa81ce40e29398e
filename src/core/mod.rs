pub mod evaluator;
pub mod navigator;
pub mod notify;
pub mod visibility;
