pub mod check;
pub mod navigate;
pub mod search;
