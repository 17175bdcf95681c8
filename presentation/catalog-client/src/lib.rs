pub mod browser;
pub mod client;
pub mod payload;
pub mod quote;
pub mod source;
