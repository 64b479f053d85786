pub mod format;

pub use format::{format_signed_usd, format_usd, thousands};
