pub mod binding;
pub mod error;
pub mod shared;
