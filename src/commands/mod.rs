pub mod convert;
pub mod stat;
