pub mod compute;
pub mod constants;
pub mod entities;
pub mod error;
pub mod viewport;
