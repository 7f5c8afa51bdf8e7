pub mod constants;
pub mod mapper;

pub use constants::*;
pub use mapper::*;
