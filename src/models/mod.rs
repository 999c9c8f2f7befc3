pub mod user;
pub mod statistics;
pub mod titan;

pub use user::*;
pub use statistics::*;
pub use titan::*;
