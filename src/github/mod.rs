pub mod client;
pub mod fixture;
pub mod paginator;
pub mod source;

pub use client::GitHubClient;
pub use fixture::{FixtureData, FixtureSource};
pub use paginator::Paginator;
pub use source::ProfileSource;
