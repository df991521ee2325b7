pub mod client;
pub mod provider;

pub use client::FirehoseSink;
pub use provider::FirehoseSinkProvider;
