mod client;
mod wire;

pub use client::GraphqlHttpExecutor;
