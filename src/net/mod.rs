//! Netzwerk-Layer: Hub-Client, Gateway-Worker, Wire-DTOs, Kachel-Store.

pub mod client;
pub mod gateway;
pub mod protocol;
pub mod tiles;

pub use client::HubClient;
pub use gateway::{Gateway, GatewayEvent};
pub use tiles::TileStore;
