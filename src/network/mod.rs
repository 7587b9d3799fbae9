pub mod architecture;
pub mod network;

pub use architecture::Architecture;
pub use network::Network;
