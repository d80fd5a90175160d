pub mod config_store;
pub mod fsutil;

pub use config_store::ConfigStore;
