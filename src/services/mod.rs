//! Business logic services module.

pub mod executor;
pub mod order_status;
pub mod portfolio;
pub mod swap;

pub use executor::{CommandSwapExecutor, SwapExecutor, UnconfiguredSwapExecutor};
pub use order_status::OrderStatusReader;
pub use portfolio::PortfolioClient;
pub use swap::{normalize_amount, SwapDispatcher};
