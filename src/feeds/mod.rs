//! External fee-rate and price feeds
//!
//! These are the collaborators that supply the engine with plain values:
//! - **Mempool** - recommended fee rates with retry and a fallback snapshot
//! - **Price** - BTC/USD spot price from a GraphQL price list
//! - **Poller** - periodic refresh publishing the newest snapshot
//! - **Retry** - exponential backoff helpers
//!
//! The engine never calls into this module.

pub mod mempool;
pub mod poller;
pub mod price;
pub mod retry;

pub use mempool::{parse_snapshot, FetchedSnapshot, MempoolClient};
pub use poller::{FeeRateFeed, SnapshotPoller};
pub use price::{latest_price_usd, parse_price_response, PriceClient, PriceEntry, PriceListItem};
pub use retry::{calculate_next_backoff, retry_with_backoff, RetryPolicy};
