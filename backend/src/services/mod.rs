pub mod rate_limiter;
pub mod translation;

pub use rate_limiter::{InMemoryRateLimitStore, RateLimitStore, RateLimiter};
pub use translation::TranslationService;
