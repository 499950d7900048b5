pub mod error;
pub mod i18n;

pub use error::{ApiError, ApiResult};
pub use i18n::{get_locale, message_locale, with_locale};
