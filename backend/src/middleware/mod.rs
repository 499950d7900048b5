pub mod locale;

pub use locale::{LocaleState, locale_middleware};
