mod common;
mod locale_middleware_test;
mod seo_api_test;
