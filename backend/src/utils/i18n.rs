//! Internationalization utilities for the backend
//!
//! Holds the per-request current locale so error rendering and handlers can
//! translate without threading the resolved locale through every call. The
//! locale is task-local, not thread-local: request futures migrate between
//! worker threads at await points, and concurrent requests must never see
//! each other's locale.

use std::future::Future;

use crate::locale::{DEFAULT_LOCALE, Locale};

tokio::task_local! {
    static CURRENT_LOCALE: Locale;
}

/// Run `fut` with `locale` as the current locale for the task.
pub async fn with_locale<F>(locale: Locale, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_LOCALE.scope(locale, fut).await
}

/// Get the current locale for the current task, or the default outside any
/// `with_locale` scope.
pub fn get_locale() -> Locale {
    CURRENT_LOCALE.try_with(|l| *l).unwrap_or(DEFAULT_LOCALE)
}

/// Locale to hand to `rust_i18n::t!`. SEO-only locales carry no bundle, so
/// translation falls back to the default locale's messages.
pub fn message_locale() -> &'static str {
    let locale = get_locale();
    if locale.is_seo_only() { DEFAULT_LOCALE.as_str() } else { locale.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_locale_scoped_to_task() {
        assert_eq!(get_locale(), DEFAULT_LOCALE);

        let seen = with_locale(Locale::Tr, async {
            tokio::task::yield_now().await;
            get_locale()
        })
        .await;
        assert_eq!(seen, Locale::Tr);

        // Scope ended; back to the default
        assert_eq!(get_locale(), DEFAULT_LOCALE);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_keep_their_locale() {
        let locales = [Locale::Ar, Locale::En, Locale::Tr];
        let mut handles = Vec::new();

        for i in 0..48 {
            let locale = locales[i % locales.len()];
            handles.push(tokio::spawn(with_locale(locale, async move {
                // Hop across await points so the task can resume on other
                // worker threads while its neighbours run.
                for _ in 0..8 {
                    tokio::task::yield_now().await;
                }
                get_locale()
            })));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.unwrap(), locales[i % locales.len()]);
        }
    }

    #[tokio::test]
    async fn test_message_locale_falls_back_for_seo_only() {
        let seen = with_locale(Locale::De, async { message_locale() }).await;
        assert_eq!(seen, DEFAULT_LOCALE.as_str());

        let seen = with_locale(Locale::Tr, async { message_locale() }).await;
        assert_eq!(seen, "tr");
    }
}
