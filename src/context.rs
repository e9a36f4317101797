//! Shared state for command handlers.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use carquery_backend_http::HttpBackend;
use carquery_config::Config;
use carquery_core::{QueryBuilder, Session};
use carquery_protocols::{Backend, Catalog, ClientError, WindowSpec};
use carquery_relay::{Relay, RelayHandle, SessionWindowHost};

use crate::cli::QueryArgs;

pub(crate) struct Context {
    pub config: Config,
    pub catalog: Arc<Catalog>,
}

impl Context {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn session(&self) -> Session {
        Session::new(self.catalog.clone())
    }

    /// Query builder from flags, falling back to `[query]`.
    pub fn query_builder(&self, args: &QueryArgs) -> QueryBuilder {
        QueryBuilder::new(
            args.mode.unwrap_or(self.config.query.mode),
            args.target.unwrap_or(self.config.query.target),
        )
    }

    pub fn http_backend(&self) -> Result<HttpBackend, ClientError> {
        let endpoint = self.config.backend.endpoint.clone();
        match self.config.backend.timeout_seconds {
            Some(secs) => HttpBackend::with_timeout(endpoint, Duration::from_secs(secs)),
            None => Ok(HttpBackend::new(endpoint)),
        }
    }

    pub fn window_spec(&self) -> WindowSpec {
        let window = &self.config.window;
        WindowSpec::popup(window.url.clone())
            .with_size(window.width, window.height)
            .with_kind(window.kind)
    }

    /// Start a relay over the configured backend.
    pub fn spawn_relay(&self, host: Arc<SessionWindowHost>) -> Result<RelayHandle, ClientError> {
        let backend: Arc<dyn Backend> = Arc::new(self.http_backend()?);
        debug!("Starting relay for {}", backend.endpoint());
        Ok(Relay::new(backend, host)
            .with_window_spec(self.window_spec())
            .spawn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carquery_protocols::{QueryMode, QueryTarget, WindowKind};

    fn context() -> Context {
        Context::new(Config::default(), Catalog::builtin())
    }

    #[test]
    fn test_query_builder_falls_back_to_config() {
        let ctx = context();
        let builder = ctx.query_builder(&QueryArgs::default());
        assert_eq!(builder.mode(), QueryMode::Lenient);

        let builder = ctx.query_builder(&QueryArgs {
            mode: Some(QueryMode::Strict),
            target: Some(QueryTarget::Variant),
        });
        assert_eq!(builder.mode(), QueryMode::Strict);
    }

    #[test]
    fn test_window_spec_from_config() {
        let mut ctx = context();
        ctx.config.window.width = 800;
        let spec = ctx.window_spec();
        assert_eq!(spec.url, "popup.html");
        assert_eq!((spec.width, spec.height), (800, 640));
        assert_eq!(spec.kind, WindowKind::Popup);

        ctx.config.window.kind = WindowKind::Normal;
        assert_eq!(ctx.window_spec().kind, WindowKind::Normal);
    }

    #[test]
    fn test_http_backend_endpoint() {
        let ctx = context();
        let backend = ctx.http_backend().unwrap();
        assert_eq!(backend.endpoint(), "http://127.0.0.1:5000/v1/chat");
    }
}
