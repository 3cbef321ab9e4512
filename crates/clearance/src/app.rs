//! App builder - constructs and runs the Clearance application

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
pub use clearance_core::app::{Adapters, App, AppBuilderOpts, AppState, VERSION};
use clearance_core::color::ColorMap;
use clearance_core::filter::{PolicySource, RedactionStyle};
use clearance_types::record::{ServiceRecord, UserRecord};
use clearance_types::store_adapter::{PolicyAdapter, RecordAdapter};

pub const DEFAULT_GENERATE_COUNT: usize = 50;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				redaction_style: RedactionStyle::default(),
				policy_source: PolicySource::default(),
				generate_count: DEFAULT_GENERATE_COUNT,
			},
			adapters: Adapters { user_adapter: None, service_adapter: None, policy_adapter: None },
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn redaction_style(&mut self, redaction_style: RedactionStyle) -> &mut Self {
		self.opts.redaction_style = redaction_style;
		self
	}
	pub fn policy_source(&mut self, policy_source: PolicySource) -> &mut Self {
		self.opts.policy_source = policy_source;
		self
	}
	pub fn generate_count(&mut self, generate_count: usize) -> &mut Self {
		self.opts.generate_count = generate_count;
		self
	}

	// Adapters
	pub fn user_adapter(&mut self, user_adapter: Arc<dyn RecordAdapter<UserRecord>>) -> &mut Self {
		self.adapters.user_adapter = Some(user_adapter);
		self
	}
	pub fn service_adapter(
		&mut self,
		service_adapter: Arc<dyn RecordAdapter<ServiceRecord>>,
	) -> &mut Self {
		self.adapters.service_adapter = Some(service_adapter);
		self
	}
	pub fn policy_adapter(&mut self, policy_adapter: Arc<dyn PolicyAdapter>) -> &mut Self {
		self.adapters.policy_adapter = Some(policy_adapter);
		self
	}

	pub async fn run(self) -> ClResult<()> {
		info!("Clearance V{}", VERSION);
		info!(
			redaction = ?self.opts.redaction_style,
			policy = ?self.opts.policy_source,
			"Access filter configured"
		);

		let Some(user_adapter) = self.adapters.user_adapter else {
			error!("FATAL: No user record adapter configured");
			return Err(Error::Internal("No user record adapter configured".to_string()));
		};
		let Some(service_adapter) = self.adapters.service_adapter else {
			error!("FATAL: No service record adapter configured");
			return Err(Error::Internal("No service record adapter configured".to_string()));
		};
		let Some(policy_adapter) = self.adapters.policy_adapter else {
			error!("FATAL: No field access adapter configured");
			return Err(Error::Internal("No field access adapter configured".to_string()));
		};

		let app: App =
			Arc::new(AppState {
			opts: self.opts,
			user_adapter,
			service_adapter,
			policy_adapter,
			colors: ColorMap::new(),
		});

		if app.opts.policy_source == PolicySource::Table {
			match app.policy_adapter.list_settings().await {
				Ok(settings) if settings.is_empty() => {
					warn!("No field access settings, governed fields are redacted below record level");
				}
				Ok(settings) => info!("Loaded {} field access settings", settings.len()),
				Err(e) => {
					error!("FATAL: Cannot load field access settings: {}", e);
					return Err(e);
				}
			}
		}

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot bind {}: {}", app.opts.listen, e);
			Error::from(e)
		})?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
