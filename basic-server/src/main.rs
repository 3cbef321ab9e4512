use std::{env, path, process::ExitCode, sync::Arc};

use clearance::filter::{PolicySource, RedactionStyle};
use clearance::prelude::*;
use clearance::record::{ServiceRecord, UserRecord};
use clearance::AppBuilder;
use clearance_store_adapter_json::{PolicyAdapterJson, RecordAdapterJson};

pub struct Config {
	pub listen: String,
	pub data_dir: path::PathBuf,
	pub redaction_style: RedactionStyle,
	pub policy_source: PolicySource,
}

impl Config {
	fn from_env() -> ClResult<Self> {
		Ok(Config {
			listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
			data_dir: env::var("DATA_DIR").map_or_else(|_| "./data".into(), path::PathBuf::from),
			redaction_style: env::var("REDACTION_STYLE")
				.map_or(Ok(RedactionStyle::default()), |s| s.parse())?,
			policy_source: env::var("POLICY_SOURCE")
				.map_or(Ok(PolicySource::default()), |s| s.parse())?,
		})
	}
}

async fn run() -> ClResult<()> {
	let config = Config::from_env()?;
	let mut builder = AppBuilder::new();

	let data_dir = config.data_dir.into_boxed_path();
	info!(data_dir = %data_dir.display(), "Opening JSON stores");
	let user_adapter = RecordAdapterJson::<UserRecord>::new(data_dir.clone()).await?;
	let service_adapter = RecordAdapterJson::<ServiceRecord>::new(data_dir.clone()).await?;
	let policy_adapter = PolicyAdapterJson::new(data_dir).await?;

	builder
		.listen(config.listen)
		.redaction_style(config.redaction_style)
		.policy_source(config.policy_source)
		.user_adapter(Arc::new(user_adapter))
		.service_adapter(Arc::new(service_adapter))
		.policy_adapter(Arc::new(policy_adapter));
	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("clearance: {}", e);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
