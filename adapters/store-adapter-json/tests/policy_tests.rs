//! Field access store tests

use clearance_store_adapter_json::{POLICY_FILE, PolicyAdapterJson};
use clearance_types::access_level::AccessLevel;
use clearance_types::error::Error;
use clearance_types::field_access::NewFieldAccess;
use clearance_types::store_adapter::PolicyAdapter;
use tempfile::TempDir;

async fn create_test_adapter() -> (PolicyAdapterJson, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter =
		PolicyAdapterJson::new(temp_dir.path().into()).await.expect("Failed to create adapter");
	(adapter, temp_dir)
}

fn new_setting(endpoint: &str, field_name: &str, access_level: AccessLevel) -> NewFieldAccess {
	NewFieldAccess { endpoint: endpoint.into(), field_name: field_name.into(), access_level }
}

#[tokio::test]
async fn test_missing_file_is_empty() {
	let (adapter, _temp) = create_test_adapter().await;
	assert!(adapter.list_settings().await.expect("Failed to list").is_empty());
	assert_eq!(adapter.available_fields("UserData").await.expect("Failed to list").len(), 4);
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
	let (adapter, _temp) = create_test_adapter().await;

	let first = adapter
		.create_setting(new_setting("UserData", "phone", AccessLevel::Public))
		.await
		.expect("Failed to create setting");
	let second = adapter
		.create_setting(new_setting("UserData", "email", AccessLevel::Secret))
		.await
		.expect("Failed to create setting");
	assert_eq!((first, second), (1, 2));

	adapter.delete_setting(1).await.expect("Failed to delete");
	let third = adapter
		.create_setting(new_setting("UserData", "phone", AccessLevel::Public))
		.await
		.expect("Failed to create setting");
	assert_eq!(third, 3);
}

#[tokio::test]
async fn test_duplicates_are_kept() {
	let (adapter, _temp) = create_test_adapter().await;
	for level in [AccessLevel::Public, AccessLevel::TopSecret] {
		adapter
			.create_setting(new_setting("ServiceData", "ipAddress", level))
			.await
			.expect("Failed to create setting");
	}

	let settings = adapter.list_settings().await.expect("Failed to list");
	assert_eq!(settings.len(), 2);
	assert_eq!(settings[1].access_level, AccessLevel::TopSecret);
}

#[tokio::test]
async fn test_update_setting() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.reset_settings().await.expect("Failed to reset");

	adapter.update_setting(2, AccessLevel::TopSecret).await.expect("Failed to update");
	let settings = adapter.list_settings().await.expect("Failed to list");
	assert_eq!(settings[1].field_name, "email");
	assert_eq!(settings[1].access_level, AccessLevel::TopSecret);
	assert_eq!(settings.len(), 8);

	let res = adapter.update_setting(99, AccessLevel::Public).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_setting() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.reset_settings().await.expect("Failed to reset");

	adapter.delete_setting(4).await.expect("Failed to delete");
	let settings = adapter.list_settings().await.expect("Failed to list");
	assert_eq!(settings.len(), 7);
	assert!(settings.iter().all(|s| s.id != 4));
	assert_eq!(adapter.available_fields("UserData").await.expect("Failed"), vec!["address"]);

	let res = adapter.delete_setting(4).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_reset_overwrites() {
	let (adapter, temp) = create_test_adapter().await;
	for _ in 0..3 {
		adapter
			.create_setting(new_setting("Other", "thing", AccessLevel::Secret))
			.await
			.expect("Failed to create setting");
	}

	let defaults = adapter.reset_settings().await.expect("Failed to reset");
	assert_eq!(defaults.len(), 8);
	assert_eq!(adapter.list_settings().await.expect("Failed to list"), defaults);
	assert!(adapter.available_fields("ServiceData").await.expect("Failed").is_empty());

	let raw = std::fs::read_to_string(temp.path().join(POLICY_FILE)).expect("Failed to read");
	let json: serde_json::Value = serde_json::from_str(&raw).expect("Store file is not JSON");
	assert_eq!(json[6]["fieldName"], "ipAddress");
	assert_eq!(json[6]["accessLevel"], "Secret");
}

#[tokio::test]
async fn test_fields_for() {
	let (adapter, _temp) = create_test_adapter().await;
	assert_eq!(adapter.fields_for("ServiceData"), vec![
		"service",
		"address",
		"ipAddress",
		"ipGateway"
	]);
	assert!(adapter.fields_for("Nope").is_empty());
	assert!(adapter.available_fields("Nope").await.expect("Failed").is_empty());
}
