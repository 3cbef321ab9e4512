//! Lock-guarded JSON document holding one ordered list

use serde::{Serialize, de::DeserializeOwned};
use std::{
	io::ErrorKind,
	path::{Path, PathBuf},
};
use tokio::{
	fs::{read, rename, write},
	sync::Mutex,
};

use clearance_types::prelude::*;

#[derive(Debug)]
pub(crate) struct JsonFile {
	path: Box<Path>,
	lock: Mutex<()>,
}

impl JsonFile {
	pub(crate) fn new(path: PathBuf) -> Self {
		Self { path: path.into(), lock: Mutex::new(()) }
	}

	pub(crate) fn path(&self) -> &Path {
		&self.path
	}

	/// Loads the list, a missing or blank file is an empty list
	async fn load<T: DeserializeOwned>(&self) -> ClResult<Vec<T>> {
		let data = match read(&self.path).await {
			Ok(data) => data,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(err) => {
				error!(path = ?self.path, "Cannot read store file: {}", err);
				return Err(err.into());
			}
		};
		if data.iter().all(u8::is_ascii_whitespace) {
			return Ok(Vec::new());
		}

		serde_json::from_slice(&data).map_err(|err| {
			error!(path = ?self.path, "Cannot parse store file: {}", err);
			Error::from(err)
		})
	}

	/// Replaces the document through a temp file and a rename
	async fn store<T: Serialize>(&self, items: &[T]) -> ClResult<()> {
		let data = serde_json::to_vec_pretty(items)?;
		let mut tmp_path = self.path.to_path_buf().into_os_string();
		tmp_path.push(".tmp");

		write(&tmp_path, data).await.map_err(|err| {
			error!(path = ?tmp_path, "Cannot write store file: {}", err);
			Error::from(err)
		})?;
		rename(&tmp_path, &self.path).await.map_err(|err| {
			error!(path = ?self.path, "Cannot replace store file: {}", err);
			Error::from(err)
		})?;
		Ok(())
	}

	pub(crate) async fn read<T: DeserializeOwned>(&self) -> ClResult<Vec<T>> {
		let _guard = self.lock.lock().await;
		self.load().await
	}

	/// Runs one read-modify-write cycle under the lock
	///
	/// The document is written only when `f` succeeds.
	pub(crate) async fn modify<T, O, F>(&self, f: F) -> ClResult<O>
	where
		T: Serialize + DeserializeOwned,
		F: FnOnce(&mut Vec<T>) -> ClResult<O>,
	{
		let _guard = self.lock.lock().await;
		let mut items = self.load().await?;
		let out = f(&mut items)?;
		self.store(&items).await?;
		Ok(out)
	}

	pub(crate) async fn replace<T: Serialize>(&self, items: &[T]) -> ClResult<()> {
		let _guard = self.lock.lock().await;
		self.store(items).await
	}
}

// vim: ts=4
