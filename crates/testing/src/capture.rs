// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Collecting tracing output for assertions

use std::{io, sync::Arc};

use parking_lot::Mutex;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, util::SubscriberInitExt};

#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.lock()).into_owned()
	}
}

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for CapturedLogs {
	type Writer = CapturedLogs;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

/// Runs `f` with a thread-local subscriber at `filter` and returns its result
/// together with everything that was logged.
pub fn capture_logs<R>(filter: &str, f: impl FnOnce() -> R) -> (R, String) {
	let logs = CapturedLogs::default();
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(filter))
		.with_writer(logs.clone())
		.with_ansi(false)
		.finish();

	let result = {
		let _guard = subscriber.set_default();
		f()
	};

	(result, logs.contents())
}
