// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tracing output for tests
//!
//! Honours `RUST_LOG`; defaults to `warn` so budget warnings from row stores
//! show up while ordinary test runs stay quiet.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a global fmt subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_tracing() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
		let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
	});
}
