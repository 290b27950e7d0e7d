// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod capture;
pub mod fixture;
pub mod subscriber;

pub use capture::capture_logs;
pub use subscriber::init_tracing;
