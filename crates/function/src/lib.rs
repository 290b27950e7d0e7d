// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Materialized set-returning function support for the host engine.

pub mod call;
pub mod config;
pub mod generator;
pub mod host;
pub mod materialize;
pub mod record;
pub mod resolve;
pub mod store;

pub use call::{AllowedModes, CallContext, ReturnMode, ReturnSetInfo, ReturnType};
pub use config::{ConfigError, HostConfig, HostConfigBuilder, HostVersion};
pub use generator::{FunctionRegistry, GenerateSeries, GeneratorContext, GeneratorFunction, KeyValueSet};
pub use host::{Capabilities, Host, NATIVE_MATERIALIZE_SINCE, ResultSet};
pub use materialize::{
	FallbackInitializer, MaterializeFlags, MaterializeInitializer, MaterializeStrategy, Materialized,
	NativeInitializer,
};
pub use record::RecordCache;
pub use resolve::{ResolvedResultType, TypeCatalog, TypeClass, resolve_call_result_type};
pub use store::RowStore;
