// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::RwLock;
use srfcompat_type::{ColumnDef, Result, Row, RowShape, Value, diagnostic::function, return_error};
use tracing::{debug, instrument};

use crate::{
	call::{AllowedModes, CallContext, ReturnSetInfo},
	config::{ConfigError, HostConfig, HostVersion},
	generator::{FunctionRegistry, GenerateSeries, GeneratorContext, GeneratorFunction},
	materialize::{FallbackInitializer, MaterializeInitializer, MaterializeStrategy, NativeInitializer},
	record::RecordCache,
	resolve::TypeCatalog,
};

/// First host major version that ships its own materialize initializer.
pub const NATIVE_MATERIALIZE_SINCE: u32 = 15;

/// Features of the host engine, detected once when the host is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
	pub native_materialize: bool,
}

impl Capabilities {
	pub fn detect(version: HostVersion) -> Self {
		Self {
			native_materialize: version.major >= NATIVE_MATERIALIZE_SINCE,
		}
	}

	pub fn materialize_strategy(&self) -> MaterializeStrategy {
		if self.native_materialize {
			MaterializeStrategy::Native
		} else {
			MaterializeStrategy::Fallback
		}
	}
}

static UNDEFINED: Value = Value::Undefined;

/// Rows drained from a materialized call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
	pub shape: RowShape,
	pub rows: Vec<Row>,
}

impl ResultSet {
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// All values of the column called `name`; rows too short to hold it read as undefined.
	pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
		let idx = self.shape.iter().position(|c| c.name == name)?;
		Some(self.rows.iter().map(|row| row.get(idx).unwrap_or(&UNDEFINED)).collect())
	}
}

pub struct Host {
	config: HostConfig,
	capabilities: Capabilities,
	catalog: Arc<RwLock<TypeCatalog>>,
	records: Arc<RecordCache>,
	initializer: Arc<dyn MaterializeInitializer>,
	functions: FunctionRegistry,
}

impl Host {
	pub fn new(config: HostConfig) -> std::result::Result<Self, ConfigError> {
		config.validate()?;

		let capabilities = Capabilities::detect(config.version);
		let catalog = Arc::new(RwLock::new(TypeCatalog::new()));
		let records = Arc::new(RecordCache::new());

		let initializer: Arc<dyn MaterializeInitializer> = match capabilities.materialize_strategy() {
			MaterializeStrategy::Native => {
				Arc::new(NativeInitializer::new(catalog.clone(), records.clone(), config.work_mem_kb))
			}
			MaterializeStrategy::Fallback => {
				Arc::new(FallbackInitializer::new(catalog.clone(), config.work_mem_kb))
			}
		};

		debug!(
			version = %config.version,
			strategy = %initializer.strategy(),
			work_mem_kb = config.work_mem_kb,
			"host created"
		);

		let mut functions = FunctionRegistry::new();
		functions.register(GenerateSeries::new());

		Ok(Self {
			config,
			capabilities,
			catalog,
			records,
			initializer,
			functions,
		})
	}

	pub fn config(&self) -> &HostConfig {
		&self.config
	}

	pub fn capabilities(&self) -> Capabilities {
		self.capabilities
	}

	pub fn initializer(&self) -> &dyn MaterializeInitializer {
		self.initializer.as_ref()
	}

	pub fn records(&self) -> &RecordCache {
		&self.records
	}

	pub fn register_type(&self, name: impl Into<String>, columns: Vec<ColumnDef>) {
		self.catalog.write().register(name, columns);
	}

	pub fn register_function<F: GeneratorFunction + 'static>(&mut self, function: F) {
		self.functions.register(function);
	}

	pub fn functions(&self) -> &FunctionRegistry {
		&self.functions
	}

	/// Calls the set-returning function `name` and collects its rows.
	pub fn call(&self, name: &str, args: Vec<Value>, allowed_modes: AllowedModes) -> Result<ResultSet> {
		let Some(function) = self.functions.get(name) else {
			return_error!(function::unknown_function(name));
		};

		let ctx = CallContext::new(name, function.return_type())
			.with_args(args)
			.with_result_info(ReturnSetInfo::new(allowed_modes));

		self.execute(function.as_ref(), ctx)
	}

	/// Runs `function` against a caller-built call context.
	#[instrument(name = "srf::host::execute", level = "debug", skip(self, function, ctx), fields(function = %ctx.function))]
	pub fn execute(&self, function: &dyn GeneratorFunction, mut ctx: CallContext) -> Result<ResultSet> {
		function.generate(GeneratorContext::new(&mut ctx, self.initializer.as_ref()))?;

		let materialized = match ctx.result_info.as_mut() {
			Some(info) if info.is_materialized() => info.set_result.take().zip(info.set_shape.take()),
			_ => None,
		};

		let Some((mut store, shape)) = materialized else {
			return_error!(function::missing_materialized_result(&ctx.function));
		};

		let rows = store.drain();
		for row in &rows {
			shape.validate(row)?;
		}
		debug!(rows = rows.len(), "drained materialized result");

		Ok(ResultSet {
			shape,
			rows,
		})
	}
}
