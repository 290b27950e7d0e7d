// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use srfcompat_type::{ColumnDef, Result, Value};

use crate::{
	call::ReturnType,
	generator::{GeneratorContext, GeneratorFunction},
	materialize::MaterializeFlags,
};

/// Returns a fixed list of `(key, value)` pairs, e.g. counters of a cache.
pub struct KeyValueSet {
	name: String,
	entries: Vec<(String, i64)>,
}

impl KeyValueSet {
	pub fn new(name: impl Into<String>, entries: Vec<(String, i64)>) -> Self {
		Self {
			name: name.into(),
			entries,
		}
	}
}

impl GeneratorFunction for KeyValueSet {
	fn name(&self) -> &str {
		&self.name
	}

	fn return_type(&self) -> ReturnType {
		ReturnType::Table(vec![ColumnDef::of::<String>("key"), ColumnDef::of::<i64>("value")])
	}

	fn generate(&self, mut ctx: GeneratorContext<'_>) -> Result<()> {
		ctx.materialize(MaterializeFlags::empty())?;

		for (key, value) in &self.entries {
			ctx.emit(vec![Value::Utf8(key.clone()), Value::Int8(*value)])?;
		}

		Ok(())
	}
}
