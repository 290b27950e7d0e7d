// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use srfcompat_type::{ColumnDef, Result, Value, diagnostic::function, return_error};

use crate::{
	call::ReturnType,
	generator::{GeneratorContext, GeneratorFunction},
	materialize::MaterializeFlags,
};

/// `generate_series(start, stop[, step])`, inclusive on both ends.
pub struct GenerateSeries;

impl GenerateSeries {
	pub fn new() -> Self {
		Self
	}
}

impl Default for GenerateSeries {
	fn default() -> Self {
		Self::new()
	}
}

enum Bound {
	Value(i64),
	Undefined,
}

fn integer_arg(ctx: &GeneratorContext<'_>, index: usize) -> Result<Bound> {
	match ctx.arg(index) {
		Some(Value::Undefined) => Ok(Bound::Undefined),
		Some(value) => match value.as_i64() {
			Some(v) => Ok(Bound::Value(v)),
			None => return_error!(function::invalid_argument(
				"generate_series",
				index,
				&format!("expected an integer, got {}", value.get_type())
			)),
		},
		None => return_error!(function::invalid_argument("generate_series", index, "missing")),
	}
}

impl GeneratorFunction for GenerateSeries {
	fn name(&self) -> &str {
		"generate_series"
	}

	fn return_type(&self) -> ReturnType {
		ReturnType::Table(vec![ColumnDef::of::<i64>("value")])
	}

	fn generate(&self, mut ctx: GeneratorContext<'_>) -> Result<()> {
		let start = integer_arg(&ctx, 0)?;
		let stop = integer_arg(&ctx, 1)?;
		let step = if ctx.call.args.len() > 2 {
			integer_arg(&ctx, 2)?
		} else {
			Bound::Value(1)
		};

		if let Bound::Value(0) = step {
			return_error!(function::invalid_argument("generate_series", 2, "step size cannot equal zero"));
		}

		ctx.materialize(MaterializeFlags::empty())?;

		// undefined input yields an empty set
		let (Bound::Value(start), Bound::Value(stop), Bound::Value(step)) = (start, stop, step) else {
			return Ok(());
		};

		let mut current = start;
		while (step > 0 && current <= stop) || (step < 0 && current >= stop) {
			ctx.emit(vec![Value::Int8(current)])?;
			current = match current.checked_add(step) {
				Some(next) => next,
				None => break,
			};
		}

		Ok(())
	}
}
