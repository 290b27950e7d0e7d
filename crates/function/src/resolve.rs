// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use srfcompat_type::{ColumnDef, RowShape};
use tracing::instrument;

use crate::call::{CallContext, ReturnType};

/// Classification of a function's result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
	Scalar,
	Composite,
	/// `record` without a shape supplied by the caller
	Record,
	/// void, or a named type the catalog does not know
	Other,
}

impl Display for TypeClass {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			TypeClass::Scalar => f.write_str("a scalar type"),
			TypeClass::Composite => f.write_str("a composite type"),
			TypeClass::Record => f.write_str("an unresolved record type"),
			TypeClass::Other => f.write_str("a non-row type"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResultType {
	pub class: TypeClass,
	/// Only set for [`TypeClass::Composite`].
	pub shape: Option<RowShape>,
}

impl ResolvedResultType {
	fn composite(shape: RowShape) -> Self {
		Self {
			class: TypeClass::Composite,
			shape: Some(shape),
		}
	}

	fn of(class: TypeClass) -> Self {
		Self {
			class,
			shape: None,
		}
	}
}

/// Named composite types known to the host, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
	types: IndexMap<String, RowShape>,
}

impl TypeCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, name: impl Into<String>, columns: Vec<ColumnDef>) {
		self.types.insert(name.into(), RowShape::new(columns));
	}

	pub fn find(&self, name: &str) -> Option<&RowShape> {
		self.types.get(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.types.keys().map(String::as_str)
	}
}

/// Works out the result row type of the call in `ctx`.
///
/// Never mutates the call context; resolving the same context twice yields
/// the same answer.
#[instrument(name = "srf::resolve::call_result_type", level = "trace", skip(ctx, catalog), fields(function = %ctx.function))]
pub fn resolve_call_result_type(ctx: &CallContext, catalog: &TypeCatalog) -> ResolvedResultType {
	match &ctx.return_type {
		ReturnType::Scalar(_) => ResolvedResultType::of(TypeClass::Scalar),
		ReturnType::Void => ResolvedResultType::of(TypeClass::Other),
		ReturnType::Table(columns) => ResolvedResultType::composite(RowShape::new(columns.clone())),
		ReturnType::Named(name) => match catalog.find(name) {
			Some(shape) => ResolvedResultType::composite(shape.clone()),
			None => ResolvedResultType::of(TypeClass::Other),
		},
		ReturnType::Record => {
			match ctx.result_info.as_ref().and_then(|info| info.expected_shape.as_ref()) {
				Some(expected) => ResolvedResultType::composite(expected.clone()),
				None => ResolvedResultType::of(TypeClass::Record),
			}
		}
	}
}
