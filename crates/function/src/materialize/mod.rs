// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Preparing a set-returning function call for materialized results.
//!
//! Hosts from major version 15 on ship their own initializer, modelled by
//! [`NativeInitializer`]. Older hosts get [`FallbackInitializer`], which
//! provides the same entry point with the subset of behaviour those hosts
//! need. [`crate::host::Host`] picks one of them once, from the host's
//! capabilities.

use std::{
	fmt::{self, Debug, Display, Formatter},
	ops::BitOr,
};

use srfcompat_type::{Result, RowShape, diagnostic::materialize, return_error};

use crate::{
	call::{CallContext, ReturnMode, ReturnSetInfo},
	resolve::{ResolvedResultType, TypeCatalog, TypeClass, resolve_call_result_type},
	store::RowStore,
};

mod fallback;
mod native;

pub use fallback::FallbackInitializer;
pub use native::NativeInitializer;

/// Options for [`MaterializeInitializer::initialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeFlags(u32);

impl MaterializeFlags {
	/// Use the caller's expected shape instead of resolving the declared one.
	pub const USE_EXPECTED_DESC: MaterializeFlags = MaterializeFlags(0x01);
	/// Register the shape with the host's record cache.
	pub const BLESS: MaterializeFlags = MaterializeFlags(0x02);

	pub const fn empty() -> Self {
		MaterializeFlags(0)
	}

	pub const fn bits(&self) -> u32 {
		self.0
	}

	pub const fn contains(&self, other: MaterializeFlags) -> bool {
		self.0 & other.0 == other.0
	}
}

impl BitOr for MaterializeFlags {
	type Output = MaterializeFlags;

	fn bitor(self, rhs: Self) -> Self::Output {
		MaterializeFlags(self.0 | rhs.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeStrategy {
	Native,
	Fallback,
}

impl Display for MaterializeStrategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			MaterializeStrategy::Native => f.write_str("native"),
			MaterializeStrategy::Fallback => f.write_str("fallback"),
		}
	}
}

/// Everything a successful initialization attaches to the call.
#[derive(Debug)]
pub struct Materialized {
	pub mode: ReturnMode,
	pub store: RowStore,
	pub shape: RowShape,
}

impl Materialized {
	pub fn apply(self, info: &mut ReturnSetInfo) {
		info.return_mode = self.mode;
		info.set_result = Some(self.store);
		info.set_shape = Some(self.shape);
	}
}

pub trait MaterializeInitializer: Debug + Send + Sync {
	fn strategy(&self) -> MaterializeStrategy;

	/// Validates the call and builds the result parts without touching `ctx`.
	fn prepare(&self, ctx: &CallContext, flags: MaterializeFlags) -> Result<Materialized>;

	/// Prepares the call and attaches the result to its [`ReturnSetInfo`].
	///
	/// On error `ctx` is left exactly as it was.
	fn initialize(&self, ctx: &mut CallContext, flags: MaterializeFlags) -> Result<()> {
		let materialized = self.prepare(ctx, flags)?;
		match ctx.result_info.as_mut() {
			Some(info) => {
				materialized.apply(info);
				Ok(())
			}
			None => return_error!(materialize::set_not_accepted(&ctx.function)),
		}
	}
}

/// Resolves the declared result type, which has to be a row type.
pub(crate) fn resolve_row_shape(ctx: &CallContext, catalog: &TypeCatalog) -> Result<RowShape> {
	match resolve_call_result_type(ctx, catalog) {
		ResolvedResultType {
			class: TypeClass::Composite,
			shape: Some(shape),
		} => Ok(shape),
		other => return_error!(materialize::invalid_return_shape(&ctx.function, &other.class.to_string())),
	}
}
