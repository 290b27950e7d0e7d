// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::RwLock;
use srfcompat_type::{Result, diagnostic::materialize, return_error};
use tracing::{debug, instrument};

use super::{MaterializeFlags, MaterializeInitializer, MaterializeStrategy, Materialized, resolve_row_shape};
use crate::{
	call::{CallContext, ReturnMode},
	resolve::TypeCatalog,
	store::RowStore,
};

/// Initializer for hosts without a native one.
///
/// Flags are accepted for signature parity and ignored. The store is always
/// sequential and transaction local.
#[derive(Debug)]
pub struct FallbackInitializer {
	catalog: Arc<RwLock<TypeCatalog>>,
	work_mem_kb: usize,
}

impl FallbackInitializer {
	pub fn new(catalog: Arc<RwLock<TypeCatalog>>, work_mem_kb: usize) -> Self {
		Self {
			catalog,
			work_mem_kb,
		}
	}
}

impl MaterializeInitializer for FallbackInitializer {
	fn strategy(&self) -> MaterializeStrategy {
		MaterializeStrategy::Fallback
	}

	#[instrument(name = "srf::materialize::fallback", level = "debug", skip(self, ctx, _flags), fields(function = %ctx.function))]
	fn prepare(&self, ctx: &CallContext, _flags: MaterializeFlags) -> Result<Materialized> {
		let shape = resolve_row_shape(ctx, &self.catalog.read())?;

		if ctx.result_info.is_none() {
			return_error!(materialize::set_not_accepted(&ctx.function));
		}

		let store = RowStore::begin_heap(false, false, self.work_mem_kb);
		debug!(shape = %shape, work_mem_kb = self.work_mem_kb, "materializing into heap row store");

		Ok(Materialized {
			mode: ReturnMode::Materialize,
			store,
			shape,
		})
	}
}

#[cfg(test)]
mod tests {
	use srfcompat_type::{ColumnDef, RowShape, Type};

	use super::*;
	use crate::call::{AllowedModes, ReturnSetInfo, ReturnType};

	fn initializer() -> FallbackInitializer {
		FallbackInitializer::new(Arc::new(RwLock::new(TypeCatalog::new())), 1024)
	}

	fn table_call() -> CallContext {
		CallContext::new(
			"pairs",
			ReturnType::Table(vec![ColumnDef::new("a", Type::Int4), ColumnDef::new("b", Type::Utf8)]),
		)
		.with_result_info(ReturnSetInfo::new(AllowedModes::default()))
	}

	#[test]
	fn test_composite_materializes() {
		let mut ctx = table_call();
		initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap();

		let info = ctx.result_info.as_ref().unwrap();
		assert_eq!(info.return_mode, ReturnMode::Materialize);
		assert!(info.is_materialized());
		assert_eq!(
			info.set_shape,
			Some(RowShape::new(vec![ColumnDef::new("a", Type::Int4), ColumnDef::new("b", Type::Utf8)]))
		);

		let store = info.set_result.as_ref().unwrap();
		assert!(store.is_empty());
		assert!(!store.random_access());
		assert!(!store.inter_xact());
		assert_eq!(store.max_bytes(), 1024 * 1024);
	}

	#[test]
	fn test_scalar_is_rejected() {
		let mut ctx = CallContext::new("answer", ReturnType::Scalar(Type::Int4))
			.with_result_info(ReturnSetInfo::new(AllowedModes::default()));

		let err = initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap_err();
		assert_eq!(err.code, "SRF_001");
		assert_eq!(err.message, "return type must be a row type");

		let info = ctx.result_info.as_ref().unwrap();
		assert_eq!(info.return_mode, ReturnMode::ValuePerCall);
		assert!(info.set_result.is_none());
		assert!(info.set_shape.is_none());
	}

	#[test]
	fn test_flags_are_ignored() {
		// no expected shape and no MATERIALIZE_RANDOM: the fallback does not care
		let mut ctx = table_call();
		initializer()
			.initialize(&mut ctx, MaterializeFlags::USE_EXPECTED_DESC | MaterializeFlags::BLESS)
			.unwrap();

		let info = ctx.result_info.as_ref().unwrap();
		assert!(!info.set_shape.as_ref().unwrap().blessed());
	}

	#[test]
	fn test_materialize_not_checked_against_allowed_modes() {
		let mut ctx = table_call();
		ctx.result_info = Some(ReturnSetInfo::new(AllowedModes::VALUE_PER_CALL));
		initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap();
		assert!(ctx.result_info.unwrap().is_materialized());
	}

	#[test]
	fn test_type_check_comes_first() {
		let mut ctx = CallContext::new("answer", ReturnType::Void);
		let err = initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap_err();
		assert_eq!(err.code, "SRF_001");
	}

	#[test]
	fn test_missing_result_info() {
		let mut ctx = table_call();
		ctx.result_info = None;
		let err = initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap_err();
		assert_eq!(err.code, "SRF_002");
		assert!(ctx.result_info.is_none());
	}
}
