// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::RwLock;
use srfcompat_type::{Result, diagnostic::materialize, return_error};
use tracing::{debug, instrument};

use super::{MaterializeFlags, MaterializeInitializer, MaterializeStrategy, Materialized, resolve_row_shape};
use crate::{
	call::{AllowedModes, CallContext, ReturnMode},
	record::RecordCache,
	resolve::TypeCatalog,
	store::RowStore,
};

/// The initializer modern hosts provide themselves.
#[derive(Debug)]
pub struct NativeInitializer {
	catalog: Arc<RwLock<TypeCatalog>>,
	records: Arc<RecordCache>,
	work_mem_kb: usize,
}

impl NativeInitializer {
	pub fn new(catalog: Arc<RwLock<TypeCatalog>>, records: Arc<RecordCache>, work_mem_kb: usize) -> Self {
		Self {
			catalog,
			records,
			work_mem_kb,
		}
	}
}

impl MaterializeInitializer for NativeInitializer {
	fn strategy(&self) -> MaterializeStrategy {
		MaterializeStrategy::Native
	}

	#[instrument(name = "srf::materialize::native", level = "debug", skip(self, ctx), fields(function = %ctx.function, flags = flags.bits()))]
	fn prepare(&self, ctx: &CallContext, flags: MaterializeFlags) -> Result<Materialized> {
		let Some(info) = ctx.result_info.as_ref() else {
			return_error!(materialize::set_not_accepted(&ctx.function));
		};

		let use_expected = flags.contains(MaterializeFlags::USE_EXPECTED_DESC);
		if !info.allowed_modes.contains(AllowedModes::MATERIALIZE) || (use_expected && info.expected_shape.is_none())
		{
			return_error!(materialize::materialize_not_allowed(&ctx.function));
		}

		let mut shape = match (use_expected, &info.expected_shape) {
			(true, Some(expected)) => expected.clone(),
			_ => resolve_row_shape(ctx, &self.catalog.read())?,
		};

		if flags.contains(MaterializeFlags::BLESS) {
			self.records.bless(&mut shape);
		}

		let random_access = info.allowed_modes.contains(AllowedModes::MATERIALIZE_RANDOM);
		let store = RowStore::begin_heap(random_access, false, self.work_mem_kb);
		debug!(shape = %shape, random_access, work_mem_kb = self.work_mem_kb, "materializing into heap row store");

		Ok(Materialized {
			mode: ReturnMode::Materialize,
			store,
			shape,
		})
	}
}
