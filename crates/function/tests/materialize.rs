// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integration tests for materialized set-returning function initialization

use srfcompat_function::{
	AllowedModes, CallContext, Host, HostConfig, HostVersion, MaterializeFlags, MaterializeStrategy, ReturnMode,
	ReturnSetInfo, ReturnType, TypeCatalog, TypeClass, resolve_call_result_type,
};
use srfcompat_testing::{
	fixture::{LEGACY_VERSIONS, MODERN_VERSIONS, columns, pair_columns, pair_shape},
	init_tracing,
};
use srfcompat_type::{Result, Type, Value};

fn create_host(version: &str) -> Host {
	init_tracing();
	let config = HostConfig::builder().version(version.parse().unwrap()).work_mem_kb(256).build().unwrap();
	Host::new(config).unwrap()
}

fn all_versions() -> impl Iterator<Item = &'static str> {
	LEGACY_VERSIONS.iter().chain(MODERN_VERSIONS).copied()
}

fn call(return_type: ReturnType) -> CallContext {
	CallContext::new("f", return_type).with_result_info(ReturnSetInfo::new(AllowedModes::default()))
}

#[test]
fn test_table_return_type_materializes() -> Result<()> {
	for version in all_versions() {
		let host = create_host(version);
		let mut ctx = call(ReturnType::Table(pair_columns()));

		host.initializer().initialize(&mut ctx, MaterializeFlags::empty())?;

		let info = ctx.result_info.as_ref().unwrap();
		assert_eq!(info.return_mode, ReturnMode::Materialize, "{version}");
		assert!(info.set_result.is_some(), "{version}");
		assert_eq!(info.set_shape, Some(pair_shape()), "{version}");
		assert_eq!(info.set_shape.as_ref().unwrap().to_string(), "{a: INT4, b: UTF8}");
		assert_eq!(info.set_result.as_ref().unwrap().max_bytes(), 256 * 1024);
	}
	Ok(())
}

#[test]
fn test_named_composite_materializes() -> Result<()> {
	for version in all_versions() {
		let host = create_host(version);
		host.register_type("cache_entry", columns(&[("key", Type::Utf8), ("hits", Type::Int8)]));

		let mut ctx = call(ReturnType::Named("cache_entry".to_string()));
		host.initializer().initialize(&mut ctx, MaterializeFlags::empty())?;

		let shape = ctx.result_info.unwrap().set_shape.unwrap();
		assert_eq!(shape.to_string(), "{key: UTF8, hits: INT8}", "{version}");
	}
	Ok(())
}

#[test]
fn test_non_row_return_types_are_rejected() {
	let rejected = [
		ReturnType::Scalar(Type::Int4),
		ReturnType::Scalar(Type::Utf8),
		ReturnType::Void,
		ReturnType::Named("missing".to_string()),
		ReturnType::Record,
	];

	for version in all_versions() {
		let host = create_host(version);
		for return_type in rejected.iter().cloned() {
			let mut ctx = call(return_type.clone());
			let err = host.initializer().initialize(&mut ctx, MaterializeFlags::empty()).unwrap_err();

			assert_eq!(err.code, "SRF_001", "{version} {return_type:?}");
			assert_eq!(err.message, "return type must be a row type");

			let info = ctx.result_info.as_ref().unwrap();
			assert_eq!(info.return_mode, ReturnMode::ValuePerCall);
			assert!(info.set_result.is_none());
			assert!(info.set_shape.is_none());
		}
	}
}

#[test]
fn test_resolution_does_not_mutate_call() {
	init_tracing();
	let ctx = call(ReturnType::Named("t".to_string()));

	let mut catalog = TypeCatalog::new();
	catalog.register("t", pair_columns());

	let first = resolve_call_result_type(&ctx, &catalog);
	let second = resolve_call_result_type(&ctx, &catalog);
	assert_eq!(first, second);
	assert_eq!(first.class, TypeClass::Composite);

	let info = ctx.result_info.as_ref().unwrap();
	assert_eq!(info.return_mode, ReturnMode::ValuePerCall);
	assert!(info.set_result.is_none());
}

#[test]
fn test_version_boundary() {
	for version in LEGACY_VERSIONS {
		let host = create_host(version);
		assert!(!host.capabilities().native_materialize, "{version}");
		assert_eq!(host.initializer().strategy(), MaterializeStrategy::Fallback, "{version}");
	}
	for version in MODERN_VERSIONS {
		let host = create_host(version);
		assert!(host.capabilities().native_materialize, "{version}");
		assert_eq!(host.initializer().strategy(), MaterializeStrategy::Native, "{version}");
	}

	assert_eq!(srfcompat_function::NATIVE_MATERIALIZE_SINCE, 15);
	assert_eq!(
		Host::new(HostConfig::builder().version(HostVersion::from_version_num(140099)).build().unwrap())
			.unwrap()
			.initializer()
			.strategy(),
		MaterializeStrategy::Fallback
	);
}

#[test]
fn test_record_with_expected_shape() -> Result<()> {
	for version in all_versions() {
		let host = create_host(version);
		let mut ctx = CallContext::new("f", ReturnType::Record).with_result_info(
			ReturnSetInfo::new(AllowedModes::default()).with_expected_shape(pair_shape()),
		);

		host.initializer().initialize(&mut ctx, MaterializeFlags::empty())?;
		assert_eq!(ctx.result_info.unwrap().set_shape, Some(pair_shape()), "{version}");
	}
	Ok(())
}

#[test]
fn test_bless_only_on_native() -> Result<()> {
	let legacy = create_host("14.0");
	let mut ctx = call(ReturnType::Table(pair_columns()));
	legacy.initializer().initialize(&mut ctx, MaterializeFlags::BLESS)?;
	assert!(!ctx.result_info.unwrap().set_shape.unwrap().blessed());
	assert!(legacy.records().is_empty());

	let native = create_host("16.0");
	let mut ctx = call(ReturnType::Table(pair_columns()));
	native.initializer().initialize(&mut ctx, MaterializeFlags::BLESS)?;
	assert!(ctx.result_info.unwrap().set_shape.unwrap().blessed());
	assert_eq!(native.records().len(), 1);
	Ok(())
}

#[test]
fn test_generate_series_end_to_end() -> Result<()> {
	for version in all_versions() {
		let host = create_host(version);

		let result = host.call(
			"generate_series",
			vec![Value::Int8(10), Value::Int4(1), Value::Int4(-3)],
			AllowedModes::default(),
		)?;
		assert_eq!(
			result.column("value").unwrap(),
			vec![&Value::Int8(10), &Value::Int8(7), &Value::Int8(4), &Value::Int8(1)],
			"{version}"
		);

		let empty = host.call("generate_series", vec![Value::Int4(5), Value::Int4(1)], AllowedModes::default())?;
		assert!(empty.is_empty());

		let undefined =
			host.call("generate_series", vec![Value::Undefined, Value::Int4(1)], AllowedModes::default())?;
		assert!(undefined.is_empty());
		assert_eq!(undefined.shape.to_string(), "{value: INT8}");
	}
	Ok(())
}

#[test]
fn test_generate_series_invalid_arguments() {
	let host = create_host("15.2");

	let err = host
		.call("generate_series", vec![Value::Int4(1), Value::Int4(5), Value::Int4(0)], AllowedModes::default())
		.unwrap_err();
	assert_eq!(err.code, "SRF_009");
	assert!(err.message.contains("step size cannot equal zero"));

	let err = host.call("generate_series", vec![Value::from("a"), Value::Int4(5)], AllowedModes::default()).unwrap_err();
	assert_eq!(err.code, "SRF_009");

	let err = host.call("generate_series", vec![Value::Int4(1)], AllowedModes::default()).unwrap_err();
	assert_eq!(err.code, "SRF_009");
}

#[test]
fn test_generate_series_stops_at_overflow() -> Result<()> {
	let host = create_host("13.0");
	let result = host.call(
		"generate_series",
		vec![Value::Int8(i64::MAX - 1), Value::Int8(i64::MAX)],
		AllowedModes::default(),
	)?;
	assert_eq!(result.len(), 2);
	Ok(())
}
