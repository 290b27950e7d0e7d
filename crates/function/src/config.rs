// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	path::Path,
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Smallest working-memory budget accepted, in KiB.
pub const MIN_WORK_MEM_KB: usize = 64;
/// Largest working-memory budget accepted, in KiB.
pub const MAX_WORK_MEM_KB: usize = i32::MAX as usize;
pub const DEFAULT_WORK_MEM_KB: usize = 4096;

pub const HOST_VERSION_ENV: &str = "SRFCOMPAT_HOST_VERSION";
pub const WORK_MEM_ENV: &str = "SRFCOMPAT_WORK_MEM";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid host version: {input}")]
	InvalidVersion {
		input: String,
	},

	#[error("work_mem {value} KiB is outside of {min}..={max} KiB")]
	WorkMemOutOfRange {
		value: usize,
		min: usize,
		max: usize,
	},

	#[error("invalid value for {name}: {value}")]
	InvalidEnv {
		name: &'static str,
		value: String,
	},

	#[error("failed to parse host configuration: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("failed to read host configuration: {0}")]
	Io(#[from] std::io::Error),
}

/// Host engine version, e.g. `14.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostVersion {
	pub major: u32,
	pub minor: u32,
}

impl HostVersion {
	pub const fn new(major: u32, minor: u32) -> Self {
		Self {
			major,
			minor,
		}
	}

	/// Decodes a numeric version such as `140009` (14.9) or `90624` (9.6).
	pub const fn from_version_num(num: u32) -> Self {
		if num >= 100_000 {
			Self::new(num / 10_000, num % 10_000)
		} else {
			Self::new(num / 10_000, (num / 100) % 100)
		}
	}
}

impl Display for HostVersion {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

impl FromStr for HostVersion {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ConfigError::InvalidVersion {
			input: s.to_string(),
		};

		let s = s.trim();
		if s.is_empty() {
			return Err(invalid());
		}

		// without a dot only the six digit numeric form (140009) is accepted
		if !s.contains('.') {
			if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
				return Err(invalid());
			}
			let num: u32 = s.parse().map_err(|_| invalid())?;
			return Ok(Self::from_version_num(num));
		}

		let mut parts = s.split('.');
		let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
		let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
		// patch level of pre-10 versions carries no capability information
		if let Some(patch) = parts.next() {
			patch.parse::<u32>().map_err(|_| invalid())?;
		}
		if parts.next().is_some() {
			return Err(invalid());
		}
		Ok(Self::new(major, minor))
	}
}

impl TryFrom<String> for HostVersion {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<HostVersion> for String {
	fn from(version: HostVersion) -> Self {
		version.to_string()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
	pub version: HostVersion,
	/// Working-memory budget for intermediate results, in KiB.
	pub work_mem_kb: usize,
}

impl Default for HostConfig {
	fn default() -> Self {
		Self {
			version: HostVersion::new(16, 0),
			work_mem_kb: DEFAULT_WORK_MEM_KB,
		}
	}
}

impl HostConfig {
	pub fn builder() -> HostConfigBuilder {
		HostConfigBuilder::new()
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(MIN_WORK_MEM_KB..=MAX_WORK_MEM_KB).contains(&self.work_mem_kb) {
			return Err(ConfigError::WorkMemOutOfRange {
				value: self.work_mem_kb,
				min: MIN_WORK_MEM_KB,
				max: MAX_WORK_MEM_KB,
			});
		}
		Ok(())
	}

	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: HostConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_json(&content)
	}

	/// Defaults overridden by `SRFCOMPAT_HOST_VERSION` and `SRFCOMPAT_WORK_MEM`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_vars(|name| std::env::var(name).ok())
	}

	fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let mut builder = HostConfigBuilder::new();

		if let Some(version) = lookup(HOST_VERSION_ENV) {
			builder = builder.version(version.parse()?);
		}

		if let Some(work_mem) = lookup(WORK_MEM_ENV) {
			let value = work_mem.trim().parse().map_err(|_| ConfigError::InvalidEnv {
				name: WORK_MEM_ENV,
				value: work_mem.clone(),
			})?;
			builder = builder.work_mem_kb(value);
		}

		builder.build()
	}
}

#[derive(Debug, Default)]
pub struct HostConfigBuilder {
	config: HostConfig,
}

impl HostConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn version(mut self, version: HostVersion) -> Self {
		self.config.version = version;
		self
	}

	pub fn work_mem_kb(mut self, work_mem_kb: usize) -> Self {
		self.config.work_mem_kb = work_mem_kb;
		self
	}

	pub fn build(self) -> Result<HostConfig, ConfigError> {
		self.config.validate()?;
		Ok(self.config)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_parse_version() {
		assert_eq!("14.9".parse::<HostVersion>().unwrap(), HostVersion::new(14, 9));
		assert_eq!("15.0".parse::<HostVersion>().unwrap(), HostVersion::new(15, 0));
		assert_eq!("9.6.24".parse::<HostVersion>().unwrap(), HostVersion::new(9, 6));
		assert_eq!("140009".parse::<HostVersion>().unwrap(), HostVersion::new(14, 9));
		assert_eq!(" 16.2 ".parse::<HostVersion>().unwrap(), HostVersion::new(16, 2));
	}

	#[test]
	fn test_parse_version_invalid() {
		for input in ["", "abc", "14.", "14.x", "1.2.3.4", "9.6.x"] {
			assert!(
				matches!(input.parse::<HostVersion>(), Err(ConfigError::InvalidVersion { .. })),
				"{input}"
			);
		}
	}

	#[test]
	fn test_bare_numbers_need_six_digits() {
		// a dropped dot must not turn into a huge major version
		for input in ["15", "1500", "10000", "90624", "1400090", "+14009"] {
			assert!(
				matches!(input.parse::<HostVersion>(), Err(ConfigError::InvalidVersion { .. })),
				"{input}"
			);
		}
		assert_eq!("150002".parse::<HostVersion>().unwrap(), HostVersion::new(15, 2));
	}

	#[test]
	fn test_from_version_num() {
		assert_eq!(HostVersion::from_version_num(150004), HostVersion::new(15, 4));
		assert_eq!(HostVersion::from_version_num(90624), HostVersion::new(9, 6));
	}

	#[test]
	fn test_defaults() {
		let config = HostConfig::default();
		assert_eq!(config.version, HostVersion::new(16, 0));
		assert_eq!(config.work_mem_kb, DEFAULT_WORK_MEM_KB);
		config.validate().unwrap();
	}

	#[test]
	fn test_builder_rejects_small_work_mem() {
		let err = HostConfig::builder().work_mem_kb(10).build().unwrap_err();
		assert!(matches!(
			err,
			ConfigError::WorkMemOutOfRange {
				value: 10,
				..
			}
		));
	}

	#[test]
	fn test_from_json() {
		let config = HostConfig::from_json(r#"{"version": "14.9", "work_mem_kb": 1024}"#).unwrap();
		assert_eq!(config.version, HostVersion::new(14, 9));
		assert_eq!(config.work_mem_kb, 1024);

		let config = HostConfig::from_json(r#"{"version": "13.1"}"#).unwrap();
		assert_eq!(config.work_mem_kb, DEFAULT_WORK_MEM_KB);
	}

	#[test]
	fn test_from_json_invalid() {
		assert!(matches!(HostConfig::from_json(r#"{"version": "x"}"#), Err(ConfigError::Parse(_))));
		assert!(matches!(
			HostConfig::from_json(r#"{"work_mem_kb": 1}"#),
			Err(ConfigError::WorkMemOutOfRange { .. })
		));
	}

	#[test]
	fn test_serialize_roundtrip() {
		let config = HostConfig::builder().version(HostVersion::new(14, 2)).build().unwrap();
		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(json, r#"{"version":"14.2","work_mem_kb":4096}"#);
	}

	#[test]
	fn test_from_vars() {
		let vars: HashMap<&str, &str> = HashMap::from([(HOST_VERSION_ENV, "14.5"), (WORK_MEM_ENV, "2048")]);
		let config = HostConfig::from_vars(|name| vars.get(name).map(|v| v.to_string())).unwrap();
		assert_eq!(config.version, HostVersion::new(14, 5));
		assert_eq!(config.work_mem_kb, 2048);

		let err = HostConfig::from_vars(|name| (name == WORK_MEM_ENV).then(|| "lots".to_string())).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidEnv {
				name: WORK_MEM_ENV,
				..
			}
		));

		assert_eq!(HostConfig::from_vars(|_| None).unwrap(), HostConfig::default());
	}
}
