// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Function is not registered with the host
pub fn unknown_function(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_007".to_string(),
		message: format!("Unknown function: {}", name),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
	}
}

/// Function returned without materializing its result
pub fn missing_materialized_result(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_008".to_string(),
		message: format!("Function {} did not return a materialized result", name),
		label: None,
		help: None,
		notes: vec!["Only materialize mode is supported by this executor".to_string()],
	}
}

/// Argument is missing or unusable
pub fn invalid_argument(name: &str, index: usize, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_009".to_string(),
		message: format!("Function {} argument {} is invalid: {}", name, index + 1, reason),
		label: Some("invalid argument".to_string()),
		help: None,
		notes: vec![],
	}
}
