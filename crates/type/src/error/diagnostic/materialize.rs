// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// The declared result type of a set-returning function is not a row type
pub fn invalid_return_shape(function: &str, resolved: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_001".to_string(),
		message: "return type must be a row type".to_string(),
		label: Some(format!("function {} resolves to {}", function, resolved)),
		help: Some("Declare the function as RETURNS TABLE(...), with OUT columns or with a composite type"
			.to_string()),
		notes: vec![],
	}
}

/// The caller did not provide any result set information
pub fn set_not_accepted(function: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_002".to_string(),
		message: "set-valued function called in context that cannot accept a set".to_string(),
		label: Some(format!("function {} returns a set", function)),
		help: Some("Call the function from a FROM clause".to_string()),
		notes: vec![],
	}
}

/// The caller does not accept materialized results, or asked for its expected shape without providing one
pub fn materialize_not_allowed(function: &str) -> Diagnostic {
	Diagnostic {
		code: "SRF_003".to_string(),
		message: "materialize mode required, but it is not allowed in this context".to_string(),
		label: Some(format!("function {} materializes its result", function)),
		help: None,
		notes: vec![],
	}
}
