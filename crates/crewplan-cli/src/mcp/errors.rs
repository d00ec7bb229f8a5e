//! Error handling utilities for MCP server

use crewplan_core::GeneratorError;
use rmcp::ErrorData;

/// Converts generator errors to MCP errors.
///
/// Input validation failures map to `invalid_params`; everything else is an
/// internal error.
pub fn to_mcp_error(message: &str, error: &GeneratorError) -> ErrorData {
    match error {
        GeneratorError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let err = GeneratorError::invalid_input("name").with_reason("must not be empty");
        let mcp = to_mcp_error("Invalid project", &err);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("must not be empty"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let mcp = to_mcp_error("Failed", &GeneratorError::EmptyResponse);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}
