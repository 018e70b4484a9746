//! Output formatting for the address worker.
//!
//! Formats the single JSON response written to stdout.

use dkg_address::{DkgFields, EthereumAddress};
use serde::Serialize;

/// Success response carrying the derived address.
#[derive(Serialize)]
pub struct AddressResponse {
    pub success: bool,
    pub x: String,
    pub y: String,
    pub address: String,
    pub eip55: String,
    pub connection_time: Option<String>,
    pub x_share: Option<String>,
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Format a success response as JSON.
pub fn address_response(
    x: &str,
    y: &str,
    address: &EthereumAddress,
    fields: &DkgFields,
) -> String {
    let response = AddressResponse {
        success: true,
        x: x.to_string(),
        y: y.to_string(),
        address: address.hex_lower.clone(),
        eip55: address.eip55.clone(),
        connection_time: fields.connection_time.clone(),
        x_share: fields.x_share.clone(),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":true,"x":"{}","y":"{}","address":"{}"}}"#,
            x, y, address.hex_lower
        )
    })
}

/// Format an error response as JSON.
pub fn error_response(error: &str) -> String {
    let response = ErrorResponse {
        success: false,
        error: error.to_string(),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":false,"error":"{}"}}"#,
            error.replace('"', "'")
        )
    })
}
