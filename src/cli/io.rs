//! JSON I/O handling for the CLI
//!
//! - Input: single JSON object on one line
//! - Output: single JSON object on one line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

#[derive(Serialize)]
struct OkResponse<'a, T: Serialize> {
    status: &'static str,
    data: &'a T,
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    status: &'static str,
    code: &'a str,
    message: &'a str,
}

/// Read one JSON request line and decode it
pub fn read_request<T: DeserializeOwned, R: BufRead>(mut reader: R) -> CliResult<T> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::invalid_request("Empty input"));
    }

    Ok(serde_json::from_str(&line)?)
}

/// Write a success response
pub fn write_response<W: Write, T: Serialize>(writer: &mut W, data: &T) -> CliResult<()> {
    let response = OkResponse { status: "ok", data };
    write_line(writer, &response)
}

/// Write an error response
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = ErrorResponse {
        status: "error",
        code,
        message,
    };
    write_line(writer, &response)
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_read_request() {
        let input = b"{\"a\": 1}\n{\"b\": 2}\n";
        let value: Value = read_request(&input[..]).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_read_empty_request() {
        let err = read_request::<Value, _>(&b"\n"[..]).unwrap_err();
        assert_eq!(err.code(), "FUELQL_CLI_INVALID_REQUEST");

        let err = read_request::<Value, _>(&b""[..]).unwrap_err();
        assert_eq!(err.code(), "FUELQL_CLI_INVALID_REQUEST");
    }

    #[test]
    fn test_read_malformed_request() {
        let err = read_request::<Value, _>(&b"{not json\n"[..]).unwrap_err();
        assert_eq!(err.code(), "FUELQL_CLI_INVALID_REQUEST");
    }

    #[test]
    fn test_write_response() {
        let mut out = Vec::new();
        write_response(&mut out, &json!({"plan": "SCAN"})).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({"status": "ok", "data": {"plan": "SCAN"}}));
    }

    #[test]
    fn test_write_error() {
        let mut out = Vec::new();
        write_error(&mut out, "FUELQL_CLI_IO_ERROR", "broken").unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            json!({"status": "error", "code": "FUELQL_CLI_IO_ERROR", "message": "broken"})
        );
    }
}
