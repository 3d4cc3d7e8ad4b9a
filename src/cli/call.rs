//! Remote call commands
//!
//! `call` runs a single named call; `serve` answers newline-delimited JSON
//! requests on stdin until it closes.

use std::io;

use serde_json::Value;

use crate::error::{ExpenseError, ExpenseResult};
use crate::rpc::{serve_lines, Dispatcher, Request};
use crate::storage::Storage;

/// Run one call and print its JSON response
///
/// Returns whether the call succeeded so the binary can set its exit code.
pub fn handle_call_command(storage: &Storage, name: &str, args: Option<&str>) -> ExpenseResult<bool> {
    let args = match args {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| ExpenseError::Validation(format!("Arguments are not valid JSON: {}", e)))?,
        None => Value::Null,
    };

    let dispatcher = Dispatcher::new(storage);
    let response = dispatcher.handle(Request {
        call: name.to_string(),
        args,
    });

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.ok)
}

/// Serve calls over stdin/stdout
pub fn handle_serve_command(storage: &Storage) -> ExpenseResult<()> {
    let dispatcher = Dispatcher::new(storage);
    let stdin = io::stdin();
    let stdout = io::stdout();

    tracing::info!(path = %storage.paths().data_dir().display(), "serving calls on stdin");
    serve_lines(&dispatcher, stdin.lock(), stdout.lock())?;

    Ok(())
}
