//! Remote call surface
//!
//! Clients send `{"call": "<name>", "args": {...}}` and receive
//! `{"ok": true, "value": ...}` or `{"ok": false, "error": {"kind", "message"}}`.
//! [`serve_lines`] runs the same protocol as newline-delimited JSON over any
//! reader/writer pair.

pub mod call;
pub mod dispatch;

use std::io::{BufRead, Write};

pub use call::{Call, CALL_NAMES};
pub use dispatch::{Dispatcher, ErrorBody, Request, Response};

use crate::error::{ExpenseError, ExpenseResult};

/// Answer one request per input line until the reader is exhausted
///
/// Blank lines are skipped. A line that is not UTF-8 gets a validation
/// error response and serving continues. Returns the number of requests
/// handled.
pub fn serve_lines<R, W>(dispatcher: &Dispatcher<'_>, mut reader: R, mut writer: W) -> ExpenseResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => dispatcher.handle_json(line.trim_end()),
            Err(e) => {
                let err = ExpenseError::Validation(format!("Request is not valid UTF-8: {}", e));
                tracing::warn!(error = %err, "rejected request");
                serde_json::to_string(&Response::failure(&err))?
            }
        };

        writeln!(writer, "{}", response)?;
        writer.flush()?;
        handled += 1;
    }

    tracing::debug!(handled, "request stream closed");
    Ok(handled)
}
