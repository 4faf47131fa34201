//! Transport layer for MCP JSON-RPC communication.
//!
//! MCP uses newline-delimited JSON over stdin/stdout. Nothing but protocol
//! messages may be written to the writer. Message bodies carry credentials
//! (`login` arguments) and are never logged.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::protocol::{JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, RequestId};

/// Message that can be received from the client.
#[derive(Debug)]
pub enum IncomingMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    /// Line was not valid JSON.
    Malformed(String),
    /// Valid JSON that is not a JSON-RPC request or notification.
    Invalid { id: RequestId, reason: String },
}

/// Transport for reading/writing JSON-RPC messages.
pub struct StdioTransport {
    reader: Box<dyn BufRead + Send>,
    writer: Box<dyn Write + Send>,
}

impl StdioTransport {
    /// Create a transport using stdin/stdout.
    pub fn stdio() -> Self {
        Self {
            reader: Box::new(io::BufReader::new(io::stdin())),
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a transport with custom reader/writer.
    pub fn new(reader: Box<dyn BufRead + Send>, writer: Box<dyn Write + Send>) -> Self {
        Self { reader, writer }
    }

    /// Read the next JSON-RPC message, skipping blank lines.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_message(&mut self) -> io::Result<Option<IncomingMessage>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let message = parse_message(line);
            match &message {
                IncomingMessage::Request(req) => {
                    tracing::debug!(method = %req.method, id = ?req.id, "Received request");
                }
                IncomingMessage::Notification(notif) => {
                    tracing::debug!(method = %notif.method, "Received notification");
                }
                IncomingMessage::Malformed(_) | IncomingMessage::Invalid { .. } => {
                    tracing::debug!(bytes = line.len(), "Received unusable message");
                }
            }
            return Ok(Some(message));
        }
    }

    /// Write a JSON-RPC response to the transport.
    pub fn write_response(&mut self, response: &JsonRpcResponse) -> io::Result<()> {
        let json = serde_json::to_string(response).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("Serialization error: {}", e))
        })?;

        tracing::debug!(id = ?response.id, bytes = json.len(), "Sending response");

        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

fn parse_message(line: &str) -> IncomingMessage {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to parse message: {}", e);
            return IncomingMessage::Malformed(e.to_string());
        }
    };

    // Requests carry an id, notifications do not.
    if value.get("id").is_some() {
        let id = value
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value(id).ok())
            .unwrap_or(RequestId::Null);
        return match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => IncomingMessage::Request(request),
            Err(e) => IncomingMessage::Invalid {
                id,
                reason: e.to_string(),
            },
        };
    }

    match serde_json::from_value::<JsonRpcNotification>(value) {
        Ok(notification) => IncomingMessage::Notification(notification),
        Err(e) => IncomingMessage::Invalid {
            id: RequestId::Null,
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    /// Writer whose output stays readable after the transport takes it.
    #[derive(Clone, Default)]
    struct SharedWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn transport(input: &str) -> StdioTransport {
        StdioTransport::new(
            Box::new(Cursor::new(input.to_string())),
            Box::new(Vec::new()),
        )
    }

    #[test]
    fn test_read_request() {
        let mut transport =
            transport("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\",\"params\":{}}\n");

        match transport.read_message().unwrap() {
            Some(IncomingMessage::Request(req)) => {
                assert_eq!(req.method, "tools/list");
                assert_eq!(req.id, RequestId::Number(1));
            }
            other => panic!("Expected request, got {:?}", other),
        }
    }

    #[test]
    fn test_read_notification() {
        let mut transport =
            transport("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n");

        match transport.read_message().unwrap() {
            Some(IncomingMessage::Notification(notif)) => {
                assert_eq!(notif.method, "notifications/initialized");
            }
            other => panic!("Expected notification, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut transport = transport("\n   \n{\"jsonrpc\":\"2.0\",\"id\":\"a\",\"method\":\"ping\"}\n");

        assert!(matches!(
            transport.read_message().unwrap(),
            Some(IncomingMessage::Request(_))
        ));
        assert!(transport.read_message().unwrap().is_none());
    }

    #[test]
    fn test_malformed_line() {
        let mut transport = transport("{not json\n");

        assert!(matches!(
            transport.read_message().unwrap(),
            Some(IncomingMessage::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_request_keeps_id() {
        let mut transport = transport("{\"jsonrpc\":\"2.0\",\"id\":7}\n");

        match transport.read_message().unwrap() {
            Some(IncomingMessage::Invalid { id, reason }) => {
                assert_eq!(id, RequestId::Number(7));
                assert!(reason.contains("method"));
            }
            other => panic!("Expected invalid message, got {:?}", other),
        }
    }

    #[test]
    fn test_write_response() {
        let writer = SharedWriter::default();
        let buffer = writer.0.clone();

        let mut transport =
            StdioTransport::new(Box::new(Cursor::new(Vec::new())), Box::new(writer));

        let response =
            JsonRpcResponse::success(RequestId::Number(1), serde_json::json!({"ok": true}));
        transport.write_response(&response).unwrap();

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"id\":1"));
    }

    #[test]
    fn test_credentials_not_logged() {
        let logs = SharedWriter::default();
        let captured = logs.0.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish();

        let output = SharedWriter::default();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"login","#,
            r#""arguments":{"username":"ada","password":"hunter2"}}}"#,
            "\n",
            r#"{"method":"tools/call","params":{"arguments":{"password":"hunter2"}}}"#,
            "\n",
            r#"{"password":"hunter2""#,
            "\n"
        );
        let mut transport = StdioTransport::new(
            Box::new(Cursor::new(input.to_string())),
            Box::new(output),
        );

        tracing::subscriber::with_default(subscriber, || {
            while transport.read_message().unwrap().is_some() {}
            let response = JsonRpcResponse::success(
                RequestId::Number(1),
                serde_json::json!({"echo": "hunter2"}),
            );
            transport.write_response(&response).unwrap();
        });

        let logs = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Received request"));
        assert!(logs.contains("tools/call"));
        assert!(!logs.contains("hunter2"));
    }

    #[test]
    fn test_read_eof() {
        let mut transport = transport("");
        assert!(transport.read_message().unwrap().is_none());
    }
}
