//! End-to-end tests for the server loop.
//!
//! Each test feeds a byte stream of framed messages into `Server::serve`
//! and parses the frames it wrote back.

use http_lsp::protocol::{build_frame, FrameBuffer};
use http_lsp::{DecodeFailurePolicy, LspError, Server};
use serde_json::{json, Value};

fn frame(message: Value) -> Vec<u8> {
    build_frame(&serde_json::to_vec(&message).unwrap()).to_vec()
}

fn stream(messages: Vec<Value>) -> Vec<u8> {
    messages.into_iter().flat_map(frame).collect()
}

fn parse_output(output: &[u8]) -> Vec<Value> {
    let mut buffer = FrameBuffer::new();
    let frames = buffer.push(output).unwrap();
    assert!(buffer.is_empty(), "output ended mid-frame");

    frames
        .iter()
        .map(|frame| serde_json::from_slice(frame.body()).unwrap())
        .collect()
}

async fn run(server: &Server, input: &[u8]) -> (Result<(), LspError>, Vec<Value>) {
    let mut output = Vec::new();
    let result = server.serve(input, &mut output).await;
    (result, parse_output(&output))
}

fn default_server() -> Server {
    Server::builder().with_default_handlers().build()
}

fn position_request(id: i64, method: &str, line: u32) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": {
            "textDocument": {"uri": "file:///req.http"},
            "position": {"line": line, "character": 3}
        }
    })
}

fn did_change(uri: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri, "version": 2},
            "contentChanges": [{"text": "GET https://example.com"}]
        }
    })
}

#[tokio::test]
async fn test_initialize_reports_capabilities() {
    let input = stream(vec![json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"clientInfo": {"name": "nvim", "version": "0.1"}}
    })]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["jsonrpc"], "2.0");
    assert_eq!(replies[0]["id"], 1);
    assert_eq!(
        replies[0]["result"]["capabilities"],
        json!({
            "textDocumentSync": 1,
            "hoverProvider": true,
            "definitionProvider": true,
            "codeActionProvider": true,
            "completionProvider": {}
        })
    );
    assert_eq!(replies[0]["result"]["serverInfo"]["name"], "nvim_http");
    assert_eq!(
        replies[0]["result"]["serverInfo"]["version"],
        env!("CARGO_PKG_VERSION")
    );
}

#[tokio::test]
async fn test_initialize_without_client_info() {
    let input = stream(vec![json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"processId": null, "capabilities": {}}
    })]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["result"]["capabilities"]["hoverProvider"], true);
}

#[tokio::test]
async fn test_definition_points_one_line_up() {
    let input = stream(vec![position_request(2, "textDocument/definition", 5)]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(
        replies,
        vec![json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": {
                "uri": "file:///req.http",
                "range": {
                    "start": {"line": 4, "character": 0},
                    "end": {"line": 4, "character": 0}
                }
            }
        })]
    );
}

#[tokio::test]
async fn test_definition_on_first_line_stays_on_first_line() {
    let input = stream(vec![position_request(2, "textDocument/definition", 0)]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies[0]["result"]["range"]["start"]["line"], 0);
}

#[tokio::test]
async fn test_hover_completion_and_code_action() {
    let input = stream(vec![
        position_request(3, "textDocument/hover", 0),
        position_request(4, "textDocument/completion", 0),
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "textDocument/codeAction",
            "params": {
                "textDocument": {"uri": "file:///req.http"},
                "range": {
                    "start": {"line": 0, "character": 0},
                    "end": {"line": 0, "character": 3}
                },
                "context": {"diagnostics": []}
            }
        }),
    ]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 3);

    assert_eq!(replies[0]["id"], 3);
    assert_eq!(replies[0]["result"], json!({"contents": "hello from lsp"}));

    assert_eq!(replies[1]["id"], 4);
    let items = replies[1]["result"].as_array().unwrap();
    assert_eq!(items.len(), 25);
    assert!(items.iter().any(|item| item["label"] == "GET "));
    assert!(items.iter().all(|item| item["detail"].is_string()));

    assert_eq!(replies[2]["id"], 5);
    assert_eq!(replies[2]["result"], json!({"title": "TODO implement"}));
}

#[tokio::test]
async fn test_replies_follow_request_order() {
    let input = stream(
        (1..=10)
            .map(|id| position_request(id, "textDocument/hover", 0))
            .collect(),
    );

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    let ids: Vec<i64> = replies.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_string_request_id_is_echoed() {
    let mut request = position_request(0, "textDocument/hover", 0);
    request["id"] = json!("abc");

    let (result, replies) = run(&default_server(), &stream(vec![request])).await;

    result.unwrap();
    assert_eq!(replies[0]["id"], "abc");
}

#[tokio::test]
async fn test_unknown_method_is_ignored() {
    let input = stream(vec![
        json!({"jsonrpc": "2.0", "id": 1, "method": "foo/bar", "params": {}}),
        position_request(2, "textDocument/hover", 0),
    ]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn test_message_without_method_is_ignored() {
    let input = stream(vec![
        json!({"jsonrpc": "2.0", "id": 1, "result": null}),
        position_request(2, "textDocument/hover", 0),
    ]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn test_request_without_id_gets_no_reply() {
    let mut request = position_request(0, "textDocument/hover", 0);
    request.as_object_mut().unwrap().remove("id");
    let input = stream(vec![request, position_request(2, "textDocument/hover", 0)]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn test_unterminated_header_terminates() {
    let mut input = b"X-Garbage: ".to_vec();
    input.extend(std::iter::repeat(b'z').take(4096));

    let (result, replies) = run(&default_server(), &input).await;

    assert!(matches!(result, Err(LspError::MalformedHeader(_))));
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_method_key_matched_case_insensitively() {
    let input = stream(vec![json!({
        "jsonrpc": "2.0",
        "id": 9,
        "Method": "textDocument/hover",
        "params": {
            "textDocument": {"uri": "file:///req.http"},
            "position": {"line": 0, "character": 0}
        }
    })]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 9);
}

#[tokio::test]
async fn test_did_open_produces_no_output() {
    let input = stream(vec![json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {
            "textDocument": {
                "uri": "file:///req.http",
                "languageId": "http",
                "version": 1,
                "text": "GET https://example.com"
            }
        }
    })]);

    let (result, replies) = run(&default_server(), &input).await;

    result.unwrap();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_did_change_silent_when_disabled() {
    let server = Server::builder()
        .with_default_handlers()
        .publish_diagnostics_on_change(false)
        .build();

    let (result, replies) = run(&server, &stream(vec![did_change("file:///a.http")])).await;

    result.unwrap();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_did_change_publishes_diagnostics_when_enabled() {
    let server = Server::builder()
        .with_default_handlers()
        .publish_diagnostics_on_change(true)
        .build();

    let (result, replies) = run(&server, &stream(vec![did_change("file:///a.http")])).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);

    let notification = &replies[0];
    assert_eq!(notification["method"], "textDocument/publishDiagnostics");
    assert!(notification.get("id").is_none());
    assert_eq!(notification["params"]["uri"], "file:///a.http");

    let diagnostics = notification["params"]["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["source"], "me stuff");
    assert_eq!(diagnostics[0]["severity"], 1);
    assert_eq!(diagnostics[0]["message"], "you made a change");
    assert_eq!(diagnostics[0]["range"]["end"]["character"], 5);
    assert_eq!(diagnostics[1]["source"], "me stuff 2");
    assert_eq!(diagnostics[1]["range"]["start"]["line"], 1);
}

#[tokio::test]
async fn test_decode_failure_terminates_by_default() {
    let input = stream(vec![
        json!({"jsonrpc": "2.0", "id": 1, "method": "textDocument/hover", "params": {"textDocument": 5}}),
        position_request(2, "textDocument/hover", 0),
    ]);

    let (result, replies) = run(&default_server(), &input).await;

    match result {
        Err(LspError::Decode { method, .. }) => assert_eq!(method, "textDocument/hover"),
        other => panic!("expected decode error, got {other:?}"),
    }
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_decode_failure_skipped_when_configured() {
    let server = Server::builder()
        .with_default_handlers()
        .decode_failure(DecodeFailurePolicy::Skip)
        .build();
    let input = stream(vec![
        json!({"jsonrpc": "2.0", "id": 1, "method": "textDocument/hover", "params": {"textDocument": 5}}),
        position_request(2, "textDocument/hover", 0),
    ]);

    let (result, replies) = run(&server, &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn test_non_object_body_terminates_even_when_skipping() {
    let server = Server::builder()
        .with_default_handlers()
        .decode_failure(DecodeFailurePolicy::Skip)
        .build();
    let input = build_frame(b"[1,2,3]");

    let (result, replies) = run(&server, &input).await;

    assert!(matches!(result, Err(LspError::MalformedBody(_))));
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_malformed_header_terminates() {
    let mut input = stream(vec![position_request(1, "textDocument/hover", 0)]);
    input.extend_from_slice(b"Content-Type: text/plain\r\n\r\n{}");

    let (result, replies) = run(&default_server(), &input).await;

    assert!(matches!(result, Err(LspError::MalformedHeader(_))));
    assert_eq!(replies.len(), 1);
}

#[tokio::test]
async fn test_oversized_content_length_terminates() {
    let server = Server::builder()
        .with_default_handlers()
        .max_content_length(16)
        .build();
    let input = stream(vec![position_request(1, "textDocument/hover", 0)]);

    let (result, _) = run(&server, &input).await;

    assert!(matches!(
        result,
        Err(LspError::ContentTooLarge { max: 16, .. })
    ));
}

#[tokio::test]
async fn test_empty_input_ends_cleanly() {
    let (result, replies) = run(&default_server(), b"").await;

    result.unwrap();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_truncated_frame_at_eof_ends_cleanly() {
    let full = stream(vec![position_request(1, "textDocument/hover", 0)]);
    let input = &full[..full.len() - 3];

    let (result, replies) = run(&default_server(), input).await;

    result.unwrap();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_byte_at_a_time_input() {
    let server = Server::builder()
        .with_default_handlers()
        .read_buffer_size(1)
        .build();
    let input = stream(vec![
        position_request(1, "textDocument/hover", 0),
        position_request(2, "textDocument/definition", 7),
    ]);

    let (result, replies) = run(&server, &input).await;

    result.unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["result"]["contents"], "hello from lsp");
    assert_eq!(replies[1]["result"]["range"]["start"]["line"], 6);
}

#[tokio::test]
async fn test_custom_handler_overrides_default() {
    let server = Server::builder()
        .with_default_handlers()
        .handle_request("textDocument/hover", |_: http_lsp::lsp::Request<Value>| {
            json!({"contents": "custom"})
        })
        .build();

    let input = stream(vec![position_request(1, "textDocument/hover", 0)]);
    let (result, replies) = run(&server, &input).await;

    result.unwrap();
    assert_eq!(replies[0]["result"]["contents"], "custom");
}

#[tokio::test]
async fn test_serve_over_duplex_pipe() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let (mut client_write, server_read) = tokio::io::duplex(1024);
    let (server_write, mut client_read) = tokio::io::duplex(1024);

    let task = tokio::spawn(async move {
        default_server().serve(server_read, server_write).await
    });

    client_write
        .write_all(&stream(vec![position_request(7, "textDocument/hover", 0)]))
        .await
        .unwrap();

    let mut buffer = FrameBuffer::new();
    let mut chunk = [0u8; 256];
    let reply = loop {
        let n = client_read.read(&mut chunk).await.unwrap();
        assert!(n > 0, "server closed output early");
        buffer.extend(&chunk[..n]);
        if let Some(frame) = buffer.next_frame().unwrap() {
            break serde_json::from_slice::<Value>(frame.body()).unwrap();
        }
    };
    assert_eq!(reply["id"], 7);

    drop(client_write);
    task.await.unwrap().unwrap();
}
