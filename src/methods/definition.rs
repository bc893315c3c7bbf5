//! `textDocument/definition`: demo navigation.

use crate::lsp::{Location, Position, Range, Request, TextDocumentPositionParams};

/// Handle `textDocument/definition`.
///
/// Points at column 0 of the line above the cursor in the same document.
/// On the first line it stays on line 0.
pub fn definition(request: Request<TextDocumentPositionParams>) -> Location {
    let params = request.params;
    let target = Position::new(params.position.line.saturating_sub(1), 0);

    Location {
        uri: params.text_document.uri,
        range: Range::new(target, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lsp::TextDocumentIdentifier;

    fn request(line: u32, character: u32) -> Request<TextDocumentPositionParams> {
        Request::new(
            9,
            "textDocument/definition",
            TextDocumentPositionParams {
                text_document: TextDocumentIdentifier {
                    uri: "file:///req.http".to_string(),
                },
                position: Position::new(line, character),
            },
        )
    }

    #[test]
    fn test_definition_one_line_up() {
        let location = definition(request(5, 12));

        assert_eq!(location.uri, "file:///req.http");
        assert_eq!(location.range.start, Position::new(4, 0));
        assert_eq!(location.range.end, Position::new(4, 0));
    }

    #[test]
    fn test_definition_first_line_saturates() {
        let location = definition(request(0, 3));
        assert_eq!(location.range.start, Position::new(0, 0));
    }
}
