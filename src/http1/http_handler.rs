// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

use crate::http1::Parser;

/// Callback return values.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Flow {
    /// Continue parsing.
    Continue,

    /// Pause the parser.
    ///
    /// [`Parser::execute()`](struct.Parser.html#method.execute) returns immediately and keeps
    /// returning `0` until [`Parser::pause(false)`](struct.Parser.html#method.pause) is called.
    Pause,

    /// Stop parsing with the callback specific
    /// [`ParserError`](enum.ParserError.html).
    Error
}

/// Return values of
/// [`HttpHandler::on_headers_complete()`](trait.HttpHandler.html#method.on_headers_complete).
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum HeadersFlow {
    /// Continue parsing, and parse the body as announced by the headers.
    Continue,

    /// The message has no body, regardless of what the headers announce. This is the case for
    /// responses to a `HEAD` request.
    NoBody,

    /// The message has no body, and the rest of the stream belongs to a different protocol.
    NoBodyUpgrade,

    /// Pause the parser.
    Pause,

    /// Stop parsing with
    /// [`ParserError::HeadersCompleteCallback`](enum.ParserError.html#variant.HeadersCompleteCallback).
    Error
}

/// Type that handles HTTP/1.x parser events.
///
/// Every callback receives the parser, so that the parsed method, status code, version and flags
/// can be inspected while the callback runs.
///
/// Data callbacks may be executed multiple times for a single field, whenever the field spans
/// several calls to [`Parser::execute()`](struct.Parser.html#method.execute). The concatenation
/// of all invocations is the full field.
#[allow(unused_variables)]
pub trait HttpHandler {
    /// Callback that is executed when body data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_body(&mut self, parser: &Parser, data: &[u8]) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a chunk has been completely parsed, including the CRLF
    /// that follows its data.
    ///
    /// The terminating zero length chunk completes after its trailers, and
    /// [`Parser::is_final_chunk()`](struct.Parser.html#method.is_final_chunk) returns `true` at
    /// that point.
    fn on_chunk_complete(&mut self, parser: &Parser) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a chunk size line has been parsed.
    ///
    /// The chunk size is available from
    /// [`Parser::content_length()`](struct.Parser.html#method.content_length).
    fn on_chunk_header(&mut self, parser: &Parser) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a header field has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_header_field(&mut self, parser: &Parser, field: &[u8]) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a header value has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment. Empty
    /// values are reported with an empty slice.
    fn on_header_value(&mut self, parser: &Parser, value: &[u8]) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when the header section has been parsed.
    ///
    /// [`Parser::is_upgrade()`](struct.Parser.html#method.is_upgrade) is already set when this is
    /// executed.
    fn on_headers_complete(&mut self, parser: &Parser) -> HeadersFlow {
        HeadersFlow::Continue
    }

    /// Callback that is executed when a new message has been located.
    fn on_message_begin(&mut self, parser: &Parser) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a message has been completely parsed.
    fn on_message_complete(&mut self, parser: &Parser) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a response status has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_status(&mut self, parser: &Parser, status: &[u8]) -> Flow {
        Flow::Continue
    }

    /// Callback that is executed when a request URL has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_url(&mut self, parser: &Parser, url: &[u8]) -> Flow {
        Flow::Continue
    }
}
