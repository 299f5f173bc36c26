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

use crate::handler::DebugHandler;
use crate::http1::*;

macro_rules! http1_setup {
    () => (
        http1_setup!(ParserType::Request)
    );

    ($parser_type:expr) => (
        (Parser::new($parser_type), DebugHandler::new())
    );
}

/// Parse `stream` completely, ending in `state`.
fn assert_eos<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    state:   ParserState
) {
    assert_eq!(parser.execute(handler, stream), stream.len());
    assert_eq!(parser.error(), None);
    assert_eq!(parser.state(), state);
}

/// Parse `stream`, failing with `error` after `length` bytes.
fn assert_error<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    error:   ParserError,
    length:  usize
) {
    assert_eq!(parser.execute(handler, stream), length);
    assert_eq!(parser.error(), Some(error));

    // errors are sticky
    assert_eq!(parser.execute(handler, stream), 0);
    assert_eq!(parser.error(), Some(error));
}

/// Parse `stream` and stop after `length` bytes, without an error.
fn assert_exit<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    length:  usize
) {
    assert_eq!(parser.execute(handler, stream), length);
    assert_eq!(parser.error(), None);
}

/// Parse `stream` one byte at a time.
fn iter_assert_eos<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8]
) {
    for byte in stream.iter() {
        assert_eq!(parser.execute(handler, &[*byte]), 1);
        assert_eq!(parser.error(), None);
    }
}

/// Parse `stream` at once, split in two at every index, and one byte at a time, and verify
/// that the callbacks are identical.
///
/// Returns the handler of the single pass.
fn assert_split(parser_type: ParserType, stream: &[u8]) -> DebugHandler {
    let (mut p, mut h) = http1_setup!(parser_type);

    assert_exit(&mut p, &mut h, stream, stream.len());

    for n in 1..stream.len() {
        let (mut p2, mut h2) = http1_setup!(parser_type);

        assert_exit(&mut p2, &mut h2, &stream[..n], n);
        assert_exit(&mut p2, &mut h2, &stream[n..], stream.len() - n);

        assert_eq!(h.events, h2.events, "split at {}", n);
        assert_eq!(p.state(), p2.state(), "split at {}", n);
    }

    let (mut p3, mut h3) = http1_setup!(parser_type);

    iter_assert_eos(&mut p3, &mut h3, stream);

    assert_eq!(h.events, h3.events);
    assert_eq!(h.headers, h3.headers);
    assert_eq!(h.body, h3.body);

    h
}

mod connection;
mod response;
mod split;
