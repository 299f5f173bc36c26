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

use crate::handler::*;
use crate::http1::test::*;

#[test]
fn basic() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h, b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello",
               ParserState::StartResponse);

    assert_eq!(h.status_code, 200);
    assert_eq!(h.status, b"OK");
    assert_eq!(h.version_major, 1);
    assert_eq!(h.version_minor, 1);
    assert_eq!(h.body, b"hello");
    assert_eq!(h.keep_alive, vec![true]);
    assert_eq!(h.events, vec![
        Event::MessageBegin,
        Event::Status(b"OK".to_vec()),
        Event::HeaderField(b"Content-Length".to_vec()),
        Event::HeaderValue(b"5".to_vec()),
        Event::HeadersComplete,
        Event::Body(b"hello".to_vec()),
        Event::MessageComplete
    ]);
}

#[test]
fn multiple_word_status() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h, b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n",
               ParserState::StartResponse);

    assert_eq!(h.status_code, 404);
    assert_eq!(h.status, b"Not Found");
}

#[test]
fn empty_status() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h, b"HTTP/1.1 200\r\nContent-Length: 0\r\n\r\n",
               ParserState::StartResponse);

    assert_eq!(h.status_code, 200);
    assert_eq!(h.events[1], Event::Status(Vec::new()));
}

#[test]
fn spaces_before_status_code() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h, b"HTTP/1.1   301 Moved\r\nContent-Length: 0\r\n\r\n",
               ParserState::StartResponse);

    assert_eq!(h.status_code, 301);
    assert_eq!(h.status, b"Moved");
}

#[test]
fn bare_lf() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h, b"HTTP/1.1 200 OK\nContent-Length: 0\n\n",
               ParserState::StartResponse);

    assert_eq!(h.status, b"OK");
    assert_eq!(h.message_complete_count, 1);
}

#[test]
fn no_content() {
    for code in [100u16, 204, 304].iter() {
        let (mut p, mut h) = http1_setup!(ParserType::Response);

        let stream = format!("HTTP/1.1 {} Whatever\r\n\r\n", code);

        assert_eos(&mut p, &mut h, stream.as_bytes(), ParserState::StartResponse);
        assert_eq!(h.status_code, *code);
        assert_eq!(h.message_complete_count, 1);
        assert!(!p.needs_eof());
    }
}

#[test]
fn http_1_0() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    let stream = b"HTTP/1.0 200 OK\r\nContent-Length: 0\r\n\r\n";

    assert_exit(&mut p, &mut h, stream, stream.len());
    assert_eq!(h.version_major, 1);
    assert_eq!(h.version_minor, 0);
    assert_eq!(h.keep_alive, vec![false]);

    if cfg!(feature = "strict") {
        assert_eq!(p.state(), ParserState::Dead);
    } else {
        assert_eq!(p.state(), ParserState::StartResponse);
    }
}

#[test]
fn invalid_status() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"HTTP/1.1 1000 OK\r\n", ParserError::InvalidStatus, 12);

    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"HTTP/1.1 2x0 OK\r\n", ParserError::InvalidStatus, 10);

    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"HTTP/1.1 OK\r\n", ParserError::InvalidStatus, 9);
}

#[test]
fn invalid_version() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"HTTP/x.1 200 OK\r\n", ParserError::InvalidVersion, 5);

    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"HTTP/1.1x200 OK\r\n", ParserError::InvalidVersion, 8);
}

#[test]
fn invalid_constant() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_error(&mut p, &mut h, b"XTTP/1.1 200 OK\r\n", ParserError::InvalidConstant, 0);

    let (mut p, mut h) = http1_setup!(ParserType::Response);

    if cfg!(feature = "strict") {
        assert_error(&mut p, &mut h, b"HTTX/1.1 200 OK\r\n", ParserError::Strict, 3);
    } else {
        assert_exit(&mut p, &mut h, b"HTTX/1.1 200 OK\r\n", 17);
    }
}

#[test]
fn status_line_cr() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    if cfg!(feature = "strict") {
        assert_error(&mut p, &mut h, b"HTTP/1.1 200 OK\rX", ParserError::Strict, 16);
    } else {
        assert_exit(&mut p, &mut h, b"HTTP/1.1 200 OK\rX", 17);
    }
}

#[test]
fn reason_phrases() {
    assert_eq!(status_reason(200), "OK");
    assert_eq!(status_reason(404), "Not Found");
    assert_eq!(status_reason(101), "Switching Protocols");
    assert_eq!(status_reason(999), "<unknown>");
}
