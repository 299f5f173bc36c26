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

use crate::http1::test::*;

#[test]
fn keep_alive() {
    let cases: [(&[u8], bool); 6] = [
        (b"GET / HTTP/1.1\r\n\r\n", true),
        (b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n", false),
        (b"GET / HTTP/1.0\r\n\r\n", false),
        (b"GET / HTTP/1.0\r\nConnection: keep-alive\r\n\r\n", true),
        (b"GET / HTTP/1.0\r\nConnection: foo, keep-alive\r\n\r\n", true),
        (b"GET / HTTP/1.1\r\nConnection: foo, close\r\n\r\n", false)
    ];

    for (stream, keep_alive) in cases.iter() {
        let (mut p, mut h) = http1_setup!();

        assert_exit(&mut p, &mut h, stream, stream.len());
        assert_eq!(h.keep_alive, vec![*keep_alive]);
        assert_eq!(p.should_keep_alive(), *keep_alive);

        if cfg!(feature = "strict") && !*keep_alive {
            assert_eq!(p.state(), ParserState::Dead);
        } else {
            assert_eq!(p.state(), ParserState::StartRequest);
        }
    }
}

#[test]
fn dead() {
    let (mut p, mut h) = http1_setup!();

    let stream = b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n\r\n\r\nGET";

    if cfg!(feature = "strict") {
        // trailing line endings are tolerated
        assert_error(&mut p, &mut h, stream, ParserError::ClosedConnection, stream.len() - 3);
    } else {
        assert_eos(&mut p, &mut h, stream, ParserState::RequestMethod);
    }

    assert_eq!(h.message_complete_count, 1);
}

#[test]
fn pipelined() {
    let (mut p, mut h) = http1_setup!();

    assert_eos(&mut p, &mut h, b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\n\r\n",
               ParserState::StartRequest);

    assert_eq!(h.url, b"/a/b");
    assert_eq!(h.message_begin_count, 2);
    assert_eq!(h.message_complete_count, 2);
    assert_eq!(h.keep_alive, vec![true, true]);
}

#[test]
fn both_response() {
    let (mut p, mut h) = http1_setup!(ParserType::Both);

    assert_eq!(p.state(), ParserState::StartRequestOrResponse);

    assert_eos(&mut p, &mut h, b"HTTP/1.1 204 No Content\r\n\r\n", ParserState::StartResponse);
    assert_eq!(p.parser_type(), ParserType::Response);
    assert_eq!(h.status_code, 204);
    assert_eq!(h.message_begin_count, 1);
}

#[test]
fn both_request() {
    let (mut p, mut h) = http1_setup!(ParserType::Both);

    assert_eos(&mut p, &mut h, b"GET / HTTP/1.1\r\n\r\n", ParserState::StartRequest);
    assert_eq!(p.parser_type(), ParserType::Request);
    assert_eq!(h.method, Some(Method::Get));
    assert_eq!(h.message_begin_count, 1);
}

#[test]
fn both_head() {
    let (mut p, mut h) = http1_setup!(ParserType::Both);

    assert_eos(&mut p, &mut h, b"HEAD / HTTP/1.1\r\n\r\n", ParserState::StartRequest);
    assert_eq!(p.parser_type(), ParserType::Request);
    assert_eq!(h.method, Some(Method::Head));
    assert_eq!(h.message_begin_count, 1);
}

#[test]
fn both_invalid() {
    let (mut p, mut h) = http1_setup!(ParserType::Both);

    assert_error(&mut p, &mut h, b"HX", ParserError::InvalidConstant, 1);

    let (mut p, mut h) = http1_setup!(ParserType::Both);

    assert_error(&mut p, &mut h, b"XYZ / HTTP/1.1\r\n", ParserError::InvalidMethod, 0);
}

#[test]
fn upgrade() {
    let (mut p, mut h) = http1_setup!();

    let stream = b"GET /chat HTTP/1.1\r\n\
                   Connection: Upgrade\r\n\
                   Upgrade: websocket\r\n\
                   \r\n\
                   \x81\x05hello";

    assert_exit(&mut p, &mut h, stream, stream.len() - 7);
    assert!(p.is_upgrade());
    assert!(p.flags().contains(Flags::UPGRADE | Flags::CONNECTION_UPGRADE));
    assert_eq!(h.message_complete_count, 1);
}

#[test]
fn upgrade_with_body() {
    let (mut p, mut h) = http1_setup!();

    let stream = b"POST / HTTP/1.1\r\n\
                   Connection: upgrade\r\n\
                   Upgrade: h2c\r\n\
                   Content-Length: 4\r\n\
                   \r\n\
                   bodyPRI";

    // the body is parsed before the protocol changes
    assert_exit(&mut p, &mut h, stream, stream.len() - 3);
    assert!(p.is_upgrade());
    assert_eq!(h.body, b"body");
    assert_eq!(h.message_complete_count, 1);
}

#[test]
fn upgrade_header_only() {
    let (mut p, mut h) = http1_setup!();

    // Connection does not list upgrade
    assert_eos(&mut p, &mut h, b"GET / HTTP/1.1\r\nUpgrade: websocket\r\n\r\n",
               ParserState::StartRequest);

    assert!(!p.is_upgrade());
}

#[test]
fn upgrade_response() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    let stream = b"HTTP/1.1 101 Switching Protocols\r\n\
                   Connection: upgrade\r\n\
                   Upgrade: websocket\r\n\
                   \r\n\
                   \x81";

    assert_exit(&mut p, &mut h, stream, stream.len() - 1);
    assert!(p.is_upgrade());

    // announced support only
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(&mut p, &mut h,
               b"HTTP/1.1 200 OK\r\nConnection: upgrade\r\nUpgrade: h2c\r\nContent-Length: 0\r\n\r\n",
               ParserState::StartResponse);

    assert!(!p.is_upgrade());
}
