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
fn request() {
    let h = assert_split(ParserType::Request,
                         b"POST http://example.com:8080/a/b?c=d#e HTTP/1.1\r\n\
                           Host: example.com\r\n\
                           X-Folded: one\r\n two\r\n\
                           X-Empty:\r\n\
                           Content-Length: 11\r\n\
                           \r\n\
                           hello world");

    assert_eq!(h.url, b"http://example.com:8080/a/b?c=d#e");
    assert_eq!(h.body, b"hello world");
    assert_eq!(h.headers.len(), 4);
}

#[test]
fn response() {
    let h = assert_split(ParserType::Response,
                         b"HTTP/1.1 404 Not Found\r\n\
                           Content-Type: text/plain\r\n\
                           Content-Length: 9\r\n\
                           \r\n\
                           not found");

    assert_eq!(h.status, b"Not Found");
    assert_eq!(h.body, b"not found");
}

#[test]
fn chunked() {
    let h = assert_split(ParserType::Response,
                         b"HTTP/1.1 200 OK\r\n\
                           Transfer-Encoding: chunked\r\n\
                           \r\n\
                           4;ext=1\r\nWiki\r\n\
                           5\r\npedia\r\n\
                           0\r\n\
                           Expires: never\r\n\
                           \r\n");

    assert_eq!(h.body, b"Wikipedia");
    assert_eq!(h.chunk_lengths, vec![4, 5, 0]);
    assert!(h.final_chunk);
}

#[test]
fn transfer_codings() {
    let h = assert_split(ParserType::Request,
                         b"POST /upload HTTP/1.1\r\n\
                           Transfer-Encoding: gzip, x-custom,\r\n chunked\r\n\
                           Host: a\r\n\
                           \r\n\
                           3\r\nabc\r\n\
                           0\r\n\
                           \r\n");

    assert_eq!(h.body, b"abc");
    assert_eq!(h.chunk_lengths, vec![3, 0]);
    assert_eq!(h.message_complete_count, 1);
}

#[test]
fn pipelined() {
    let h = assert_split(ParserType::Both,
                         b"GET /a HTTP/1.1\r\n\r\n\
                           POST /b HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc\
                           \r\n\
                           GET /c HTTP/1.1\r\n\r\n");

    assert_eq!(h.url, b"/a/b/c");
    assert_eq!(h.message_complete_count, 3);
    assert_eq!(h.events.iter().filter(|event| **event == Event::MessageComplete).count(), 3);
}

#[test]
fn eof_body() {
    let h = assert_split(ParserType::Response, b"HTTP/1.0 200 OK\r\nServer: x\r\n\r\nbody bytes");

    assert_eq!(h.body, b"body bytes");
    assert_eq!(h.message_complete_count, 0);
}

#[test]
fn empty_status() {
    let h = assert_split(ParserType::Response, b"HTTP/1.1 200\r\nContent-Length: 0\r\n\r\n");

    assert_eq!(h.events[1], Event::Status(Vec::new()));
}
