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

extern crate http_fsm;

use http_fsm::http1::{ Flow,
                       HeadersFlow,
                       HttpHandler,
                       Method,
                       Parser,
                       ParserError,
                       ParserType };
use http_fsm::url::{ parse_url, UrlField };

use std::collections::HashMap;
use std::fs::File;
use std::io::prelude::*;

#[derive(Default)]
struct RequestHandler {
    pub body:       Vec<u8>,
    pub complete:   bool,
    pub headers:    HashMap<String, String>,
    pub keep_alive: bool,
    pub method:     Option<Method>,
    pub name_buf:   Vec<u8>,
    pub url:        Vec<u8>,
    pub value_buf:  Vec<u8>,
    pub version:    (u8, u8)
}

impl RequestHandler {
    fn flush_header(&mut self) {
        if !self.name_buf.is_empty() {
            // header names are case-insensitive
            self.headers.insert(
                String::from_utf8_lossy(&self.name_buf).to_lowercase(),
                String::from_utf8_lossy(&self.value_buf).into_owned()
            );
        }

        self.name_buf.clear();
        self.value_buf.clear();
    }
}

impl HttpHandler for RequestHandler {
    fn on_body(&mut self, _parser: &Parser, data: &[u8]) -> Flow {
        self.body.extend_from_slice(data);

        Flow::Continue
    }

    fn on_header_field(&mut self, _parser: &Parser, field: &[u8]) -> Flow {
        if !self.value_buf.is_empty() {
            self.flush_header();
        }

        self.name_buf.extend_from_slice(field);

        Flow::Continue
    }

    fn on_header_value(&mut self, _parser: &Parser, value: &[u8]) -> Flow {
        self.value_buf.extend_from_slice(value);

        Flow::Continue
    }

    fn on_headers_complete(&mut self, parser: &Parser) -> HeadersFlow {
        self.flush_header();

        self.method  = parser.method();
        self.version = (parser.http_major(), parser.http_minor());

        HeadersFlow::Continue
    }

    fn on_message_complete(&mut self, parser: &Parser) -> Flow {
        self.complete   = true;
        self.keep_alive = parser.should_keep_alive();

        Flow::Continue
    }

    fn on_url(&mut self, _parser: &Parser, url: &[u8]) -> Flow {
        self.url.extend_from_slice(url);

        Flow::Continue
    }
}

fn request_data() -> Vec<u8> {
    let mut d = Vec::new();

    File::open("tests/http1_data/request.dat").unwrap().read_to_end(&mut d).unwrap();
    d
}

fn assert_request(h: &RequestHandler) {
    assert!(h.complete);
    assert!(h.keep_alive);

    assert_eq!(h.method, Some(Method::Post));
    assert_eq!(h.version, (1, 1));
    assert_eq!(h.url, b"/submit?lang=en#form");
    assert_eq!(h.body, b"first=Ferris&last=Crab&x=1");

    assert_eq!(
        h.headers.get("host").map(|v| v.as_str()),
        Some("example.com:8080")
    );

    assert_eq!(
        h.headers.get("content-type").map(|v| v.as_str()),
        Some("application/x-www-form-urlencoded")
    );

    assert_eq!(
        h.headers.len(),
        4
    );
}

#[test]
fn request() {
    let d     = request_data();
    let mut p = Parser::new(ParserType::Request);
    let mut h = RequestHandler::default();

    assert_eq!(p.execute(&mut h, &d), d.len());
    assert_eq!(p.error(), None);

    assert_request(&h);
}

#[test]
fn request_byte_by_byte() {
    let d     = request_data();
    let mut p = Parser::new(ParserType::Request);
    let mut h = RequestHandler::default();

    for byte in d.iter() {
        assert_eq!(p.execute(&mut h, &[*byte]), 1);
    }

    assert_request(&h);
}

#[test]
fn request_chunks() {
    let d = request_data();

    for size in 2..16 {
        let mut p = Parser::new(ParserType::Request);
        let mut h = RequestHandler::default();

        for chunk in d.chunks(size) {
            assert_eq!(p.execute(&mut h, chunk), chunk.len());
        }

        assert_request(&h);
    }
}

#[test]
fn request_url() {
    let d     = request_data();
    let mut p = Parser::new(ParserType::Request);
    let mut h = RequestHandler::default();

    p.execute(&mut h, &d);

    let parts = parse_url(&h.url, false).unwrap();

    assert_eq!(parts.get(UrlField::Path, &h.url), Some(&b"/submit"[..]));
    assert_eq!(parts.get(UrlField::Query, &h.url), Some(&b"lang=en"[..]));
    assert_eq!(parts.get(UrlField::Fragment, &h.url), Some(&b"form"[..]));
    assert!(!parts.has(UrlField::Host));

    // the host header carries the authority
    let host  = h.headers["host"].as_bytes();
    let parts = parse_url(host, true).unwrap();

    assert_eq!(parts.get(UrlField::Host, host), Some(&b"example.com"[..]));
    assert_eq!(parts.port(), Some(8080));
}

#[test]
fn request_error() {
    let mut d = request_data();
    let mut p = Parser::new(ParserType::Request);
    let mut h = RequestHandler::default();

    // break the version
    d[31] = b'X';

    assert_eq!(p.execute(&mut h, &d), 31);
    assert_eq!(p.error(), Some(ParserError::InvalidVersion));
    assert!(!h.complete);
}
