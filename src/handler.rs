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

//! [`HttpHandler`](../http1/trait.HttpHandler.html) implementation for debugging purposes.

use crate::http1::{ Flow, HeadersFlow, HttpHandler, Method, Parser };

use tracing::trace;

/// Handler callbacks, used to pause or fail a specific callback.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Callback {
    /// `on_body()`.
    Body,

    /// `on_chunk_complete()`.
    ChunkComplete,

    /// `on_chunk_header()`.
    ChunkHeader,

    /// `on_header_field()`.
    HeaderField,

    /// `on_header_value()`.
    HeaderValue,

    /// `on_message_begin()`.
    MessageBegin,

    /// `on_message_complete()`.
    MessageComplete,

    /// `on_status()`.
    Status,

    /// `on_url()`.
    Url
}

/// Recorded callback.
///
/// Consecutive data callbacks of the same kind are joined into a single event, so the event log
/// does not depend on how the stream was split.
#[derive(Clone,Debug,PartialEq)]
pub enum Event {
    /// Body data.
    Body(Vec<u8>),

    /// Chunk complete.
    ChunkComplete,

    /// Chunk header, with the chunk size.
    ChunkHeader(u64),

    /// Header field.
    HeaderField(Vec<u8>),

    /// Header value.
    HeaderValue(Vec<u8>),

    /// Headers complete.
    HeadersComplete,

    /// Message begin.
    MessageBegin,

    /// Message complete.
    MessageComplete,

    /// Response status.
    Status(Vec<u8>),

    /// Request URL.
    Url(Vec<u8>)
}

/// `DebugHandler` records every callback it receives.
///
/// Data is appended across messages until [`reset()`](#method.reset) is called.
pub struct DebugHandler {
    /// Body data.
    pub body: Vec<u8>,

    /// Number of chunk complete callbacks.
    pub chunk_complete_count: usize,

    /// Number of chunk header callbacks.
    pub chunk_header_count: usize,

    /// Chunk sizes in the order they were parsed.
    pub chunk_lengths: Vec<u64>,

    /// Event log.
    pub events: Vec<Event>,

    /// Callback that returns `Flow::Error`.
    pub fail_on: Option<Callback>,

    /// Indicates that the final chunk callback has been received.
    pub final_chunk: bool,

    /// All header field data.
    pub header_field: Vec<u8>,

    /// All header value data.
    pub header_value: Vec<u8>,

    /// Header pairs.
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,

    /// Indicates that the header section has been parsed.
    pub headers_complete: bool,

    /// Value returned from `on_headers_complete()`.
    pub headers_flow: HeadersFlow,

    /// Keep-alive decision of each completed message.
    pub keep_alive: Vec<bool>,

    /// Number of message begin callbacks.
    pub message_begin_count: usize,

    /// Number of message complete callbacks.
    pub message_complete_count: usize,

    /// Request method, when the header section was parsed.
    pub method: Option<Method>,

    /// Callback that returns `Flow::Pause`.
    pub pause_on: Option<Callback>,

    /// Response status.
    pub status: Vec<u8>,

    /// Response status code, when the header section was parsed.
    pub status_code: u16,

    /// Request URL.
    pub url: Vec<u8>,

    /// HTTP major version, when the header section was parsed.
    pub version_major: u8,

    /// HTTP minor version, when the header section was parsed.
    pub version_minor: u8
}

impl DebugHandler {
    /// Create a new `DebugHandler`.
    pub fn new() -> DebugHandler {
        DebugHandler{
            body:                   Vec::new(),
            chunk_complete_count:   0,
            chunk_header_count:     0,
            chunk_lengths:          Vec::new(),
            events:                 Vec::new(),
            fail_on:                None,
            final_chunk:            false,
            header_field:           Vec::new(),
            header_value:           Vec::new(),
            headers:                Vec::new(),
            headers_complete:       false,
            headers_flow:           HeadersFlow::Continue,
            keep_alive:             Vec::new(),
            message_begin_count:    0,
            message_complete_count: 0,
            method:                 None,
            pause_on:               None,
            status:                 Vec::new(),
            status_code:            0,
            url:                    Vec::new(),
            version_major:          0,
            version_minor:          0
        }
    }

    /// Reset the handler back to its original state.
    pub fn reset(&mut self) {
        *self = DebugHandler::new();
    }

    /// Retrieve the value of the first header named `field`, ignoring case.
    pub fn header(&self, field: &[u8]) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.as_slice())
    }

    /// Retrieve the flow for `callback`.
    fn flow(&self, callback: Callback) -> Flow {
        if self.fail_on == Some(callback) {
            Flow::Error
        } else if self.pause_on == Some(callback) {
            Flow::Pause
        } else {
            Flow::Continue
        }
    }

    /// Record data event `event`, joining it with the previous event of the same kind.
    fn record(&mut self, event: Event) {
        if let Some(last) = self.events.last_mut() {
            match (last, &event) {
                (Event::Body(last), Event::Body(data))
                | (Event::HeaderField(last), Event::HeaderField(data))
                | (Event::HeaderValue(last), Event::HeaderValue(data))
                | (Event::Status(last), Event::Status(data))
                | (Event::Url(last), Event::Url(data)) => {
                    last.extend_from_slice(data);

                    return;
                },
                _ => {}
            }
        }

        self.events.push(event);
    }
}

impl Default for DebugHandler {
    fn default() -> DebugHandler {
        DebugHandler::new()
    }
}

impl HttpHandler for DebugHandler {
    fn on_body(&mut self, _parser: &Parser, data: &[u8]) -> Flow {
        trace!(length = data.len(), "on_body");

        self.body.extend_from_slice(data);
        self.record(Event::Body(data.to_vec()));
        self.flow(Callback::Body)
    }

    fn on_chunk_complete(&mut self, parser: &Parser) -> Flow {
        trace!(final_chunk = parser.is_final_chunk(), "on_chunk_complete");

        self.chunk_complete_count += 1;
        self.final_chunk           = parser.is_final_chunk();

        self.record(Event::ChunkComplete);
        self.flow(Callback::ChunkComplete)
    }

    fn on_chunk_header(&mut self, parser: &Parser) -> Flow {
        trace!(size = parser.content_length(), "on_chunk_header");

        self.chunk_header_count += 1;

        self.chunk_lengths.push(parser.content_length());
        self.record(Event::ChunkHeader(parser.content_length()));
        self.flow(Callback::ChunkHeader)
    }

    fn on_header_field(&mut self, _parser: &Parser, field: &[u8]) -> Flow {
        trace!(length = field.len(), "on_header_field");

        match self.events.last() {
            Some(Event::HeaderField(_)) => {},
            _ => {
                self.headers.push((Vec::new(), Vec::new()));
            }
        }

        if let Some((name, _)) = self.headers.last_mut() {
            name.extend_from_slice(field);
        }

        self.header_field.extend_from_slice(field);
        self.record(Event::HeaderField(field.to_vec()));
        self.flow(Callback::HeaderField)
    }

    fn on_header_value(&mut self, _parser: &Parser, value: &[u8]) -> Flow {
        trace!(length = value.len(), "on_header_value");

        if self.headers.is_empty() {
            self.headers.push((Vec::new(), Vec::new()));
        }

        if let Some((_, data)) = self.headers.last_mut() {
            data.extend_from_slice(value);
        }

        self.header_value.extend_from_slice(value);
        self.record(Event::HeaderValue(value.to_vec()));
        self.flow(Callback::HeaderValue)
    }

    fn on_headers_complete(&mut self, parser: &Parser) -> HeadersFlow {
        trace!(upgrade = parser.is_upgrade(), "on_headers_complete");

        self.headers_complete = true;
        self.method           = parser.method();
        self.status_code      = parser.status_code();
        self.version_major    = parser.http_major();
        self.version_minor    = parser.http_minor();

        self.record(Event::HeadersComplete);
        self.headers_flow
    }

    fn on_message_begin(&mut self, _parser: &Parser) -> Flow {
        trace!("on_message_begin");

        self.message_begin_count += 1;

        self.record(Event::MessageBegin);
        self.flow(Callback::MessageBegin)
    }

    fn on_message_complete(&mut self, parser: &Parser) -> Flow {
        trace!(keep_alive = parser.should_keep_alive(), "on_message_complete");

        self.message_complete_count += 1;

        self.keep_alive.push(parser.should_keep_alive());
        self.record(Event::MessageComplete);
        self.flow(Callback::MessageComplete)
    }

    fn on_status(&mut self, _parser: &Parser, status: &[u8]) -> Flow {
        trace!(length = status.len(), "on_status");

        self.status.extend_from_slice(status);
        self.record(Event::Status(status.to_vec()));
        self.flow(Callback::Status)
    }

    fn on_url(&mut self, _parser: &Parser, url: &[u8]) -> Flow {
        trace!(length = url.len(), "on_url");

        self.url.extend_from_slice(url);
        self.record(Event::Url(url.to_vec()));
        self.flow(Callback::Url)
    }
}
