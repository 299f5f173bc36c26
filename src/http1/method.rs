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

use std::fmt;

/// Request methods.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub enum Method {
    Delete,
    Get,
    Head,
    Post,
    Put,

    // pathological
    Connect,
    Options,
    Trace,

    // WebDAV
    Copy,
    Lock,
    Mkcol,
    Move,
    Propfind,
    Proppatch,
    Search,
    Unlock,
    Bind,
    Rebind,
    Unbind,
    Acl,

    // subversion
    Report,
    Mkactivity,
    Checkout,
    Merge,

    // upnp
    MSearch,
    Notify,
    Subscribe,
    Unsubscribe,

    // RFC-5789
    Patch,
    Purge,

    // CalDAV
    Mkcalendar,

    // RFC-2068, section 19.6.1.2
    Link,
    Unlink,

    // icecast
    Source
}

impl Method {
    /// Retrieve the canonical spelling of this method.
    pub fn name(&self) -> &'static str {
        match *self {
            Method::Delete      => "DELETE",
            Method::Get         => "GET",
            Method::Head        => "HEAD",
            Method::Post        => "POST",
            Method::Put         => "PUT",
            Method::Connect     => "CONNECT",
            Method::Options     => "OPTIONS",
            Method::Trace       => "TRACE",
            Method::Copy        => "COPY",
            Method::Lock        => "LOCK",
            Method::Mkcol       => "MKCOL",
            Method::Move        => "MOVE",
            Method::Propfind    => "PROPFIND",
            Method::Proppatch   => "PROPPATCH",
            Method::Search      => "SEARCH",
            Method::Unlock      => "UNLOCK",
            Method::Bind        => "BIND",
            Method::Rebind      => "REBIND",
            Method::Unbind      => "UNBIND",
            Method::Acl         => "ACL",
            Method::Report      => "REPORT",
            Method::Mkactivity  => "MKACTIVITY",
            Method::Checkout    => "CHECKOUT",
            Method::Merge       => "MERGE",
            Method::MSearch     => "M-SEARCH",
            Method::Notify      => "NOTIFY",
            Method::Subscribe   => "SUBSCRIBE",
            Method::Unsubscribe => "UNSUBSCRIBE",
            Method::Patch       => "PATCH",
            Method::Purge       => "PURGE",
            Method::Mkcalendar  => "MKCALENDAR",
            Method::Link        => "LINK",
            Method::Unlink      => "UNLINK",
            Method::Source      => "SOURCE"
        }
    }

    /// Guess the method from its first byte.
    ///
    /// The guess is the method that the remaining bytes are matched against, until
    /// [`branch()`](#method.branch) switches to another method that shares the prefix.
    pub fn guess(byte: u8) -> Option<Method> {
        Some(match byte {
            b'A' => Method::Acl,
            b'B' => Method::Bind,
            b'C' => Method::Connect,    // or COPY, CHECKOUT
            b'D' => Method::Delete,
            b'G' => Method::Get,
            b'H' => Method::Head,
            b'L' => Method::Lock,       // or LINK
            b'M' => Method::Mkcol,      // or MOVE, MKACTIVITY, MERGE, M-SEARCH, MKCALENDAR
            b'N' => Method::Notify,
            b'O' => Method::Options,
            b'P' => Method::Post,       // or PROPFIND, PROPPATCH, PUT, PATCH, PURGE
            b'R' => Method::Report,     // or REBIND
            b'S' => Method::Subscribe,  // or SEARCH, SOURCE
            b'T' => Method::Trace,
            b'U' => Method::Unlock,     // or UNSUBSCRIBE, UNBIND, UNLINK
            _    => return None
        })
    }

    /// Switch the guessed method after `byte` did not match the guess at `index`.
    pub fn branch(guess: Method, index: usize, byte: u8) -> Option<Method> {
        Some(match (guess, index, byte) {
            (Method::Post,      1, b'U') => Method::Put,
            (Method::Post,      1, b'A') => Method::Patch,
            (Method::Post,      1, b'R') => Method::Propfind,
            (Method::Put,       2, b'R') => Method::Purge,
            (Method::Connect,   1, b'H') => Method::Checkout,
            (Method::Connect,   2, b'P') => Method::Copy,
            (Method::Mkcol,     1, b'O') => Method::Move,
            (Method::Mkcol,     1, b'E') => Method::Merge,
            (Method::Mkcol,     1, b'-') => Method::MSearch,
            (Method::Mkcol,     2, b'A') => Method::Mkactivity,
            (Method::Mkcol,     3, b'A') => Method::Mkcalendar,
            (Method::Subscribe, 1, b'E') => Method::Search,
            (Method::Subscribe, 1, b'O') => Method::Source,
            (Method::Report,    2, b'B') => Method::Rebind,
            (Method::Propfind,  4, b'P') => Method::Proppatch,
            (Method::Lock,      1, b'I') => Method::Link,
            (Method::Unlock,    2, b'S') => Method::Unsubscribe,
            (Method::Unlock,    2, b'B') => Method::Unbind,
            (Method::Unlock,    3, b'I') => Method::Unlink,
            _                            => return None
        })
    }
}

/// Retrieve the canonical spelling of `method`.
pub fn method_name(method: Method) -> &'static str {
    method.name()
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
