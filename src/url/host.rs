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

//! Authority decomposition.
//!
//! The URL classifier only locates the authority span. This module re-scans that span to split
//! it into user information, host, IPv6 literal and port.

use crate::byte::{ is_digit, is_hex, is_host_char, is_userinfo_char, is_zone_char };
use crate::http1::ParserError;
use crate::url::{ Span, UrlField, UrlParts };

/// Authority classifier states.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum HostState {
    /// An invalid byte was found.
    Dead,

    /// Parsing the first byte of user information.
    UserInfoStart,

    /// Parsing user information.
    UserInfo,

    /// Parsing the first byte of the host.
    HostStart,

    /// Parsing host name.
    Host,

    /// Parsing the first byte of an IPv6 literal.
    Ipv6Start,

    /// Parsing IPv6 literal.
    Ipv6,

    /// Parsing the byte after the closing `]` of an IPv6 literal.
    Ipv6End,

    /// Parsing the first byte of an IPv6 zone identifier.
    Ipv6ZoneStart,

    /// Parsing IPv6 zone identifier.
    Ipv6Zone,

    /// Parsing the first byte of the port.
    PortStart,

    /// Parsing port.
    Port
}

/// Classify `byte` within an authority, given the classification of the previous byte.
pub fn parse_host_char(state: HostState, byte: u8) -> HostState {
    match state {
        HostState::UserInfoStart | HostState::UserInfo => {
            if byte == b'@' {
                HostState::HostStart
            } else if is_userinfo_char(byte) {
                HostState::UserInfo
            } else {
                HostState::Dead
            }
        },
        HostState::HostStart => {
            if byte == b'[' {
                HostState::Ipv6Start
            } else if is_host_char(byte) {
                HostState::Host
            } else {
                HostState::Dead
            }
        },
        HostState::Host | HostState::Ipv6End => {
            if state == HostState::Host && is_host_char(byte) {
                HostState::Host
            } else if byte == b':' {
                HostState::PortStart
            } else {
                HostState::Dead
            }
        },
        HostState::Ipv6Start | HostState::Ipv6 => {
            if state == HostState::Ipv6 && byte == b']' {
                HostState::Ipv6End
            } else if is_hex(byte) || byte == b':' || byte == b'.' {
                HostState::Ipv6
            } else if state == HostState::Ipv6 && byte == b'%' {
                HostState::Ipv6ZoneStart
            } else {
                HostState::Dead
            }
        },
        HostState::Ipv6ZoneStart | HostState::Ipv6Zone => {
            if state == HostState::Ipv6Zone && byte == b']' {
                HostState::Ipv6End
            } else if is_zone_char(byte) {
                HostState::Ipv6Zone
            } else {
                HostState::Dead
            }
        },
        HostState::PortStart | HostState::Port => {
            if is_digit(byte) {
                HostState::Port
            } else {
                HostState::Dead
            }
        },
        HostState::Dead => HostState::Dead
    }
}

/// Re-scan the host span of `parts`, narrowing it to the host name or IPv6 literal and adding the
/// user information and port spans.
///
/// `found_at` indicates that the authority contains user information.
pub fn parse_host(url: &[u8], parts: &mut UrlParts, found_at: bool) -> Result<(), ParserError> {
    let host = parts.field_data[UrlField::Host as usize];
    let end  = host.offset + host.length;

    let mut state = if found_at {
        HostState::UserInfoStart
    } else {
        HostState::HostStart
    };

    let bytes = match url.get(host.offset..end) {
        Some(bytes) => bytes,
        None => return Err(ParserError::InvalidInternalState)
    };

    parts.field_data[UrlField::Host as usize].length = 0;

    for (offset, byte) in bytes.iter().enumerate() {
        let index     = host.offset + offset;
        let new_state = parse_host_char(state, *byte);

        match new_state {
            HostState::Dead => {
                return Err(ParserError::InvalidHost);
            },
            HostState::Host | HostState::Ipv6 => {
                if state != new_state {
                    parts.field_data[UrlField::Host as usize].offset = index;
                }

                parts.field_data[UrlField::Host as usize].length += 1;
            },
            HostState::Ipv6ZoneStart | HostState::Ipv6Zone => {
                parts.field_data[UrlField::Host as usize].length += 1;
            },
            HostState::Port => {
                if state != HostState::Port {
                    parts.field_data[UrlField::Port as usize] = Span{ offset: index, length: 0 };
                    parts.field_set                         |= UrlField::Port.bit();
                }

                parts.field_data[UrlField::Port as usize].length += 1;
            },
            HostState::UserInfo => {
                if state != HostState::UserInfo {
                    parts.field_data[UrlField::UserInfo as usize] = Span{ offset: index, length: 0 };
                    parts.field_set                             |= UrlField::UserInfo.bit();
                }

                parts.field_data[UrlField::UserInfo as usize].length += 1;
            },
            _ => {}
        }

        state = new_state;
    }

    match state {
        HostState::PortStart => Err(ParserError::InvalidPort),
        HostState::HostStart
        | HostState::Ipv6Start
        | HostState::Ipv6
        | HostState::Ipv6ZoneStart
        | HostState::Ipv6Zone
        | HostState::UserInfoStart
        | HostState::UserInfo => Err(ParserError::InvalidHost),
        _ => Ok(())
    }
}
