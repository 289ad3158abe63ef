// code_assist — A terminal code assistant with segmented Markdown rendering
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

// Classification is for diagnostics only. Users always see the message verbatim.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallErrorClass {
    RateLimited,
    AuthRequired,
    Network,
    Other,
}

pub fn classify_call_error(input: &str) -> CallErrorClass {
    let lower = input.to_ascii_lowercase();
    if looks_like_rate_limit_error_lower(&lower) {
        CallErrorClass::RateLimited
    } else if looks_like_auth_error_lower(&lower) {
        CallErrorClass::AuthRequired
    } else if looks_like_network_error_lower(&lower) {
        CallErrorClass::Network
    } else {
        CallErrorClass::Other
    }
}

fn looks_like_rate_limit_error_lower(lower: &str) -> bool {
    [
        "rate limit",
        "rate-limit",
        "quota",
        "resource_exhausted",
        "resource has been exhausted",
        "429",
        "too many requests",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

fn looks_like_auth_error_lower(lower: &str) -> bool {
    [
        "api key not valid",
        "invalid api key",
        "permission_denied",
        "unauthenticated",
        "unauthorized",
        "401",
        "403",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

fn looks_like_network_error_lower(lower: &str) -> bool {
    [
        "request failed",
        "connection refused",
        "connection reset",
        "timed out",
        "dns error",
        "error sending request",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

/// Best-effort `error.message` from a non-2xx response body, which may or
/// may not be well-formed JSON.
pub fn summarize_error_body(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.pointer("/error/message").and_then(|m| m.as_str())
    {
        return Some(message.to_owned());
    }
    extract_json_string_field(body, "message").filter(|msg| !msg.trim().is_empty())
}

pub fn truncate_for_log(input: &str) -> String {
    const LIMIT: usize = 240;
    let mut out = String::new();
    for (i, ch) in input.chars().enumerate() {
        if i >= LIMIT {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    out.replace('\n', "\\n")
}

fn extract_json_string_field(input: &str, field: &str) -> Option<String> {
    let needle = format!("\"{field}\"");
    let start = input.find(&needle)? + needle.len();
    let rest = input[start..].trim_start();
    let colon_idx = rest.find(':')?;
    let mut chars = rest[colon_idx + 1..].trim_start().chars();
    if chars.next()? != '"' {
        return None;
    }

    let mut escaped = false;
    let mut out = String::new();
    for ch in chars {
        if escaped {
            let mapped = match ch {
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                '"' => '"',
                '\\' => '\\',
                _ => ch,
            };
            out.push(mapped);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Some(out),
            _ => out.push(ch),
        }
    }
    None
}
