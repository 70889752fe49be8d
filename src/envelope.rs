// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Backend response envelope
//!
//! Every API endpoint answers with the same wrapper:
//!
//! ```json
//! { "code": 200, "msg": "", "data": {}, "pageDto": { "pageNum": 1, "pageSize": 20, "count": 93 } }
//! ```

use serde::{Deserialize, Serialize};

/// Envelope code for a successful call
pub const CODE_SUCCESS: i64 = 200;
/// Envelope code asking the client to re-verify its CAS session
pub const CODE_SESSION_INVALID: i64 = 700;

/// Uniform backend response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T = serde_json::Value> {
    /// Application-level status code
    pub code: i64,
    /// Human-readable message
    #[serde(default)]
    pub msg: String,
    /// Payload
    #[serde(default)]
    pub data: T,
    /// Pagination descriptor for list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_dto: Option<PageDto>,
    /// Login location, only sent by the session verification endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Pagination descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub page_num: u64,
    pub page_size: u64,
    pub count: u64,
}

impl PageDto {
    /// Number of pages needed to hold `count` items
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(self.page_size)
    }

    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page_num < self.total_pages()
    }
}

/// Classes of envelope codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeClass {
    /// 200
    Success,
    /// 400..700 (400, 500 and 600 in practice)
    BusinessError,
    /// 700
    SessionInvalid,
    /// Anything else
    Other,
}

impl CodeClass {
    /// Classify an envelope code. 700 is never a business error.
    pub fn of(code: i64) -> Self {
        match code {
            CODE_SUCCESS => CodeClass::Success,
            400..=699 => CodeClass::BusinessError,
            CODE_SESSION_INVALID => CodeClass::SessionInvalid,
            _ => CodeClass::Other,
        }
    }
}

impl<T> Envelope<T> {
    /// Create an envelope without pagination
    pub fn new(code: i64, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
            page_dto: None,
            location: None,
        }
    }

    /// Class of this envelope's code
    pub fn class(&self) -> CodeClass {
        CodeClass::of(self.code)
    }

    /// Check if the call succeeded
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// Message if the backend sent a non-empty one
    pub fn message(&self) -> Option<&str> {
        if self.msg.is_empty() {
            None
        } else {
            Some(&self.msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_boundaries() {
        assert_eq!(CodeClass::of(200), CodeClass::Success);
        assert_eq!(CodeClass::of(399), CodeClass::Other);
        assert_eq!(CodeClass::of(400), CodeClass::BusinessError);
        assert_eq!(CodeClass::of(600), CodeClass::BusinessError);
        assert_eq!(CodeClass::of(699), CodeClass::BusinessError);
        assert_eq!(CodeClass::of(700), CodeClass::SessionInvalid);
        assert_eq!(CodeClass::of(701), CodeClass::Other);
        assert_eq!(CodeClass::of(0), CodeClass::Other);
    }

    #[test]
    fn test_wire_shape() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": 200,
            "msg": "ok",
            "data": [1, 2],
            "pageDto": { "pageNum": 2, "pageSize": 10, "count": 25 }
        }))
        .unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.data, json!([1, 2]));
        let page = envelope.page_dto.unwrap();
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[test]
    fn test_missing_fields_default() {
        let envelope: Envelope = serde_json::from_value(json!({ "code": 700, "location": "/login" })).unwrap();
        assert_eq!(envelope.class(), CodeClass::SessionInvalid);
        assert_eq!(envelope.message(), None);
        assert_eq!(envelope.data, serde_json::Value::Null);
        assert_eq!(envelope.location.as_deref(), Some("/login"));
    }

    #[test]
    fn test_typed_payload() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        struct Shop {
            id: u32,
        }

        let envelope: Envelope<Shop> =
            serde_json::from_value(json!({ "code": 200, "msg": "", "data": { "id": 7 } })).unwrap();
        assert_eq!(envelope.data, Shop { id: 7 });
    }
}
