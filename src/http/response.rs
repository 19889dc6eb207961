//! Success payload envelope.
//!
//! Every success body has the shape `{"data": <payload>}`; flip records
//! serialize as `{"id": <integer>, "result": <string>}`.

use serde::Serialize;

/// Wrapper producing the `{"data": …}` envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Flip;

    #[test]
    fn test_flip_envelope_shape() {
        let body = serde_json::to_value(Envelope::new(Flip {
            id: 1,
            result: "heads".to_string(),
        }))
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"data": {"id": 1, "result": "heads"}})
        );
    }

    #[test]
    fn test_scalar_envelope_shape() {
        let body = serde_json::to_value(Envelope::new(6u64)).unwrap();
        assert_eq!(body, serde_json::json!({"data": 6}));
    }
}
