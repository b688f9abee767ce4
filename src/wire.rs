//! Decoding helpers for the HTTP conventions job queues commonly speak.
//!
//! Generation-queue endpoints tend to encode job state in the HTTP status
//! code rather than the body:
//!
//! | HTTP | Body | Meaning |
//! |------|------|---------|
//! | 2xx (submit) | `{"requestId": "..."}` | job accepted |
//! | 200 (status) | completion payload | job done |
//! | 202 (status) | `{"status": "..."}` | still processing |
//! | other | `{"error": "..."}` | job failed |
//!
//! These helpers translate that convention into [`JobId`] and
//! [`StatusReport`] values. They do no I/O; an adapter owns the HTTP
//! client and feeds the raw status code and body bytes in. Adapters that
//! would rather treat a non-2xx status response as a transport blip (and
//! get the tracker's limited retry) can map it to `Err` themselves instead
//! of calling [`decode_status`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::job::{JobId, StatusReport};

/// Errors from decoding a service response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WireError {
    /// The submit endpoint answered with a non-2xx status.
    #[error("submission rejected (HTTP {code}): {message}")]
    SubmitRejected {
        /// HTTP status code of the rejection.
        code: u16,
        /// Error message from the body, or a fallback naming the code.
        message: String,
    },

    /// A 2xx body did not parse as the expected shape.
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct SubmitEnvelope {
    // Both spellings are seen in the wild, sometimes from the same vendor.
    #[serde(rename = "requestId", alias = "request_id")]
    request_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Best-effort error message from a failure body.
fn failure_message(code: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_else(|_| format!("service returned HTTP {code}"))
}

/// Decode a submit response into a [`JobId`].
pub fn decode_submit(code: u16, body: &[u8]) -> Result<JobId, WireError> {
    if !(200..300).contains(&code) {
        return Err(WireError::SubmitRejected {
            code,
            message: failure_message(code, body),
        });
    }
    let envelope: SubmitEnvelope = serde_json::from_slice(body)?;
    Ok(JobId::new(envelope.request_id))
}

/// Decode a status response into a [`StatusReport`].
///
/// `T` is the completion payload carried by the 200 body. A non-2xx answer
/// decodes to `StatusReport::Failed` — by this convention the service is
/// reporting a verdict on the job, not a transport problem.
pub fn decode_status<T: DeserializeOwned>(
    code: u16,
    body: &[u8],
) -> Result<StatusReport<T>, WireError> {
    match code {
        200 => {
            let result: T = serde_json::from_slice(body)?;
            Ok(StatusReport::Completed { result })
        }
        202 => Ok(StatusReport::Processing),
        _ => Ok(StatusReport::Failed {
            message: failure_message(code, body),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct VideoResult {
        #[serde(rename = "videoUrl")]
        video_url: String,
    }

    #[test]
    fn test_decode_submit_camel_case() {
        let id = decode_submit(200, br#"{"requestId": "req-42"}"#).unwrap();
        assert_eq!(id, JobId::new("req-42"));
    }

    #[test]
    fn test_decode_submit_snake_case() {
        let id = decode_submit(200, br#"{"request_id": "req-42"}"#).unwrap();
        assert_eq!(id, JobId::new("req-42"));
    }

    #[test]
    fn test_decode_submit_rejection_with_error_body() {
        let err = decode_submit(422, br#"{"error": "prompt too long"}"#).unwrap_err();
        match err {
            WireError::SubmitRejected { code, message } => {
                assert_eq!(code, 422);
                assert_eq!(message, "prompt too long");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_decode_submit_rejection_with_opaque_body() {
        let err = decode_submit(502, b"Bad Gateway").unwrap_err();
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_decode_submit_malformed_body() {
        let err = decode_submit(200, br#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, WireError::MalformedBody(_)));
    }

    #[test]
    fn test_decode_status_completed() {
        let report: StatusReport<VideoResult> =
            decode_status(200, br#"{"videoUrl": "https://cdn.example/v.mp4"}"#).unwrap();
        assert_eq!(
            report,
            StatusReport::Completed {
                result: VideoResult {
                    video_url: "https://cdn.example/v.mp4".into()
                }
            }
        );
    }

    #[test]
    fn test_decode_status_processing_ignores_body() {
        let report: StatusReport<VideoResult> =
            decode_status(202, br#"{"status": "IN_QUEUE"}"#).unwrap();
        assert_eq!(report, StatusReport::Processing);
    }

    #[test]
    fn test_decode_status_failure() {
        let report: StatusReport<VideoResult> =
            decode_status(500, br#"{"error": "render farm on fire"}"#).unwrap();
        assert_eq!(
            report,
            StatusReport::Failed {
                message: "render farm on fire".into()
            }
        );
    }

    #[test]
    fn test_decode_status_failure_fallback_message() {
        let report: StatusReport<VideoResult> = decode_status(503, b"").unwrap();
        assert_eq!(
            report,
            StatusReport::Failed {
                message: "service returned HTTP 503".into()
            }
        );
    }
}
