//! Thin HTTP client over `gloo-net`.
//!
//! Reads go through [`crate::shared::response_handler::into_result`] so pages
//! only see a value or a list of user-facing messages. Mutations hand the raw
//! [`HttpReply`] back for [`crate::shared::response_handler::handle_response`].
//! Calls accept an optional `AbortSignal`; an aborted call resolves to
//! [`RequestError::Aborted`] and must not touch page state.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

use contracts::shared::envelope::ApiResponse;

use crate::shared::response_handler::{into_result, HttpReply};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("request aborted")]
    Aborted,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("response carries no value")]
    MissingValue,
    #[error("backend replied with status {status}")]
    Http { status: u16, messages: Vec<String> },
}

impl RequestError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, RequestError::Aborted)
    }

    /// Messages for the error banner.
    pub fn into_messages(self, general_error: &str) -> Vec<String> {
        match self {
            RequestError::Http { messages, .. } => messages,
            _ => vec![general_error.to_string()],
        }
    }
}

/// Create or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
}

/// Anything that can cancel an in-flight request.
pub trait Abort {
    fn abort(&self);
}

impl Abort for AbortController {
    fn abort(&self) {
        AbortController::abort(self);
    }
}

/// Holds the cancellation handle of the request a page is currently waiting on.
///
/// Replacing the handle aborts the previous request, so a stale reply can never
/// overwrite newer state.
pub struct RequestSlot<H: Abort> {
    current: Option<H>,
}

impl<H: Abort> Default for RequestSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: Abort> RequestSlot<H> {
    pub fn replace(&mut self, next: H) {
        if let Some(previous) = self.current.replace(next) {
            previous.abort();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.abort();
        }
    }
}

/// New abort controller, `None` outside a browser.
pub fn new_controller() -> Option<AbortController> {
    AbortController::new().ok()
}

fn was_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.map(|s| s.aborted()).unwrap_or(false)
}

fn transport_error(e: gloo_net::Error, signal: Option<&AbortSignal>) -> RequestError {
    if was_aborted(signal) {
        log::debug!("request aborted");
        RequestError::Aborted
    } else {
        log::error!("request failed: {e}");
        RequestError::Transport(e.to_string())
    }
}

async fn send<T: DeserializeOwned>(
    request: Request,
    signal: Option<&AbortSignal>,
) -> Result<HttpReply<T>, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(e, signal))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(e, signal))?;

    if was_aborted(signal) {
        return Err(RequestError::Aborted);
    }

    Ok(HttpReply::new(status, decode_body(status, &text)?))
}

/// Decode an envelope. Failed replies with an unreadable body get an empty
/// envelope so the general message is shown.
pub fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<ApiResponse<T>, RequestError> {
    if text.trim().is_empty() {
        return Ok(ApiResponse::default());
    }
    match serde_json::from_str::<ApiResponse<T>>(text) {
        Ok(body) => Ok(body),
        Err(_) if !(200..300).contains(&status) => Ok(ApiResponse::default()),
        Err(e) => {
            log::error!("cannot decode response body: {e}");
            Err(RequestError::Decode(e.to_string()))
        }
    }
}

fn normalize<T>(reply: HttpReply<T>, general_error: &str) -> Result<Option<T>, RequestError> {
    let status = reply.status;
    into_result(reply, general_error).map_err(|messages| RequestError::Http { status, messages })
}

fn with_signal(builder: RequestBuilder, signal: Option<&AbortSignal>) -> RequestBuilder {
    builder
        .header("Accept", "application/json")
        .abort_signal(signal)
}

/// `GET url`, returns the envelope's `value`.
pub async fn fetch_value<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
    general_error: &str,
) -> Result<T, RequestError> {
    let request = with_signal(Request::get(url), signal)
        .build()
        .map_err(|e| transport_error(e, signal))?;
    let reply = send::<T>(request, signal).await?;
    normalize(reply, general_error)?.ok_or(RequestError::MissingValue)
}

/// `POST` (create) or `PUT` (update) a JSON body. Only transport and decode
/// failures are errors; the status is left to the caller.
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    mutation: Mutation,
    url: &str,
    body: &B,
) -> Result<HttpReply<T>, RequestError> {
    let builder = match mutation {
        Mutation::Create => Request::post(url),
        Mutation::Update => Request::put(url),
    };
    let request = with_signal(builder, None)
        .json(body)
        .map_err(|e| transport_error(e, None))?;
    send::<T>(request, None).await
}

/// `DELETE url`, status left to the caller as for [`send_json`].
pub async fn delete(url: &str) -> Result<HttpReply<serde_json::Value>, RequestError> {
    let request = with_signal(Request::delete(url), None)
        .build()
        .map_err(|e| transport_error(e, None))?;
    send(request, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHandle(Rc<Cell<bool>>);

    impl Abort for FakeHandle {
        fn abort(&self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_replace_aborts_previous() {
        let mut slot = RequestSlot::default();
        let first = FakeHandle::default();
        let second = FakeHandle::default();

        slot.replace(first.clone());
        assert!(!first.0.get());
        slot.replace(second.clone());
        assert!(first.0.get());
        assert!(!second.0.get());

        slot.cancel();
        assert!(second.0.get());
        assert!(slot.current.is_none());
    }

    #[test]
    fn test_decode_body() {
        let ok: ApiResponse<u64> = decode_body(200, r#"{"value":25}"#).unwrap();
        assert_eq!(ok.value, Some(25));

        let html: ApiResponse<u64> = decode_body(500, "<html>Whitelabel</html>").unwrap();
        assert!(html.value.is_none() && html.errors.is_none());

        let empty: ApiResponse<u64> = decode_body(200, "").unwrap();
        assert!(empty.value.is_none());

        assert!(matches!(
            decode_body::<u64>(200, "oops"),
            Err(RequestError::Decode(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let general = "général";
        assert_eq!(RequestError::Aborted.into_messages(general), vec![general.to_string()]);
        let http = RequestError::Http {
            status: 400,
            messages: vec!["Nom obligatoire".into()],
        };
        assert_eq!(http.into_messages(general), vec!["Nom obligatoire".to_string()]);
        assert!(RequestError::Aborted.is_aborted());
    }
}
