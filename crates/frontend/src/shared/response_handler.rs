//! Normalization of backend replies into values or user-facing error lists.
//!
//! Status rule for failed replies:
//! - `403 < status < 500`: the general error message;
//! - `500`: the body's `erreurs` (a single string becomes a one-element list);
//! - any other failure: the body's `erreurs` as sent;
//! - no usable `erreurs` in the body: the general error message.

use contracts::shared::envelope::{ApiResponse, ErrorPayload};

/// HTTP status plus decoded envelope of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply<T> {
    pub status: u16,
    pub body: ApiResponse<T>,
}

impl<T> HttpReply<T> {
    pub fn new(status: u16, body: ApiResponse<T>) -> Self {
        Self { status, body }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Messages to show for a failed reply.
pub fn error_messages(status: u16, errors: Option<&ErrorPayload>, general_error: &str) -> Vec<String> {
    let general = || vec![general_error.to_string()];

    if status > 403 && status < 500 {
        return general();
    }

    match errors {
        Some(payload) if !payload.is_empty() => payload.to_messages(),
        _ => general(),
    }
}

/// Runs `on_success` for a successful reply (e.g. "redirect after save"),
/// otherwise reports the normalized messages to `on_error`. Returns the reply
/// unchanged.
pub fn handle_response<T, E, S>(
    reply: HttpReply<T>,
    general_error: &str,
    on_error: E,
    on_success: S,
) -> HttpReply<T>
where
    E: FnOnce(Vec<String>),
    S: FnOnce(),
{
    if reply.is_ok() {
        on_success();
    } else {
        log::warn!("backend replied with status {}", reply.status);
        on_error(error_messages(
            reply.status,
            reply.body.errors.as_ref(),
            general_error,
        ));
    }
    reply
}

/// Success value of a reply, or the normalized error list.
pub fn into_result<T>(reply: HttpReply<T>, general_error: &str) -> Result<Option<T>, Vec<String>> {
    if reply.is_ok() {
        Ok(reply.body.value)
    } else {
        Err(error_messages(
            reply.status,
            reply.body.errors.as_ref(),
            general_error,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    const GENERAL: &str = "Erreur générale";

    fn many(items: &[&str]) -> ErrorPayload {
        ErrorPayload::Many(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_client_errors_use_general_message() {
        for status in [404, 405, 422, 499] {
            assert_eq!(
                error_messages(status, Some(&many(&["détail"])), GENERAL),
                vec![GENERAL.to_string()],
                "status {status}"
            );
        }
    }

    #[test]
    fn test_server_error_wraps_single_message() {
        let one = ErrorPayload::One("Nom déjà utilisé".into());
        assert_eq!(
            error_messages(500, Some(&one), GENERAL),
            vec!["Nom déjà utilisé".to_string()]
        );
    }

    #[test]
    fn test_other_statuses_pass_body_through() {
        let payload = many(&["Nom obligatoire", "Heure invalide"]);
        for status in [400, 401, 403, 502] {
            assert_eq!(
                error_messages(status, Some(&payload), GENERAL),
                vec!["Nom obligatoire".to_string(), "Heure invalide".to_string()]
            );
        }
    }

    #[test]
    fn test_missing_body_errors_use_general_message() {
        assert_eq!(error_messages(400, None, GENERAL), vec![GENERAL.to_string()]);
        assert_eq!(
            error_messages(500, Some(&many(&[])), GENERAL),
            vec![GENERAL.to_string()]
        );
    }

    #[test]
    fn test_same_failure_same_messages() {
        let reply: HttpReply<()> =
            HttpReply::new(400, ApiResponse::with_errors(many(&["a", "b"])));
        let first = RefCell::new(Vec::new());
        let second = RefCell::new(Vec::new());

        let reply = handle_response(reply, GENERAL, |m| *first.borrow_mut() = m, || {});
        handle_response(reply, GENERAL, |m| *second.borrow_mut() = m, || {});

        assert_eq!(*first.borrow(), *second.borrow());
        assert_eq!(first.borrow().len(), 2);
    }

    #[test]
    fn test_success_runs_continuation_only() {
        let called = Cell::new(false);
        let errored = Cell::new(false);
        let reply = HttpReply::new(200, ApiResponse::with_value(3u64));

        let back = handle_response(
            reply.clone(),
            GENERAL,
            |_| errored.set(true),
            || called.set(true),
        );

        assert!(called.get());
        assert!(!errored.get());
        assert_eq!(back, reply);
    }

    #[test]
    fn test_failure_skips_continuation() {
        let called = Cell::new(false);
        let reply: HttpReply<u64> = HttpReply::new(404, ApiResponse::default());
        let back = handle_response(reply, GENERAL, |_| {}, || called.set(true));
        assert!(!called.get());
        assert_eq!(back.status, 404);
    }

    #[test]
    fn test_into_result() {
        let ok = HttpReply::new(201, ApiResponse::with_value("x".to_string()));
        assert_eq!(into_result(ok, GENERAL), Ok(Some("x".to_string())));

        let ko: HttpReply<String> = HttpReply::new(503, ApiResponse::default());
        assert_eq!(into_result(ko, GENERAL), Err(vec![GENERAL.to_string()]));
    }
}
