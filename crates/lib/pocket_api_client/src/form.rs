//! State machine behind the greeting form.
//!
//! The form holds the current input, the last greeting, the last error message
//! and an in-flight flag. A submit moves it from `Idle` (or a previous outcome)
//! to `Submitting`, then to `Success` or `Error`. The only guard against
//! duplicate submissions is the in-flight flag, which disables the submit
//! control; in-flight calls are never cancelled.

use pocket_core::Greeting;

use crate::client::HelloApi;
use crate::error::ClientError;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelloForm {
    input: String,
    response: Option<Greeting>,
    error: Option<String>,
    loading: bool,
}

impl HelloForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Last successful greeting, cleared by any later failure.
    pub fn response(&self) -> Option<&Greeting> {
        self.response.as_ref()
    }

    /// Rendered message for the last failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True exactly while a call is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> FormPhase {
        if self.loading {
            FormPhase::Submitting
        } else if self.error.is_some() {
            FormPhase::Error
        } else if self.response.is_some() {
            FormPhase::Success
        } else {
            FormPhase::Idle
        }
    }

    /// Start a submit. Returns the raw input to send, or `None` while a
    /// previous call is still in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(self.input.clone())
    }

    /// Record the outcome of the call started by [`HelloForm::begin_submit`].
    pub fn complete(&mut self, result: Result<Greeting, ClientError>) {
        match result {
            Ok(greeting) => {
                self.response = Some(greeting);
                self.error = None;
            }
            Err(e) => {
                self.response = None;
                self.error = Some(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Submit the current input through `api` and record the outcome.
    pub async fn submit<A>(&mut self, api: &A) -> FormPhase
    where
        A: HelloApi + ?Sized,
    {
        let Some(text) = self.begin_submit() else {
            return self.phase();
        };
        let result = api.hello(&text).await;
        self.complete(result);
        self.phase()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::NETWORK_ERROR_MESSAGE;

    /// Answers every call with a fixed result and records what was sent.
    struct Scripted {
        result: Result<Greeting, ClientError>,
        sent: std::sync::Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(result: Result<Greeting, ClientError>) -> Self {
            Self {
                result,
                sent: Default::default(),
            }
        }

        fn ok(text: &str) -> Self {
            Self::new(Ok(pocket_core::hello_world(Some(text))))
        }
    }

    #[async_trait]
    impl HelloApi for Scripted {
        async fn hello(&self, text: &str) -> Result<Greeting, ClientError> {
            self.sent.lock().unwrap().push(text.to_string());
            self.result.clone()
        }
    }

    fn server_error() -> ClientError {
        ClientError::Api {
            status: 500,
            status_text: "Internal Server Error".into(),
        }
    }

    #[test]
    fn starts_idle_and_enabled() {
        let form = HelloForm::new();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_submit_disabled());
        assert!(form.response().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn disabled_exactly_while_in_flight() {
        let mut form = HelloForm::new();
        form.set_input("joe");

        assert_eq!(form.begin_submit().as_deref(), Some("joe"));
        assert!(form.is_submit_disabled());
        assert_eq!(form.phase(), FormPhase::Submitting);

        // A second submit while in flight is refused.
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submit_disabled());

        form.complete(Ok(pocket_core::hello_world(Some("joe"))));
        assert!(!form.is_submit_disabled());
        assert_eq!(form.phase(), FormPhase::Success);
    }

    #[test]
    fn begin_submit_clears_previous_error_but_keeps_input() {
        let mut form = HelloForm::new();
        form.set_input("  raw  ");
        form.begin_submit();
        form.complete(Err(server_error()));
        assert!(form.error().is_some());

        assert_eq!(form.begin_submit().as_deref(), Some("  raw  "));
        assert!(form.error().is_none());
        assert_eq!(form.input(), "  raw  ");
    }

    #[tokio::test]
    async fn success_stores_greeting() {
        let api = Scripted::ok("joe");
        let mut form = HelloForm::new();
        form.set_input("joe");

        assert_eq!(form.submit(&api).await, FormPhase::Success);
        assert_eq!(form.response().unwrap().greeting, "hello joe");
        assert!(form.error().is_none());
        assert!(!form.is_loading());
        assert_eq!(*api.sent.lock().unwrap(), vec!["joe".to_string()]);
    }

    #[tokio::test]
    async fn input_is_sent_untrimmed() {
        let api = Scripted::ok(" x ");
        let mut form = HelloForm::new();
        form.set_input(" x ");
        form.submit(&api).await;
        assert_eq!(*api.sent.lock().unwrap(), vec![" x ".to_string()]);
    }

    #[tokio::test]
    async fn api_error_shows_status_and_clears_greeting() {
        let mut form = HelloForm::new();
        form.submit(&Scripted::ok("joe")).await;
        assert!(form.response().is_some());

        let phase = form.submit(&Scripted::new(Err(server_error()))).await;
        assert_eq!(phase, FormPhase::Error);
        assert!(form.response().is_none());
        let message = form.error().unwrap();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("Internal Server Error"), "{message}");
        assert!(!form.is_submit_disabled());
    }

    #[tokio::test]
    async fn network_error_shows_generic_message_and_clears_greeting() {
        let mut form = HelloForm::new();
        form.submit(&Scripted::ok("joe")).await;

        let failing = Scripted::new(Err(ClientError::Network("connection refused".into())));
        assert_eq!(form.submit(&failing).await, FormPhase::Error);
        assert!(form.response().is_none());
        assert_eq!(form.error(), Some(NETWORK_ERROR_MESSAGE));
        assert!(!form.is_submit_disabled());
    }

    #[tokio::test]
    async fn form_is_reusable_after_error() {
        let mut form = HelloForm::new();
        form.submit(&Scripted::new(Err(server_error()))).await;
        assert_eq!(form.phase(), FormPhase::Error);

        assert_eq!(form.submit(&Scripted::ok("again")).await, FormPhase::Success);
        assert!(form.error().is_none());
        assert_eq!(form.response().unwrap().greeting, "hello again");
    }

    #[tokio::test]
    async fn submit_while_in_flight_does_not_call_api() {
        let api = Scripted::ok("joe");
        let mut form = HelloForm::new();
        form.begin_submit();

        assert_eq!(form.submit(&api).await, FormPhase::Submitting);
        assert!(api.sent.lock().unwrap().is_empty());
    }
}
