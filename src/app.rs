//! Application state and core logic

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api::{ApiError, PredictionApi};
use crate::state::{format_price, AppState, PredictionResponse, Submission};

type SubmissionOutcome = Result<PredictionResponse, ApiError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the prediction service
    client: Arc<dyn PredictionApi>,
    /// Resolved endpoint URL, shown in hints
    pub endpoint: String,
    /// Transient status message shown in the status bar
    pub status_message: Option<String>,
    /// Channel carrying outcomes back from spawned submission tasks
    result_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    result_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn PredictionApi>, endpoint: String) -> Self {
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            endpoint,
            status_message: None,
            result_tx,
            result_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status message on key press
        self.status_message = None;

        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        // Copy the predicted price to the clipboard
        if key.code == KeyCode::Char('y') && key.modifiers.contains(crate::platform::COPY_MODIFIER)
        {
            self.copy_price();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if self.state.form.is_submit_row_active() => self.submit(),
            // Enter advances through the single-line fields
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.step_down();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.step_up();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(ch);
                }
            }
            _ => {}
        }
    }

    /// Start a submission. A no-op while a request is already in flight;
    /// blocked with a status hint when required fields are empty. Any prior
    /// result or error is replaced by the Submitting state.
    pub fn submit(&mut self) {
        if self.state.submission.in_flight() {
            return;
        }
        if let Err(message) = self.state.form.validate() {
            self.status_message = Some(message);
            return;
        }

        let request = self.state.form.snapshot();
        self.state.submission = Submission::Submitting;

        tracing::info!(brand = %request.brand, model = %request.model, "submitting prediction request");

        let client = Arc::clone(&self.client);
        let tx = self.result_tx.clone();
        tokio::spawn(async move {
            let outcome = client.predict(&request).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(outcome);
        });
    }

    /// Drain finished submission outcomes. When several arrive in the same
    /// tick the last one received wins; no ordering guarantee is made for
    /// responses of stale requests.
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.result_rx.try_recv() {
            self.state.submission = match outcome {
                Ok(response) => {
                    tracing::info!(price = response.predicted_price, "prediction received");
                    Submission::Success(response)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "prediction failed");
                    Submission::Failure(err.to_string())
                }
            };
        }
    }

    /// Copy the displayed price to the clipboard
    pub fn copy_price(&mut self) {
        let Some(price) = self.state.submission.price() else {
            return;
        };
        let text = format_price(price);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => self.status_message = Some(format!("Copied {text}")),
            Err(err) => self.status_message = Some(format!("Copy failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPredictionApi;
    use crate::state::{PredictionRequest, VehicleForm};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn filled_form() -> VehicleForm {
        VehicleForm::new()
            .with_field("brand", "Kia")
            .with_field("model", "Rio")
    }

    /// Waits for the spawned submission task to deliver its outcome
    async fn wait_for_outcome(app: &mut App) {
        for _ in 0..200 {
            app.poll_submission();
            if !app.state.submission.in_flight() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never completed");
    }

    fn success_response() -> PredictionResponse {
        PredictionResponse {
            predicted_price: 45231.0,
            input_data: None,
        }
    }

    /// Stub client that hangs until the gate is opened, counting calls
    struct GatedApi {
        calls: AtomicUsize,
        gate: tokio::sync::Semaphore,
    }

    impl GatedApi {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: tokio::sync::Semaphore::new(0),
            }
        }
    }

    #[async_trait]
    impl PredictionApi for GatedApi {
        async fn predict(
            &self,
            _request: &PredictionRequest,
        ) -> Result<PredictionResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let _permit = self.gate.acquire().await.unwrap();
            Ok(success_response())
        }
    }

    #[tokio::test]
    async fn test_submit_success_renders_price() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .times(1)
            .returning(|_| Ok(success_response()));

        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());
        app.state.form = filled_form();

        app.submit();
        assert!(app.state.submission.in_flight());

        wait_for_outcome(&mut app).await;
        assert_eq!(app.state.submission.price(), Some(45231.0));
        assert_eq!(format_price(app.state.submission.price().unwrap()), "45,231 DT");
    }

    #[tokio::test]
    async fn test_submit_failure_surfaces_status_code() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .times(1)
            .returning(|_| Err(ApiError::Status(500)));

        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());
        app.state.form = filled_form();

        app.submit();
        wait_for_outcome(&mut app).await;

        assert!(app.state.submission.error().unwrap().contains("500"));
        assert!(app.state.submission.price().is_none());
    }

    #[tokio::test]
    async fn test_submit_sends_snapshot_of_form() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .times(1)
            .withf(|request| request.brand == "Kia" && request.year == 2015)
            .returning(|_| Ok(success_response()));

        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());
        app.state.form = filled_form();

        app.submit();
        // Edits after submission must not affect the in-flight snapshot
        app.state.form = app.state.form.with_field("brand", "Peugeot");
        wait_for_outcome(&mut app).await;
    }

    #[tokio::test]
    async fn test_resubmit_while_in_flight_is_blocked() {
        let api = Arc::new(GatedApi::new());
        let mut app = App::new(
            Arc::clone(&api) as Arc<dyn PredictionApi>,
            "http://localhost:8000/predict".to_string(),
        );
        app.state.form = filled_form();

        app.submit();
        // Give the spawned task a chance to reach the client
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(app.state.submission.in_flight());

        // Second submit while in flight must not issue another request
        app.submit();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);

        // Without a timeout the submission stays in flight until the
        // backend answers
        app.poll_submission();
        assert!(app.state.submission.in_flight());

        api.gate.add_permits(1);
        wait_for_outcome(&mut app).await;
        assert_eq!(app.state.submission.price(), Some(45231.0));
    }

    #[tokio::test]
    async fn test_submit_blocked_on_empty_required_fields() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict().never();

        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());

        // Default form: brand and model are empty
        app.submit();
        assert!(matches!(app.state.submission, Submission::Idle));
        assert_eq!(app.status_message, Some("Brand is required".to_string()));
    }

    #[tokio::test]
    async fn test_submit_replaces_prior_failure() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .times(1)
            .returning(|_| Ok(success_response()));

        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());
        app.state.form = filled_form();
        app.state.submission = Submission::Failure("prediction service returned HTTP 500".into());

        app.submit();
        // The old error is gone as soon as the new request starts
        assert!(app.state.submission.in_flight());
        assert!(app.state.submission.error().is_none());

        wait_for_outcome(&mut app).await;
        assert!(app.state.submission.price().is_some());
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mock = MockPredictionApi::new();
        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_edits_active_field() {
        let mock = MockPredictionApi::new();
        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());

        // Move from year to brand and type
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in ['K', 'i', 'a'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.state.form.brand.as_text(), "Kia");

        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.state.form.brand.as_text(), "Ki");
    }

    #[tokio::test]
    async fn test_arrow_keys_step_spinner() {
        let mock = MockPredictionApi::new();
        let mut app = App::new(Arc::new(mock), "http://localhost:8000/predict".to_string());

        // Year field is active first
        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.state.form.year.as_int(), 2016);
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.state.form.year.as_int(), 2014);
    }
}
