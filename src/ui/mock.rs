//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use fieldprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("No target URL configured");
//! ui.message("4 fields");
//!
//! assert_eq!(ui.warnings(), ["No target URL configured"]);
//! assert!(ui.messages().contains(&"4 fields".to_string()));
//! ```

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<Arc<Mutex<MockSpinnerState>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Snapshot of every spinner started, in order.
    pub fn spinners(&self) -> Vec<MockSpinner> {
        self.spinners
            .iter()
            .map(|state| MockSpinner {
                state: Arc::clone(state),
            })
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = MockSpinner::new();
        spinner.lock().start_message = message.to_string();
        self.spinners.push(Arc::clone(&spinner.state));
        Box::new(spinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
    /// Cleared without a final line.
    Cleared,
}

#[derive(Debug, Default)]
struct MockSpinnerState {
    start_message: String,
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Mock spinner that records updates; clones share state with the UI.
#[derive(Debug, Default, Clone)]
pub struct MockSpinner {
    state: Arc<Mutex<MockSpinnerState>>,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockSpinnerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Message the spinner was started with.
    pub fn start_message(&self) -> String {
        self.lock().start_message.clone()
    }

    /// Messages set while spinning.
    pub fn messages(&self) -> Vec<String> {
        self.lock().messages.clone()
    }

    pub fn finish_message(&self) -> Option<String> {
        self.lock().finish_message.clone()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.lock().status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.lock().messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let mut state = self.lock();
        state.finish_message = Some(msg.to_string());
        state.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        let mut state = self.lock();
        state.finish_message = Some(msg.to_string());
        state.status = Some(SpinnerStatus::Error);
    }

    fn finish_clear(&mut self) {
        self.lock().status = Some(SpinnerStatus::Cleared);
    }
}
