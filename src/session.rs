//! Input Session
//!
//! The user's current phone number and message. The sanitized number is
//! derived from the raw text every time it is read.

use crate::dispatcher::{DispatchOutcome, Dispatcher};
use crate::sanitize::sanitize;

/// Length cap applied to the phone number field
pub const DEFAULT_MAX_NUMBER_LENGTH: usize = 20;

#[derive(Debug, Clone)]
pub struct InputSession {
    phone_number: String,
    message: String,
    max_number_length: usize,
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NUMBER_LENGTH)
    }
}

impl InputSession {
    pub fn new(max_number_length: usize) -> Self {
        Self {
            phone_number: String::new(),
            message: String::new(),
            max_number_length,
        }
    }

    /// Replace the phone number, keeping at most `max_number_length` characters
    pub fn set_phone_number(&mut self, text: &str) {
        self.phone_number = text.chars().take(self.max_number_length).collect();
    }

    pub fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sanitized_number(&self) -> String {
        sanitize(&self.phone_number)
    }

    /// Call the current number
    pub async fn call(&self, dispatcher: &Dispatcher) -> DispatchOutcome {
        dispatcher.dispatch_call(&self.sanitized_number()).await
    }

    /// Compose an SMS with the current number and message
    pub async fn sms(&self, dispatcher: &Dispatcher) -> DispatchOutcome {
        dispatcher
            .dispatch_sms(&self.sanitized_number(), &self.message)
            .await
    }
}
