//! Records tracked by the application.
//!
//! Entities are plain values built from validated value objects. Appointments
//! and revenue entries hold copies of the client and service they were created
//! from, so later edits or deletions of those never reach back into them.

pub mod appointment;
pub mod client;
pub mod expense;
pub mod revenue;
pub mod service;

pub use appointment::Appointment;
pub use client::Client;
pub use expense::Expense;
pub use revenue::Revenue;
pub use service::Service;

/// Returns true if any whitespace-separated word of `text` equals one of
/// `keywords`, ignoring case.
pub fn contains_word_ignore_case(text: &str, keywords: &[String]) -> bool {
    text.split_whitespace().any(|word| {
        keywords
            .iter()
            .any(|keyword| word.eq_ignore_ascii_case(keyword.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_word_ignore_case() {
        let keywords = vec!["alex".to_string(), "bob".to_string()];
        assert!(contains_word_ignore_case("Alex Yeoh", &keywords));
        assert!(!contains_word_ignore_case("Alexander Yeoh", &keywords));
        assert!(!contains_word_ignore_case("Alex Yeoh", &[]));
    }
}
