//! Blog request form state and validation.
//!
//! This module owns the user-editable part of a request:
//!
//! - `FormState`: title, word count (as typed), audience level and keywords
//! - `AudienceLevel`: the three writing styles the service understands
//! - `ValidationError`: everything that can be wrong before a request is sent
//! - `BlogRequest`: a validated snapshot ready to be encoded as multipart fields
//!
//! Validation runs in a fixed order and stops at the first failure, so the
//! user always sees the most fundamental problem first.

use serde::Serialize;
use thiserror::Error;

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 75;

/// Maximum requested word count
pub const MAX_WORD_COUNT: u32 = 2000;

/// Maximum number of keyword chips
pub const MAX_KEYWORDS: usize = 5;

/// Word count shown in a fresh form
pub const DEFAULT_WORD_COUNT: &str = "750";

/// Errors caught locally, before anything is sent to the service
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add a blog post title.")]
    EmptyTitle,

    #[error("Title should not exceed 75 characters.")]
    TitleTooLong,

    #[error("Please enter a valid non-negative number for word count.")]
    InvalidWordCount,

    #[error("Word count should not exceed 2000.")]
    WordCountTooLarge,

    #[error("You can only add up to 5 keywords.")]
    TooManyKeywords,
}

/// Target audience for the generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum AudienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advance,
}

impl AudienceLevel {
    /// All levels in display order
    pub fn all() -> &'static [AudienceLevel] {
        &[
            AudienceLevel::Beginner,
            AudienceLevel::Intermediate,
            AudienceLevel::Advance,
        ]
    }

    /// Value sent as the `blog_style` field
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceLevel::Beginner => "Beginner",
            AudienceLevel::Intermediate => "Intermediate",
            AudienceLevel::Advance => "Advance",
        }
    }
}

impl std::fmt::Display for AudienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable form contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    /// Kept as typed so the text field can hold partial input
    pub word_count: String,
    pub audience: AudienceLevel,
    keywords: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            word_count: DEFAULT_WORD_COUNT.to_string(),
            audience: AudienceLevel::default(),
            keywords: Vec::new(),
        }
    }
}

impl FormState {
    /// Keywords in insertion order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Add a keyword chip.
    ///
    /// Blank input and exact duplicates are ignored and return `Ok(false)`.
    /// A sixth keyword is rejected and leaves the list untouched.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<bool, ValidationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.keywords.iter().any(|k| k == keyword) {
            return Ok(false);
        }
        if self.keywords.len() >= MAX_KEYWORDS {
            return Err(ValidationError::TooManyKeywords);
        }
        self.keywords.push(keyword.to_string());
        Ok(true)
    }

    /// Remove the keyword at `index`, if there is one
    pub fn remove_keyword(&mut self, index: usize) -> Option<String> {
        (index < self.keywords.len()).then(|| self.keywords.remove(index))
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the form and produce a request snapshot
    pub fn validate(&self) -> Result<BlogRequest, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.title.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong);
        }

        let words: u32 = self
            .word_count
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidWordCount)?;
        if words > MAX_WORD_COUNT {
            return Err(ValidationError::WordCountTooLarge);
        }

        Ok(BlogRequest {
            title: self.title.clone(),
            words,
            audience: self.audience,
            keywords: self.keywords.clone(),
        })
    }
}

/// A validated request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRequest {
    pub title: String,
    pub words: u32,
    pub audience: AudienceLevel,
    pub keywords: Vec<String>,
}

impl BlogRequest {
    /// Multipart field names and values, in the order they are sent
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            ("input_text", self.title.clone()),
            ("no_words", self.words.to_string()),
            ("blog_style", self.audience.as_str().to_string()),
            ("keywords", self.keywords.join(",")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_title(title: &str) -> FormState {
        FormState {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_form() {
        let form = FormState::default();
        assert_eq!(form.title, "");
        assert_eq!(form.word_count, "750");
        assert_eq!(form.audience, AudienceLevel::Beginner);
        assert!(form.keywords().is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(form_with_title("").validate(), Err(ValidationError::EmptyTitle));
        assert_eq!(form_with_title("   \t").validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_title_length_limit() {
        let at_limit = "a".repeat(MAX_TITLE_CHARS);
        assert!(form_with_title(&at_limit).validate().is_ok());

        for len in [76, 100, 500] {
            let form = form_with_title(&"a".repeat(len));
            assert_eq!(form.validate(), Err(ValidationError::TitleTooLong));
        }
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        // 75 two-byte characters
        let title = "é".repeat(MAX_TITLE_CHARS);
        assert!(form_with_title(&title).validate().is_ok());
    }

    #[test]
    fn test_empty_title_checked_before_word_count() {
        let form = FormState {
            word_count: "lots".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_invalid_word_counts() {
        for input in ["", "abc", "-1", "12.5", "1e3", "99999999999"] {
            let form = FormState {
                word_count: input.to_string(),
                ..form_with_title("Rust ownership")
            };
            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidWordCount),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_word_count_limit() {
        let mut form = form_with_title("Rust ownership");

        form.word_count = "2000".to_string();
        assert_eq!(form.validate().unwrap().words, 2000);

        form.word_count = "2001".to_string();
        assert_eq!(form.validate(), Err(ValidationError::WordCountTooLarge));

        form.word_count = " 0 ".to_string();
        assert_eq!(form.validate().unwrap().words, 0);
    }

    #[test]
    fn test_sixth_keyword_rejected() {
        let mut form = FormState::default();
        for kw in ["rust", "async", "tokio", "egui", "serde"] {
            assert_eq!(form.add_keyword(kw), Ok(true));
        }

        let before = form.keywords().to_vec();
        assert_eq!(form.add_keyword("clap"), Err(ValidationError::TooManyKeywords));
        assert_eq!(form.keywords(), before.as_slice());
    }

    #[test]
    fn test_blank_and_duplicate_keywords_ignored() {
        let mut form = FormState::default();
        assert_eq!(form.add_keyword("  rust "), Ok(true));
        assert_eq!(form.add_keyword("rust"), Ok(false));
        assert_eq!(form.add_keyword("   "), Ok(false));
        assert_eq!(form.keywords(), ["rust".to_string()]);
    }

    #[test]
    fn test_remove_keyword_by_index() {
        let mut form = FormState::default();
        for kw in ["a", "b", "c"] {
            form.add_keyword(kw).unwrap();
        }

        assert_eq!(form.remove_keyword(1), Some("b".to_string()));
        assert_eq!(form.keywords(), ["a".to_string(), "c".to_string()]);
        assert_eq!(form.remove_keyword(5), None);
        assert_eq!(form.keywords().len(), 2);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut form = form_with_title("Something");
        form.word_count = "1200".to_string();
        form.audience = AudienceLevel::Advance;
        form.add_keyword("rust").unwrap();

        form.reset();
        let once = form.clone();
        form.reset();

        assert_eq!(form, once);
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_request_fields() {
        let mut form = form_with_title("Learning Rust");
        form.word_count = "0500".to_string();
        form.audience = AudienceLevel::Intermediate;
        form.add_keyword("ownership").unwrap();
        form.add_keyword("borrowing").unwrap();

        let request = form.validate().unwrap();
        assert_eq!(
            request.fields(),
            [
                ("input_text", "Learning Rust".to_string()),
                ("no_words", "500".to_string()),
                ("blog_style", "Intermediate".to_string()),
                ("keywords", "ownership,borrowing".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_fields_without_keywords() {
        let request = form_with_title("Learning Rust").validate().unwrap();
        assert_eq!(request.fields()[3], ("keywords", String::new()));
    }
}
