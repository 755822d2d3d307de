//! Mail messages carrying a single attachment.

use super::FileRecord;

/// Subject used when the caller gives none.
pub const DEFAULT_SUBJECT: &str = "File Attachment";

/// Body used when the caller gives none.
pub const DEFAULT_BODY: &str = "Please find the attached file.";

/// A file addressed to one or more recipients.
///
/// The core only decides whether a message is admissible; delivery belongs to
/// the transport.
///
/// # Examples
///
/// ```
/// use arcpack_core::FileRecord;
/// use arcpack_core::MailMessage;
///
/// let message = MailMessage::new(
///     vec!["hr@example.com".to_string()],
///     FileRecord::new("cv.pdf", b"%PDF-1.7".to_vec()),
/// )
/// .with_subject("Application");
///
/// assert_eq!(message.subject(), "Application");
/// assert_eq!(message.body(), "Please find the attached file.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    recipients: Vec<String>,
    subject: String,
    body: String,
    pub(crate) attachment: FileRecord,
}

impl MailMessage {
    /// Creates a message with the default subject and body.
    pub fn new(recipients: Vec<String>, attachment: FileRecord) -> Self {
        Self {
            recipients,
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
            attachment,
        }
    }

    /// Replaces the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Replaces the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Recipient addresses, in the order given.
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Plain-text body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The attached file.
    pub fn attachment(&self) -> &FileRecord {
        &self.attachment
    }
}
