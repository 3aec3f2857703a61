//! Request and response payloads of the send API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Arbitrary structured value passed through to a server-side template.
///
/// Any JSON shape is accepted: strings, numbers, booleans, null, objects,
/// and arrays. The client does not inspect it.
pub type TemplateValue = serde_json::Value;

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Mailbox address, e.g. `user@example.com`.
    pub email: String,
    /// Display name shown alongside the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    /// Creates an address without a display name.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<&str> for Address {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for Address {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

/// A file attached to an email.
///
/// Setting [`inline_id`](Self::inline_id) makes the attachment addressable
/// from HTML content via a `cid:` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name presented to the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Attachment body, base64-encoded or raw text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// MIME type, e.g. `application/pdf`. Always sent.
    pub content_type: String,
    /// Content-ID for inline references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_id: Option<String>,
}

impl Attachment {
    /// Creates an attachment with only its content type set.
    #[must_use]
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            file_name: None,
            content: None,
            content_type: content_type.into(),
            inline_id: None,
        }
    }

    /// Sets the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the content (base64 or raw text).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the Content-ID for inline use.
    #[must_use]
    pub fn with_inline_id(mut self, inline_id: impl Into<String>) -> Self {
        self.inline_id = Some(inline_id.into());
        self
    }
}

/// Open/click/unsubscribe tracking for an email.
///
/// Everything is disabled by default; disabled flags are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSettings {
    #[serde(default, skip_serializing_if = "is_false")]
    pub opens: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub clicks: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unsubscribes: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribe_group_id: Option<i64>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_false(value: &bool) -> bool {
    !*value
}

impl TrackingSettings {
    /// Creates settings with all tracking disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables open tracking.
    #[must_use]
    pub const fn with_opens(mut self, enabled: bool) -> Self {
        self.opens = enabled;
        self
    }

    /// Enables or disables click tracking.
    #[must_use]
    pub const fn with_clicks(mut self, enabled: bool) -> Self {
        self.clicks = enabled;
        self
    }

    /// Enables or disables unsubscribe tracking.
    #[must_use]
    pub const fn with_unsubscribes(mut self, enabled: bool) -> Self {
        self.unsubscribes = enabled;
        self
    }

    /// Sets the unsubscribe group.
    #[must_use]
    pub const fn with_unsubscribe_group_id(mut self, group_id: i64) -> Self {
        self.unsubscribe_group_id = Some(group_id);
        self
    }
}

/// A single email to be sent.
///
/// Only `from` is required. Inline content (`text_content`,
/// `html_content`) and template rendering (`template_id`,
/// `template_data`) may be combined freely; the API decides precedence.
///
/// Unset options, empty lists, and empty maps are left out of the
/// serialized body.
///
/// # Example
///
/// ```
/// use laneful::email::{Address, Email, TrackingSettings};
///
/// let email = Email::new(Address::new("noreply@example.com").with_name("Example"))
///     .with_to(Address::new("user@example.com"))
///     .with_subject("Welcome")
///     .with_text_content("Thanks for signing up!")
///     .with_tracking(TrackingSettings::new().with_opens(true));
///
/// assert_eq!(email.to.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub from: Address,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub template_data: BTreeMap<String, TemplateValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Address>,
    /// Scheduled delivery time, Unix epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_time: Option<i64>,
    /// Opaque metadata echoed back in webhook events.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub webhook_data: BTreeMap<String, String>,
    /// Categorization label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingSettings>,
}

impl Email {
    /// Creates an email with only the sender set.
    #[must_use]
    pub fn new(from: impl Into<Address>) -> Self {
        Self {
            from: from.into(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: None,
            text_content: None,
            html_content: None,
            template_id: None,
            template_data: BTreeMap::new(),
            attachments: Vec::new(),
            headers: BTreeMap::new(),
            reply_to: None,
            send_time: None,
            webhook_data: BTreeMap::new(),
            tag: None,
            tracking: None,
        }
    }

    /// Appends a primary recipient.
    #[must_use]
    pub fn with_to(mut self, address: impl Into<Address>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Appends a carbon-copy recipient.
    #[must_use]
    pub fn with_cc(mut self, address: impl Into<Address>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Appends a blind carbon-copy recipient.
    #[must_use]
    pub fn with_bcc(mut self, address: impl Into<Address>) -> Self {
        self.bcc.push(address.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_text_content(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_html_content(mut self, html: impl Into<String>) -> Self {
        self.html_content = Some(html.into());
        self
    }

    /// Renders the email from a server-side template.
    #[must_use]
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Adds one template substitution, replacing any previous value for `key`.
    #[must_use]
    pub fn with_template_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<TemplateValue>,
    ) -> Self {
        self.template_data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Adds a custom MIME header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_reply_to(mut self, address: impl Into<Address>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Schedules delivery at the given Unix timestamp (seconds).
    #[must_use]
    pub const fn with_send_time(mut self, epoch_secs: i64) -> Self {
        self.send_time = Some(epoch_secs);
        self
    }

    /// Adds one key to the webhook passthrough metadata.
    #[must_use]
    pub fn with_webhook_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.webhook_data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub const fn with_tracking(mut self, tracking: TrackingSettings) -> Self {
        self.tracking = Some(tracking);
        self
    }
}

/// Envelope for one send call; every email goes out in a single request.
///
/// This is the owned form of the wire body. The client serializes a
/// borrowed view of the same shape, so sending needs no clone of the
/// emails; both produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub emails: Vec<Email>,
}

impl EmailRequest {
    #[must_use]
    pub const fn new(emails: Vec<Email>) -> Self {
        Self { emails }
    }
}

/// Body of a `200 OK` response.
///
/// A missing `status` key decodes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: String,
}

impl ApiResponse {
    /// Returns true if the reported status is `ok` (any case).
    ///
    /// Informational only: success is decided by the HTTP status code.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Body of any non-200 response.
///
/// A missing `error` key decodes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: String,
}
