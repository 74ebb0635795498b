//! sw-forms: notification-channel form visibility.
//!
//! Provides:
//! - The channel-type discriminant and its field-group visibility rule set
//! - A form session that applies the rule set and keeps hidden fields from
//!   leaking stale values into submission
//!
//! # Example
//!
//! ```
//! use sw_forms::{ChannelForm, ChannelField, ChannelKind};
//!
//! let mut form = ChannelForm::new(ChannelKind::Email);
//! form.set_value(ChannelField::SmtpServer, "mail.example.com");
//! form.set_kind(ChannelKind::Sms);
//!
//! // The SMTP group vanished along with its value.
//! assert_eq!(form.value(ChannelField::SmtpServer), "");
//! ```

pub mod channel;
pub mod form;

// Re-exports for ergonomics
pub use channel::{ChannelField, ChannelKind, FieldGroup, VisibilityPlan, resolve, shows_signup_link};
pub use form::ChannelForm;
