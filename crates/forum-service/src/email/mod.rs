//! Email delivery
//!
//! Outgoing mail goes through the [`EmailSender`] trait so services stay
//! independent of the concrete provider. Production uses SendGrid; the
//! console and noop senders cover development and tests.

mod console;
mod sender;
mod sendgrid;

pub use console::{ConsoleEmailSender, NoopEmailSender};
pub use sender::EmailSender;
pub use sendgrid::SendgridEmailSender;
