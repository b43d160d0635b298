//! Email delivery

mod mailer;

pub use mailer::{Mailer, OutgoingEmail};
