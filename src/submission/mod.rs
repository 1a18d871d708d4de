// SPDX-License-Identifier: MPL-2.0
//! Sending the composite and contact details to the form endpoint.

pub mod client;

pub use client::SubmissionClient;

use crate::composition::Composite;
use crate::preview::ContactForm;
use serde::Serialize;

/// JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `data:image/png;base64,...`
    pub image: String,
}

impl FormPayload {
    /// Builds the payload from the current form and a freshly encoded composite.
    #[must_use]
    pub fn new(reply_to: &str, form: &ContactForm, composite: &Composite) -> Self {
        Self {
            reply_to: reply_to.to_owned(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            image: composite.data_uri(),
        }
    }
}
