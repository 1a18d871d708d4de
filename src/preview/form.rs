// SPDX-License-Identifier: MPL-2.0
//! Contact fields and the submission lifecycle.

/// The three free-text contact fields. No validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl ContactForm {
    #[must_use]
    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
        }
        next
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Lifecycle of the latest request plus the sticky success flag.
///
/// `submitted` only ever goes from `false` to `true`; a later failure leaves
/// the success message in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub submitted: bool,
}

impl SubmissionState {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    #[must_use]
    pub fn started(self) -> Self {
        Self {
            status: SubmissionStatus::InFlight,
            ..self
        }
    }

    #[must_use]
    pub fn finished(self, success: bool) -> Self {
        if success {
            Self {
                status: SubmissionStatus::Succeeded,
                submitted: true,
            }
        } else {
            Self {
                status: SubmissionStatus::Failed,
                ..self
            }
        }
    }
}
