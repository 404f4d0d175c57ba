//! Lead capture: the form, captured records, and validation.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::clock::Millis;

/// Editable lead form. `name` and `email` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Addressable field of [`LeadForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Message,
}

impl LeadForm {
    /// Overwrite one field.
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    /// Required fields that are empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<LeadField> {
        [LeadField::Name, LeadField::Email]
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingRequired`] listing every empty required field.
    pub fn validate(&self) -> Result<(), LeadError> {
        let missing = self.missing_required();
        if missing.is_empty() { Ok(()) } else { Err(LeadError::MissingRequired(missing)) }
    }
}

/// A submitted lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub captured_at: Millis,
}

impl LeadRecord {
    /// Stamp a validated form with its capture time.
    #[must_use]
    pub fn capture(form: LeadForm, captured_at: Millis) -> Self {
        let LeadForm { name, email, phone, message } = form;
        Self { name, email, phone, message, captured_at }
    }
}

/// Lead submission failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// One or more required fields were empty.
    #[error("missing required lead fields: {0:?}")]
    MissingRequired(Vec<LeadField>),
    /// The chat is locked or torn down.
    #[error("chat is not accepting input")]
    ChatClosed,
}

impl LeadError {
    /// Message shown to the visitor.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingRequired(_) => "Заполни имя и email!",
            Self::ChatClosed => "Чат недоступен",
        }
    }
}
