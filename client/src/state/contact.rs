//! Contact form model.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::form::{FieldErrors, FormModel, check_email, check_min_chars, record, require};

/// Minimum trimmed message length.
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Category,
    Subject,
    Message,
}

/// Inquiry categories offered by the form's select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactCategory {
    General,
    Visit,
    Group,
    Education,
    Media,
    Other,
}

impl ContactCategory {
    pub const ALL: [Self; 6] = [Self::General, Self::Visit, Self::Group, Self::Education, Self::Media, Self::Other];

    /// Value submitted by the `<option>`.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Visit => "visit",
            Self::Group => "group",
            Self::Education => "education",
            Self::Media => "media",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Visit => "Visit Information",
            Self::Group => "Group Bookings",
            Self::Education => "Educational Programs",
            Self::Media => "Media & Press",
            Self::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    /// Selected `ContactCategory::value`, empty until chosen.
    pub category: String,
    pub message: String,
}

impl FormModel for ContactForm {
    type Field = ContactField;

    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Category => &self.category,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn set_value(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Category => &mut self.category,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    fn validate(&self) -> FieldErrors<ContactField> {
        let mut errors = FieldErrors::new();
        record(&mut errors, ContactField::Name, require(&self.name, "Name is required"));
        record(&mut errors, ContactField::Email, check_email(&self.email));
        record(&mut errors, ContactField::Subject, require(&self.subject, "Subject is required"));
        record(&mut errors, ContactField::Category, require(&self.category, "Please select a category"));
        record(
            &mut errors,
            ContactField::Message,
            require(&self.message, "Message is required")
                .and_then(|()| check_min_chars(&self.message, MESSAGE_MIN_CHARS, "Message")),
        );
        errors
    }
}
