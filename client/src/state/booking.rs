//! Visit-booking form model.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use super::form::{FieldErrors, FormModel, check_email, record, require};

/// Party size preselected in the form.
pub const DEFAULT_VISITORS: &str = "1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Visitors,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD` from the date input.
    pub date: String,
    /// `HH:MM` slot value.
    pub time: String,
    pub visitors: String,
    /// Special requests. Optional.
    pub message: String,
}

impl Default for VisitBooking {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            visitors: DEFAULT_VISITORS.to_owned(),
            message: String::new(),
        }
    }
}

impl FormModel for VisitBooking {
    type Field = BookingField;

    fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Visitors => &self.visitors,
            BookingField::Message => &self.message,
        }
    }

    fn set_value(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Visitors => &mut self.visitors,
            BookingField::Message => &mut self.message,
        };
        *slot = value;
    }

    fn validate(&self) -> FieldErrors<BookingField> {
        let mut errors = FieldErrors::new();
        record(&mut errors, BookingField::Name, require(&self.name, "Name is required"));
        record(&mut errors, BookingField::Email, check_email(&self.email));
        record(&mut errors, BookingField::Phone, require(&self.phone, "Phone number is required"));
        record(&mut errors, BookingField::Date, require(&self.date, "Visit date is required"));
        record(&mut errors, BookingField::Time, require(&self.time, "Visit time is required"));
        errors
    }
}
