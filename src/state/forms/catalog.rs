//! The site's three forms, as configuration

use super::controller::{FormKind, FormSpec};
use super::field::ChoiceOption;
use super::field_store::FormState;
use super::validator::DateRule;
use crate::api::{BookingRequest, ContactMessage, Endpoint, QuoteRequest};
use chrono::{NaiveDate, Weekday};
use serde_json::Value;

/// Services a customer can ask for
pub const SERVICE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "tree-removal",
        label: "Tree Removal",
    },
    ChoiceOption {
        value: "tree-trimming",
        label: "Tree Trimming",
    },
    ChoiceOption {
        value: "stump-grinding",
        label: "Stump Grinding",
    },
    ChoiceOption {
        value: "emergency",
        label: "Emergency Services",
    },
    ChoiceOption {
        value: "land-clearing",
        label: "Land Clearing",
    },
];

/// Appointment windows offered by the booking form
pub const TIME_SLOTS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "8:00 AM - 10:00 AM",
        label: "8:00 AM - 10:00 AM",
    },
    ChoiceOption {
        value: "10:00 AM - 12:00 PM",
        label: "10:00 AM - 12:00 PM",
    },
    ChoiceOption {
        value: "12:00 PM - 2:00 PM",
        label: "12:00 PM - 2:00 PM",
    },
    ChoiceOption {
        value: "2:00 PM - 4:00 PM",
        label: "2:00 PM - 4:00 PM",
    },
    ChoiceOption {
        value: "4:00 PM - 6:00 PM",
        label: "4:00 PM - 6:00 PM",
    },
];

/// Hero-section quote request
pub fn quote_form() -> FormSpec {
    FormSpec::builder(FormKind::Quote, Endpoint::Quotes)
        .required_text("name", "Full Name")
        .required_text("email", "Email")
        .required_text("phone", "Phone")
        .required_choice("service", "Service Needed", SERVICE_OPTIONS)
        .required_text("address", "Property Address")
        .multiline("message", "Additional Details")
        .messages(
            "Quote request submitted! We'll contact you shortly.",
            "Failed to submit quote request. Please try again.",
        )
        .mapper(quote_body)
        .build()
}

/// Appointment booking with a calendar date
pub fn booking_form(closed_weekday: Weekday) -> FormSpec {
    FormSpec::builder(FormKind::Booking, Endpoint::Bookings)
        .required_text("name", "Full Name")
        .required_text("email", "Email")
        .required_text("phone", "Phone")
        .required_choice("service", "Service", SERVICE_OPTIONS)
        .required_choice("preferred_time", "Preferred Time", TIME_SLOTS)
        .required_text("address", "Property Address")
        .multiline("notes", "Notes")
        .date_rule(DateRule::new(closed_weekday))
        .messages(
            "Booking request submitted! We'll confirm your appointment shortly.",
            "Failed to submit booking. Please try again.",
        )
        .mapper(booking_body)
        .build()
}

/// General contact message; phone is optional
pub fn contact_form() -> FormSpec {
    FormSpec::builder(FormKind::Contact, Endpoint::Contact)
        .required_text("name", "Name")
        .required_text("email", "Email")
        .text("phone", "Phone")
        .required_text("subject", "Subject")
        .multiline("message", "Message")
        .required()
        .messages(
            "Message sent! We'll get back to you soon.",
            "Failed to send message. Please try again.",
        )
        .mapper(contact_body)
        .build()
}

fn quote_body(state: &FormState, _date: Option<NaiveDate>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(QuoteRequest {
        name: state.owned("name"),
        email: state.owned("email"),
        phone: state.owned("phone"),
        service: state.owned("service"),
        address: state.owned("address"),
        message: state.owned("message"),
    })
}

fn booking_body(state: &FormState, date: Option<NaiveDate>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(BookingRequest {
        name: state.owned("name"),
        email: state.owned("email"),
        phone: state.owned("phone"),
        service: state.owned("service"),
        address: state.owned("address"),
        preferred_time: state.owned("preferred_time"),
        notes: state.owned("notes"),
        preferred_date: date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    })
}

fn contact_body(state: &FormState, _date: Option<NaiveDate>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(ContactMessage {
        name: state.owned("name"),
        email: state.owned("email"),
        phone: state.owned("phone"),
        subject: state.owned("subject"),
        message: state.owned("message"),
    })
}
