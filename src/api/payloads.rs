//! Request bodies sent to the create endpoints

use serde::Serialize;

/// Body of `POST /api/quotes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    pub message: String,
}

/// Body of `POST /api/bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    pub preferred_time: String,
    pub notes: String,
    /// `YYYY-MM-DD`
    pub preferred_date: String,
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
