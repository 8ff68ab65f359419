//! Fixed business copy shown around the forms

pub const COMPANY: &str = "TIMBERGUARD";
pub const TAGLINE: &str = "Professional Tree Services";
pub const PHONE: &str = "(555) 123-TREE";
pub const EMAIL: &str = "info@timberguard.com";

pub const HERO_TITLE: &str = "EXPERT TREE CARE";
pub const HERO_TITLE_ACCENT: &str = "YOU CAN TRUST";
pub const HERO_BODY: &str = "From tree removal to emergency storm cleanup, our certified \
    arborists deliver safe, professional service every time.";
pub const HERO_BADGES: &[&str] = &["Fully Insured", "25+ Years Experience", "ISA Certified"];

pub const CONTACT_BODY: &str = "Have questions or need a consultation? Our team is ready to \
    help with all your tree service needs.";

/// (glyph, line, detail) rows for the contact panel
pub const CONTACT_DETAILS: &[(&str, &str, &str)] = &[
    ("☎", PHONE, "24/7 Emergency Line Available"),
    ("✉", EMAIL, "We respond within 24 hours"),
    ("⌂", "123 Forest Lane", "Portland, OR 97201"),
    ("◷", "Mon - Sat: 7AM - 7PM", "Sunday: Emergency Only"),
];

pub const FOOTER: &str = "© 2024 TimberGuard Tree Services. Fully Licensed & Insured.";
