mod contact;
mod subscription;

pub use contact::{ContactForm, ContactSubmission};
pub use subscription::{NewsletterRequest, NewsletterSubscription};

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC timestamp with microsecond precision, e.g.
/// `2026-10-19T08:15:30.123456+00:00`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_has_explicit_utc_offset() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
        assert_eq!(iso_timestamp(at), "2026-10-19T08:15:30.000000+00:00");
        assert!(DateTime::parse_from_rfc3339(&iso_timestamp(Utc::now())).is_ok());
    }
}
