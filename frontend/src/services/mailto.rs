//! Appointment requests handed off to the visitor's mail client.
//!
//! Nothing is sent from the page: a `mailto:` URI carrying the form values
//! is built and the browser is pointed at it.

use serde_json::json;

use crate::config::{CONTACT_EMAIL, MAIL_SUBJECT};
use crate::types::{AppError, AppResult, BookingError, BookingForm, FormField};

/// Status text shown once the draft has been handed off.
pub const HANDOFF_MESSAGE: &str = "Opening your email client to send the appointment request...";

/// Plain-text body of the email draft, one `Label: value` line per field.
pub fn mail_body(form: &BookingForm) -> String {
    [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Date,
        FormField::Message,
    ]
    .iter()
    .map(|field| format!("{}: {}", field.label(), form.get(*field)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Validate the form and build the `mailto:` URI for `recipient`.
pub fn build_mailto(recipient: &str, form: &BookingForm) -> Result<String, BookingError> {
    form.validate()?;

    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(MAIL_SUBJECT),
        urlencoding::encode(&mail_body(form)),
    ))
}

/// Validate, then navigate the browser to the prefilled draft.
///
/// Returns the URI that was opened.
pub fn send_booking_request(form: &BookingForm) -> AppResult<String> {
    let uri = build_mailto(CONTACT_EMAIL, form).map_err(|err| {
        let BookingError::MissingRequired { fields } = &err;
        let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
        log::warn!("Booking rejected, missing: {}", names.join(", "));
        err
    })?;

    log::info!("📧 Opening mail client: {}", filled_summary(form));

    gloo_utils::window()
        .location()
        .set_href(&uri)
        .map_err(|e| AppError::Navigation(format!("{:?}", e)))?;

    Ok(uri)
}

/// Which fields were filled, without their values.
fn filled_summary(form: &BookingForm) -> serde_json::Value {
    json!({
        "name": !form.name.is_empty(),
        "email": !form.email.is_empty(),
        "phone": !form.phone.is_empty(),
        "date": !form.date.is_empty(),
        "message": !form.message.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn query_params(uri: &str) -> HashMap<String, String> {
        let (_, query) = uri.split_once('?').unwrap();
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (key.to_string(), urlencoding::decode(value).unwrap().into_owned())
            })
            .collect()
    }

    #[test]
    fn test_missing_phone_is_rejected() {
        let form = BookingForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            ..Default::default()
        };

        let err = build_mailto(CONTACT_EMAIL, &form).unwrap_err();
        assert_eq!(err, BookingError::MissingRequired { fields: vec![FormField::Phone] });
    }

    #[test]
    fn test_decoded_query_reproduces_values() {
        let form = BookingForm {
            name: "Anaïs O'Neil & Co".into(),
            email: "a+b@example.com".into(),
            phone: "+91 (98450) 00000".into(),
            date: "2026-11-02".into(),
            message: "Hi!\nPCOS, 50% better? a=b&c=d #tag".into(),
        };

        let uri = build_mailto(CONTACT_EMAIL, &form).unwrap();
        assert!(uri.starts_with("mailto:dietitianmonica20@gmail.com?"));

        let params = query_params(&uri);
        assert_eq!(params["subject"], MAIL_SUBJECT);
        assert_eq!(
            params["body"],
            "Name: Anaïs O'Neil & Co\n\
             Email: a+b@example.com\n\
             Phone: +91 (98450) 00000\n\
             Date: 2026-11-02\n\
             Message: Hi!\nPCOS, 50% better? a=b&c=d #tag"
        );
    }

    #[test]
    fn test_query_has_no_raw_separators() {
        let form = BookingForm {
            name: "x&body=spoofed".into(),
            email: "e".into(),
            phone: "p".into(),
            ..Default::default()
        };

        let uri = build_mailto(CONTACT_EMAIL, &form).unwrap();
        let (_, query) = uri.split_once('?').unwrap();
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
    }

    #[test]
    fn test_blank_name_still_opens_draft() {
        let form = BookingForm {
            name: " ".into(),
            email: "a@b.c".into(),
            phone: "1".into(),
            ..Default::default()
        };

        let uri = build_mailto(CONTACT_EMAIL, &form).unwrap();
        assert!(query_params(&uri)["body"].starts_with("Name:  \nEmail: a@b.c"));
        assert_eq!(filled_summary(&form)["name"], true);
    }

    #[test]
    fn test_optional_fields_render_empty() {
        let form = BookingForm {
            name: "N".into(),
            email: "E".into(),
            phone: "P".into(),
            ..Default::default()
        };

        assert_eq!(mail_body(&form), "Name: N\nEmail: E\nPhone: P\nDate: \nMessage: ");
    }

    #[test]
    fn test_summary_does_not_leak_values() {
        let form = BookingForm { name: "Secret Name".into(), ..Default::default() };
        let summary = filled_summary(&form).to_string();
        assert!(!summary.contains("Secret"));
        assert_eq!(filled_summary(&form)["name"], true);
        assert_eq!(filled_summary(&form)["email"], false);
    }
}
