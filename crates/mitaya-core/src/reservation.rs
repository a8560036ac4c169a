//! Reservation form validation
//!
//! Validates the raw field strings exactly as typed into the form and
//! produces either a [`Reservation`] ready for submission or per-field
//! error messages. Validation errors are plain values surfaced next to
//! their fields; they are never raised.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Input format of the `datetime-local` form control.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Guest count accepted for online booking; larger parties phone in.
pub const MAX_GUESTS: u32 = 10;

/// Raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub date: String,
    pub guests: String,
    pub notes: String,
}

/// A validated reservation request, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub date: NaiveDateTime,
    pub guests: u32,
    pub notes: Option<String>,
}

/// Per-field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Enter a valid date and time")]
    DateUnparseable,
    #[error("Reservation date must be in the future")]
    DateNotInFuture,
    #[error("Enter a number of guests")]
    GuestsUnparseable,
    #[error("At least 1 guest required")]
    GuestsTooFew,
    #[error("Max 10 guests for online booking")]
    GuestsTooMany,
}

/// Field-level errors for one validation pass. All fields are checked on
/// every pass so the form can show every problem at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationErrors {
    pub name: Option<FieldError>,
    pub date: Option<FieldError>,
    pub guests: Option<FieldError>,
}

impl ReservationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.guests.is_none()
    }
}

/// Validate `form` against the moment `now`.
///
/// Rules: trimmed name length >= 2; date parses and is strictly after
/// `now`; guests is an integer in `1..=10`; notes are free text, an empty
/// string becomes `None`.
pub fn validate(form: &ReservationForm, now: NaiveDateTime) -> Result<Reservation, ReservationErrors> {
    let mut errors = ReservationErrors::default();

    let name = form.name.trim();
    if name.chars().count() < 2 {
        errors.name = Some(FieldError::NameTooShort);
    }

    let date = match NaiveDateTime::parse_from_str(form.date.trim(), DATE_INPUT_FORMAT) {
        Ok(date) if date > now => Some(date),
        Ok(_) => {
            errors.date = Some(FieldError::DateNotInFuture);
            None
        }
        Err(_) => {
            errors.date = Some(FieldError::DateUnparseable);
            None
        }
    };

    let guests = match form.guests.trim().parse::<u32>() {
        Ok(0) => {
            errors.guests = Some(FieldError::GuestsTooFew);
            None
        }
        Ok(n) if n > MAX_GUESTS => {
            errors.guests = Some(FieldError::GuestsTooMany);
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            errors.guests = Some(FieldError::GuestsUnparseable);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let notes = form.notes.trim();
    Ok(Reservation {
        name: name.to_string(),
        // Both unwraps are unreachable: a None date or guests implies a
        // recorded error, and errors were checked above.
        date: date.expect("date validated"),
        guests: guests.expect("guests validated"),
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn valid_form() -> ReservationForm {
        ReservationForm {
            name: "Ada Lovelace".to_string(),
            date: "2026-09-01T19:30".to_string(),
            guests: "4".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let reservation = validate(&valid_form(), now()).unwrap();
        assert_eq!(reservation.name, "Ada Lovelace");
        assert_eq!(reservation.guests, 4);
        assert_eq!(reservation.notes, None);
        assert_eq!(
            reservation.date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_short_name_rejected() {
        let mut form = valid_form();
        form.name = " A ".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert!(errors.date.is_none());
    }

    #[test]
    fn test_past_date_rejected_with_date_specific_error() {
        let mut form = valid_form();
        form.date = "2026-08-25T11:59".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.date, Some(FieldError::DateNotInFuture));
    }

    #[test]
    fn test_date_equal_to_now_rejected() {
        let mut form = valid_form();
        form.date = "2026-08-25T12:00".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.date, Some(FieldError::DateNotInFuture));
    }

    #[test]
    fn test_garbage_date_rejected() {
        let mut form = valid_form();
        form.date = "next tuesday".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.date, Some(FieldError::DateUnparseable));
    }

    #[test]
    fn test_guest_bounds() {
        let mut form = valid_form();
        form.guests = "11".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.guests, Some(FieldError::GuestsTooMany));

        form.guests = "0".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.guests, Some(FieldError::GuestsTooFew));

        form.guests = "ten".to_string();
        let errors = validate(&form, now()).unwrap_err();
        assert_eq!(errors.guests, Some(FieldError::GuestsUnparseable));

        form.guests = "10".to_string();
        assert_eq!(validate(&form, now()).unwrap().guests, 10);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let form = ReservationForm::default();
        let errors = validate(&form, now()).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.date.is_some());
        assert!(errors.guests.is_some());
    }

    #[test]
    fn test_notes_are_optional_free_text() {
        let mut form = valid_form();
        form.notes = "  window seat, one high chair  ".to_string();
        let reservation = validate(&form, now()).unwrap();
        assert_eq!(
            reservation.notes.as_deref(),
            Some("window seat, one high chair")
        );
    }

    #[test]
    fn test_error_messages_are_field_level() {
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::DateNotInFuture.to_string(),
            "Reservation date must be in the future"
        );
        assert_eq!(
            FieldError::GuestsTooMany.to_string(),
            "Max 10 guests for online booking"
        );
    }
}
