//! Local validation run before any network call.

use crate::models::{EditInput, FormInput};

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_END_NOT_AFTER_START: &str = "End time must be later than start time";
pub const MSG_BAD_TIME_FORMAT: &str = "Invalid time format (HH:MM)";

/// Validate the create form. Times come from `<input type="time">` controls,
/// so only presence and ordering are checked here.
pub fn validate_form(form: &FormInput) -> Result<(), &'static str> {
    if form.start_time.is_empty() || form.end_time.is_empty() || form.description.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    // Fixed-width zero-padded HH:MM, so lexicographic order is time order.
    if form.start_time >= form.end_time {
        return Err(MSG_END_NOT_AFTER_START);
    }
    Ok(())
}

/// Validate an edit. Values were typed free-form, so the time shape is
/// checked as well.
pub fn validate_edit(input: &EditInput) -> Result<(), &'static str> {
    if input.start_time.is_empty() || input.end_time.is_empty() || input.description.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    if !is_valid_time(&input.start_time) || !is_valid_time(&input.end_time) {
        return Err(MSG_BAD_TIME_FORMAT);
    }
    if input.start_time >= input.end_time {
        return Err(MSG_END_NOT_AFTER_START);
    }
    Ok(())
}

/// `HH:MM` with a one- or two-digit hour 0-23 and two-digit minute 00-59.
pub fn is_valid_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return false;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let hour: u8 = match hours.parse() {
        Ok(h) => h,
        Err(_) => return false,
    };
    let minute: u8 = match minutes.parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    hour <= 23 && minute <= 59
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_shape_accepts_valid_hours() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("9:05"));
        assert!(is_valid_time("19:59"));
        assert!(is_valid_time("23:59"));
    }

    #[test]
    fn time_shape_rejects_out_of_range_and_garbage() {
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("25:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("12:5"));
        assert!(!is_valid_time("1230"));
        assert!(!is_valid_time(""));
        assert!(!is_valid_time("ab:cd"));
    }

    #[test]
    fn form_requires_all_fields_and_ordered_times() {
        let mut form = FormInput {
            date: "2026-08-23".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:30".to_string(),
            description: "standup".to_string(),
            location: "Office".to_string(),
        };
        assert!(validate_form(&form).is_ok());

        form.description.clear();
        assert_eq!(validate_form(&form), Err(MSG_MISSING_FIELDS));

        form.description = "standup".to_string();
        form.end_time = "09:00".to_string();
        assert_eq!(validate_form(&form), Err(MSG_END_NOT_AFTER_START));
    }

    #[test]
    fn edit_rejects_malformed_times() {
        let input = EditInput {
            start_time: "25:00".to_string(),
            end_time: "26:00".to_string(),
            description: "late".to_string(),
        };
        assert_eq!(validate_edit(&input), Err(MSG_BAD_TIME_FORMAT));
    }
}
