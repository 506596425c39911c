//! Conversions between 24-hour (`HH:MM`) and 12-hour (`hh:mm AM/PM`) text.
//!
//! Both functions run against raw displayed text that may already be
//! malformed, so anything unparsable is returned unchanged instead of
//! failing.

/// `"13:45"` -> `"01:45 PM"`. Minutes are preserved verbatim.
pub fn to_12_hour(time24: &str) -> String {
    let Some((hours, minutes)) = time24.split_once(':') else {
        return time24.to_string();
    };
    let Ok(hour) = hours.parse::<u32>() else {
        return time24.to_string();
    };
    if hour > 23 {
        return time24.to_string();
    }

    let period = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minutes} {period}")
}

/// `"01:45 PM"` -> `"13:45"`. Minutes are preserved verbatim.
pub fn to_24_hour(time12: &str) -> String {
    let Some((time, period)) = time12.split_once(' ') else {
        return time12.to_string();
    };
    let Some((hours, minutes)) = time.split_once(':') else {
        return time12.to_string();
    };
    let Ok(mut hour) = hours.parse::<u32>() else {
        return time12.to_string();
    };
    if hour > 12 {
        return time12.to_string();
    }

    match period {
        "PM" if hour != 12 => hour += 12,
        "AM" if hour == 12 => hour = 0,
        "AM" | "PM" => {}
        _ => return time12.to_string(),
    }

    format!("{hour:02}:{minutes}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_and_noon_map_to_twelve() {
        assert_eq!(to_12_hour("00:00"), "12:00 AM");
        assert_eq!(to_12_hour("12:00"), "12:00 PM");
        assert_eq!(to_12_hour("23:59"), "11:59 PM");
    }

    #[test]
    fn twelve_hour_back_to_twenty_four() {
        assert_eq!(to_24_hour("12:00 AM"), "00:00");
        assert_eq!(to_24_hour("12:00 PM"), "12:00");
        assert_eq!(to_24_hour("01:30 PM"), "13:30");
    }

    #[test]
    fn morning_hours_are_zero_padded() {
        assert_eq!(to_12_hour("09:15"), "09:15 AM");
        assert_eq!(to_24_hour("09:15 AM"), "09:15");
    }

    #[test]
    fn round_trip_holds_for_every_valid_time() {
        for hour in 0..24 {
            for minute in [0, 1, 30, 59] {
                let time = format!("{hour:02}:{minute:02}");
                assert_eq!(to_24_hour(&to_12_hour(&time)), time, "via {time}");
            }
        }
    }

    #[test]
    fn malformed_input_passes_through_unchanged() {
        assert_eq!(to_12_hour(""), "");
        assert_eq!(to_12_hour("noon"), "noon");
        assert_eq!(to_12_hour("25:00"), "25:00");
        assert_eq!(to_24_hour(""), "");
        assert_eq!(to_24_hour("13:30"), "13:30");
        assert_eq!(to_24_hour("01:30 XM"), "01:30 XM");
    }
}
