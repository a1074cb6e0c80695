/// Formats an hour-of-day as a 12-hour label with AM/PM suffix.
///
/// The numeral cycles `((h - 1) mod 12) + 1` and the AM/PM boundary is
/// `h < 12`, so 12 and 24 both render as "12 PM". The rest of the UI
/// relies on this exact boundary rule for label consistency.
pub fn fmt_hour(hour: u8) -> String {
    let numeral = ((hour as i32 - 1).rem_euclid(12)) + 1;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{numeral} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_hours() {
        assert_eq!(fmt_hour(1), "1 AM");
        assert_eq!(fmt_hour(7), "7 AM");
        assert_eq!(fmt_hour(11), "11 AM");
    }

    #[test]
    fn noon_is_pm() {
        assert_eq!(fmt_hour(12), "12 PM");
    }

    #[test]
    fn afternoon_hours_wrap_the_numeral() {
        assert_eq!(fmt_hour(13), "1 PM");
        assert_eq!(fmt_hour(23), "11 PM");
    }

    #[test]
    fn hour_24_renders_as_12_pm() {
        assert_eq!(fmt_hour(24), "12 PM");
    }

    #[test]
    fn numerals_cycle_through_the_full_day() {
        let numerals: Vec<String> = (1..=24)
            .map(|h| fmt_hour(h).split(' ').next().unwrap().to_string())
            .collect();
        let expected: Vec<String> = (0..24)
            .map(|i| ((i % 12) + 1).to_string())
            .collect();
        assert_eq!(numerals, expected);
        for h in 1..12 {
            assert!(fmt_hour(h).ends_with("AM"));
        }
        for h in 12..=24 {
            assert!(fmt_hour(h).ends_with("PM"));
        }
    }
}
