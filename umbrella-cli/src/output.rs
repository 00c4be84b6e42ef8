use umbrella_core::UmbrellaDays;

/// Sentence printed for the selected days.
pub fn umbrella_message(days: &UmbrellaDays, city: &str) -> String {
    match days.names().as_slice() {
        [] => format!("No umbrella needed for the next five days! {city} is a hot and dry city!"),
        [only] => format!("You should take an umbrella only on {only}"),
        [init @ .., last] => {
            format!("You should take an umbrella in these days: {} and {last}.", init.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use umbrella_core::{HumidityByWeekday, select_umbrella_days};

    // 2023-01-05 is a Thursday, so the window is friday..tuesday
    fn days_with(humid: &[chrono::Weekday]) -> UmbrellaDays {
        let mut humidity = HumidityByWeekday::new();
        for day in [
            chrono::Weekday::Fri,
            chrono::Weekday::Sat,
            chrono::Weekday::Sun,
            chrono::Weekday::Mon,
            chrono::Weekday::Tue,
        ] {
            humidity.push(day, if humid.contains(&day) { 90 } else { 10 });
        }
        select_umbrella_days(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(), &humidity)
    }

    #[test]
    fn no_days() {
        assert_eq!(
            umbrella_message(&days_with(&[]), "Ribeirao Preto"),
            "No umbrella needed for the next five days! Ribeirao Preto is a hot and dry city!"
        );
    }

    #[test]
    fn single_day() {
        assert_eq!(
            umbrella_message(&days_with(&[chrono::Weekday::Sun]), "x"),
            "You should take an umbrella only on sunday"
        );
    }

    #[test]
    fn two_days() {
        let days = days_with(&[chrono::Weekday::Fri, chrono::Weekday::Tue]);
        assert_eq!(
            umbrella_message(&days, "x"),
            "You should take an umbrella in these days: friday and tuesday."
        );
    }

    #[test]
    fn three_days() {
        let days = days_with(&[chrono::Weekday::Sat, chrono::Weekday::Sun, chrono::Weekday::Mon]);
        assert_eq!(
            umbrella_message(&days, "x"),
            "You should take an umbrella in these days: saturday, sunday and monday."
        );
    }
}
