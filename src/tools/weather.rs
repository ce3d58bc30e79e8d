//! Dummy weather lookup.

use rand::seq::SliceRandom;

/// A fixed condition/temperature pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub condition: &'static str,
    pub temp_c: i32,
}

/// The three conditions the stub can report.
pub const CONDITIONS: [WeatherCondition; 3] = [
    WeatherCondition { condition: "Rainy", temp_c: 15 },
    WeatherCondition { condition: "Clear", temp_c: 25 },
    WeatherCondition { condition: "Windy", temp_c: 20 },
];

/// Report dummy weather for a location: a uniformly-random pick from the
/// three fixed pairs.
pub fn dummy_weather(location: &str) -> String {
    let picked = CONDITIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CONDITIONS[0]);

    format_weather(location, picked)
}

fn format_weather(location: &str, weather: WeatherCondition) -> String {
    format!(
        "Weather in {}: {}, {}°C",
        location, weather.condition, weather.temp_c
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_one_of_three_conditions() {
        let expected: Vec<String> = CONDITIONS
            .iter()
            .map(|w| format_weather("Gotham", *w))
            .collect();

        for _ in 0..50 {
            let report = dummy_weather("Gotham");
            assert!(expected.contains(&report), "unexpected report: {report}");
        }
    }

    #[test]
    fn test_report_names_the_location() {
        let report = dummy_weather("Wayne Manor");
        assert!(report.starts_with("Weather in Wayne Manor: "));
    }
}
