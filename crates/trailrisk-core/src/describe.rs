pub fn terrain_description(risk: f64) -> &'static str {
    if risk < 3.0 {
        "Easy"
    } else if risk < 5.0 {
        "Moderate"
    } else if risk < 7.0 {
        "Difficult"
    } else {
        "Extreme"
    }
}

pub fn weather_description(risk: f64) -> &'static str {
    if risk < 2.0 {
        "Favorable"
    } else if risk < 4.0 {
        "Fair"
    } else if risk < 6.0 {
        "Concerning"
    } else {
        "Dangerous"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_their_bands() {
        assert_eq!(terrain_description(2.9), "Easy");
        assert_eq!(terrain_description(6.2), "Difficult");
        assert_eq!(terrain_description(9.5), "Extreme");
        assert_eq!(weather_description(0.35), "Favorable");
        assert_eq!(weather_description(4.0), "Concerning");
        assert_eq!(weather_description(9.5), "Dangerous");
    }
}
