use crate::bmi::Category;

/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // Nutrition lookup
    pub const NUTRITION_ENDPOINT: &'static str =
        "https://world.openfoodfacts.org/api/v0/product/737628064502.json";
    pub const CONNECTION_TIMEOUT_SECS: u64 = 5;
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    pub const USER_AGENT: &'static str = concat!("bmi-evaluator/", env!("CARGO_PKG_VERSION"));

    // Logging
    pub const DEFAULT_LOG_FILTER: &'static str = "bmi_evaluator=warn";
    pub const VERBOSE_LOG_FILTER: &'static str = "bmi_evaluator=debug";

    // Interactive mode
    pub const QUIT_COMMANDS: [&'static str; 3] = ["q", "quit", "exit"];

    // Exit codes
    pub const EXIT_INVALID_INPUT: i32 = 2;
    pub const EXIT_FAILURE: i32 = 1;
}

/// UI Theme configuration
pub struct ThemeConfig;

impl ThemeConfig {
    pub fn category_color(category: Category) -> crossterm::style::Color {
        use crossterm::style::Color;

        match category {
            Category::Underweight => Color::Yellow,
            Category::Normal => Color::Green,
            Category::Overweight => Color::DarkYellow,
            Category::Obese => Color::Red,
        }
    }

    pub fn title_color() -> crossterm::style::Color {
        crossterm::style::Color::Cyan
    }

    pub fn muted_color() -> crossterm::style::Color {
        crossterm::style::Color::DarkGrey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn test_category_colors_are_distinct() {
        let colors: Vec<Color> = Category::ALL
            .iter()
            .map(|c| ThemeConfig::category_color(*c))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_endpoint_is_fixed_product() {
        assert!(AppConfig::NUTRITION_ENDPOINT.starts_with("https://"));
        assert!(AppConfig::NUTRITION_ENDPOINT.ends_with("/737628064502.json"));
    }
}
