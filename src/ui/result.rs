/// Classification result view
///
/// A pure rendering of one `ClassificationResult`: a category chip, a quality
/// chip with a 1-5 star rating, and the filename. The lookup tables below are
/// keyed by the lowercased label; anything unknown falls back to grey / 1 star.
use chrono::{DateTime, Local};
use iced::widget::{column, container, text, Row};
use iced::{Alignment, Border, Element, Theme};

use crate::state::data::ClassificationResult;
use crate::theme::{HexColor, Palette, Swatch};

/// Number of stars in the rating row
pub const MAX_RATING: u8 = 5;

/// "data_scientist" -> "DATA SCIENTIST"
pub fn category_label(category: &str) -> String {
    category.replace('_', " ").to_uppercase()
}

pub fn quality_label(quality: &str) -> String {
    quality.to_uppercase()
}

pub fn category_swatch(category: &str) -> Swatch {
    match category.to_lowercase().as_str() {
        "software_engineer" => Swatch::Blue,
        "data_scientist" => Swatch::Green,
        "product_manager" => Swatch::Red,
        _ => Swatch::Grey,
    }
}

pub fn quality_swatch(quality: &str) -> Swatch {
    match quality.to_lowercase().as_str() {
        "best" => Swatch::Green,
        "good" => Swatch::Blue,
        "average" => Swatch::Orange,
        "poor" => Swatch::Red,
        _ => Swatch::Grey,
    }
}

/// Stars shown for a quality tier
pub fn quality_rating(quality: &str) -> u8 {
    match quality.to_lowercase().as_str() {
        "best" => 5,
        "good" => 4,
        "average" => 3,
        "poor" => 2,
        _ => 1,
    }
}

/// Build the result panel
pub fn view<'a, Message: 'a>(
    result: &'a ClassificationResult,
    completed_at: Option<DateTime<Local>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let category = chip(
        format!("💼 {}", category_label(&result.category)),
        palette.swatch(category_swatch(&result.category)),
        palette.chip_text,
    );

    let quality = chip(
        format!("📊 {}", quality_label(&result.quality)),
        palette.swatch(quality_swatch(&result.quality)),
        palette.chip_text,
    );

    let rating = quality_rating(&result.quality);
    let stars = Row::with_children((1..=MAX_RATING).map(|i| {
        let color = if i <= rating { palette.star } else { palette.grey };
        text("★").size(32).color(color.color()).into()
    }))
    .spacing(4);

    let mut content = column![
        text("Classification Result").size(22),
        category,
        text("Resume Quality").size(16),
        quality,
        stars,
        text(format!("File: {}", result.filename))
            .size(14)
            .color(palette.grey.color()),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if let Some(at) = completed_at {
        content = content.push(
            text(format!("Classified at {}", at.format("%H:%M:%S")))
                .size(12)
                .color(palette.grey.color()),
        );
    }

    container(content).padding([24, 0]).into()
}

/// Rounded colored label
fn chip<'a, Message: 'a>(label: String, background: HexColor, foreground: HexColor) -> Element<'a, Message> {
    container(text(label).size(18).color(foreground.color()))
        .padding([8, 20])
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.color().into()),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_rating() {
        assert_eq!(quality_rating("best"), 5);
        assert_eq!(quality_rating("good"), 4);
        assert_eq!(quality_rating("average"), 3);
        assert_eq!(quality_rating("poor"), 2);
        assert_eq!(quality_rating("excellent"), 1);
        assert_eq!(quality_rating(""), 1);
    }

    #[test]
    fn test_lookups_ignore_case() {
        assert_eq!(quality_rating("BEST"), 5);
        assert_eq!(quality_swatch("Average"), Swatch::Orange);
        assert_eq!(category_swatch("Software_Engineer"), Swatch::Blue);
    }

    #[test]
    fn test_quality_colors() {
        let palette = Palette::default();
        let hex = |q: &str| palette.swatch(quality_swatch(q)).to_hex();

        assert_eq!(hex("best"), "#4caf50");
        assert_eq!(hex("good"), "#2196f3");
        assert_eq!(hex("average"), "#ff9800");
        assert_eq!(hex("poor"), "#f44336");
        assert_eq!(hex("mediocre"), "#757575");
    }

    #[test]
    fn test_category_colors() {
        let palette = Palette::default();
        let hex = |c: &str| palette.swatch(category_swatch(c)).to_hex();

        assert_eq!(hex("software_engineer"), "#2196f3");
        assert_eq!(hex("data_scientist"), "#4caf50");
        assert_eq!(hex("product_manager"), "#f44336");
        assert_eq!(hex("designer"), "#757575");
    }

    #[test]
    fn test_labels() {
        assert_eq!(category_label("data_scientist"), "DATA SCIENTIST");
        assert_eq!(category_label("senior_software_engineer"), "SENIOR SOFTWARE ENGINEER");
        assert_eq!(quality_label("average"), "AVERAGE");
    }
}
