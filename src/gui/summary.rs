use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use super::Message;
use crate::result::RangeResult;

pub struct SummaryHeaderStyle;

impl container::StyleSheet for SummaryHeaderStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(iced::Color::from_rgb(0.9, 0.9, 0.9).into()),
            ..Default::default()
        }
    }
}

/// text shown for the weekend dates of a result
pub fn weekends_line(result: &RangeResult) -> String {
    let weekends = result.iso_weekends();
    if weekends.is_empty() {
        "none".to_string()
    } else {
        weekends.join(", ")
    }
}

/// Create the view of the last emitted range
pub fn create_summary_view<'a>(result: Option<&RangeResult>) -> Element<'a, Message> {
    let Some(result) = result else {
        return text("Pick a start and an end date").size(12).into();
    };

    let [start, end] = result.iso_pair();

    let header = container(text("Selection").size(14))
        .padding(3)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(SummaryHeaderStyle)));

    column![
        header,
        row![
            text("Range:").size(12).width(Length::FillPortion(1)),
            text(format!("{start} to {end}"))
                .size(12)
                .width(Length::FillPortion(4))
                .style(iced::Color::from_rgb(0.23, 0.51, 0.96)),
        ]
        .padding(3),
        row![
            text("Weekends:").size(12).width(Length::FillPortion(1)),
            text(weekends_line(result))
                .size(12)
                .width(Length::FillPortion(4))
                .style(iced::Color::from_rgb(0.23, 0.51, 0.96)),
        ]
        .padding(3),
    ]
    .spacing(1)
    .into()
}
