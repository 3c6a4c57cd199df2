use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Element, Length, Theme};

use super::Message;
use crate::calendar::WEEKDAY_NAMES;
use crate::dates::is_business_day;
use crate::picker::DatePicker;

/// how a date cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// start or end of the selection
    Endpoint,
    /// inside the committed or previewed range
    InRange,
    /// Saturday or Sunday, not clickable
    Weekend,
    /// padding from the previous or next month
    OutsideMonth,
    Normal,
}

impl DayKind {
    /// weekends are never highlighted, even inside a range
    pub fn classify(picker: &DatePicker, date: &NaiveDate) -> Self {
        if !is_business_day(date) {
            DayKind::Weekend
        } else if picker.is_endpoint(date) {
            DayKind::Endpoint
        } else if picker.is_in_range(date) {
            DayKind::InRange
        } else if !picker.is_in_visible_month(date) {
            DayKind::OutsideMonth
        } else {
            DayKind::Normal
        }
    }
}

/// Create the calendar grid: one header row and six weeks of dates
pub fn create_calendar_grid<'a>(picker: &DatePicker) -> Element<'a, Message> {
    let mut rows = Vec::new();

    let mut header_row = row![];
    for name in WEEKDAY_NAMES {
        header_row = header_row.push(
            container(
                text(name)
                    .size(12)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .padding(3)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(HeaderStyle))),
        );
    }
    rows.push(header_row.into());

    for week in picker.grid().chunks(7) {
        let mut week_row = row![].spacing(2);

        for date in week {
            let kind = DayKind::classify(picker, date);

            let mut cell = button(
                text(date.day())
                    .size(14)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(6)
            .style(iced::theme::Button::Custom(Box::new(DayCellStyle(kind))));

            // weekends stay disabled
            if kind != DayKind::Weekend {
                cell = cell.on_press(Message::DateClicked(*date));
            }

            week_row = week_row.push(
                mouse_area(cell)
                    .on_enter(Message::MouseEntered(*date))
                    .on_exit(Message::MouseLeft),
            );
        }

        rows.push(week_row.into());
    }

    column(rows).spacing(2).into()
}

// Custom style for the weekday header
pub struct HeaderStyle;

impl container::StyleSheet for HeaderStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(iced::Color::from_rgb(0.95, 0.95, 0.95).into()),
            text_color: Some(iced::Color::from_rgb(0.3, 0.3, 0.3)),
            ..Default::default()
        }
    }
}

// Custom style for date cells
pub struct DayCellStyle(pub DayKind);

impl DayCellStyle {
    fn colors(&self) -> (iced::Color, iced::Color) {
        match self.0 {
            DayKind::Endpoint => (
                iced::Color::from_rgb(0.23, 0.51, 0.96),
                iced::Color::WHITE,
            ),
            DayKind::InRange => (
                iced::Color::from_rgb(0.94, 0.96, 1.0),
                iced::Color::BLACK,
            ),
            DayKind::Weekend => (
                iced::Color::TRANSPARENT,
                iced::Color::from_rgb(0.82, 0.84, 0.86),
            ),
            DayKind::OutsideMonth => (
                iced::Color::TRANSPARENT,
                iced::Color::from_rgb(0.61, 0.64, 0.69),
            ),
            DayKind::Normal => (iced::Color::TRANSPARENT, iced::Color::BLACK),
        }
    }
}

impl button::StyleSheet for DayCellStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, text_color) = self.colors();
        button::Appearance {
            background: Some(background.into()),
            text_color,
            border: iced::Border {
                radius: 4.0.into(),
                width: 0.0,
                color: iced::Color::TRANSPARENT,
            },
            shadow_offset: iced::Vector::default(),
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        match self.0 {
            DayKind::Endpoint => button::Appearance {
                background: Some(iced::Color::from_rgb(0.15, 0.39, 0.92).into()),
                ..active
            },
            DayKind::Weekend => active,
            _ => button::Appearance {
                background: Some(iced::Color::from_rgb(0.98, 0.98, 0.98).into()),
                ..active
            },
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}
