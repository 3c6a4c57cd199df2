use chrono::NaiveDate;
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Application, Command, Element, Length, Theme, executor};
use std::fmt;
use std::path::Path;
use tracing::warn;

use crate::calendar::MONTH_NAMES;
use crate::config::Config;
use crate::csv::result_to_csv;
use crate::picker::PickerEvent;

use super::grid;
use super::state::AppState;
use super::summary;
use super::utils;

/// Entry of the month selector, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthChoice(pub u32);

impl MonthChoice {
    pub fn all() -> Vec<MonthChoice> {
        (0..12).map(MonthChoice).collect()
    }
}

impl fmt::Display for MonthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MONTH_NAMES.get(self.0 as usize).copied().unwrap_or("?"))
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    DateClicked(NaiveDate),
    MouseEntered(NaiveDate),
    MouseLeft,
    PreviousMonth,
    NextMonth,
    MonthSelected(MonthChoice),
    YearSelected(i32),
    PredefinedRangeSelected(usize),
    ClearSelection,
    SaveResult,
    Error(String),
    CheckMessageExpiry,
    ShowSuccessMessage(String),
}

/// Main application
pub struct WeekdayPickerApp {
    state: AppState,
}

impl Application for WeekdayPickerApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Message>) {
        (
            Self {
                state: AppState::new(config),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Weekday Picker")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::DateClicked(date) => {
                self.state.handle_event(PickerEvent::ClickDate(date));
                Command::none()
            }
            Message::MouseEntered(date) => {
                self.state.handle_event(PickerEvent::HoverDate(Some(date)));
                Command::none()
            }
            Message::MouseLeft => {
                self.state.handle_event(PickerEvent::HoverDate(None));
                Command::none()
            }
            Message::PreviousMonth => {
                self.state.handle_event(PickerEvent::NavigateMonth(-1));
                Command::none()
            }
            Message::NextMonth => {
                self.state.handle_event(PickerEvent::NavigateMonth(1));
                Command::none()
            }
            Message::MonthSelected(MonthChoice(month)) => {
                self.state.handle_event(PickerEvent::SetMonth(month));
                Command::none()
            }
            Message::YearSelected(year) => {
                self.state.handle_event(PickerEvent::SetYear(year));
                Command::none()
            }
            Message::PredefinedRangeSelected(index) => {
                self.state
                    .handle_event(PickerEvent::ApplyPredefinedRange(index));
                Command::none()
            }
            Message::ClearSelection => {
                self.state.picker.clear();
                self.state.last_result = None;
                Command::none()
            }
            Message::SaveResult => {
                let Some(result) = &self.state.last_result else {
                    self.state.error = Some("No range to save".to_string());
                    return Command::none();
                };

                match result_to_csv(result) {
                    Ok(csv_content) => {
                        let filename = utils::generate_filename(Path::new("."), result);
                        Command::perform(
                            utils::save_file(filename, csv_content),
                            |result| match result {
                                Ok(filename) => Message::ShowSuccessMessage(format!(
                                    "Weekends saved to {filename}"
                                )),
                                Err(e) => Message::Error(e),
                            },
                        )
                    }
                    Err(e) => {
                        self.state.error = Some(format!("Failed to create CSV: {e}"));
                        Command::none()
                    }
                }
            }
            Message::ShowSuccessMessage(message) => {
                self.state.success_message = Some(message);
                self.state.success_message_expires_at =
                    Some(std::time::Instant::now() + std::time::Duration::from_secs(3));

                // Schedule a check after 3 seconds
                Command::perform(
                    async {
                        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                        Message::CheckMessageExpiry
                    },
                    |msg| msg,
                )
            }
            Message::CheckMessageExpiry => {
                if let Some(expires_at) = self.state.success_message_expires_at
                    && std::time::Instant::now() >= expires_at
                {
                    self.state.success_message = None;
                    self.state.success_message_expires_at = None;
                }
                Command::none()
            }
            Message::Error(e) => {
                warn!(error = %e, "showing error");
                self.state.error = Some(e);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let title = text("Weekday Picker").size(24);
        let visible = self.state.picker.visible();

        let navigation = row![
            button(text("<").size(14)).on_press(Message::PreviousMonth),
            pick_list(
                MonthChoice::all(),
                Some(MonthChoice(visible.month())),
                Message::MonthSelected
            )
            .width(Length::Fill),
            pick_list(
                self.state.year_options(),
                Some(visible.year()),
                Message::YearSelected
            )
            .width(Length::Fill),
            button(text(">").size(14)).on_press(Message::NextMonth),
        ]
        .spacing(5);

        let mut presets = row![].spacing(5);
        for (index, label) in self.state.picker.presets().labels().into_iter().enumerate() {
            presets = presets.push(
                button(text(label).size(12))
                    .style(iced::theme::Button::Secondary)
                    .on_press(Message::PredefinedRangeSelected(index)),
            );
        }

        let clear_button =
            button(text("Clear").size(14)).on_press(Message::ClearSelection);
        let save_button = if self.state.last_result.is_some() {
            button(text("Save").size(14)).on_press(Message::SaveResult)
        } else {
            button(text("Save").size(14)).style(iced::theme::Button::Secondary)
        };

        let mut content = column![
            title,
            navigation,
            grid::create_calendar_grid(&self.state.picker),
            presets,
            row![clear_button, save_button].spacing(5),
        ]
        .spacing(15)
        .padding(15)
        .max_width(480);

        // Display error if any
        if let Some(error) = &self.state.error {
            content = content.push(
                text(format!("Error: {}", error))
                    .size(12)
                    .style(iced::Color::from_rgb(0.8, 0.0, 0.0)),
            );
        }

        // Display success message if any
        if let Some(message) = &self.state.success_message {
            content = content.push(
                text(message)
                    .size(12)
                    .style(iced::Color::from_rgb(0.0, 0.6, 0.0)),
            );
        }

        content = content.push(summary::create_summary_view(
            self.state.last_result.as_ref(),
        ));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }
}
