use iced::widget::{text_editor, Button, Column, Container, Row, Scrollable, Space, Text, TextEditor};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::{AssistantState, Status};
use crate::client::models::messages::Message;

// Palette lifted from the pitch-green / kit-yellow look of the assistant
const BG_MAIN: Color = Color::from_rgb(0.04, 0.18, 0.10); // Deep pitch green
const CARD_BG: Color = Color::from_rgb(0.10, 0.24, 0.16); // Lighter card body
const INPUT_BG: Color = Color::from_rgb(0.06, 0.15, 0.09); // Editor background
const ACCENT_COLOR: Color = Color::from_rgb(1.0, 0.81, 0.0); // Kit yellow
const ERROR_COLOR: Color = Color::from_rgb(0.97, 0.44, 0.44);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.75, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Label and hourglass for the inactive submit button. The hourglass
/// accompanies the in-flight state only, not a merely blank question.
fn submit_indicator(loading: bool) -> (bool, &'static str) {
    if loading {
        (true, "Analyzing...")
    } else {
        (false, "Generate Tactical Report")
    }
}

pub fn view<'a>(state: &'a AssistantState, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let loading = state.status == Status::Loading;
    let submit_enabled = !state.question.trim().is_empty() && !loading;

    // Title block
    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("⚽").font(EMOJI_FONT).size(36))
        .push(
            Text::new("Pakistan Tactical Analysis Assistant")
                .size(32)
                .font(BOLD_FONT)
                .style(ACCENT_COLOR),
        );

    // Question editor with the hint shown above it (TextEditor has no placeholder)
    let question_field = Column::new()
        .spacing(8)
        .push(
            Text::new("Ask your tactical question... e.g., How should Pakistan defend Myanmar's wide play?")
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .push(
            Container::new(
                TextEditor::new(editor)
                    .on_action(Message::QuestionEdited)
                    .height(Length::Fixed(120.0))
                    .padding(12),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Submit button, disabled (no on_press) while a request is in flight
    // or the question is blank
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Text::new("Generate Tactical Report")
                    .font(BOLD_FONT)
                    .size(16)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitQuestion)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    } else {
        let (busy, label) = submit_indicator(loading);
        let mut label_row = Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .width(Length::Shrink);
        if busy {
            label_row = label_row.push(Text::new("⏳").font(EMOJI_FONT).size(16));
        }
        label_row = label_row.push(Text::new(label).size(16).style(TEXT_SECONDARY));
        Button::new(Container::new(label_row).width(Length::Fill).center_x())
            .style(iced::theme::Button::Secondary)
            .width(Length::Fill)
            .padding(14)
    };

    let card = Container::new(
        Column::new()
            .spacing(16)
            .padding(24)
            .push(question_field)
            .push(submit_button),
    )
    .width(Length::Fixed(640.0))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    // Error banner, only while the last submission failed
    let error_banner: Element<Message> = if !state.error_message.is_empty() {
        Container::new(
            Text::new(&state.error_message)
                .size(16)
                .font(BOLD_FONT)
                .style(ERROR_COLOR),
        )
        .width(Length::Fixed(640.0))
        .padding([12, 0, 0, 0])
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Report panel, only once an answer arrived; line breaks are preserved
    let report_panel: Element<Message> = if !state.answer.is_empty() {
        Container::new(
            Column::new()
                .spacing(12)
                .push(
                    Row::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new("🧠").font(EMOJI_FONT).size(20))
                        .push(
                            Text::new("Tactical Report")
                                .size(20)
                                .font(BOLD_FONT)
                                .style(ACCENT_COLOR),
                        ),
                )
                .push(
                    Scrollable::new(Text::new(&state.answer).size(15).style(TEXT_PRIMARY))
                        .height(Length::Fixed(260.0)),
                )
                .padding(24),
        )
        .width(Length::Fixed(720.0))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let footer = Text::new("© 2025 Pakistan Tactical AI – Powered by GPT-4o")
        .size(13)
        .style(TEXT_SECONDARY);

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(20)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fill, Length::Fixed(32.0)))
        .push(title)
        .push(card)
        .push(error_banner)
        .push(report_panel)
        .push(Space::new(Length::Fill, Length::Fill))
        .push(footer)
        .push(Space::new(Length::Fill, Length::Fixed(16.0)));

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourglass_only_while_analyzing() {
        assert_eq!(submit_indicator(true), (true, "Analyzing..."));
        // blank-question idle state keeps the plain label, no hourglass
        assert_eq!(submit_indicator(false), (false, "Generate Tactical Report"));
    }
}
