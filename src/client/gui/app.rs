use iced::widget::text_editor;
use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::models::app_state::AssistantState;
use crate::client::models::messages::Message;
use crate::client::services::analysis_service::AnalysisService;

pub struct AssistantApp {
    pub state: AssistantState,
    /// Editor buffer for the question; its text is mirrored into the state
    /// on every edit so submission reads plain state.
    pub editor: text_editor::Content,
    pub service: Arc<AnalysisService>,
}

impl Application for AssistantApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let cfg = ClientConfig::from_env();
        if cfg.api_base_url.is_none() {
            log::warn!("API_BASE_URL is not set; submissions will fail until it is configured");
        }
        let app = AssistantApp {
            state: AssistantState::default(),
            editor: text_editor::Content::new(),
            service: Arc::new(AnalysisService::new(cfg.api_base_url)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Pakistan Tactical Analysis Assistant".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::QuestionEdited(action) => {
                self.editor.perform(action);
                self.state.set_question(self.editor.text());
                Command::none()
            }
            Message::SubmitQuestion => {
                // blank question or a request already in flight: nothing to do
                if !self.state.begin_submission() {
                    return Command::none();
                }
                let service = self.service.clone();
                let question = self.state.question.clone();
                Command::perform(
                    async move {
                        service
                            .analyze(&question)
                            .await
                            .map_err(|e| format!("{:#}", e))
                    },
                    Message::AnalysisResult,
                )
            }
            Message::AnalysisResult(Ok(answer)) => {
                self.state.apply_answer(answer);
                Command::none()
            }
            Message::AnalysisResult(Err(cause)) => {
                // full cause goes to the log only; the user sees one fixed message
                log::error!("analyze request failed: {}", cause);
                self.state.apply_failure();
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::analysis::view(&self.state, &self.editor)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
