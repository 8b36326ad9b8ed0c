use iced::widget::text_editor;

#[derive(Debug, Clone)]
pub enum Message {
    /// Edits to the question editor (typing, selection, paste).
    QuestionEdited(text_editor::Action),
    SubmitQuestion,
    /// Settled analysis exchange. The failure cause is stringified here so
    /// the message stays `Clone`; it is logged, never shown to the user.
    AnalysisResult(Result<Option<String>, String>),
}
