use iced::Application;
fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    tattica::client::gui::app::AssistantApp::run(iced::Settings::default())
}
