//! Desktop front-end: renders the backend's frames, shows the status and
//! last-move lines, and feeds arrow-key presses through the input mapper
//! into the session controller.

use crate::backend::HttpBackend;
use crate::error::Error;
use crate::input::{ArrowKey, InputMapper};
use crate::session::{Session, SessionConfig, Update};
use base64::prelude::*;
use iced::executor;
use iced::keyboard::{self, key};
use iced::theme::{self, Theme};
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Application, Command, Element, Length, Settings, Subscription};

pub type Result = iced::Result;

pub struct ArcadeFlags {
    pub title: String,
    pub api_url: String,
    pub config: SessionConfig,
    pub mapper: InputMapper,
}

pub struct ArcadeApp {
    title: String,
    session: Session<HttpBackend>,
    mapper: InputMapper,
    frame: Option<image::Handle>,
    status: String,
    last_move: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Restart,
    Key(ArrowKey),
}

impl Application for ArcadeApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = ArcadeFlags;

    fn new(flags: ArcadeFlags) -> (Self, Command<Message>) {
        let backend = HttpBackend::new(&flags.api_url);

        (
            Self {
                title: flags.title,
                session: Session::new(backend, flags.config),
                mapper: flags.mapper,
                frame: None,
                status: "Press Start to play.".to_string(),
                last_move: String::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        format!("Gym Arcade - {}", self.title)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Start => {
                let outcome = self.session.start();
                self.apply(outcome, describe_reset_failure);
            }
            Message::Restart => {
                let outcome = self.session.restart().map(Some);
                self.apply(outcome, describe_reset_failure);
            }
            Message::Key(key) => {
                let action = self.mapper.action_for(key);
                let outcome = self.session.submit_action(action);
                self.apply(outcome, describe_step_failure);
            }
        }

        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|k, _modifiers| {
            let key = match k {
                keyboard::Key::Named(key::Named::ArrowLeft) => ArrowKey::Left,
                keyboard::Key::Named(key::Named::ArrowDown) => ArrowKey::Down,
                keyboard::Key::Named(key::Named::ArrowRight) => ArrowKey::Right,
                keyboard::Key::Named(key::Named::ArrowUp) => ArrowKey::Up,
                _ => return None,
            };

            Some(Message::Key(key))
        })
    }

    fn view(&self) -> Element<Message> {
        let canvas: Element<Message> = match &self.frame {
            Some(handle) => image::Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("No frame yet.").size(20).into(),
        };

        let content = column![
            container(canvas)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
            text(&self.status).size(18),
            text(&self.last_move).size(16),
            Self::view_controls(self.session.is_running()),
        ]
        .align_items(Alignment::Center)
        .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl ArcadeApp {
    pub fn run(flags: ArcadeFlags) -> iced::Result {
        tracing_subscriber::fmt::init();

        <Self as Application>::run(Settings {
            antialiasing: true,
            window: iced::window::Settings {
                position: iced::window::Position::Centered,
                size: iced::Size {
                    height: 560.,
                    width: 650.,
                },
                ..iced::window::Settings::default()
            },
            ..Settings::with_flags(flags)
        })
    }

    fn apply<F>(&mut self, outcome: std::result::Result<Option<Update>, Error>, describe: F)
    where
        F: Fn(&Error) -> String,
    {
        match outcome {
            Ok(Some(update)) => {
                if let Some(encoded) = update.image {
                    match BASE64_STANDARD.decode(encoded) {
                        Ok(bytes) => self.frame = Some(image::Handle::from_memory(bytes)),
                        Err(e) => tracing::warn!(error = %e, "dropping undecodable frame"),
                    }
                }
                if let Some(status) = update.status {
                    self.status = status;
                }
                if let Some(last_move) = update.last_move {
                    self.last_move = last_move;
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.status = describe(&e);
            }
        }
    }

    fn view_controls<'a>(is_running: bool) -> Element<'a, Message> {
        row![
            button(if is_running { "Game Running..." } else { "Start Game" })
                .on_press_maybe((!is_running).then_some(Message::Start)),
            button("Reset")
                .on_press(Message::Restart)
                .style(theme::Button::Destructive),
        ]
        .padding(10)
        .spacing(20)
        .align_items(Alignment::Center)
        .into()
    }
}

fn describe_reset_failure(error: &Error) -> String {
    match error {
        Error::Connect => error.to_string(),
        Error::Backend(message) => format!("Failed to reset the environment: {message}"),
    }
}

fn describe_step_failure(error: &Error) -> String {
    match error {
        Error::Connect => error.to_string(),
        Error::Backend(message) => format!("An error occurred: {message}"),
    }
}
