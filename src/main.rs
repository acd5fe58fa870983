use iced::widget::{column, container, text, Column};
use iced::{event, window, Alignment, Element, Event, Length, Size, Subscription, Task, Theme};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod client;
mod config;
mod state;
mod theme;
mod ui;

use client::{ClassifierClient, ClassifyError};
use config::AppConfig;
use state::data::{ClassificationResult, SelectedFile};
use state::upload::{Phase, UploadState};
use theme::Palette;
use ui::{UploadZone, ZoneEvent};

/// Main application state
struct ResumeClassifier {
    /// Client for the classification endpoint
    client: ClassifierClient,
    palette: Palette,
    /// Result, loading flag and error of the current submission
    upload: UploadState,
    /// Drop zone (drag hover state)
    zone: UploadZone,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the drop zone or its "Select File" button
    SelectFile,
    /// Drag/drop or picker input for the drop zone
    Zone(ZoneEvent),
    /// A classification request finished
    Classified(u64, Result<ClassificationResult, Arc<ClassifyError>>),
}

/// One in-flight classification request
struct Submission {
    generation: u64,
    file: SelectedFile,
    client: ClassifierClient,
}

impl Submission {
    async fn run(self) -> Message {
        let outcome = self.client.classify(&self.file).await.map_err(Arc::new);
        Message::Classified(self.generation, outcome)
    }
}

impl ResumeClassifier {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        // The app is useless without an HTTP client, so a TLS/backend init failure is fatal
        let client = ClassifierClient::from_config(&config)
            .expect("Failed to initialize HTTP client");

        tracing::info!(endpoint = %client.endpoint(), "resume classifier ready");

        (
            ResumeClassifier {
                client,
                palette: config.palette,
                upload: UploadState::new(),
                zone: UploadZone::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFile => {
                if self.upload.is_loading() {
                    return Task::none();
                }

                let picked = ui::upload::pick_resume();
                self.update(Message::Zone(ZoneEvent::Picked(picked)))
            }
            Message::Zone(event) => match self.zone.update(event, self.upload.is_loading()) {
                Some(file) => {
                    let submission = self.submit(file);
                    Task::perform(submission.run(), std::convert::identity)
                }
                None => Task::none(),
            },
            Message::Classified(generation, outcome) => {
                match outcome {
                    Ok(result) => {
                        if !self.upload.succeed(generation, result) {
                            tracing::warn!(generation, "discarding stale classification result");
                        }
                    }
                    Err(err) => {
                        if self.upload.fail(generation) {
                            tracing::error!(error = %err, "classification failed");
                        } else {
                            tracing::warn!(generation, error = %err, "discarding stale classification error");
                        }
                    }
                }

                Task::none()
            }
        }
    }

    /// Start the request lifecycle for a selected file
    fn submit(&mut self, file: SelectedFile) -> Submission {
        let generation = self.upload.begin();
        tracing::info!(generation, filename = %file.filename, "classifying resume");

        Submission {
            generation,
            file,
            client: self.client.clone(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let loading = self.upload.is_loading();
        let mut panel: Column<Message> = Column::new().spacing(16);

        if let Some(error) = self.upload.error() {
            panel = panel.push(ui::alert::error(error, &self.palette));
        }

        panel = panel.push(self.zone.view(loading, Message::SelectFile, &self.palette));

        match (self.upload.phase(), self.upload.result()) {
            (Phase::Loading, _) => {
                panel = panel.push(ui::alert::loading(&self.palette));
            }
            (Phase::Success, Some(result)) => {
                panel = panel.push(ui::result::view(
                    result,
                    self.upload.completed_at(),
                    &self.palette,
                ));
            }
            _ => {}
        }

        let content = column![
            text("Resume Classifier").size(40),
            container(panel)
                .padding(32)
                .max_width(720)
                .style(container::rounded_box),
        ]
        .spacing(24)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Forward OS file drag/drop events to the drop zone
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::Zone(ZoneEvent::Hovered)),
            Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::Zone(ZoneEvent::HoverLeft))
            }
            Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::Zone(ZoneEvent::Dropped(path)))
            }
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        self.palette.theme()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_or_default();

    iced::application(
        "Resume Classifier",
        ResumeClassifier::update,
        ResumeClassifier::view,
    )
    .subscription(ResumeClassifier::subscription)
    .theme(ResumeClassifier::theme)
    .window_size(Size::new(820.0, 780.0))
    .centered()
    .run_with(move || ResumeClassifier::new(config))
}
