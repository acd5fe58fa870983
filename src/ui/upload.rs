/// Resume drop zone
///
/// Accepts one file at a time, either dropped onto the window or chosen with
/// the native picker. Only PDF, DOCX and TXT files get through; anything else
/// is ignored without an error. While disabled nothing is accepted.
use iced::widget::{button, column, container, mouse_area, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

use crate::state::data::{FileKind, SelectedFile};
use crate::theme::Palette;

/// Input to the drop zone
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneEvent {
    /// A file is being dragged over the window
    Hovered,
    /// The drag left the window without dropping
    HoverLeft,
    /// A file was dropped onto the window
    Dropped(PathBuf),
    /// The picker closed; None if the user cancelled
    Picked(Option<PathBuf>),
}

/// Drop zone state
#[derive(Debug, Default)]
pub struct UploadZone {
    drag_active: bool,
}

impl UploadZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an event; returns the file to hand to the upload handler, if any
    pub fn update(&mut self, event: ZoneEvent, disabled: bool) -> Option<SelectedFile> {
        match event {
            ZoneEvent::Hovered => {
                self.drag_active = !disabled;
                None
            }
            ZoneEvent::HoverLeft => {
                self.drag_active = false;
                None
            }
            ZoneEvent::Dropped(path) => {
                self.drag_active = false;
                Self::accept(path, disabled)
            }
            ZoneEvent::Picked(Some(path)) => Self::accept(path, disabled),
            ZoneEvent::Picked(None) => None,
        }
    }

    fn accept(path: PathBuf, disabled: bool) -> Option<SelectedFile> {
        if disabled {
            tracing::debug!(path = %path.display(), "upload disabled, ignoring file");
            return None;
        }

        let file = SelectedFile::from_path(path.clone());
        if file.is_none() {
            tracing::debug!(path = %path.display(), "unsupported file type, ignoring");
        }
        file
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Build the drop zone; `on_select` is emitted when the user asks for the picker
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        disabled: bool,
        on_select: Message,
        palette: &Palette,
    ) -> Element<'a, Message> {
        let prompt = if self.is_drag_active() {
            "Drop the resume here"
        } else {
            "Drag and drop a resume, or click to select"
        };

        let accent = if disabled { palette.grey } else { palette.primary };

        let content = column![
            text("☁").size(48).color(accent.color()),
            text(prompt).size(20),
            text("Supports PDF, DOCX, and TXT files")
                .size(14)
                .color(palette.grey.color()),
            button(text("Select File"))
                .padding([8, 16])
                .on_press_maybe((!disabled).then(|| on_select.clone())),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        let highlight = self.is_drag_active() && !disabled;
        let border_color = if highlight { palette.secondary } else { palette.grey };
        let background = if highlight || disabled {
            Color { a: 0.06, ..palette.text.color() }
        } else {
            palette.background.color()
        };

        let zone = container(content)
            .width(Length::Fill)
            .padding(24)
            .center_x(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                border: Border {
                    color: border_color.color(),
                    width: 2.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            });

        let area = mouse_area(zone);
        if disabled {
            area.into()
        } else {
            area.on_press(on_select).into()
        }
    }
}

/// Open the native picker, filtered to supported resume types
pub fn pick_resume() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select Resume")
        .add_filter("Resumes", FileKind::extensions().as_slice())
        .pick_file()
}
