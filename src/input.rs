//! Windowing-agnostic input vocabulary.
//!
//! The GUI shell translates whatever its toolkit reports into [`InputEvent`]s
//! and hands them to [`RulerController`](crate::controller::RulerController).

/// Commands from the right-click context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    About,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 2] = [MenuCommand::About, MenuCommand::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::About => "About",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// Everything the ruler reacts to, in window-client pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    Clicked { x: i32, y: i32 },
    MenuCommand(MenuCommand),
    Resize { width: f32, height: f32 },
    Close,
}

/// How much of the overlay a render pass has to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedrawScope {
    /// Update the text readout only; markers and segment stay as drawn.
    PartialText,
    /// Clear the surface and redraw text, markers and segment.
    FullRepaint,
}

/// Requests the controller hands back to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellRequest {
    ShowAbout,
    Close,
}

/// Outcome of handling one [`InputEvent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reaction {
    pub redraw: Option<RedrawScope>,
    pub request: Option<ShellRequest>,
}

impl Reaction {
    pub const NONE: Reaction = Reaction {
        redraw: None,
        request: None,
    };

    pub fn redraw(scope: RedrawScope) -> Self {
        Self {
            redraw: Some(scope),
            request: None,
        }
    }

    pub fn request(request: ShellRequest) -> Self {
        Self {
            redraw: None,
            request: Some(request),
        }
    }
}
