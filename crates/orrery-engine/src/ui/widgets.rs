//! Descriptions of the page controls. The page builds the DOM from these and
//! forwards user input back as commands.

use crate::core::bodies::OrbitalBody;
use crate::driver::RunState;

/// Light/dark visual mode. Has no effect on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class the page puts on `<body>`, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light-mode"),
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Theme::Dark => 0.0,
            Theme::Light => 1.0,
        }
    }
}

/// One speed slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    /// Index of the body, used as the set-speed command payload.
    pub body_index: usize,
    pub label: String,
    /// DOM id, `"{name}-slider"`.
    pub element_id: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub initial: f32,
}

impl SliderSpec {
    pub fn for_body(body_index: usize, body: &OrbitalBody, step: f32) -> Self {
        let range = body.speed_range();
        Self {
            body_index,
            label: body.name().to_string(),
            element_id: format!("{}-slider", body.name()),
            min: range.min,
            max: range.max,
            step,
            initial: body.default_speed(),
        }
    }
}

/// Label of the pause/resume button for the current run state.
pub fn pause_button_label(state: RunState) -> &'static str {
    match state {
        RunState::Running => "⏸ Pause",
        RunState::Paused => "▶ Resume",
    }
}
