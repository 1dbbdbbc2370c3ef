// Vowel triangle scene
// Pure mapping from normalized feature pairs to a list of draw commands

use serde::{Deserialize, Serialize};

use crate::analysis::FeatureSet;

/// Message drawn instead of axes when there is nothing to plot
pub const NO_DATA_MESSAGE: &str = "No data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
}

/// One primitive for the canvas, in integer pixel coordinates
/// Text is anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    FillCircle {
        x: i32,
        y: i32,
        radius: i32,
        color: Rgb,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font_size: u32,
        color: Rgb,
    },
}

/// Canvas geometry and styling for the plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,

    /// Pixels per unit of v1 (rightwards)
    pub scale_x: f32,

    /// Pixels per unit of v2 (upwards)
    pub scale_y: f32,

    pub marker_radius: i32,
    pub font_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 800,
            height: 800,
            title: "Vowel Triangle".to_string(),
            scale_x: 300.0,
            scale_y: 300.0,
            marker_radius: 3,
            font_size: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub point_count: usize,
    pub commands: Vec<DrawCommand>,
}

/// Build the draw commands for `features`
///
/// Points are plotted around the canvas center with v1 to the right and v2
/// upwards, followed by the two axes and their labels. An empty set produces
/// only a centered "No data" message.
pub fn build_scene(features: &FeatureSet, settings: &RenderSettings) -> Scene {
    let center_x = (settings.width / 2) as i32;
    let center_y = (settings.height / 2) as i32;

    let mut commands = vec![DrawCommand::Clear { color: Rgb::WHITE }];

    if features.is_empty() {
        commands.push(DrawCommand::Text {
            x: center_x,
            y: center_y,
            text: NO_DATA_MESSAGE.to_string(),
            font_size: settings.font_size,
            color: Rgb::BLACK,
        });

        return Scene {
            width: settings.width,
            height: settings.height,
            title: settings.title.clone(),
            point_count: 0,
            commands,
        };
    }

    for pair in &features.pairs {
        commands.push(DrawCommand::FillCircle {
            x: center_x + (pair.v1 * settings.scale_x) as i32,
            y: center_y - (pair.v2 * settings.scale_y) as i32,
            radius: settings.marker_radius,
            color: Rgb::BLUE,
        });
    }

    let axis_x_end = center_x + settings.scale_x as i32;
    let axis_y_end = center_y - settings.scale_y as i32;

    commands.push(DrawCommand::Line {
        x1: center_x - 10,
        y1: center_y,
        x2: axis_x_end + 10,
        y2: center_y,
        color: Rgb::BLACK,
    });
    commands.push(DrawCommand::Line {
        x1: center_x,
        y1: center_y + 10,
        x2: center_x,
        y2: axis_y_end - 10,
        color: Rgb::BLACK,
    });
    commands.push(DrawCommand::Text {
        x: axis_x_end + 10,
        y: center_y,
        text: "V1".to_string(),
        font_size: settings.font_size,
        color: Rgb::BLACK,
    });
    commands.push(DrawCommand::Text {
        x: center_x,
        y: axis_y_end - 20,
        text: "V2".to_string(),
        font_size: settings.font_size,
        color: Rgb::BLACK,
    });

    Scene {
        width: settings.width,
        height: settings.height,
        title: settings.title.clone(),
        point_count: features.len(),
        commands,
    }
}
