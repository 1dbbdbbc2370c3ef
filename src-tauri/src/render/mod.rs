// Render module
// Turns a finished feature set into draw commands for the plot window

pub mod scene;

pub use scene::{build_scene, DrawCommand, RenderSettings, Rgb, Scene};
