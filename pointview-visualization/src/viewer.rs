//! Interactive viewer event loop

use crate::camera::OrbitCamera;
use crate::renderer::{RenderConfig, ScatterRenderer};
use crate::scene;
use crate::view::RenderView;
use pointview_core::{Error, PointSet, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::Key,
    window::WindowBuilder,
};

/// Drag-to-radians factor for orbiting
const ORBIT_SENSITIVITY: f32 = 0.01;
/// Pan speed per pixel, scaled by the camera distance
const PAN_SENSITIVITY: f32 = 0.0015;
/// Zoom fraction per scroll line
const ZOOM_SENSITIVITY: f32 = 0.1;

/// Viewer window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Marker diameter in pixels
    pub point_size: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "pointview".to_string(),
            width: 1200,
            height: 900,
            point_size: 9.0,
        }
    }
}

/// Mouse drag state between events
#[derive(Default)]
struct InputState {
    last_cursor: Option<PhysicalPosition<f64>>,
    orbiting: bool,
    panning: bool,
}

/// Display a point set in a blocking interactive window.
///
/// Returns once the user closes the window. An empty set renders nothing and
/// returns immediately; callers normally branch on emptiness long before
/// this point.
pub fn show(points: &PointSet, config: &ViewerConfig) -> Result<()> {
    let Some(view) = RenderView::from_point_set(points) else {
        return Ok(());
    };

    let event_loop = EventLoop::new()
        .map_err(|e| Error::Render(format!("failed to create event loop: {e}")))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width as f64,
                config.height as f64,
            ))
            .build(&event_loop)
            .map_err(|e| Error::Render(format!("failed to create window: {e}")))?,
    );

    let render_config = RenderConfig {
        point_size: config.point_size,
        ..RenderConfig::default()
    };
    let mut renderer = pollster::block_on(ScatterRenderer::new(window.clone(), render_config))?;

    let markers = scene::marker_vertices(points, &view.color_scale);
    let lines = scene::reference_lines(&view.bounds);
    let overlay = scene::legend_vertices();
    renderer.set_scene(&markers, &lines, &overlay);

    let mut camera = OrbitCamera::framing(&view.bounds, view.elevation_deg, view.azimuth_deg);
    camera.aspect_ratio = renderer.aspect_ratio();

    let mut input = InputState::default();

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::Resized(new_size) => {
                        renderer.resize(new_size);
                        camera.aspect_ratio = renderer.aspect_ratio();
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let pressed = state == ElementState::Pressed;
                        match button {
                            MouseButton::Left => input.orbiting = pressed,
                            MouseButton::Right => input.panning = pressed,
                            _ => {}
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        if let Some(last) = input.last_cursor {
                            let dx = (position.x - last.x) as f32;
                            let dy = (position.y - last.y) as f32;
                            if input.orbiting {
                                camera.orbit(dx * ORBIT_SENSITIVITY, dy * ORBIT_SENSITIVITY);
                            } else if input.panning {
                                let speed = camera.distance * PAN_SENSITIVITY;
                                camera.pan(-dx * speed, dy * speed);
                            }
                        }
                        input.last_cursor = Some(position);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let amount = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y,
                            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                        };
                        camera.zoom(amount * ZOOM_SENSITIVITY);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == ElementState::Pressed {
                            if let Key::Character(c) = &event.logical_key {
                                if matches!(c.as_str(), "r" | "R") {
                                    camera.reset();
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        renderer.update_camera(
                            camera.projection_matrix() * camera.view_matrix(),
                        );
                        if let Err(e) = renderer.render() {
                            eprintln!("render error: {e}");
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => window.request_redraw(),
                _ => {}
            }
        })
        .map_err(|e| Error::Render(format!("event loop error: {e}")))?;

    Ok(())
}
