use crate::parsing::WindowSettings;
use crate::renderer::Vec2D;

use std::time::Instant;

use anyhow::Context;
use minifb::{Key, Window, WindowOptions};

/// Opens a resizable window and calls `frame` once per displayed frame with the
/// seconds elapsed since the window opened and a film matching the current
/// window size. Returns when the window is closed or Escape is pressed.
pub fn window_loop<F>(settings: &WindowSettings, mut frame: F) -> anyhow::Result<()>
where
    F: FnMut(f32, &mut Vec2D<u32>) -> anyhow::Result<()>,
{
    let mut window = Window::new(
        &settings.title,
        settings.width,
        settings.height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("failed to open window")?;
    window.set_target_fps(settings.target_fps);

    let mut film = Vec2D::new(settings.width, settings.height, 0u32);
    let start = Instant::now();
    let mut fps_timer = Instant::now();
    let mut frames_since_report = 0;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (width, height) = window.get_size();
        if width == 0 || height == 0 {
            // minimized, nothing to draw into
            window.update();
            continue;
        }
        if film.resize(width, height, 0u32) {
            info!("window resized to {}x{}", width, height);
        }

        frame(start.elapsed().as_secs_f32(), &mut film)?;
        window
            .update_with_buffer(&film.buffer, film.width, film.height)
            .context("failed to present frame")?;

        frames_since_report += 1;
        let since_report = fps_timer.elapsed().as_secs_f32();
        if since_report >= 1.0 {
            let fps = frames_since_report as f32 / since_report;
            info!("{:.1} fps at {}x{}", fps, film.width, film.height);
            window.set_title(&format!("{} - {} fps", settings.title, fps as usize));
            frames_since_report = 0;
            fps_timer = Instant::now();
        }
    }
    Ok(())
}
