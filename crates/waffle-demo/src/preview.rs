// File: crates/waffle-demo/src/preview.rs
// Summary: Fixed-size preview window that blits the rendered chart via winit + softbuffer (CPU).

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Show `rgba` (tightly packed, `width * height * 4` bytes) until the window is closed.
/// Never returns on success; closing the window exits the process.
pub fn run(rgba: Vec<u8>, width: u32, height: u32) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("EV Waffle — Preview")
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // softbuffer wants 0RGB in a u32.
    let frame: Vec<u32> = rgba
        .chunks_exact(4)
        .map(|px| (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
        .collect();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *cf = ControlFlow::Exit;
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::warn!("resize error: {e:?}");
                    return;
                }
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        log::warn!("frame error: {e:?}");
                        return;
                    }
                };
                // Window size can differ on HiDPI; clip or pad rather than scale.
                for y in 0..size.height {
                    for x in 0..size.width {
                        let dst = (y * size.width + x) as usize;
                        buffer[dst] = if x < width && y < height { frame[(y * width + x) as usize] } else { 0 };
                    }
                }
                if let Err(e) = buffer.present() {
                    log::warn!("present error: {e:?}");
                }
            }
            _ => {}
        }
    })
}
