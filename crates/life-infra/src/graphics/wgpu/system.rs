// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The concrete, WGPU-based implementation of the `RenderSystem` trait.

use super::context::WgpuGraphicsContext;
use super::pipeline::GridPipeline;
use life_core::platform::window::LifeWindow;
use life_core::renderer::{CellFrame, RenderError, RenderStats, RenderSystem};
use life_core::Stopwatch;

/// A [`RenderSystem`] that draws cell frames with `wgpu`.
///
/// Created empty; [`RenderSystem::init`] binds it to a window. Every other
/// call before that returns [`RenderError::NotInitialized`] or does nothing.
#[derive(Debug, Default)]
pub struct WgpuRenderSystem {
    context: Option<WgpuGraphicsContext>,
    pipeline: Option<GridPipeline>,
    current_width: u32,
    current_height: u32,
    frame_count: u64,
    last_frame_stats: RenderStats,
}

impl WgpuRenderSystem {
    /// Creates a new, uninitialized `WgpuRenderSystem`.
    pub fn new() -> Self {
        log::info!("WgpuRenderSystem created (uninitialized).");
        Self::default()
    }

    fn acquire_frame(
        context: &WgpuGraphicsContext,
    ) -> Result<wgpu::SurfaceTexture, RenderError> {
        match context.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(e @ wgpu::SurfaceError::Lost) | Err(e @ wgpu::SurfaceError::Outdated) => {
                log::warn!("WgpuRenderSystem: Swapchain surface {e:?}; reconfiguring.");
                context.reconfigure();
                context.get_current_texture().map_err(|e| {
                    RenderError::SurfaceAcquisitionFailed(format!(
                        "still failing after reconfigure: {e:?}"
                    ))
                })
            }
            Err(e @ wgpu::SurfaceError::Timeout) => {
                log::warn!("WgpuRenderSystem: Swapchain timeout acquiring frame.");
                Err(RenderError::SurfaceAcquisitionFailed(format!("{e:?}")))
            }
            Err(e) => {
                log::error!("WgpuRenderSystem: Unrecoverable surface error: {e:?}");
                Err(RenderError::SurfaceAcquisitionFailed(format!("{e:?}")))
            }
        }
    }
}

impl RenderSystem for WgpuRenderSystem {
    fn init(&mut self, window: &dyn LifeWindow) -> Result<(), RenderError> {
        if self.context.is_some() {
            return Err(RenderError::InitializationFailed(
                "WgpuRenderSystem is already initialized.".to_string(),
            ));
        }
        let (width, height) = window.inner_size();
        let context = pollster::block_on(WgpuGraphicsContext::new(
            window.clone_handle_arc(),
            width,
            height,
        ))
        .map_err(|e| RenderError::InitializationFailed(e.to_string()))?;

        (self.current_width, self.current_height) = context.get_size();
        self.pipeline = Some(GridPipeline::new(&context.device, context.format()));
        log::info!(
            "WgpuRenderSystem: Initialized on {:?} with surface {}x{}",
            context.adapter_backend,
            self.current_width,
            self.current_height
        );
        self.context = Some(context);
        Ok(())
    }

    fn resize(&mut self, new_width: u32, new_height: u32) {
        // A minimised window reports 0x0; rendering pauses until it comes back.
        self.current_width = new_width;
        self.current_height = new_height;
        if let Some(context) = self.context.as_mut() {
            context.resize(new_width, new_height);
        }
    }

    fn render(&mut self, frame: &CellFrame) -> Result<RenderStats, RenderError> {
        let timer = Stopwatch::new();

        let (Some(context), Some(pipeline)) = (self.context.as_ref(), self.pipeline.as_mut())
        else {
            return Err(RenderError::NotInitialized);
        };

        if self.current_width == 0 || self.current_height == 0 {
            return Ok(self.last_frame_stats.clone());
        }

        pipeline.upload(&context.device, &context.queue, frame)?;

        let output = Self::acquire_frame(context)?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Life Frame Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Grid Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(context.get_clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pipeline.draw(&mut pass);
        }
        context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.frame_count += 1;
        self.last_frame_stats = RenderStats {
            frame_number: self.frame_count,
            cpu_time_ms: timer.elapsed_ms_f32(),
        };
        Ok(self.last_frame_stats.clone())
    }

    fn adapter_name(&self) -> Option<String> {
        self.context.as_ref().map(|c| c.adapter_name.clone())
    }

    fn shutdown(&mut self) {
        if self.context.is_none() {
            return;
        }
        log::info!(
            "WgpuRenderSystem shutting down after {} frames.",
            self.frame_count
        );
        // Pipeline objects go before the device that created them.
        self.pipeline = None;
        self.context = None;
    }
}

impl Drop for WgpuRenderSystem {
    fn drop(&mut self) {
        self.shutdown();
    }
}
