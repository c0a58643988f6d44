//! The streaking comet overlay: trail polyline plus a glowing head sprite on
//! a transparent canvas. While the comet pauses between passes nothing is
//! drawn, so the last frame simply holds.

use crate::dom::{self, EventGuard};
use crate::frame::FrameLoop;
use crate::render::{
    self, GpuContext, ObjectUniforms, SceneVertex, SpriteInstance, SpriteUniforms,
    SPRITE_KIND_HALO,
};
use anyhow::anyhow;
use glam::Vec3;
use landing_core::{
    rgb, Camera, Comet, CAM_FAR, CAM_NEAR, COMET_CAM_Z, COMET_COLOR, COMET_FOVY_DEG,
    COMET_TRAIL_LEN,
};
use smallvec::SmallVec;
use web_sys as web;

pub struct CometOverlay {
    _loop: FrameLoop,
    _resize: EventGuard,
}

impl CometOverlay {
    pub async fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element(document, "comet-canvas")
            .ok_or_else(|| anyhow!("missing #comet-canvas"))?;
        dom::sync_canvas_backing_size(&canvas);

        let mut gpu = GpuContext::new(&canvas).await?;
        let pipes = render::build_pipelines(&gpu.device, gpu.format);

        let trail_vb = render::dynamic_vertices(&gpu.device, "trail_vb", COMET_TRAIL_LEN);
        let trail_slot = render::object_slot(&gpu.device, &pipes, "trail_uniforms");
        let head_vb = render::instance_buffer(&gpu.device, "head_instance", 1);
        let head_slot = render::sprite_slot(&gpu.device, &pipes, "head_uniforms");

        let resize = {
            let canvas = canvas.clone();
            let window: web::Window = web::window().ok_or_else(|| anyhow!("no window"))?;
            EventGuard::new(&window, "resize", move |_| {
                dom::sync_canvas_backing_size(&canvas);
            })
        };

        let mut comet = Comet::new((js_sys::Math::random() * 1e9) as u64);
        let mut camera = Camera {
            eye: Vec3::new(0.0, 0.0, COMET_CAM_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: COMET_FOVY_DEG.to_radians(),
            znear: CAM_NEAR,
            zfar: CAM_FAR,
        };
        let color = rgb(COMET_COLOR);
        let mut trail_verts: Vec<SceneVertex> = Vec::with_capacity(COMET_TRAIL_LEN);

        let frame_loop = FrameLoop::start(move |dt| {
            comet.tick(dt);
            if !comet.is_traveling() {
                // hold the last presented frame through the pause
                return true;
            }

            let w = canvas.width();
            let h = canvas.height();
            gpu.resize_if_needed(w, h);
            if !camera.set_aspect_from(gpu.width, gpu.height) {
                return true;
            }
            let vp = camera.view_proj();

            // Newest sample first; fade toward the tail.
            trail_verts.clear();
            let n = comet.trail().len().max(2);
            for (i, p) in comet.trail().iter().enumerate() {
                let fade = 1.0 - i as f32 / (n - 1) as f32;
                trail_verts.push(SceneVertex { pos: p.to_array(), fade });
            }
            gpu.queue
                .write_buffer(&trail_vb, 0, bytemuck::cast_slice(&trail_verts));
            gpu.queue.write_buffer(
                &trail_slot.buffer,
                0,
                bytemuck::bytes_of(&ObjectUniforms {
                    mvp: vp.to_cols_array_2d(),
                    color: [color.x, color.y, color.z, comet.trail_opacity()],
                }),
            );

            let head: SmallVec<[SpriteInstance; 1]> = smallvec::smallvec![SpriteInstance {
                pos: comet.head().to_array(),
                size: comet.head_scale(),
                color: [color.x, color.y, color.z, 1.0],
                kind: SPRITE_KIND_HALO,
            }];
            gpu.queue
                .write_buffer(&head_vb, 0, bytemuck::cast_slice(&head));
            let (cam_right, cam_up) = render::camera_basis(camera.view_matrix());
            gpu.queue.write_buffer(
                &head_slot.buffer,
                0,
                bytemuck::bytes_of(&SpriteUniforms {
                    view_proj: vp.to_cols_array_2d(),
                    cam_right,
                    cam_up,
                }),
            );

            let surface_tex = match gpu.surface.get_current_texture() {
                Ok(tex) => tex,
                Err(e) => {
                    log::error!("comet surface error: {:?}", e);
                    return true;
                }
            };
            let view_tex = surface_tex
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut encoder = gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("comet_encoder"),
                });
            {
                let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("comet_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view_tex,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                rpass.set_pipeline(&pipes.strip_alpha);
                rpass.set_bind_group(0, &trail_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, trail_vb.slice(..));
                rpass.draw(0..trail_verts.len() as u32, 0..1);

                rpass.set_pipeline(&pipes.sprites_alpha);
                rpass.set_bind_group(0, &head_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, pipes.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, head_vb.slice(..));
                rpass.draw(0..6, 0..1);
            }
            gpu.queue.submit(Some(encoder.finish()));
            surface_tex.present();
            true
        });

        Ok(Self { _loop: frame_loop, _resize: resize })
    }
}
