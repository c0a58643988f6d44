//! Drifting HUD glyph sprites on a transparent canvas, with a subtle pointer
//! parallax of their own.

use crate::dom::{self, EventGuard};
use crate::frame::FrameLoop;
use crate::render::{
    self, GpuContext, SpriteInstance, SpriteUniforms, SPRITE_KIND_GLYPH,
};
use anyhow::anyhow;
use glam::{Mat4, Vec3};
use landing_core::{
    rgb, target_from_uv, Camera, ParallaxRig, PointerTarget, SpriteField,
    CAM_FAR, CAM_NEAR, PALETTE_CYAN, SPRITE_CAM_Z, SPRITE_COUNT, SPRITE_FOVY_DEG, SPRITE_OPACITY,
    SPRITE_PITCH_SWING_DEG, SPRITE_ROT_EASE, SPRITE_YAW_SWING_DEG,
};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct SpriteOverlay {
    _loop: FrameLoop,
    _pointer: EventGuard,
    _resize: EventGuard,
}

impl SpriteOverlay {
    pub async fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element(document, "sprites-canvas")
            .ok_or_else(|| anyhow!("missing #sprites-canvas"))?;
        dom::sync_canvas_backing_size(&canvas);

        let mut gpu = GpuContext::new(&canvas).await?;
        let pipes = render::build_pipelines(&gpu.device, gpu.format);
        let instance_vb = render::instance_buffer(&gpu.device, "sprite_instances", SPRITE_COUNT);
        let sprite_slot = render::sprite_slot(&gpu.device, &pipes, "sprite_uniforms");

        let field = SpriteField::new(SPRITE_COUNT, (js_sys::Math::random() * 1e9) as u64);
        let accents = PALETTE_CYAN.accents;

        let target = Rc::new(RefCell::new(PointerTarget::default()));
        let pointer = {
            let target = target.clone();
            let canvas = canvas.clone();
            let window: web::Window = web::window().ok_or_else(|| anyhow!("no window"))?;
            dom::on_pointer(&window, "pointermove", move |ev| {
                let uv = dom::pointer_uv(&ev, &canvas);
                *target.borrow_mut() =
                    target_from_uv(uv, SPRITE_YAW_SWING_DEG, SPRITE_PITCH_SWING_DEG, 0.0);
            })
        };
        let resize = {
            let canvas = canvas.clone();
            let window: web::Window = web::window().ok_or_else(|| anyhow!("no window"))?;
            EventGuard::new(&window, "resize", move |_| {
                dom::sync_canvas_backing_size(&canvas);
            })
        };

        let mut t = 0.0_f32;
        let mut rig = ParallaxRig::default();
        let mut camera = Camera {
            eye: Vec3::new(0.0, 0.0, SPRITE_CAM_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: SPRITE_FOVY_DEG.to_radians(),
            znear: CAM_NEAR,
            zfar: CAM_FAR,
        };

        let frame_loop = FrameLoop::start(move |dt| {
            t += dt;
            rig.step(&target.borrow(), SPRITE_ROT_EASE, SPRITE_ROT_EASE);

            let w = canvas.width();
            let h = canvas.height();
            gpu.resize_if_needed(w, h);
            if !camera.set_aspect_from(gpu.width, gpu.height) {
                return true;
            }
            let view = Mat4::from_rotation_x(rig.pitch)
                * Mat4::from_rotation_y(rig.yaw)
                * camera.view_matrix();
            let vp = camera.projection_matrix() * view;

            let instances: SmallVec<[SpriteInstance; 16]> = (0..field.len())
                .map(|i| {
                    let spawn = &field.spawns()[i];
                    let c = rgb(accents[spawn.color_index % accents.len()]);
                    SpriteInstance {
                        pos: field.position_at(i, t).to_array(),
                        size: spawn.size,
                        color: [c.x, c.y, c.z, SPRITE_OPACITY],
                        kind: SPRITE_KIND_GLYPH,
                    }
                })
                .collect();
            gpu.queue
                .write_buffer(&instance_vb, 0, bytemuck::cast_slice(&instances));
            let (cam_right, cam_up) = render::camera_basis(view);
            gpu.queue.write_buffer(
                &sprite_slot.buffer,
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
                    log::error!("sprites surface error: {:?}", e);
                    return true;
                }
            };
            let view_tex = surface_tex
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut encoder = gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("sprites_encoder"),
                });
            {
                let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("sprites_pass"),
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
                rpass.set_pipeline(&pipes.sprites_alpha);
                rpass.set_bind_group(0, &sprite_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, pipes.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, instance_vb.slice(..));
                rpass.draw(0..6, 0..instances.len() as u32);
            }
            gpu.queue.submit(Some(encoder.finish()));
            surface_tex.present();
            true
        });

        Ok(Self { _loop: frame_loop, _pointer: pointer, _resize: resize })
    }
}
