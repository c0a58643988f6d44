//! The synthwave background: horizon grid, wireframe ridges, black hole
//! centerpiece, and pointer parallax, rendered on its own canvas.

use crate::dom::{self, EventGuard};
use crate::frame::FrameLoop;
use crate::render::{
    self, GpuContext, ObjectUniforms, SceneVertex, SpriteInstance, SpriteUniforms,
    SPRITE_KIND_DISC, SPRITE_KIND_HALO,
};
use anyhow::anyhow;
use glam::{Mat4, Vec3};
use landing_core::{
    mesh, rgb, sample_scene, target_from_uv, terrain::RidgeGrid, Camera, ParallaxRig,
    PaletteMode, PointerTarget, BH_POS, CAM_FAR, CAM_NEAR, GLOW_HEIGHT, GLOW_POS, GLOW_WIDTH,
    GRID_DIVISIONS, GRID_SIZE, GRID_Y, HOLE_OPACITY, HOLE_RADIUS, HOLE_SEGMENTS,
    PARALLAX_LATERAL_SWING, PARALLAX_PITCH_SWING_DEG, PARALLAX_POS_EASE, PARALLAX_ROT_EASE,
    PARALLAX_YAW_SWING_DEG, RIDGE_LAYERS, RING_RADIUS, RING_SEGMENTS, RING_TILT, RING_TUBE,
    SPARK_COUNT, SPARK_OPACITY, SPARK_SIZE,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

// The halo sprite sits just behind the event horizon disc.
const HALO_Z_NUDGE: f32 = -0.5;

pub struct Background {
    _loop: FrameLoop,
    _pointer: EventGuard,
    _resize: EventGuard,
}

impl Background {
    pub async fn mount(
        document: &web::Document,
        palette: Rc<Cell<PaletteMode>>,
        zoom: Rc<Cell<f32>>,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element(document, "bg-canvas")
            .ok_or_else(|| anyhow!("missing #bg-canvas"))?;
        dom::sync_canvas_backing_size(&canvas);

        let mut gpu = GpuContext::new(&canvas).await?;
        let pipes = render::build_pipelines(&gpu.device, gpu.format);

        // Static geometry.
        let grid_verts: Vec<SceneVertex> = mesh::grid_lines(GRID_SIZE, GRID_DIVISIONS, GRID_Y)
            .into_iter()
            .map(SceneVertex::opaque)
            .collect();
        let glow_verts: Vec<SceneVertex> = mesh::quad_triangles(GLOW_WIDTH, GLOW_HEIGHT)
            .into_iter()
            .map(SceneVertex::opaque)
            .collect();
        let hole_verts: Vec<SceneVertex> = mesh::disc_triangles(HOLE_RADIUS, HOLE_SEGMENTS)
            .into_iter()
            .map(SceneVertex::opaque)
            .collect();
        let ring_verts: Vec<SceneVertex> = mesh::annulus_triangles(RING_RADIUS, RING_TUBE, RING_SEGMENTS)
            .into_iter()
            .map(SceneVertex::opaque)
            .collect();
        let grid_vb = render::static_vertices(&gpu.device, "grid_vb", &grid_verts);
        let glow_vb = render::static_vertices(&gpu.device, "glow_vb", &glow_verts);
        let hole_vb = render::static_vertices(&gpu.device, "hole_vb", &hole_verts);
        let ring_vb = render::static_vertices(&gpu.device, "ring_vb", &ring_verts);
        let grid_count = grid_verts.len() as u32;
        let glow_count = glow_verts.len() as u32;
        let hole_count = hole_verts.len() as u32;
        let ring_count = ring_verts.len() as u32;

        // Ridges keep an immutable base and a dynamic, per-frame vertex buffer.
        let mut ridges = Vec::with_capacity(RIDGE_LAYERS.len());
        for i in 0..RIDGE_LAYERS.len() {
            let grid = RidgeGrid::layer(i)?;
            let indices = grid.wireframe_indices();
            let ib = render::index_buffer(&gpu.device, "ridge_ib", &indices);
            let vb = render::dynamic_vertices(&gpu.device, "ridge_vb", grid.vertex_count());
            let slot = render::object_slot(&gpu.device, &pipes, "ridge_uniforms");
            ridges.push((grid, vb, ib, indices.len() as u32, slot));
        }

        let spark_seed = (js_sys::Math::random() * 1e9) as u64;
        let sparks = landing_core::spark_positions(SPARK_COUNT, spark_seed);

        let grid_slot = render::object_slot(&gpu.device, &pipes, "grid_uniforms");
        let glow_slot = render::object_slot(&gpu.device, &pipes, "glow_uniforms");
        let hole_slot = render::object_slot(&gpu.device, &pipes, "hole_uniforms");
        let ring_slot = render::object_slot(&gpu.device, &pipes, "ring_uniforms");
        let sprite_slot = render::sprite_slot(&gpu.device, &pipes, "bg_sprite_uniforms");
        let instance_vb = render::instance_buffer(&gpu.device, "bg_instances", SPARK_COUNT + 1);

        // Pointer parallax targets, written by the listener, read by the loop.
        let target = Rc::new(RefCell::new(PointerTarget::default()));
        let pointer = {
            let target = target.clone();
            let canvas = canvas.clone();
            let window: web::Window = web::window().ok_or_else(|| anyhow!("no window"))?;
            dom::on_pointer(&window, "pointermove", move |ev| {
                let uv = dom::pointer_uv(&ev, &canvas);
                *target.borrow_mut() = target_from_uv(
                    uv,
                    PARALLAX_YAW_SWING_DEG,
                    PARALLAX_PITCH_SWING_DEG,
                    PARALLAX_LATERAL_SWING,
                );
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
            eye: Vec3::ZERO,
            target: Vec3::from(BH_POS),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: 1.0,
            znear: CAM_NEAR,
            zfar: CAM_FAR,
        };
        let mut scratch: Vec<Vec3> = Vec::new();
        let mut staging: Vec<SceneVertex> = Vec::new();
        let mut instances: Vec<SpriteInstance> = Vec::with_capacity(SPARK_COUNT + 1);

        let frame_loop = FrameLoop::start(move |dt| {
            t += dt;
            let frame = sample_scene(t, zoom.get());
            let colors = palette.get().palette();
            rig.step(&target.borrow(), PARALLAX_ROT_EASE, PARALLAX_POS_EASE);

            let w = canvas.width();
            let h = canvas.height();
            gpu.resize_if_needed(w, h);
            if !camera.set_aspect_from(gpu.width, gpu.height) {
                return true;
            }
            camera.eye = Vec3::new(rig.lateral, frame.cam_eye.y, frame.cam_eye.z);
            camera.fovy_radians = frame.cam_fovy_deg.to_radians();
            let view = Mat4::from_rotation_x(rig.pitch)
                * Mat4::from_rotation_y(rig.yaw)
                * camera.view_matrix();
            let vp = camera.projection_matrix() * view;

            let write_object = |slot: &render::UniformSlot, model: Mat4, color: Vec3, alpha: f32| {
                gpu.queue.write_buffer(
                    &slot.buffer,
                    0,
                    bytemuck::bytes_of(&ObjectUniforms {
                        mvp: (vp * model).to_cols_array_2d(),
                        color: [color.x, color.y, color.z, alpha],
                    }),
                );
            };

            write_object(
                &grid_slot,
                Mat4::from_translation(Vec3::new(0.0, 0.0, frame.grid_z)),
                rgb(colors.grid),
                frame.grid_opacity,
            );
            write_object(
                &glow_slot,
                Mat4::from_translation(Vec3::new(GLOW_POS[0], frame.glow_y, GLOW_POS[2])),
                rgb(colors.glow),
                landing_core::GLOW_OPACITY,
            );
            write_object(
                &hole_slot,
                Mat4::from_translation(Vec3::from(BH_POS)),
                Vec3::ZERO,
                HOLE_OPACITY,
            );
            write_object(
                &ring_slot,
                Mat4::from_translation(Vec3::from(BH_POS))
                    * Mat4::from_rotation_x(RING_TILT)
                    * Mat4::from_rotation_z(frame.ring_angle),
                rgb(colors.glow),
                frame.ring_opacity,
            );
            let ridge_model = Mat4::from_translation(Vec3::new(0.0, frame.mountain_y, frame.mountain_z))
                * Mat4::from_rotation_z(frame.mountain_roll);
            for (i, (grid, vb, _ib, _n, slot)) in ridges.iter().enumerate() {
                grid.displace_into(frame.ripple_phase, &mut scratch);
                staging.clear();
                staging.extend(scratch.iter().map(|p| SceneVertex::opaque(*p)));
                gpu.queue.write_buffer(vb, 0, bytemuck::cast_slice(&staging));
                write_object(
                    slot,
                    ridge_model,
                    rgb(colors.mountains[i % colors.mountains.len()]),
                    frame.mountain_opacity,
                );
            }

            // Halo plus orbiting sparks share one instanced draw.
            instances.clear();
            instances.push(SpriteInstance {
                pos: [BH_POS[0], BH_POS[1], BH_POS[2] + HALO_Z_NUDGE],
                size: frame.halo_scale,
                color: {
                    let c = rgb(colors.glow);
                    [c.x, c.y, c.z, frame.halo_opacity]
                },
                kind: SPRITE_KIND_HALO,
            });
            let spark_model = Mat4::from_translation(Vec3::from(BH_POS))
                * Mat4::from_rotation_x(RING_TILT)
                * Mat4::from_rotation_z(frame.sparks_angle);
            let spark_color = rgb(colors.glow);
            for p in &sparks {
                let world = spark_model.transform_point3(*p);
                instances.push(SpriteInstance {
                    pos: world.to_array(),
                    size: SPARK_SIZE,
                    color: [spark_color.x, spark_color.y, spark_color.z, SPARK_OPACITY],
                    kind: SPRITE_KIND_DISC,
                });
            }
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
                    log::error!("background surface error: {:?}", e);
                    return true;
                }
            };
            let view_tex = surface_tex
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut encoder = gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("bg_encoder"),
                });
            {
                let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("bg_pass"),
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

                rpass.set_pipeline(&pipes.lines_alpha);
                rpass.set_bind_group(0, &grid_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, grid_vb.slice(..));
                rpass.draw(0..grid_count, 0..1);

                rpass.set_pipeline(&pipes.tris_alpha);
                rpass.set_bind_group(0, &glow_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, glow_vb.slice(..));
                rpass.draw(0..glow_count, 0..1);

                rpass.set_pipeline(&pipes.lines_additive);
                for (_grid, vb, ib, n, slot) in &ridges {
                    rpass.set_bind_group(0, &slot.bind_group, &[]);
                    rpass.set_vertex_buffer(0, vb.slice(..));
                    rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..*n, 0, 0..1);
                }

                rpass.set_pipeline(&pipes.tris_alpha);
                rpass.set_bind_group(0, &hole_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, hole_vb.slice(..));
                rpass.draw(0..hole_count, 0..1);

                rpass.set_pipeline(&pipes.tris_additive);
                rpass.set_bind_group(0, &ring_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, ring_vb.slice(..));
                rpass.draw(0..ring_count, 0..1);

                rpass.set_pipeline(&pipes.sprites_additive);
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
