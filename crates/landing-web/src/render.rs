//! Shared WebGPU plumbing for the canvas components.
//!
//! Each visual component owns its own [`GpuContext`] (surface, device,
//! queue) plus the [`Pipelines`] it draws with; nothing is shared across
//! components, so teardown is dropping the component.

use anyhow::anyhow;
use web_sys as web;
use wgpu::util::DeviceExt;

// ===================== vertex / uniform layouts =====================

/// Position plus a per-vertex fade multiplier on the uniform alpha.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub pos: [f32; 3],
    pub fade: f32,
}

impl SceneVertex {
    pub fn opaque(pos: glam::Vec3) -> Self {
        Self { pos: pos.to_array(), fade: 1.0 }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
}

/// Billboard instance. `kind` selects the fragment mask: 0 soft disc,
/// 1 radial halo, 2 X glyph.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    pub kind: f32,
}

pub const SPRITE_KIND_DISC: f32 = 0.0;
pub const SPRITE_KIND_HALO: f32 = 1.0;
pub const SPRITE_KIND_GLYPH: f32 = 2.0;

const SHADER_WGSL: &str = r#"
struct ObjectUniforms {
  mvp: mat4x4<f32>,
  color: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u_object: ObjectUniforms;

struct SceneVsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) fade: f32,
};

@vertex
fn vs_scene(@location(0) pos: vec3<f32>, @location(1) fade: f32) -> SceneVsOut {
  var out: SceneVsOut;
  out.pos = u_object.mvp * vec4<f32>(pos, 1.0);
  out.fade = fade;
  return out;
}

@fragment
fn fs_scene(inf: SceneVsOut) -> @location(0) vec4<f32> {
  return vec4<f32>(u_object.color.rgb, u_object.color.a * inf.fade);
}

struct SpriteUniforms {
  view_proj: mat4x4<f32>,
  cam_right: vec4<f32>,
  cam_up: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u_sprite: SpriteUniforms;

struct SpriteVsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) local: vec2<f32>,
  @location(1) color: vec4<f32>,
  @location(2) kind: f32,
};

@vertex
fn vs_sprite(
  @location(0) corner: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_size: f32,
  @location(3) i_color: vec4<f32>,
  @location(4) i_kind: f32,
) -> SpriteVsOut {
  let offset = (u_sprite.cam_right.xyz * corner.x + u_sprite.cam_up.xyz * corner.y) * i_size;
  var out: SpriteVsOut;
  out.pos = u_sprite.view_proj * vec4<f32>(i_pos + offset, 1.0);
  out.local = corner;
  out.color = i_color;
  out.kind = i_kind;
  return out;
}

@fragment
fn fs_sprite(inf: SpriteVsOut) -> @location(0) vec4<f32> {
  let r = length(inf.local);
  var alpha = 0.0;
  if (inf.kind < 0.5) {
    // soft-edged disc
    alpha = 1.0 - smoothstep(0.35, 0.5, r);
  } else if (inf.kind < 1.5) {
    // radial gradient halo
    let g = clamp(1.0 - r * 2.0, 0.0, 1.0);
    alpha = g * g;
  } else {
    // X glyph: two diagonal bars inside the quad
    let d = min(abs(inf.local.x - inf.local.y), abs(inf.local.x + inf.local.y));
    alpha = (1.0 - smoothstep(0.05, 0.09, d)) * (1.0 - smoothstep(0.42, 0.5, r));
  }
  return vec4<f32>(inf.color.rgb, inf.color.a * alpha);
}
"#;

// ===================== surface / device =====================

pub struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
}

impl GpuContext {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // The surface owns its canvas clone, so dropping the context releases
        // everything this component acquired.
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        // The overlays composite over the page, so prefer premultiplied alpha.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(caps.alpha_modes[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self { surface, device, queue, config, format, width, height })
    }

    /// Reconfigure the surface when the canvas backing size changed.
    /// Zero-sized requests are ignored (mid-resize frames).
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

// ===================== pipelines =====================

pub struct Pipelines {
    pub lines_alpha: wgpu::RenderPipeline,
    pub lines_additive: wgpu::RenderPipeline,
    pub strip_alpha: wgpu::RenderPipeline,
    pub tris_alpha: wgpu::RenderPipeline,
    pub tris_additive: wgpu::RenderPipeline,
    pub sprites_alpha: wgpu::RenderPipeline,
    pub sprites_additive: wgpu::RenderPipeline,
    pub object_bgl: wgpu::BindGroupLayout,
    pub sprite_bgl: wgpu::BindGroupLayout,
    pub quad_vb: wgpu::Buffer,
}

const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub fn build_pipelines(device: &wgpu::Device, format: wgpu::TextureFormat) -> Pipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(SHADER_WGSL.into()),
    });

    let uniform_bgl_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("object_bgl"),
        entries: &[uniform_bgl_entry(0)],
    });
    let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sprite_bgl"),
        entries: &[uniform_bgl_entry(0)],
    });

    let object_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("object_pl"),
        bind_group_layouts: &[&object_bgl],
        push_constant_ranges: &[],
    });
    let sprite_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sprite_pl"),
        bind_group_layouts: &[&sprite_bgl],
        push_constant_ranges: &[],
    });

    let scene_vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SceneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
        ],
    };

    let scene_pipeline = |label: &str, topology: wgpu::PrimitiveTopology, blend: wgpu::BlendState| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&object_pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_scene"),
                buffers: std::slice::from_ref(&scene_vertex_layout),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_scene"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };

    let sprite_vertex_layouts = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        },
    ];

    let sprite_pipeline = |label: &str, blend: wgpu::BlendState| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&sprite_pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &sprite_vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };

    // Unit quad, two triangles, corners at +/-0.5.
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    Pipelines {
        lines_alpha: scene_pipeline(
            "lines_alpha",
            wgpu::PrimitiveTopology::LineList,
            wgpu::BlendState::ALPHA_BLENDING,
        ),
        lines_additive: scene_pipeline(
            "lines_additive",
            wgpu::PrimitiveTopology::LineList,
            ADDITIVE_BLEND,
        ),
        strip_alpha: scene_pipeline(
            "strip_alpha",
            wgpu::PrimitiveTopology::LineStrip,
            wgpu::BlendState::ALPHA_BLENDING,
        ),
        tris_alpha: scene_pipeline(
            "tris_alpha",
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::BlendState::ALPHA_BLENDING,
        ),
        tris_additive: scene_pipeline(
            "tris_additive",
            wgpu::PrimitiveTopology::TriangleList,
            ADDITIVE_BLEND,
        ),
        sprites_alpha: sprite_pipeline("sprites_alpha", wgpu::BlendState::ALPHA_BLENDING),
        sprites_additive: sprite_pipeline("sprites_additive", ADDITIVE_BLEND),
        object_bgl,
        sprite_bgl,
        quad_vb,
    }
}

// ===================== small buffer helpers =====================

/// A uniform buffer with its bind group, one per drawn object.
pub struct UniformSlot {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

pub fn uniform_slot(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    size: u64,
    label: &str,
) -> UniformSlot {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    UniformSlot { buffer, bind_group }
}

pub fn object_slot(device: &wgpu::Device, pipes: &Pipelines, label: &str) -> UniformSlot {
    uniform_slot(
        device,
        &pipes.object_bgl,
        std::mem::size_of::<ObjectUniforms>() as u64,
        label,
    )
}

pub fn sprite_slot(device: &wgpu::Device, pipes: &Pipelines, label: &str) -> UniformSlot {
    uniform_slot(
        device,
        &pipes.sprite_bgl,
        std::mem::size_of::<SpriteUniforms>() as u64,
        label,
    )
}

pub fn static_vertices(device: &wgpu::Device, label: &str, verts: &[SceneVertex]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(verts),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

pub fn dynamic_vertices(device: &wgpu::Device, label: &str, count: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<SceneVertex>() * count) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn instance_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<SpriteInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn index_buffer(device: &wgpu::Device, label: &str, indices: &[u32]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    })
}

/// Camera basis vectors (world-space right/up) for billboard expansion.
pub fn camera_basis(view: glam::Mat4) -> ([f32; 4], [f32; 4]) {
    let inv = view.inverse();
    let right = inv.x_axis;
    let up = inv.y_axis;
    (
        [right.x, right.y, right.z, 0.0],
        [up.x, up.y, up.z, 0.0],
    )
}
