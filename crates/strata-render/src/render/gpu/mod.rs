//! [`RenderBackend`] on a caller-owned wgpu device.
//!
//! Blits are queued as instances and submitted on `flush` as one render pass.
//! Consecutive blits sharing a texture and blend mode become one instanced
//! draw call.

mod common;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context};
use wgpu::util::DeviceExt;

use crate::coords::Vec2;
use crate::paint::{Blend, Color};
use crate::text::FontFace;

use self::common::{
    blend_state, viewport_ubo_min_binding_size, BlitInstance, QuadVertex, ViewportUniform, QUAD_INDICES,
    QUAD_VERTICES,
};
use super::{BlitParams, FontId, RenderBackend, TextSurface, TextureId};

/// Where the next `flush` draws.
#[derive(Debug, Clone)]
pub struct FrameTarget {
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
    /// Clears the target before the first blit of the flush when set.
    pub clear: Option<wgpu::Color>,
}

struct GpuTexture {
    // held so the texture outlives its view
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
    blend: Blend,
    color: Color,
}

/// A queued blit keeps its own bind group, so destroying the texture before
/// the flush is fine.
struct QueuedBlit {
    texture: TextureId,
    blend: Blend,
    bind_group: wgpu::BindGroup,
    instance: BlitInstance,
}

pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,

    pipelines: Vec<wgpu::RenderPipeline>,
    texture_bgl: wgpu::BindGroupLayout,
    viewport_bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    sampler: wgpu::Sampler,

    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    textures: HashMap<TextureId, GpuTexture>,
    fonts: HashMap<FontId, FontFace>,
    next_id: u64,

    target: Option<FrameTarget>,
    queued: Vec<QueuedBlit>,
    warned_no_target: bool,
}

impl WgpuBackend {
    /// Creates the blit pipelines for `format` on `device`.
    ///
    /// Device and queue are shared handles; the caller keeps ownership of the
    /// adapter, surface and presentation.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("strata blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let viewport_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("strata viewport bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: viewport_ubo_min_binding_size(),
                },
                count: None,
            }],
        });

        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("strata texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("strata blit pipeline layout"),
            bind_group_layouts: &[&viewport_bgl, &texture_bgl],
            immediate_size: 0,
        });

        let pipelines = Blend::ALL
            .iter()
            .map(|&blend| {
                device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("strata blit pipeline"),
                    layout: Some(&pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: &shader,
                        entry_point: Some("vs_main"),
                        compilation_options: Default::default(),
                        buffers: &[QuadVertex::layout(), BlitInstance::layout()],
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &shader,
                        entry_point: Some("fs_main"),
                        compilation_options: Default::default(),
                        targets: &[Some(wgpu::ColorTargetState {
                            format,
                            blend: blend_state(blend),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: wgpu::PrimitiveTopology::TriangleList,
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        unclipped_depth: false,
                        conservative: false,
                    },
                    depth_stencil: None,
                    multisample: wgpu::MultisampleState::default(),
                    multiview_mask: None,
                    cache: None,
                })
            })
            .collect();

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("strata viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let viewport_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("strata viewport bind group"),
            layout: &viewport_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("strata blit sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let quad_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("strata quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("strata quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            device: device.clone(),
            queue: queue.clone(),
            pipelines,
            texture_bgl,
            viewport_bind_group,
            viewport_ubo,
            sampler,
            quad_vbo,
            quad_ibo,
            instance_vbo: None,
            instance_capacity: 0,
            textures: HashMap::new(),
            fonts: HashMap::new(),
            next_id: 0,
            target: None,
            queued: Vec::new(),
            warned_no_target: false,
        }
    }

    /// Sets the texture the next flush renders into.
    pub fn set_target(&mut self, target: FrameTarget) {
        self.target = Some(target);
    }

    /// Number of blits waiting for the next flush.
    #[inline]
    pub fn queued_blits(&self) -> usize {
        self.queued.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Uploads straight-alpha RGBA8 texels into a new sampled texture.
    fn upload_rgba(&mut self, label: &str, width: u32, height: u32, texels: &[u8]) -> TextureId {
        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.texture_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let id = TextureId(self.next_id());
        self.textures.insert(
            id,
            GpuTexture {
                _texture: texture,
                bind_group,
                size: (width, height),
                blend: Blend::default(),
                color: Color::WHITE,
            },
        );
        id
    }

    fn ensure_instance_capacity(&mut self, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<BlitInstance>()) as u64;

        self.instance_vbo = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("strata blit instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

impl RenderBackend for WgpuBackend {
    fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureId> {
        let image = image::open(path)
            .with_context(|| format!("decoding image {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            bail!("image {} is empty", path.display());
        }
        let label = format!("strata texture {}", path.display());
        Ok(self.upload_rgba(&label, width, height, image.as_raw()))
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        if self.textures.remove(&texture).is_none() {
            log::debug!("destroying unknown texture {texture:?}");
        }
    }

    fn load_font(&mut self, path: &Path, point_size: u16) -> anyhow::Result<FontId> {
        let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        let face = FontFace::from_bytes(&bytes, point_size)
            .with_context(|| format!("parsing font {}", path.display()))?;
        let id = FontId(self.next_id());
        self.fonts.insert(id, face);
        Ok(id)
    }

    fn close_font(&mut self, font: FontId) {
        self.fonts.remove(&font);
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&texture).map(|t| t.size)
    }

    fn text_size(&self, font: FontId, text: &str) -> Option<Vec2> {
        Some(self.fonts.get(&font)?.measure(text, None))
    }

    fn rasterize_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        wrap_width: Option<f32>,
    ) -> Option<TextSurface> {
        Some(self.fonts.get(&font)?.rasterize(text, color, wrap_width))
    }

    fn create_texture_from_surface(&mut self, surface: &TextSurface) -> Option<TextureId> {
        if surface.is_empty() {
            return None;
        }
        Some(self.upload_rgba("strata text texture", surface.width, surface.height, &surface.pixels))
    }

    fn set_blend_mode(&mut self, texture: TextureId, blend: Blend) {
        if let Some(t) = self.textures.get_mut(&texture) {
            t.blend = blend;
        }
    }

    fn set_color_mod(&mut self, texture: TextureId, color: Color) {
        if let Some(t) = self.textures.get_mut(&texture) {
            t.color = color;
        }
    }

    fn blit(&mut self, texture: TextureId, params: &BlitParams) {
        let Some(t) = self.textures.get(&texture) else {
            log::debug!("blit of unknown texture {texture:?} ignored");
            return;
        };
        if params.dst.is_empty() {
            return;
        }
        self.queued.push(QueuedBlit {
            texture,
            blend: t.blend,
            bind_group: t.bind_group.clone(),
            instance: BlitInstance::new(params, t.size, t.color),
        });
    }

    fn flush(&mut self) {
        let Some(target) = self.target.clone() else {
            if !self.warned_no_target {
                log::warn!("WgpuBackend: flush without a frame target; dropping {} blits", self.queued.len());
                self.warned_no_target = true;
            }
            self.queued.clear();
            return;
        };

        let queued = std::mem::take(&mut self.queued);
        if queued.is_empty() && target.clear.is_none() {
            return;
        }

        self.queue.write_buffer(
            &self.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform {
                viewport: [target.width.max(1) as f32, target.height.max(1) as f32],
                _pad: [0.0; 2],
            }),
        );

        if !queued.is_empty() {
            self.ensure_instance_capacity(queued.len());
        }
        let instances: Vec<BlitInstance> = queued.iter().map(|q| q.instance).collect();
        if let Some(instance_vbo) = self.instance_vbo.as_ref() {
            self.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("strata blit encoder"),
        });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("strata blit pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: target.clear.map_or(wgpu::LoadOp::Load, wgpu::LoadOp::Clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(instance_vbo) = self.instance_vbo.as_ref().filter(|_| !queued.is_empty()) {
                rpass.set_bind_group(0, &self.viewport_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
                rpass.set_vertex_buffer(1, instance_vbo.slice(..));
                rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

                // One instanced call per run of blits sharing texture and blend.
                let mut i = 0usize;
                while i < queued.len() {
                    let (texture, blend) = (queued[i].texture, queued[i].blend);
                    let mut j = i + 1;
                    while j < queued.len() && queued[j].texture == texture && queued[j].blend == blend {
                        j += 1;
                    }
                    rpass.set_pipeline(&self.pipelines[blend.index()]);
                    rpass.set_bind_group(1, &queued[i].bind_group, &[]);
                    rpass.draw_indexed(0..6, 0, i as u32..j as u32);
                    i = j;
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));

        // Only the first flush of a frame clears.
        if let Some(target) = self.target.as_mut() {
            target.clear = None;
        }
    }
}

impl std::fmt::Debug for WgpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WgpuBackend")
            .field("textures", &self.textures.len())
            .field("fonts", &self.fonts.len())
            .field("queued", &self.queued.len())
            .finish_non_exhaustive()
    }
}
