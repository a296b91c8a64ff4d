//! GPU-side types shared by the blit pipelines.

use bytemuck::{Pod, Zeroable};

use crate::paint::{Blend, Color, Flip};
use crate::render::BlitParams;

// ── blend ─────────────────────────────────────────────────────────────────

/// Fixed-function state for each [`Blend`] mode, on straight-alpha output.
///
/// Additive and modulate leave destination alpha untouched.
pub(super) fn blend_state(blend: Blend) -> Option<wgpu::BlendState> {
    let keep_alpha = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    match blend {
        Blend::Transparent => Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
        }),
        Blend::Additive => Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: keep_alpha,
        }),
        Blend::Modulate => Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::Zero,
                dst_factor: wgpu::BlendFactor::Src,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: keep_alpha,
        }),
        Blend::Overwrite => None,
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

pub(super) fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── blit instance ─────────────────────────────────────────────────────────

/// Instance data layout (60 bytes):
///
///  offset  0  dst_origin  [f32; 2]   loc 1
///  offset  8  dst_size    [f32; 2]   loc 2
///  offset 16  uv_min      [f32; 2]   loc 3
///  offset 24  uv_max      [f32; 2]   loc 4
///  offset 32  pivot       [f32; 2]   loc 5
///  offset 40  color       [f32; 4]   loc 6
///  offset 56  rotation    f32        loc 7
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct BlitInstance {
    pub dst_origin: [f32; 2],
    pub dst_size: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub pivot: [f32; 2],
    pub color: [f32; 4],
    pub rotation: f32,
}

impl BlitInstance {
    const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_origin
        2 => Float32x2, // dst_size
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x2, // pivot
        6 => Float32x4, // color
        7 => Float32    // rotation
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BlitInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Builds the instance for `params` on a `width` x `height` texture.
    ///
    /// Flips swap the UV corners along the flipped axis.
    pub(super) fn new(params: &BlitParams, (width, height): (u32, u32), color: Color) -> Self {
        let (tw, th) = (width.max(1) as f32, height.max(1) as f32);
        let src = params.src;
        let mut uv_min = [src.origin.x / tw, src.origin.y / th];
        let mut uv_max = [(src.origin.x + src.size.x) / tw, (src.origin.y + src.size.y) / th];

        if matches!(params.flip, Flip::Horizontal | Flip::Both) {
            std::mem::swap(&mut uv_min[0], &mut uv_max[0]);
        }
        if matches!(params.flip, Flip::Vertical | Flip::Both) {
            std::mem::swap(&mut uv_min[1], &mut uv_max[1]);
        }

        Self {
            dst_origin: [params.dst.origin.x, params.dst.origin.y],
            dst_size: [params.dst.size.x, params.dst.size.y],
            uv_min,
            uv_max,
            pivot: [params.pivot.x, params.pivot.y],
            color: color.to_array(),
            rotation: params.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};

    fn params(flip: Flip) -> BlitParams {
        BlitParams {
            src: Rect::new(16.0, 0.0, 16.0, 32.0),
            dst: Rect::new(10.0, 20.0, 32.0, 64.0),
            rotation: 90.0,
            pivot: Vec2::new(16.0, 32.0),
            flip,
        }
    }

    #[test]
    fn instance_uvs_cover_source_rect() {
        let inst = BlitInstance::new(&params(Flip::None), (64, 32), Color::WHITE);
        assert_eq!(inst.uv_min, [0.25, 0.0]);
        assert_eq!(inst.uv_max, [0.5, 1.0]);
        assert_eq!(inst.dst_origin, [10.0, 20.0]);
        assert_eq!(inst.rotation, 90.0);
    }

    #[test]
    fn flips_swap_uv_corners() {
        let h = BlitInstance::new(&params(Flip::Horizontal), (64, 32), Color::WHITE);
        assert_eq!((h.uv_min, h.uv_max), ([0.5, 0.0], [0.25, 1.0]));
        let both = BlitInstance::new(&params(Flip::Both), (64, 32), Color::WHITE);
        assert_eq!((both.uv_min, both.uv_max), ([0.5, 1.0], [0.25, 0.0]));
    }

    #[test]
    fn overwrite_disables_blending() {
        assert!(blend_state(Blend::Overwrite).is_none());
        for blend in [Blend::Transparent, Blend::Additive, Blend::Modulate] {
            assert!(blend_state(blend).is_some());
        }
    }

    #[test]
    fn instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<BlitInstance>(), 60);
    }
}
