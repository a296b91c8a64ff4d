/// Renderer configuration.
///
/// `virtual_scale` multiplies every device-space position and size, letting a
/// game lay out in a small virtual resolution and render at a multiple of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RendererConfig {
    pub virtual_scale: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { virtual_scale: 1.0 }
    }
}
