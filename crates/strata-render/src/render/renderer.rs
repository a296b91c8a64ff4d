use crate::assets::{AssetCache, PackageResolver};
use crate::coords::Vec2;
use crate::scene::{MessageQueue, RenderLayeredMessage, RenderMessage};

use super::drivers::draw_descriptor;
use super::view::{Eye, ViewMatrices};
use super::{DrawContext, RenderBackend, RendererConfig};

/// Outcome of one [`Renderer::render_frame`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Layered messages drawn without error.
    pub drawn: usize,
    /// Layered messages skipped (missing asset, wrong kind, ...).
    ///
    /// A sprite batch counts here when any of its sprites failed, even though
    /// the rest of the batch was drawn.
    pub skipped: usize,
}

/// Frame driver.
///
/// Owns the asset cache and both message queues; the backend is borrowed for
/// each call that may load, free or draw.
#[derive(Debug)]
pub struct Renderer {
    assets: AssetCache,
    queue: MessageQueue,
    config: RendererConfig,
}

impl Renderer {
    pub fn new(resolver: Box<dyn PackageResolver>, config: RendererConfig) -> Self {
        Self {
            assets: AssetCache::new(resolver),
            queue: MessageQueue::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: RendererConfig) {
        self.config = config;
    }

    #[inline]
    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    #[inline]
    pub fn assets_mut(&mut self) -> &mut AssetCache {
        &mut self.assets
    }

    #[inline]
    pub fn queue(&self) -> &MessageQueue {
        &self.queue
    }

    #[inline]
    pub fn enqueue_message(&mut self, message: RenderMessage) {
        self.queue.enqueue_message(message);
    }

    #[inline]
    pub fn enqueue_layered_message(&mut self, message: RenderLayeredMessage) {
        self.queue.enqueue_layered_message(message);
    }

    /// Drains the general queue without dispatching it.
    #[inline]
    pub fn pop_messages(&mut self) -> Vec<RenderMessage> {
        self.queue.pop_messages()
    }

    #[inline]
    pub fn clear_messages(&mut self) {
        self.queue.clear_messages();
    }

    /// Renders one frame.
    ///
    /// `messages` are merged into the general queue, which is then drained and
    /// dispatched. The layered buffer is sorted, drawn, flushed and cleared;
    /// loaded packages persist to the next frame.
    pub fn render_frame(
        &mut self,
        backend: &mut dyn RenderBackend,
        eye_center: Vec2,
        eye_size: Vec2,
        messages: impl IntoIterator<Item = RenderMessage>,
    ) -> FrameStats {
        self.queue.enqueue_messages(messages);
        for message in self.queue.pop_messages() {
            self.handle_message(backend, message);
        }

        let eye = Eye::new(eye_center, eye_size);
        let views = ViewMatrices::new(eye);
        self.queue.sort_layered();

        let mut stats = FrameStats::default();
        let mut ctx = DrawContext {
            backend: &mut *backend,
            assets: &mut self.assets,
            views: &views,
            eye,
            virtual_scale: self.config.virtual_scale,
        };
        for message in self.queue.layered() {
            match draw_descriptor(&mut ctx, &message.descriptor) {
                Ok(()) => stats.drawn += 1,
                Err(err) => {
                    stats.skipped += 1;
                    if err.is_type_mismatch() {
                        log::trace!("skipping {} draw: {err}", message.descriptor.kind());
                    } else {
                        log::info!("skipping {} draw: {err}", message.descriptor.kind());
                    }
                }
            }
        }

        backend.flush();
        self.queue.clear_layered();
        log::trace!("frame drawn: {} drawn, {} skipped", stats.drawn, stats.skipped);
        stats
    }

    /// Releases every loaded asset and empties the package map.
    ///
    /// Queued messages are kept; a pending `HintPackageUse` loads its package
    /// again on the next frame.
    pub fn clean_up(&mut self, backend: &mut dyn RenderBackend) {
        self.assets.clean_up(backend);
    }

    fn handle_message(&mut self, backend: &mut dyn RenderBackend, message: RenderMessage) {
        match message {
            RenderMessage::Layered(layered) => self.queue.enqueue_layered_message(*layered),
            RenderMessage::HintPackageUse(package) => {
                self.assets.load_package(backend, &package);
            }
            RenderMessage::HintPackageDisuse(package) => self.assets.unload_package(backend, &package),
            RenderMessage::ReloadAssets => self.assets.reload_all_packages(backend),
        }
    }
}
