use super::{RenderLayeredMessage, RenderMessage};

/// Per-frame message buffers.
///
/// Two independent streams:
/// - the general queue carries control messages (package hints, reloads) and
///   the occasional boxed layered draw
/// - the layered queue takes draws directly, skipping the dispatcher, since
///   that is where nearly all per-frame traffic goes
///
/// Both buffers keep their capacity across frames.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Vec<RenderMessage>,
    layered: Vec<RenderLayeredMessage>,
}

impl MessageQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enqueue_message(&mut self, message: RenderMessage) {
        self.messages.push(message);
    }

    #[inline]
    pub fn enqueue_messages(&mut self, messages: impl IntoIterator<Item = RenderMessage>) {
        self.messages.extend(messages);
    }

    #[inline]
    pub fn enqueue_layered_message(&mut self, message: RenderLayeredMessage) {
        self.layered.push(message);
    }

    /// Drains the general queue, leaving it empty.
    #[inline]
    pub fn pop_messages(&mut self) -> Vec<RenderMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Empties both queues without returning anything.
    #[inline]
    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.layered.clear();
    }

    /// Empties the layered queue only; end-of-frame reset.
    #[inline]
    pub fn clear_layered(&mut self) {
        self.layered.clear();
    }

    /// Sorts the layered queue into paint order (back-to-front).
    ///
    /// The sort is stable, so messages with identical keys keep enqueue order.
    pub fn sort_layered(&mut self) {
        self.layered.sort_by(|a, b| a.key().cmp(&b.key()));
    }

    /// Layered messages in their current order.
    #[inline]
    pub fn layered(&self) -> &[RenderLayeredMessage] {
        &self.layered
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn layered_len(&self) -> usize {
        self.layered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.layered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetTag;
    use crate::coords::Vec2;
    use crate::scene::{Sprite, Transform};

    fn sprite_at(elevation: f32, y: f32, package: &str, name: &str) -> RenderLayeredMessage {
        let transform = Transform::new(Vec2::new(0.0, y), Vec2::one()).with_elevation(elevation);
        RenderLayeredMessage::sprite(Sprite::new(transform, AssetTag::new(package, name)))
    }

    fn order(queue: &MessageQueue) -> Vec<(f32, f32, String)> {
        queue
            .layered()
            .iter()
            .map(|m| (m.elevation, m.position_y, m.asset_tag.to_string()))
            .collect()
    }

    #[test]
    fn pop_drains_general_queue_only() {
        let mut queue = MessageQueue::new();
        queue.enqueue_message(RenderMessage::HintPackageUse("gui".into()));
        queue.enqueue_message(RenderMessage::ReloadAssets);
        queue.enqueue_layered_message(sprite_at(0.0, 0.0, "p", "a"));

        let popped = queue.pop_messages();
        assert_eq!(popped.len(), 2);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.layered_len(), 1);
        assert!(queue.pop_messages().is_empty());
    }

    #[test]
    fn clear_empties_both() {
        let mut queue = MessageQueue::new();
        queue.enqueue_message(RenderMessage::ReloadAssets);
        queue.enqueue_layered_message(sprite_at(0.0, 0.0, "p", "a"));
        queue.clear_messages();
        assert!(queue.is_empty());
    }

    #[test]
    fn sort_is_independent_of_enqueue_order() {
        let messages = [
            sprite_at(1.0, 0.0, "p", "a"),
            sprite_at(0.0, 5.0, "p", "a"),
            sprite_at(0.0, 10.0, "p", "a"),
            sprite_at(0.0, 5.0, "q", "a"),
            sprite_at(0.0, 5.0, "a", "b"),
        ];

        let mut forward = MessageQueue::new();
        messages.iter().cloned().for_each(|m| forward.enqueue_layered_message(m));
        forward.sort_layered();

        let mut backward = MessageQueue::new();
        messages.iter().rev().cloned().for_each(|m| backward.enqueue_layered_message(m));
        backward.sort_layered();

        let expected = vec![
            (0.0, 10.0, "[p a]".to_owned()),
            (0.0, 5.0, "[p a]".to_owned()),
            (0.0, 5.0, "[q a]".to_owned()),
            (0.0, 5.0, "[a b]".to_owned()),
            (1.0, 0.0, "[p a]".to_owned()),
        ];
        assert_eq!(order(&forward), expected);
        assert_eq!(order(&backward), expected);
    }
}
