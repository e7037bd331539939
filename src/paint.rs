use crate::asset::PageIndex;
use crate::color::Color;
use crate::defs::*;

/// Stateful paint sink the map host hands the renderer for one draw call.
///
/// The context starts out mapping device coordinates straight through. After
/// `concat` with the composed document→device transform, all geometry passed
/// in is in document coordinates. Not thread-safe; the host serializes draw
/// calls.
pub trait PaintContext {
    /// Pushes the current transform state.
    fn save(&mut self);

    /// Pops back to the most recently saved transform state.
    fn restore(&mut self);

    /// Appends `xform` to the current transform.
    fn concat(&mut self, xform: &DocumentToDevice);

    /// Fills a document-space rectangle under the current transform.
    fn fill_rect(&mut self, rect: DocumentRect, color: Color);

    /// Paints the decoded content of `page` under the current transform.
    fn draw_page(&mut self, page: PageIndex);
}

/// Pairs `save` with `restore` for the extent of one draw call, so an
/// unwind mid-paint cannot leave a transform on the context.
pub struct TransformScope<'a, C: PaintContext> {
    ctx: &'a mut C,
}

impl<'a, C: PaintContext> TransformScope<'a, C> {
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl<'a, C: PaintContext> Drop for TransformScope<'a, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}

impl<'a, C: PaintContext> std::ops::Deref for TransformScope<'a, C> {
    type Target = C;
    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<'a, C: PaintContext> std::ops::DerefMut for TransformScope<'a, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}
