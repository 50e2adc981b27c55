use super::grid::WorldPos;

/// Opaque handle to a visual proxy held by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// What a visual proxy stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Head,
    Segment,
    Food,
}

/// The presentation collaborator the game core drives.
///
/// Implementations own the visual proxies (meshes, glyphs, whatever the
/// front end uses) keyed by [`ObjectId`] and hold no game logic. The core
/// only ever asks them to create, move, or retire a proxy, and to surface
/// the game-over message.
pub trait Scene {
    /// Instantiate a visual proxy and return its handle
    fn add(&mut self, kind: ObjectKind, position: WorldPos) -> ObjectId;

    /// Move an existing proxy to a new position
    fn place(&mut self, id: ObjectId, position: WorldPos);

    /// Retire a proxy. Retiring an unknown handle is a no-op.
    fn remove(&mut self, id: ObjectId);

    /// Surface the end-of-game message with the snake's final length and
    /// await the player's acknowledgement
    fn game_over(&mut self, final_length: usize);
}
