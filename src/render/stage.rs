use std::collections::HashMap;

use crate::game::{ObjectId, ObjectKind, Scene, WorldPos};

/// One visual proxy: what it stands for and where it sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageObject {
    pub kind: ObjectKind,
    pub position: WorldPos,
}

/// Visual-proxy store for the terminal front end.
///
/// Plays the role the 3D scene graph would in a full renderer: one entry
/// per live proxy, handles handed out sequentially, plus the latched
/// game-over notice until the player dismisses it. No game state lives
/// here.
#[derive(Debug, Default)]
pub struct Stage {
    objects: HashMap<ObjectId, StageObject>,
    next_id: u32,
    final_length: Option<usize>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate the live proxies, in no particular order
    pub fn objects(&self) -> impl Iterator<Item = &StageObject> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Final snake length from the last game-over notice, if one is
    /// still showing
    pub fn final_length(&self) -> Option<usize> {
        self.final_length
    }

    /// Take down the game-over notice
    pub fn dismiss_game_over(&mut self) {
        self.final_length = None;
    }
}

impl Scene for Stage {
    fn add(&mut self, kind: ObjectKind, position: WorldPos) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, StageObject { kind, position });
        id
    }

    fn place(&mut self, id: ObjectId, position: WorldPos) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.position = position;
        }
    }

    fn remove(&mut self, id: ObjectId) {
        self.objects.remove(&id);
    }

    fn game_over(&mut self, final_length: usize) {
        self.final_length = Some(final_length);
    }
}
