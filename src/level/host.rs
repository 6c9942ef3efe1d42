// src/level/host.rs

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::utils::Point2D;

/// Something generation hands over to the surrounding game loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostObject {
    Player { position: Point2D },
    TreasureChest { position: Point2D },
}

/// The host game loop's object registration hook.
pub trait HostLoop {
    fn register_object(&mut self, object: HostObject);
}

/// Host that just remembers what it was given.
///
/// Clones share the same record, so a caller can keep one handle and give the
/// other to a generator.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    objects: Arc<RwLock<Vec<HostObject>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> Vec<HostObject> {
        self.objects.read().clone()
    }

    pub fn player_count(&self) -> usize {
        self.objects
            .read()
            .iter()
            .filter(|object| matches!(object, HostObject::Player { .. }))
            .count()
    }

    pub fn chest_count(&self) -> usize {
        self.objects
            .read()
            .iter()
            .filter(|object| matches!(object, HostObject::TreasureChest { .. }))
            .count()
    }
}

impl HostLoop for RecordingHost {
    fn register_object(&mut self, object: HostObject) {
        debug!("Registered {:?} with host loop", object);
        self.objects.write().push(object);
    }
}
