//! Maps resident chunk coordinates to slots in a renderer's buffers.
//!
//! A renderer keeps one slot per uploaded chunk. Slots freed by released
//! chunks are reused before new ones are handed out, so the slot range stays
//! as small as the number of chunks resident at once.

use std::collections::{HashMap, VecDeque};

use cgmath::Point2;

/// Slot bookkeeping for chunks uploaded to a renderer.
#[derive(Debug)]
pub struct ChunkIndexState {
    chunk_position_to_slot: HashMap<Point2<i32>, u32>,
    available_slots: VecDeque<u32>,
    capacity: u32,
}

impl ChunkIndexState {
    /// Creates a registry with `capacity` free slots.
    pub fn new(capacity: u32) -> Self {
        ChunkIndexState {
            chunk_position_to_slot: HashMap::new(),
            available_slots: (0..capacity).collect(),
            capacity,
        }
    }

    /// Slots needed to hold every chunk of a render distance twice over, so
    /// chunks awaiting release never starve newly generated ones.
    pub fn capacity_for_render_distance(render_distance: i32) -> u32 {
        let side = (2 * render_distance.max(1) - 1) as u32;
        side * side * 2
    }

    /// Assigns a slot to `chunk_position`, reusing its current one if it is
    /// already loaded. `None` when every slot is taken.
    pub fn load_chunk_position(&mut self, chunk_position: Point2<i32>) -> Option<u32> {
        if let Some(&slot) = self.chunk_position_to_slot.get(&chunk_position) {
            return Some(slot);
        }
        let slot = self.available_slots.pop_front()?;
        self.chunk_position_to_slot.insert(chunk_position, slot);
        Some(slot)
    }

    /// Frees the slot held by `chunk_position`, returning it.
    pub fn unload_chunk_position(&mut self, chunk_position: Point2<i32>) -> Option<u32> {
        let slot = self.chunk_position_to_slot.remove(&chunk_position)?;
        self.available_slots.push_back(slot);
        Some(slot)
    }

    /// Adds `additional` fresh slots past the current capacity.
    pub fn grow(&mut self, additional: u32) {
        let end = self.capacity.saturating_add(additional);
        self.available_slots.extend(self.capacity..end);
        self.capacity = end;
    }

    pub fn can_allocate_index(&self) -> bool {
        !self.available_slots.is_empty()
    }

    pub fn get_index_for_position(&self, chunk_position: Point2<i32>) -> Option<u32> {
        self.chunk_position_to_slot.get(&chunk_position).copied()
    }

    /// Number of slots in use.
    pub fn len(&self) -> usize {
        self.chunk_position_to_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunk_position_to_slot.is_empty()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
