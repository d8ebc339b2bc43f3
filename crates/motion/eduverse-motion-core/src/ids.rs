//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

/// Handle for a host element whose bounds participate in trigger evaluation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u32);

/// Uniform token returned by every registration kind; passed to `unregister`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BindingToken(pub u32);

/// Viewport observer subscription id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SubId(pub u32);

/// Monotonic allocator for ElementHandle, BindingToken, and SubId.
/// Dense indices improve cache locality; ids are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_element: u32,
    next_binding: u32,
    next_sub: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_element(&mut self) -> ElementHandle {
        let id = ElementHandle(self.next_element);
        self.next_element = self.next_element.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_binding(&mut self) -> BindingToken {
        let id = BindingToken(self.next_binding);
        self.next_binding = self.next_binding.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_sub(&mut self) -> SubId {
        let id = SubId(self.next_sub);
        self.next_sub = self.next_sub.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_element(), ElementHandle(0));
        assert_eq!(alloc.alloc_element(), ElementHandle(1));
        assert_eq!(alloc.alloc_binding(), BindingToken(0));
        assert_eq!(alloc.alloc_binding(), BindingToken(1));
        assert_eq!(alloc.alloc_sub(), SubId(0));
        assert_eq!(alloc.alloc_sub(), SubId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_element(), ElementHandle(0));
    }
}
