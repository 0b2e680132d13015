// Licensed under the Apache-2.0 license

//! Table-driven device tree for early boot.
//!
//! Nodes are described up front and register regions are identity mapped,
//! matching the flat physical address space seen before the MMU is set up.

use crate::{DeviceTree, NodeId, Resource};
use arrayvec::ArrayVec;
use core::cell::Cell;
use core::ptr::NonNull;
use mxc_error::SocError;

pub const MAX_COMPATIBLE: usize = 4;
pub const MAX_REGIONS: usize = 4;
pub const MAX_PROPERTIES: usize = 4;

/// Description of a single node.
#[derive(Clone, Debug)]
pub struct NodeDesc<'a> {
    path: &'a str,
    compatible: ArrayVec<&'a str, MAX_COMPATIBLE>,
    reg: ArrayVec<Resource, MAX_REGIONS>,
    properties: ArrayVec<(&'a str, &'a [u8]), MAX_PROPERTIES>,
}

impl<'a> NodeDesc<'a> {
    pub fn new(path: &'a str) -> NodeDesc<'a> {
        NodeDesc {
            path,
            compatible: ArrayVec::new(),
            reg: ArrayVec::new(),
            properties: ArrayVec::new(),
        }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn compatible(mut self, compat: &'a str) -> Result<Self, SocError> {
        self.compatible
            .try_push(compat)
            .map_err(|_| SocError::NoMemory)?;
        Ok(self)
    }

    /// Appends a register region.
    ///
    /// # Safety
    ///
    /// Unless `start` is zero (an unmappable region), `[start, start + size)`
    /// must be device memory, or plain memory, that stays valid for volatile
    /// accesses for as long as the tree is used.
    pub unsafe fn reg(mut self, start: usize, size: usize) -> Result<Self, SocError> {
        self.reg
            .try_push(Resource { start, size })
            .map_err(|_| SocError::NoMemory)?;
        Ok(self)
    }

    pub fn property(mut self, name: &'a str, value: &'a [u8]) -> Result<Self, SocError> {
        self.properties
            .try_push((name, value))
            .map_err(|_| SocError::NoMemory)?;
        Ok(self)
    }
}

/// Fixed-capacity device tree holding up to `N` nodes.
///
/// Keeps count of node references and mappings handed out so that
/// unbalanced callers can be detected.
pub struct FlatDeviceTree<'a, const N: usize> {
    nodes: ArrayVec<NodeDesc<'a>, N>,
    refs: Cell<usize>,
    mappings: Cell<usize>,
}

impl<'a, const N: usize> FlatDeviceTree<'a, N> {
    pub fn new() -> Self {
        FlatDeviceTree {
            nodes: ArrayVec::new(),
            refs: Cell::new(0),
            mappings: Cell::new(0),
        }
    }

    pub fn add_node(&mut self, node: NodeDesc<'a>) -> Result<NodeId, SocError> {
        let id = NodeId(self.nodes.len());
        self.nodes.try_push(node).map_err(|_| SocError::NoMemory)?;
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node references acquired and not yet released.
    pub fn outstanding_refs(&self) -> usize {
        self.refs.get()
    }

    /// Register windows mapped and not yet unmapped.
    pub fn live_mappings(&self) -> usize {
        self.mappings.get()
    }

    fn acquire(&self, id: NodeId) -> NodeId {
        self.refs.set(self.refs.get() + 1);
        id
    }

    fn node(&self, id: NodeId) -> Option<&NodeDesc<'a>> {
        self.nodes.get(id.0)
    }
}

impl<const N: usize> Default for FlatDeviceTree<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: regions are identity mapped and `NodeDesc::reg` requires them to
// stay valid for the life of the tree.
unsafe impl<const N: usize> DeviceTree for FlatDeviceTree<'_, N> {
    fn find_compatible_after(&self, prev: Option<NodeId>, compat: &str) -> Option<NodeId> {
        let start = prev.map_or(0, |p| p.0 + 1);
        self.nodes
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, node)| node.compatible.iter().any(|c| *c == compat))
            .map(|(i, _)| self.acquire(NodeId(i)))
    }

    fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.path == path)
            .map(|i| self.acquire(NodeId(i)))
    }

    fn node_get(&self, node: NodeId) {
        self.acquire(node);
    }

    fn node_put(&self, node: NodeId) {
        let refs = self.refs.get();
        debug_assert!(refs > 0, "unbalanced put of {:?}", node);
        self.refs.set(refs.saturating_sub(1));
    }

    fn is_compatible(&self, node: NodeId, compat: &str) -> bool {
        self.node(node)
            .is_some_and(|n| n.compatible.iter().any(|c| *c == compat))
    }

    fn property(&self, node: NodeId, name: &str) -> Option<&[u8]> {
        self.node(node)?
            .properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    fn resource(&self, node: NodeId, index: usize) -> Option<Resource> {
        self.node(node)?.reg.get(index).copied()
    }

    fn ioremap(&self, resource: Resource) -> Option<NonNull<u8>> {
        let base = NonNull::new(resource.start as *mut u8)?;
        self.mappings.set(self.mappings.get() + 1);
        Some(base)
    }

    fn iounmap(&self, _base: NonNull<u8>, _size: usize) {
        let mappings = self.mappings.get();
        debug_assert!(mappings > 0, "unbalanced unmap");
        self.mappings.set(mappings.saturating_sub(1));
    }
}
