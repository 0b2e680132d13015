// Licensed under the Apache-2.0 license

//! Device tree node lookups and register window mapping.
//!
//! Node references and register mappings are owned values: a [`Node`]
//! releases its reference and an [`IoMem`] unmaps its window when dropped,
//! so every exit path of a caller is balanced.

use core::mem::{align_of, size_of};
use core::ops::Deref;
use core::ptr::NonNull;
use mxc_error::SocError;

/// Opaque index of a node inside a [`DeviceTree`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId(pub usize);

/// One `reg` entry of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resource {
    pub start: usize,
    pub size: usize,
}

/// Backend giving access to the boot-time hardware description.
///
/// # Safety
///
/// A pointer returned by [`DeviceTree::ioremap`] must be valid for volatile
/// accesses over `resource.size` bytes until it is handed back to
/// [`DeviceTree::iounmap`].
pub unsafe trait DeviceTree {
    /// First node after `prev` (in tree order, or from the start when `prev`
    /// is `None`) listing `compat` in its `compatible` property. A reference
    /// is held on the returned node.
    fn find_compatible_after(&self, prev: Option<NodeId>, compat: &str) -> Option<NodeId>;

    /// Node at the absolute `path`, with a reference held on it.
    fn find_by_path(&self, path: &str) -> Option<NodeId>;

    fn node_get(&self, node: NodeId);

    fn node_put(&self, node: NodeId);

    fn is_compatible(&self, node: NodeId, compat: &str) -> bool;

    /// Raw value of property `name`.
    fn property(&self, node: NodeId, name: &str) -> Option<&[u8]>;

    /// Register region `index` of the node.
    fn resource(&self, node: NodeId, index: usize) -> Option<Resource>;

    fn ioremap(&self, resource: Resource) -> Option<NonNull<u8>>;

    fn iounmap(&self, base: NonNull<u8>, size: usize);
}

/// A referenced device tree node.
pub struct Node<'t> {
    tree: &'t dyn DeviceTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    /// Wraps a node whose reference the caller already holds.
    pub fn from_acquired(tree: &'t dyn DeviceTree, id: NodeId) -> Node<'t> {
        Node { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_compatible(&self, compat: &str) -> bool {
        self.tree.is_compatible(self.id, compat)
    }

    pub fn property(&self, name: &str) -> Option<&'t [u8]> {
        let tree = self.tree;
        tree.property(self.id, name)
    }

    /// Reads a string property, dropping the NUL terminator if present.
    pub fn read_string(&self, name: &str) -> Result<&'t str, SocError> {
        let raw = self.property(name).ok_or(SocError::PropertyMissing)?;
        let raw = match raw.iter().position(|&b| b == 0) {
            Some(end) => &raw[..end],
            None => raw,
        };
        core::str::from_utf8(raw).map_err(|_| SocError::InvalidProperty)
    }

    /// Maps register region `index` as a register block `R`.
    pub fn iomap<R>(&self, index: usize) -> Result<IoMem<'t, R>, SocError> {
        let resource = self
            .tree
            .resource(self.id, index)
            .ok_or(SocError::MapFailed)?;
        if resource.size < size_of::<R>() {
            log::debug!(
                "region {} of node {:?} too small: {:#x} < {:#x}",
                index,
                self.id,
                resource.size,
                size_of::<R>()
            );
            return Err(SocError::MapFailed);
        }
        let base = self.tree.ioremap(resource).ok_or(SocError::MapFailed)?;
        if base.as_ptr() as usize % align_of::<R>() != 0 {
            self.tree.iounmap(base, resource.size);
            return Err(SocError::MapFailed);
        }
        Ok(IoMem {
            tree: self.tree,
            base: base.cast(),
            size: resource.size,
        })
    }
}

impl Clone for Node<'_> {
    fn clone(&self) -> Self {
        self.tree.node_get(self.id);
        Node {
            tree: self.tree,
            id: self.id,
        }
    }
}

impl Drop for Node<'_> {
    fn drop(&mut self) {
        self.tree.node_put(self.id);
    }
}

impl core::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Node").field(&self.id).finish()
    }
}

/// A mapped register window, unmapped on drop.
pub struct IoMem<'t, R> {
    tree: &'t dyn DeviceTree,
    base: NonNull<R>,
    size: usize,
}

impl<R> IoMem<'_, R> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Keeps the window mapped for the rest of the program.
    pub fn into_static_ref(self) -> crate::StaticRef<R> {
        let ptr = self.base.as_ptr();
        core::mem::forget(self);
        // SAFETY: the mapping is never handed back to `iounmap`.
        unsafe { crate::StaticRef::new(ptr) }
    }
}

impl<R> Deref for IoMem<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        // SAFETY: `DeviceTree` implementors guarantee the window stays valid
        // until `iounmap`, and `iomap` checked size and alignment.
        unsafe { self.base.as_ref() }
    }
}

impl<R> Drop for IoMem<'_, R> {
    fn drop(&mut self) {
        self.tree.iounmap(self.base.cast(), self.size);
    }
}

pub fn find_compatible_node<'t>(tree: &'t dyn DeviceTree, compat: &str) -> Option<Node<'t>> {
    tree.find_compatible_after(None, compat)
        .map(|id| Node::from_acquired(tree, id))
}

pub fn find_node_by_path<'t>(tree: &'t dyn DeviceTree, path: &str) -> Option<Node<'t>> {
    tree.find_by_path(path)
        .map(|id| Node::from_acquired(tree, id))
}

/// Iterates over every node compatible with `compat`, in tree order.
pub fn compatible_nodes<'t, 'c>(
    tree: &'t dyn DeviceTree,
    compat: &'c str,
) -> CompatibleNodes<'t, 'c> {
    CompatibleNodes {
        tree,
        compat,
        prev: None,
        done: false,
    }
}

pub struct CompatibleNodes<'t, 'c> {
    tree: &'t dyn DeviceTree,
    compat: &'c str,
    prev: Option<NodeId>,
    done: bool,
}

impl<'t> Iterator for CompatibleNodes<'t, '_> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        if self.done {
            return None;
        }
        match self.tree.find_compatible_after(self.prev, self.compat) {
            Some(id) => {
                self.prev = Some(id);
                Some(Node::from_acquired(self.tree, id))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
