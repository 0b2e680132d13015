// Licensed under the Apache-2.0 license

//! Fixed-capacity SoC device registry with attribute lookup and
//! compatibility matching.

use crate::{SocAttributes, SocDeviceRegistry};
use arrayvec::ArrayVec;
use mxc_error::SocError;

/// Handle of a registered SoC device.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SocDeviceId(usize);

impl SocDeviceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry of a match table. Fields left `None` match anything; set
/// fields are glob patterns (`*` and `?`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SocDeviceMatch<'m> {
    pub machine: Option<&'m str>,
    pub family: Option<&'m str>,
    pub revision: Option<&'m str>,
    pub soc_id: Option<&'m str>,
}

impl SocDeviceMatch<'_> {
    fn is_empty(&self) -> bool {
        self.machine.is_none()
            && self.family.is_none()
            && self.revision.is_none()
            && self.soc_id.is_none()
    }

    fn matches(&self, attrs: &SocAttributes<'_>) -> bool {
        let field =
            |pattern: Option<&str>, value: &str| pattern.map_or(true, |p| glob_match(p, value));
        field(self.machine, attrs.machine)
            && field(self.family, attrs.family)
            && field(self.revision, attrs.revision.as_str())
            && field(self.soc_id, attrs.soc_id)
    }
}

/// Shell-style match of `s` against `pattern`: `*` matches any run of bytes,
/// `?` exactly one byte.
pub fn glob_match(pattern: &str, s: &str) -> bool {
    let (p, s) = (pattern.as_bytes(), s.as_bytes());
    let (mut pi, mut si) = (0, 0);
    // Pattern index after the last `*` and the input index it is tried at.
    let mut star: Option<(usize, usize)> = None;
    while si < s.len() {
        match p.get(pi) {
            Some(b'*') => {
                pi += 1;
                star = Some((pi, si));
            }
            Some(&c) if c == b'?' || c == s[si] => {
                pi += 1;
                si += 1;
            }
            _ => match star {
                Some((sp, ss)) => {
                    pi = sp;
                    si = ss + 1;
                    star = Some((sp, ss + 1));
                }
                None => return false,
            },
        }
    }
    p[pi..].iter().all(|&c| c == b'*')
}

/// Holds up to `N` SoC devices. Freed slots are reused, lowest first.
pub struct SocDeviceTable<'a, const N: usize> {
    slots: ArrayVec<Option<SocAttributes<'a>>, N>,
}

impl<'a, const N: usize> SocDeviceTable<'a, N> {
    pub fn new() -> Self {
        SocDeviceTable {
            slots: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attributes(&self, id: SocDeviceId) -> Result<&SocAttributes<'a>, SocError> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(SocError::UnknownDevice)
    }

    /// Looks up an attribute by its published name. `Ok(None)` for names
    /// that are not attributes and for an absent `serial_number`.
    pub fn attribute(&self, id: SocDeviceId, name: &str) -> Result<Option<&str>, SocError> {
        let attrs = self.attributes(id)?;
        Ok(match name {
            "family" => Some(attrs.family),
            "machine" => Some(attrs.machine),
            "soc_id" => Some(attrs.soc_id),
            "serial_number" => attrs.unique_id.as_ref().map(|uid| uid.as_str()),
            "revision" => Some(attrs.revision.as_str()),
            _ => None,
        })
    }

    /// Removes a device, handing its attributes back.
    pub fn unregister(&mut self, id: SocDeviceId) -> Result<SocAttributes<'a>, SocError> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(SocError::UnknownDevice)
    }

    /// First entry of `matches` that some registered device satisfies.
    ///
    /// An entry with no fields set ends the table.
    pub fn soc_device_match<'m>(
        &self,
        matches: &'m [SocDeviceMatch<'m>],
    ) -> Option<&'m SocDeviceMatch<'m>> {
        matches
            .iter()
            .take_while(|entry| !entry.is_empty())
            .find(|entry| self.slots.iter().flatten().any(|attrs| entry.matches(attrs)))
    }
}

impl<const N: usize> Default for SocDeviceTable<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> SocDeviceRegistry<'a> for SocDeviceTable<'a, N> {
    type Device = SocDeviceId;

    fn register(&mut self, attrs: SocAttributes<'a>) -> Result<SocDeviceId, SocError> {
        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(attrs);
                index
            }
            None => {
                self.slots
                    .try_push(Some(attrs))
                    .map_err(|_| SocError::RegistryFull)?;
                self.slots.len() - 1
            }
        };
        log::debug!("registered soc{}", index);
        Ok(SocDeviceId(index))
    }
}
