// Licensed under the Apache-2.0 license

use crate::{allow_unprivileged_access, print_silicon_rev, soc_id_for, PlatformIdentity};
use mxc_boottime::DeviceTree;

/// Early machine setup: reports the identified CPU and opens up every AIPS
/// bridge matching `aips_compatible`.
///
/// Returns the number of bridges configured.
pub fn early_init(
    tree: &dyn DeviceTree,
    identity: &PlatformIdentity,
    aips_compatible: &str,
) -> usize {
    print_silicon_rev(
        soc_id_for(identity.chip(), identity.revision()),
        identity.revision(),
    );
    let configured = allow_unprivileged_access(tree, aips_compatible);
    if configured == 0 {
        log::warn!("no AIPS bridge configured for {}", aips_compatible);
    }
    configured
}
