//! Display priority of Roshan drops.

/// Roshan drops, highest priority first.
pub const ROSHAN_DROP_PRIORITY: [(&str, u8); 5] = [
    // Permanent respawn
    ("aegis", 5),
    // Second ultimate upgrade
    ("ultimate_scepter_roshan", 4),
    // Cooldown refresh
    ("refresher_shard", 3),
    // Shard upgrade
    ("aghanims_shard_roshan", 2),
    // Stealth consumable. The shipped catalog sells it in the shop and does
    // not flag it as a drop, so this rank only applies to catalogs that do.
    ("smoke_of_deceit", 1),
];

/// Priority of a Roshan drop; 0 for anything not in the table.
pub fn roshan_drop_rank(key: &str) -> u8 {
    ROSHAN_DROP_PRIORITY
        .iter()
        .find(|(drop, _)| *drop == key)
        .map_or(0, |(_, rank)| *rank)
}

/// Sorts keys by descending Roshan priority, then by key.
pub fn sort_roshan_drops<S: AsRef<str>>(keys: &mut [S]) {
    keys.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());
        roshan_drop_rank(b)
            .cmp(&roshan_drop_rank(a))
            .then_with(|| a.cmp(b))
    });
}
