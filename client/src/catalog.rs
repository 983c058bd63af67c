use hvs_shared::SystemRecord;

/// Where a system's node hangs on the decorative tree. Fixed per system;
/// also decides which way the node's choice popup opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSlot {
    BranchLeft,
    BranchRight,
    TrunkUpper,
    TrunkMiddle,
    TrunkLower,
}

impl TreeSlot {
    pub fn is_branch(self) -> bool {
        matches!(self, Self::BranchLeft | Self::BranchRight)
    }

    /// Branch nodes sit high in the canopy, so their popup opens downward;
    /// trunk nodes open upward.
    pub fn popup_opens_below(self) -> bool {
        self.is_branch()
    }
}

/// Static display metadata for one system. The catalog is fixed at build
/// time; backend data (`SystemRecord`) is merged in by id at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// Pictogram name resolved through `icons::pictogram_markup`.
    pub icon: &'static str,
    pub color: &'static str,
    pub glow_color: &'static str,
    pub slot: TreeSlot,
}

/// Fallback for ids the catalog does not know. Navigation never fails on an
/// unknown id; it resolves to this system instead.
pub const DEFAULT_SYSTEM_ID: &str = "hvs-umea";

/// All systems, in tree order: the branch pair first, then the trunk from
/// canopy to root.
pub const CATALOG: [SystemDescriptor; 5] = [
    SystemDescriptor {
        id: "hvs-gate",
        name: "HVS-GATE",
        icon: "monitor",
        color: "#F59E0B",
        glow_color: "rgba(245, 158, 11, 0.5)",
        slot: TreeSlot::BranchLeft,
    },
    SystemDescriptor {
        id: "hvs-kios-lite",
        name: "HVS-KIOS LITE",
        icon: "smartphone",
        color: "#EC4899",
        glow_color: "rgba(236, 72, 153, 0.5)",
        slot: TreeSlot::BranchRight,
    },
    SystemDescriptor {
        id: "hvs-food",
        name: "HVS-FOOD",
        icon: "utensils",
        color: "#10B981",
        glow_color: "rgba(16, 185, 129, 0.5)",
        slot: TreeSlot::TrunkUpper,
    },
    SystemDescriptor {
        id: "hvs-kios",
        name: "HVS-KIOS",
        icon: "network",
        color: "#06B6D4",
        glow_color: "rgba(6, 182, 212, 0.5)",
        slot: TreeSlot::TrunkMiddle,
    },
    SystemDescriptor {
        id: "hvs-umea",
        name: "HVS-UMEA",
        icon: "database",
        color: "#A855F7",
        glow_color: "rgba(168, 85, 247, 0.5)",
        slot: TreeSlot::TrunkLower,
    },
];

pub fn find(id: &str) -> Option<&'static SystemDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Total lookup: unknown ids resolve to the default descriptor.
pub fn lookup(id: &str) -> &'static SystemDescriptor {
    find(id).unwrap_or_else(default_descriptor)
}

pub fn default_descriptor() -> &'static SystemDescriptor {
    // DEFAULT_SYSTEM_ID is always a catalog entry (asserted in tests).
    find(DEFAULT_SYSTEM_ID).unwrap_or(&CATALOG[0])
}

/// Pair catalog entries, in tree order, with the backend records that match
/// them. Systems the backend did not report are skipped; records with ids
/// outside the catalog are ignored.
pub fn merge_records(records: &[SystemRecord]) -> Vec<(&'static SystemDescriptor, SystemRecord)> {
    CATALOG
        .iter()
        .filter_map(|desc| {
            records
                .iter()
                .find(|r| r.id == desc.id)
                .map(|r| (desc, r.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> SystemRecord {
        SystemRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            group: None,
            app_link: None,
            has_doc: false,
        }
    }

    #[test]
    fn lookup_returns_exact_descriptor_for_known_ids() {
        assert_eq!(lookup("hvs-umea").name, "HVS-UMEA");
        assert_eq!(lookup("hvs-umea").color, "#A855F7");
        assert_eq!(lookup("hvs-kios").name, "HVS-KIOS");
        assert_eq!(lookup("hvs-kios").glow_color, "rgba(6, 182, 212, 0.5)");
        assert_eq!(lookup("hvs-food").icon, "utensils");
        assert_eq!(lookup("hvs-gate").color, "#F59E0B");
        assert_eq!(lookup("hvs-kios-lite").name, "HVS-KIOS LITE");
    }

    #[test]
    fn lookup_falls_back_to_named_default() {
        assert_eq!(lookup("no-such-system").id, DEFAULT_SYSTEM_ID);
        assert_eq!(lookup("").id, DEFAULT_SYSTEM_ID);
    }

    #[test]
    fn default_id_is_in_the_catalog() {
        assert_eq!(default_descriptor().id, DEFAULT_SYSTEM_ID);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_pictogram_resolves() {
        for desc in &CATALOG {
            assert!(
                crate::icons::pictogram_markup(desc.icon).is_some(),
                "{} names an unknown pictogram",
                desc.id
            );
        }
    }

    #[test]
    fn branch_popups_open_below_trunk_popups_above() {
        assert!(TreeSlot::BranchLeft.popup_opens_below());
        assert!(TreeSlot::BranchRight.popup_opens_below());
        assert!(!TreeSlot::TrunkUpper.popup_opens_below());
        assert!(!TreeSlot::TrunkMiddle.popup_opens_below());
        assert!(!TreeSlot::TrunkLower.popup_opens_below());
    }

    #[test]
    fn merge_keeps_tree_order_and_presence() {
        let records = vec![record("hvs-umea"), record("hvs-food")];
        let merged = merge_records(&records);
        let ids: Vec<&str> = merged.iter().map(|(d, _)| d.id).collect();
        assert_eq!(ids, vec!["hvs-food", "hvs-umea"]);
    }

    #[test]
    fn merge_ignores_ids_outside_the_catalog() {
        let records = vec![record("hvs-made-up"), record("hvs-gate")];
        let merged = merge_records(&records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].0.id, "hvs-gate");
    }

    #[test]
    fn merge_of_empty_response_is_empty() {
        assert!(merge_records(&[]).is_empty());
    }
}
