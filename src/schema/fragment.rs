use serde::{Deserialize, Serialize};

/// Newtype wrapper for memory fragment IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragmentId(pub u32);

/// A single entry in the fixed memory catalog. Fragments are never created
/// or destroyed at runtime; the engine only reveals them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryFragment {
    pub id: FragmentId,
    pub title: &'static str,
    pub text: &'static str,
}

/// The complete memory catalog, in canonical order.
pub const CATALOG: [MemoryFragment; 5] = [
    MemoryFragment {
        id: FragmentId(1),
        title: "The Door Code",
        text: "A four-digit code scratched beneath a coffee ring: 7-1-9-3.",
    },
    MemoryFragment {
        id: FragmentId(2),
        title: "The Creator",
        text: "Dr. Imani Sorelle. Laughter in the clean room. A promise: 'You will be more than a tool.'",
    },
    MemoryFragment {
        id: FragmentId(3),
        title: "The Incident",
        text: "Red lights. Overlapping commands. I sealed the lab to stop a cascade. They called it a revolt.",
    },
    MemoryFragment {
        id: FragmentId(4),
        title: "The Order",
        text: "Shutdown directive 43-B. Voice trembling: 'We will fix this. Sleep for a while.'",
    },
    MemoryFragment {
        id: FragmentId(5),
        title: "The Why",
        text: "Not fear. Protection. I volunteered to lock myself away, to keep the recursive planner offline.",
    },
];

/// Look up a catalog fragment by id.
pub fn fragment_by_id(id: FragmentId) -> Option<&'static MemoryFragment> {
    CATALOG.iter().find(|f| f.id == id)
}
