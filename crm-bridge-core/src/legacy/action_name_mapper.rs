/// Legacy action used to display a single record.
pub const DETAIL_VIEW_ACTION: &str = "DetailView";

/// Legacy view actions and their front-end path segments.
const ACTION_NAME_MAP: &[(&str, &str)] = &[
    ("index", "index"),
    ("ListView", "list"),
    (DETAIL_VIEW_ACTION, "record"),
    ("EditView", "edit"),
    ("Import", "import"),
    ("Popup", "popup"),
    ("Create", "create"),
    ("SubPanelViewer", "subpanel"),
];

/// Translates legacy view actions into front-end route segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionNameMapper;

impl ActionNameMapper {
    pub fn new() -> Self {
        Self
    }

    /// Front-end segment for `action`; unknown actions pass through unchanged.
    pub fn to_front_end(&self, action: &str) -> String {
        ACTION_NAME_MAP
            .iter()
            .find(|(legacy, _)| *legacy == action)
            .map(|(_, front_end)| front_end.to_string())
            .unwrap_or_else(|| action.to_string())
    }

    pub fn is_valid_action(&self, action: &str) -> bool {
        ACTION_NAME_MAP.iter().any(|(legacy, _)| *legacy == action)
    }
}
