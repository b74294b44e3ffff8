use serde::{Deserialize, Serialize};

/// Indeterminate spinner + label shown instead of data while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingOverlay {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_spinner_color")]
    pub color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_mask_color")]
    pub mask_color: String,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self {
            text: default_text(),
            color: default_spinner_color(),
            text_color: default_text_color(),
            mask_color: default_mask_color(),
        }
    }
}

fn default_text() -> String {
    "Loading...".to_owned()
}

fn default_spinner_color() -> String {
    "#ef4444".to_owned()
}

fn default_text_color() -> String {
    "#ffffff".to_owned()
}

fn default_mask_color() -> String {
    "rgba(0, 0, 0, 0.8)".to_owned()
}
