use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of a language-model operation.
///
/// `mock` is set when the value is a canned fallback, either because no
/// model is configured or because the model call failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Generated<T> {
    pub output: T,
    pub mock: bool,
}

impl<T> Generated<T> {
    pub fn live(output: T) -> Self {
        Self {
            output,
            mock: false,
        }
    }

    pub fn mock(output: T) -> Self {
        Self { output, mock: true }
    }
}
