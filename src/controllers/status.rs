use heapless::String;

use crate::domain::entity::ControlState;

/// Capacity of the status report
pub const STATUS_CAPACITY: usize = 64;

/// Control state as `{"sat":S,"val":V,"mode":"manual"|"effect"}`
pub fn status_json(
    state: &ControlState,
) -> Result<String<STATUS_CAPACITY>, serde_json_core::ser::Error> {
    serde_json_core::to_string(state)
}
