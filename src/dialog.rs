//! Acknowledgment Dialog
//!
//! Blocking browser alert used to confirm completed actions.

use async_trait::async_trait;
use todo_sync::{Acknowledger, Notice};

pub struct AlertAcknowledger;

#[async_trait(?Send)]
impl Acknowledger for AlertAcknowledger {
    async fn acknowledge(&self, notice: Notice) {
        let message = format!("{}\n\n{}", notice.title(), notice.text());
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    }
}
