//! Session Context
//!
//! Credentials owned by the auth component, provided via Leptos Context API.

use leptos::prelude::*;
use todo_sync::SessionIdentity;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const USER_ID_KEY: &str = "userId";

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub access_token: RwSignal<String>,
    pub user_id: RwSignal<String>,
}

impl SessionContext {
    /// Seed from what the auth component left in localStorage
    pub fn from_local_storage() -> Self {
        Self {
            access_token: RwSignal::new(read_storage(ACCESS_TOKEN_KEY).unwrap_or_default()),
            user_id: RwSignal::new(read_storage(USER_ID_KEY).unwrap_or_default()),
        }
    }

    /// Tracked read; effects using it rerun on credential change
    pub fn snapshot(&self) -> SessionIdentity {
        SessionIdentity::new(self.access_token.get(), self.user_id.get())
    }

    /// Read for event handlers, outside any reactive scope
    pub fn snapshot_untracked(&self) -> SessionIdentity {
        SessionIdentity::new(self.access_token.get_untracked(), self.user_id.get_untracked())
    }

    /// Follow sign-in/out performed in other tabs
    pub fn follow_storage_events(&self) {
        let session = *self;
        let _ = window_event_listener(leptos::ev::storage, move |ev| {
            let value = ev.new_value().unwrap_or_default();
            match ev.key().as_deref() {
                Some(ACCESS_TOKEN_KEY) => session.access_token.set(value),
                Some(USER_ID_KEY) => session.user_id.set(value),
                // `localStorage.clear()` reports no key
                None => {
                    session.access_token.set(String::new());
                    session.user_id.set(String::new());
                }
                _ => {}
            }
        });
    }
}

fn read_storage(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}
