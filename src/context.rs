//! Application Context
//!
//! Shared state provided via Leptos Context API: current route, the toast
//! slot, and the menu reload trigger.

use leptos::prelude::*;

/// Views reachable from the nav bar or by navigation side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Menu,
    Login,
    Register,
    OrderHistory,
    OrderDetail(u32),
    ChefDashboard,
}

/// Toast severity, drives styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One transient notification. `seq` ties a dismiss timer to the notice it
/// was started for, so a newer toast is never cut short by an older timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Active toast, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    /// Trigger to refetch the menu - read
    pub menu_reload: ReadSignal<u32>,
    set_menu_reload: WriteSignal<u32>,
    notice_seq: ReadSignal<u32>,
    set_notice_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
        menu_reload: (ReadSignal<u32>, WriteSignal<u32>),
        notice_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            notice: notice.0,
            set_notice: notice.1,
            menu_reload: menu_reload.0,
            set_menu_reload: menu_reload.1,
            notice_seq: notice_seq.0,
            set_notice_seq: notice_seq.1,
        }
    }

    /// Switch views
    pub fn goto(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Show a toast, replacing any visible one
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        self.set_notice_seq.update(|v| *v += 1);
        let seq = self.notice_seq.get_untracked();
        self.set_notice.set(Some(Notice {
            text: text.into(),
            kind,
            seq,
        }));
    }

    /// Clear the toast, but only if it is still the one the caller saw
    pub fn dismiss(&self, seq: u32) {
        self.set_notice.update(|current| {
            if current.as_ref().is_some_and(|n| n.seq == seq) {
                *current = None;
            }
        });
    }

    /// Trigger a refetch of the menu
    pub fn reload_menu(&self) {
        self.set_menu_reload.update(|v| *v += 1);
    }
}
