use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::Mutable;
use futures_signals::signal_vec::{MutableVec, SignalVecExt};

use crate::config::NotificationTimings;
use crate::constants::{ICON_CHECK, ICON_EXCLAMATION};
use crate::runtime::{sleep, spawn_abortable, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => ICON_CHECK,
            NotificationKind::Error | NotificationKind::Info => ICON_EXCLAMATION,
        }
    }
}

pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Drives the `show` class and with it the CSS transition.
    pub visible: Mutable<bool>,
    lifecycle: Mutable<Option<TaskHandle>>,
}

/// Transient messages stacked in one container, each on its own timer.
pub struct Notifications {
    next_id: AtomicU64,
    items: MutableVec<Arc<Notification>>,
    timings: NotificationTimings,
}

impl Notifications {
    pub fn new(timings: NotificationTimings) -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicU64::new(1),
            items: MutableVec::new(),
            timings,
        })
    }

    pub fn show(self: &Arc<Self>, message: impl Into<String>, kind: NotificationKind) -> Arc<Notification> {
        let notification = Arc::new(Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
            visible: Mutable::new(false),
            lifecycle: Mutable::new(None),
        });
        log::debug!("Notification {} ({}): {}", notification.id, kind.class(), notification.message);

        self.items.lock_mut().push_cloned(notification.clone());

        let timings = self.timings;
        let center = self.clone();
        let entry = notification.clone();
        let lifecycle = spawn_abortable(async move {
            sleep(timings.fade_in_delay()).await;
            entry.visible.set_neq(true);
            sleep(timings.display()).await;
            entry.visible.set_neq(false);
            sleep(timings.fade_out()).await;
            center.remove(entry.id);
        });
        notification.lifecycle.set(Some(lifecycle));

        notification
    }

    pub fn success(self: &Arc<Self>, message: impl Into<String>) -> Arc<Notification> {
        self.show(message, NotificationKind::Success)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<String>) -> Arc<Notification> {
        self.show(message, NotificationKind::Error)
    }

    pub fn info(self: &Arc<Self>, message: impl Into<String>) -> Arc<Notification> {
        self.show(message, NotificationKind::Info)
    }

    /// Removes a notification now and stops its timers.
    pub fn dismiss(&self, id: u64) {
        let found = self.items.lock_ref().iter().find(|n| n.id == id).cloned();
        if let Some(notification) = found {
            if let Some(lifecycle) = notification.lifecycle.replace(None) {
                lifecycle.cancel();
            }
            self.remove(id);
        }
    }

    fn remove(&self, id: u64) {
        self.items.lock_mut().retain(|n| n.id != id);
    }

    pub fn snapshot(&self) -> Vec<Arc<Notification>> {
        self.items.lock_ref().to_vec()
    }

    pub fn len(&self) -> usize {
        self.items.lock_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let center = self.clone();
        html!("div", {
            .class("notifications")
            .children_signal_vec(self.items.signal_vec_cloned().map(move |notification| {
                Self::render_notification(&center, notification)
            }))
        })
    }

    fn render_notification(center: &Arc<Self>, notification: Arc<Notification>) -> Dom {
        html!("div", {
            .class(["notification", notification.kind.class()])
            .class_signal("show", notification.visible.signal())
            .event(clone!(center, notification => move |_: events::Click| {
                center.dismiss(notification.id);
            }))
            .children(&mut [
                html!("i", {
                    .class(["fas", notification.kind.icon()])
                }),
                html!("span", {
                    .text(&notification.message)
                }),
            ])
        })
    }
}
