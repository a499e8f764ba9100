use leptos::*;
use uuid::Uuid;

#[cfg(target_arch = "wasm32")]
const AUTO_CLOSE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
    Warning,
}

impl AlertKind {
    pub fn classes(&self) -> &'static str {
        match self {
            AlertKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            AlertKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
            AlertKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
            AlertKind::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertOptions {
    pub keep_after_route_change: bool,
    pub auto_close: bool,
}

impl AlertOptions {
    pub fn keep_after_route_change() -> Self {
        Self {
            keep_after_route_change: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub message: String,
    pub keep_after_route_change: bool,
    pub auto_close: bool,
}

/// Page-wide notification channel. Cheap to copy; every copy shares the same
/// list.
#[derive(Debug, Clone, Copy)]
pub struct AlertService {
    alerts: RwSignal<Vec<Alert>>,
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            alerts: create_rw_signal(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Signal<Vec<Alert>> {
        self.alerts.into()
    }

    pub fn success(&self, message: impl Into<String>, options: AlertOptions) -> Uuid {
        self.alert(AlertKind::Success, message, options)
    }

    pub fn info(&self, message: impl Into<String>, options: AlertOptions) -> Uuid {
        self.alert(AlertKind::Info, message, options)
    }

    pub fn warn(&self, message: impl Into<String>, options: AlertOptions) -> Uuid {
        self.alert(AlertKind::Warning, message, options)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.alert(AlertKind::Error, message, AlertOptions::default())
    }

    pub fn alert(&self, kind: AlertKind, message: impl Into<String>, options: AlertOptions) -> Uuid {
        let alert = Alert {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            keep_after_route_change: options.keep_after_route_change,
            auto_close: options.auto_close,
        };
        let id = alert.id;
        self.alerts.update(|alerts| alerts.push(alert));
        if options.auto_close {
            self.schedule_auto_close(id);
        }
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_auto_close(&self, id: Uuid) {
        let service = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_CLOSE_MS).await;
            service.dismiss(id);
        });
    }

    // Timers only exist in the browser; host renders keep the alert.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_auto_close(&self, _id: Uuid) {}

    pub fn dismiss(&self, id: Uuid) {
        self.alerts.update(|alerts| alerts.retain(|a| a.id != id));
    }

    pub fn clear(&self) {
        self.alerts.update(|alerts| alerts.clear());
    }

    /// Drops alerts bound to the previous route. Kept alerts lose the flag,
    /// so they go away on the following change.
    pub fn on_route_change(&self) {
        self.alerts.update(|alerts| {
            alerts.retain(|a| a.keep_after_route_change);
            for alert in alerts.iter_mut() {
                alert.keep_after_route_change = false;
            }
        });
    }
}

pub fn provide_alert_service() -> AlertService {
    let service = AlertService::new();
    provide_context(service);
    service
}

pub fn use_alert_service() -> AlertService {
    use_context::<AlertService>().unwrap_or_else(provide_alert_service)
}
