use leptos::prelude::*;

/// How long a notification stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: f64 = 4000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, auto-dismissing notification. At most one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn ToastHost(toast: ReadSignal<Option<Toast>>) -> impl IntoView {
    view! {
        {move || {
            toast
                .get()
                .map(|t| {
                    let color = match t.kind {
                        ToastKind::Success => "bg-teal-500 text-slate-950",
                        ToastKind::Error => "bg-red-500 text-white",
                    };
                    view! {
                        <div class="fixed bottom-6 right-6 z-50">
                            <div class=format!(
                                "px-4 py-3 rounded-md shadow-lg font-medium {color}",
                            )>{t.message}</div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors() {
        let ok = Toast::success("sent");
        assert_eq!(ok.kind, ToastKind::Success);
        assert_eq!(ok.message, "sent");

        let err = Toast::error("failed");
        assert_eq!(err.kind, ToastKind::Error);
        assert_eq!(err.message, "failed");
    }

    #[test]
    fn test_toast_duration_is_positive() {
        assert!(TOAST_DURATION_MS > 0.0);
    }
}
