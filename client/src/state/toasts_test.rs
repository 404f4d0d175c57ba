use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "✅ Заявка отправлена!");
    let b = state.push(NoticeKind::Error, "Заполни имя и email!");
    assert!(a < b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "one");
    let b = state.push(NoticeKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let mut state = ToastState::default();
    let _ = state.push(NoticeKind::Success, "one");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "one");
    state.dismiss(a);
    let b = state.push(NoticeKind::Success, "two");
    assert_ne!(a, b);
}
