use super::*;

// =============================================================
// Theme flag
// =============================================================

#[test]
fn theme_round_trips_through_stored_flag() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::Dark.stored_value(), "dark");
}

#[test]
fn unknown_stored_value_is_rejected() {
    assert_eq!(Theme::from_stored("true"), None);
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn flip_alternates() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

// =============================================================
// Toast queue
// =============================================================

#[test]
fn toasts_queue_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "first");
    let b = state.push(ToastKind::Error, "second");
    assert_ne!(a, b);

    let messages: Vec<_> = state.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "keep");
    let b = state.push(ToastKind::Error, "drop");
    state.dismiss(b);

    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, a);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "only");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}
