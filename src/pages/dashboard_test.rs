use super::*;

fn labels(role: Role) -> Vec<&'static str> {
    menu_for(role).into_iter().map(|m| m.label).collect()
}

#[test]
fn member_menu_has_no_privileged_entries() {
    let labels = labels(Role::Member);
    assert_eq!(labels, ["Overview", "Community"]);
}

#[test]
fn trainer_menu_adds_class_management() {
    assert!(labels(Role::Trainer).contains(&"My classes"));
    assert!(!labels(Role::Trainer).contains(&"Admin console"));
}

#[test]
fn admin_menu_adds_admin_console() {
    // Signing in with an admin role makes the admin-only entries visible.
    let labels = labels(Role::Admin);
    assert!(labels.contains(&"Admin console"));
    assert!(!labels.contains(&"My classes"));
}

#[test]
fn every_menu_starts_with_overview() {
    for role in [Role::Member, Role::Trainer, Role::Admin] {
        assert_eq!(menu_for(role)[0].href, "/dashboard");
    }
}
