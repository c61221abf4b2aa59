// SPDX-License-Identifier: MPL-2.0
use grimoire::app::persisted_state::StateStore;
use grimoire::timer::ManualScheduler;
use grimoire::ui::widgets::confirm_dialog::{self, Event};
use grimoire::ui::widgets::dropdown;
use grimoire::ui::widgets::{
    Bounds, ConfirmDialog, DialogPhase, HitTest, MultiSelect, SelectOption, Sidebar, SidebarItem,
    SingleSelect,
};
use iced::Point;
use std::sync::Arc;
use tempfile::tempdir;

fn sizes() -> Vec<SelectOption<&'static str>> {
    vec![
        SelectOption::new("s", "Small"),
        SelectOption::new("m", "Medium"),
        SelectOption::new("l", "Large"),
    ]
}

fn root() -> Bounds {
    Bounds::new(10.0, 10.0, 200.0, 40.0)
}

#[test]
fn single_select_closes_only_on_outside_press() {
    let mut select = SingleSelect::new(sizes(), Arc::new(ManualScheduler::new()));
    select.update(dropdown::Message::Toggle);
    assert!(select.is_open());

    assert!(!select.pointer_pressed(Point::new(50.0, 30.0), &root()));
    assert!(select.is_open());

    assert!(select.pointer_pressed(Point::new(400.0, 30.0), &root()));
    assert!(!select.is_open());
}

#[test]
fn multi_select_stays_open_while_picking() {
    let mut select = MultiSelect::new(sizes(), Arc::new(ManualScheduler::new()));
    select.update(dropdown::Message::Toggle);
    select.update(dropdown::Message::Select("m"));
    select.update(dropdown::Message::Select("l"));
    assert!(select.is_open());
    assert_eq!(select.selected_labels(), ["Medium", "Large"]);

    select.update(dropdown::Message::Remove("m"));
    assert_eq!(select.values(), ["l"]);

    // Any closure works as a hit test.
    let inside_nothing = |_: Point| false;
    assert!(select.pointer_pressed(Point::ORIGIN, &inside_nothing));
    assert!(!select.is_open());
}

#[test]
fn disabled_dropdowns_never_open() {
    let mut single =
        SingleSelect::new(sizes(), Arc::new(ManualScheduler::new())).disabled(true);
    single.toggle();
    assert!(!single.is_open());
    assert!(!single.select(&"s"));

    let mut multi = MultiSelect::new(sizes(), Arc::new(ManualScheduler::new())).disabled(true);
    multi.update(dropdown::Message::Toggle);
    assert!(!multi.is_open());
}

#[test]
fn unknown_values_are_ignored() {
    let mut select = SingleSelect::new(sizes(), Arc::new(ManualScheduler::new()));
    assert!(!select.select(&"xl"));
    assert_eq!(select.value(), None);
}

#[test]
fn bounds_hit_test_is_edge_inclusive() {
    let bounds = root();
    assert!(bounds.contains(Point::new(10.0, 10.0)));
    assert!(!bounds.contains(Point::new(9.9, 10.0)));
}

#[test]
fn processing_dialog_ignores_close_until_finished() {
    let mut dialog = ConfirmDialog::new();
    dialog.open();
    assert_eq!(dialog.update(confirm_dialog::Message::Confirm), Event::Confirmed);

    assert_eq!(dialog.update(confirm_dialog::Message::Cancel), Event::None);
    assert!(!dialog.request_close());
    assert_eq!(dialog.phase(), DialogPhase::Processing);

    dialog.finish();
    assert_eq!(dialog.phase(), DialogPhase::Closed);
}

fn nav() -> Vec<SidebarItem> {
    vec![
        SidebarItem::new("inbox", "Inbox"),
        SidebarItem::new("drafts", "Drafts"),
        SidebarItem::new("archive", "Archive"),
    ]
}

#[test]
fn sidebar_state_survives_a_restart_under_its_own_key() {
    let dir = tempdir().expect("tempdir");

    let (mut store, warning) = StateStore::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let mut sidebar = Sidebar::new(nav()).storage_key("mail");
    sidebar.select("archive");
    sidebar.toggle();
    sidebar.persist(&mut store).expect("encode");
    assert!(store.save().is_none());

    let (reloaded, warning) = StateStore::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let restored = Sidebar::new(nav()).storage_key("mail").restore(&reloaded);
    assert_eq!(restored.active_key(), Some("archive"));
    assert!(!restored.is_expanded());

    let other = Sidebar::new(nav()).storage_key("settings").restore(&reloaded);
    assert_eq!(other.active_key(), Some("inbox"));
    assert!(other.is_expanded());
}
