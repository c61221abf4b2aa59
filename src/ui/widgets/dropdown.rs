// SPDX-License-Identifier: MPL-2.0
//! Single and multi selection dropdowns.
//!
//! Both dropdowns keep their open state, their selection and a transient
//! validation message. They close when a pointer press lands outside their
//! root, as reported by the host through a [`HitTest`].

use super::hit_test::HitTest;
use super::labelled;
use crate::timer::Scheduler;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::fields::{FieldMessage, MessageDelay, TransientMessageField};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length, Point, Theme};
use std::sync::Arc;

pub const SINGLE_PLACEHOLDER: &str = "Select an option";
pub const MULTI_PLACEHOLDER: &str = "Select options";
pub const EMPTY_MENU_LABEL: &str = "No options available";

// =============================================================================
// Messages
// =============================================================================

/// Messages emitted by both dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<V> {
    /// The trigger was pressed.
    Toggle,
    /// A menu row was pressed.
    Select(V),
    /// The remove button of a chip was pressed (multi-select only).
    Remove(V),
    /// Close the menu (e.g., when clicking outside).
    Close,
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Open/closed state shared by both dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Popup {
    open: bool,
    disabled: bool,
}

impl Popup {
    fn toggle(&mut self) {
        if !self.disabled {
            self.open = !self.open;
        }
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.open = false;
        }
    }

    fn pointer_pressed(&mut self, point: Point, root: &impl HitTest) -> bool {
        if self.open && !root.contains(point) {
            self.open = false;
            return true;
        }
        false
    }
}

/// Dropdown holding at most one value.
#[derive(Debug)]
pub struct SingleSelect<V> {
    label: Option<String>,
    options: Vec<SelectOption<V>>,
    value: Option<V>,
    placeholder: String,
    popup: Popup,
    error: TransientMessageField,
}

impl<V: Clone + PartialEq> SingleSelect<V> {
    pub fn new(options: Vec<SelectOption<V>>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            label: None,
            options,
            value: None,
            placeholder: SINGLE_PLACEHOLDER.to_owned(),
            popup: Popup::default(),
            error: TransientMessageField::new(scheduler),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.popup.set_disabled(disabled);
        self
    }

    #[must_use]
    pub fn message_delay(mut self, delay: MessageDelay) -> Self {
        self.error.set_delay(delay);
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.popup.open
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.popup.disabled
    }

    /// Disabling also closes the menu.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.popup.set_disabled(disabled);
    }

    /// Opens or closes the menu; does nothing while disabled.
    pub fn toggle(&mut self) {
        self.popup.toggle();
    }

    pub fn close(&mut self) {
        self.popup.close();
    }

    /// Closes the menu when `point` lies outside `root`. Returns whether it closed.
    pub fn pointer_pressed(&mut self, point: Point, root: &impl HitTest) -> bool {
        self.popup.pointer_pressed(point, root)
    }

    /// Selects `value` and closes the menu.
    ///
    /// Ignored while disabled or when `value` is not one of the options.
    pub fn select(&mut self, value: &V) -> bool {
        if self.popup.disabled || !self.options.iter().any(|option| &option.value == value) {
            return false;
        }
        self.value = Some(value.clone());
        self.popup.close();
        true
    }

    /// Sets the value from outside (form reset, loaded data).
    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
    }

    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&SelectOption<V>> {
        let value = self.value.as_ref()?;
        self.options.iter().find(|option| &option.value == value)
    }

    /// Label of the selected option, or the placeholder.
    #[must_use]
    pub fn selected_label(&self) -> &str {
        self.selected_option()
            .map_or(self.placeholder.as_str(), |option| option.label.as_str())
    }

    pub fn set_error<M: Into<FieldMessage>>(&mut self, message: Option<M>) {
        self.error.set_message(message);
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.current_value()
    }

    /// Applies a message. Returns `true` when the selected value changed.
    pub fn update(&mut self, message: Message<V>) -> bool {
        match message {
            Message::Toggle => {
                self.toggle();
                false
            }
            Message::Select(value) => {
                let before = self.value.clone();
                self.select(&value) && before.as_ref() != Some(&value)
            }
            Message::Remove(_) => false,
            Message::Close => {
                self.close();
                false
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message<V>>
    where
        V: 'static,
    {
        let has_value = self.selected_option().is_some();
        let caption = Text::new(self.selected_label())
            .size(typography::BODY)
            .width(Length::Fill)
            .style(move |theme: &Theme| {
                if has_value {
                    text::Style::default()
                } else {
                    styles::text::muted(theme)
                }
            });

        let trigger = trigger(
            Row::new().push(caption).into(),
            self.popup,
            self.error.is_visible(),
        );

        let mut body = Column::new().spacing(spacing::XXS).push(trigger);
        if self.popup.open && !self.popup.disabled {
            let rows = self.options.iter().map(|option| {
                let selected = self.value.as_ref() == Some(&option.value);
                menu_row(&option.label, selected, Message::Select(option.value.clone()))
            });
            body = body.push(menu(rows.collect()));
        }

        labelled(self.label.as_deref(), body.into(), self.error())
    }
}

/// Dropdown holding any number of values, kept in selection order.
#[derive(Debug)]
pub struct MultiSelect<V> {
    label: Option<String>,
    options: Vec<SelectOption<V>>,
    values: Vec<V>,
    placeholder: String,
    popup: Popup,
    error: TransientMessageField,
}

impl<V: Clone + PartialEq> MultiSelect<V> {
    pub fn new(options: Vec<SelectOption<V>>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            label: None,
            options,
            values: Vec::new(),
            placeholder: MULTI_PLACEHOLDER.to_owned(),
            popup: Popup::default(),
            error: TransientMessageField::new(scheduler),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.popup.set_disabled(disabled);
        self
    }

    #[must_use]
    pub fn message_delay(mut self, delay: MessageDelay) -> Self {
        self.error.set_delay(delay);
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.popup.open
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.popup.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.popup.set_disabled(disabled);
    }

    pub fn toggle(&mut self) {
        self.popup.toggle();
    }

    pub fn close(&mut self) {
        self.popup.close();
    }

    pub fn pointer_pressed(&mut self, point: Point, root: &impl HitTest) -> bool {
        self.popup.pointer_pressed(point, root)
    }

    /// Adds `value` if absent, removes it otherwise. The menu stays open.
    ///
    /// Ignored while disabled or when `value` is not one of the options.
    pub fn toggle_option(&mut self, value: &V) -> bool {
        if self.popup.disabled || !self.options.iter().any(|option| &option.value == value) {
            return false;
        }
        if let Some(index) = self.values.iter().position(|v| v == value) {
            self.values.remove(index);
        } else {
            self.values.push(value.clone());
        }
        true
    }

    /// Removes one chip without touching the open state.
    pub fn remove_value(&mut self, value: &V) -> bool {
        if self.popup.disabled {
            return false;
        }
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Replaces the selection from outside. Unknown values are kept but not rendered.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.values = values;
    }

    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    #[must_use]
    pub fn is_selected(&self, value: &V) -> bool {
        self.values.contains(value)
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    /// Selected options in selection order, skipping values with no option.
    pub fn selected_options(&self) -> impl Iterator<Item = &SelectOption<V>> {
        self.values
            .iter()
            .filter_map(|value| self.options.iter().find(|option| &option.value == value))
    }

    #[must_use]
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected_options()
            .map(|option| option.label.as_str())
            .collect()
    }

    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn set_error<M: Into<FieldMessage>>(&mut self, message: Option<M>) {
        self.error.set_message(message);
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.current_value()
    }

    /// Applies a message. Returns `true` when the selection changed.
    pub fn update(&mut self, message: Message<V>) -> bool {
        match message {
            Message::Toggle => {
                self.toggle();
                false
            }
            Message::Select(value) => self.toggle_option(&value),
            Message::Remove(value) => self.remove_value(&value),
            Message::Close => {
                self.close();
                false
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message<V>>
    where
        V: 'static,
    {
        let chips: Vec<Element<'_, Message<V>>> = self
            .selected_options()
            .map(|option| chip(&option.label, Message::Remove(option.value.clone())))
            .collect();

        let content: Element<'_, Message<V>> = if chips.is_empty() {
            Text::new(self.placeholder.as_str())
                .size(typography::BODY)
                .style(styles::text::muted)
                .into()
        } else {
            Row::with_children(chips)
                .spacing(spacing::XXS)
                .wrap()
                .into()
        };

        let trigger = trigger(
            Row::new().push(container(content).width(Length::Fill)).into(),
            self.popup,
            self.error.is_visible(),
        );

        let mut body = Column::new().spacing(spacing::XXS).push(trigger);
        if self.popup.open && !self.popup.disabled {
            let rows = self.options.iter().map(|option| {
                let selected = self.is_selected(&option.value);
                menu_row(&option.label, selected, Message::Select(option.value.clone()))
            });
            body = body.push(menu(rows.collect()));
        }

        labelled(self.label.as_deref(), body.into(), self.error())
    }
}

// =============================================================================
// View helpers
// =============================================================================

fn trigger<'a, V: Clone + 'a>(
    content: Element<'a, Message<V>>,
    popup: Popup,
    has_error: bool,
) -> Element<'a, Message<V>> {
    let chevron = Text::new(if popup.open { "▴" } else { "▾" })
        .size(typography::BODY_LG)
        .style(styles::text::muted);

    let frame = container(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(content)
            .push(chevron),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::field(has_error, popup.disabled));

    button(frame)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::ghost)
        .on_press_maybe((!popup.disabled).then_some(Message::Toggle))
        .into()
}

fn menu<'a, V: 'a>(rows: Vec<Element<'a, Message<V>>>) -> Element<'a, Message<V>> {
    let list: Element<'a, Message<V>> = if rows.is_empty() {
        container(
            Text::new(EMPTY_MENU_LABEL)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .padding([spacing::XS, spacing::MD])
        .into()
    } else {
        scrollable(Column::with_children(rows)).into()
    };

    container(list)
        .width(Length::Fill)
        .max_height(sizing::MENU_MAX_HEIGHT)
        .style(styles::container::menu)
        .into()
}

fn menu_row<'a, V: Clone + 'a>(
    label: &'a str,
    selected: bool,
    on_press: Message<V>,
) -> Element<'a, Message<V>> {
    let mut row = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill));
    if selected {
        row = row.push(Text::new("✓").size(typography::BODY));
    }

    button(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::menu_option(selected))
        .on_press(on_press)
        .into()
}

fn chip<'a, V: Clone + 'a>(label: &'a str, on_remove: Message<V>) -> Element<'a, Message<V>> {
    let remove = button(Text::new("×").size(typography::CAPTION))
        .padding(0)
        .style(styles::button::ghost)
        .on_press(on_remove);

    container(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(label).size(typography::CAPTION))
            .push(remove),
    )
    .padding([2.0, spacing::XS])
    .style(styles::container::chip)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use crate::ui::widgets::{Bounds, Hover};
    use std::time::Duration;

    fn fruit() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("pear", "Pear"),
            SelectOption::new("plum", "Plum"),
        ]
    }

    fn scheduler() -> Arc<ManualScheduler> {
        Arc::new(ManualScheduler::new())
    }

    #[test]
    fn single_select_shows_placeholder_until_selected() {
        let mut select = SingleSelect::new(fruit(), scheduler());
        assert_eq!(select.selected_label(), SINGLE_PLACEHOLDER);

        select.toggle();
        assert!(select.select(&"pear"));
        assert_eq!(select.selected_label(), "Pear");
        assert!(!select.is_open());
    }

    #[test]
    fn single_select_ignores_unknown_values() {
        let mut select = SingleSelect::new(fruit(), scheduler());
        select.toggle();
        assert!(!select.select(&"kiwi"));
        assert!(select.value().is_none());
        assert!(select.is_open());
    }

    #[test]
    fn disabled_dropdown_never_opens_or_selects() {
        let mut select = SingleSelect::new(fruit(), scheduler()).disabled(true);
        select.toggle();
        assert!(!select.is_open());
        assert!(!select.select(&"apple"));

        let mut multi = MultiSelect::new(fruit(), scheduler()).disabled(true);
        multi.update(Message::Toggle);
        assert!(!multi.is_open());
        assert!(!multi.toggle_option(&"apple"));
    }

    #[test]
    fn disabling_an_open_dropdown_closes_it() {
        let mut select = SingleSelect::new(fruit(), scheduler());
        select.toggle();
        select.set_disabled(true);
        assert!(!select.is_open());
    }

    #[test]
    fn press_outside_closes_press_inside_keeps_open() {
        let root = Bounds::new(0.0, 0.0, 200.0, 40.0);
        let mut select = SingleSelect::new(fruit(), scheduler());
        select.toggle();

        assert!(!select.pointer_pressed(Point::new(10.0, 10.0), &root));
        assert!(select.is_open());

        assert!(select.pointer_pressed(Point::new(300.0, 10.0), &root));
        assert!(!select.is_open());
    }

    #[test]
    fn hover_tracking_drives_click_outside() {
        let mut multi = MultiSelect::new(fruit(), scheduler());
        let mut hover = Hover::default();
        multi.toggle();

        hover.enter();
        multi.pointer_pressed(Point::ORIGIN, &hover);
        assert!(multi.is_open());

        hover.exit();
        multi.pointer_pressed(Point::ORIGIN, &hover);
        assert!(!multi.is_open());
    }

    #[test]
    fn multi_select_keeps_selection_order_and_stays_open() {
        let mut multi = MultiSelect::new(fruit(), scheduler());
        multi.toggle();
        multi.toggle_option(&"plum");
        multi.toggle_option(&"apple");
        assert!(multi.is_open());
        assert_eq!(multi.values(), &["plum", "apple"]);
        assert_eq!(multi.selected_labels(), vec!["Plum", "Apple"]);

        multi.toggle_option(&"plum");
        assert_eq!(multi.values(), &["apple"]);
    }

    #[test]
    fn chip_removal_does_not_toggle_menu() {
        let mut multi = MultiSelect::new(fruit(), scheduler());
        multi.set_values(vec!["pear", "apple"]);

        assert!(multi.update(Message::Remove("pear")));
        assert!(!multi.is_open());
        assert_eq!(multi.values(), &["apple"]);
        assert!(!multi.remove_value(&"pear"));
    }

    #[test]
    fn unknown_values_are_not_rendered() {
        let mut multi = MultiSelect::new(fruit(), scheduler());
        multi.set_values(vec!["ghost", "pear"]);
        assert_eq!(multi.selected_labels(), vec!["Pear"]);
    }

    #[test]
    fn update_reports_value_changes() {
        let mut select = SingleSelect::new(fruit(), scheduler());
        assert!(select.update(Message::Select("apple")));
        assert!(!select.update(Message::Select("apple")));
        select.update(Message::Toggle);
        select.update(Message::Close);
        assert!(!select.is_open());
    }

    #[test]
    fn error_message_hides_after_delay() {
        let clock = scheduler();
        let mut select = SingleSelect::new(fruit(), clock.clone());
        select.set_error(Some(FieldMessage::Structured {
            message: "Pick a fruit".into(),
        }));
        assert_eq!(select.error().as_deref(), Some("Pick a fruit"));

        clock.advance(Duration::from_millis(3000));
        assert_eq!(select.error(), None);
    }
}
