//! # Attribute Selector
//!
//! The selector tracks which value is chosen for each attribute of a product, produces the
//! option grid view, and reports changes to its host. It is used in three contexts, each
//! with a different owner for the selection state:
//!
//! | Mode         | Context        | Initial state              | Who owns it |
//! |--------------|----------------|----------------------------|-------------|
//! | `Controlled` | cart line item | host map, verbatim         | host        |
//! | `Deferred`   | product page   | empty (user must choose)   | selector    |
//! | `Defaulted`  | catalog card   | first value of every attr  | selector    |
//!
//! Ownership is exclusive. A controlled selector only ever reads the latest map its host
//! pushed in through [`AttributeSelector::sync_host_selection`] and ignores every selection
//! attempt. An uncontrolled selector is the sole authority over its map once mounted and
//! ignores host pushes: hosts learn about changes only through the change callback.
//!
//! ## Change Propagation
//!
//! [`AttributeSelector::select`] merges first, then calls the host's callback with the raw
//! `(attribute_id, attribute_name, value)` triple. Hosts that need the full map accumulate the
//! triples themselves. A `Defaulted` selector reports each of its defaults the same way,
//! in attribute order, right after mount, so a parent can keep a mirrored copy in sync.
//!
//! The callback runs while the selector is mutably borrowed, so it cannot call back into the
//! selector. A host that wants the merged map from inside the callback takes a
//! [`SelectionWatch`] from the builder before mounting. The watch is updated before every
//! notification and can be read at any time.
//!
//! ## Malformed Input
//!
//! Attributes without values are skipped when deriving defaults and render no options.
//! No operation here fails or panics; unexpected input degrades to "nothing selected".

use crate::abbrev::SizeAbbreviator;
use crate::model::{AttributeDefinition, AttributeKind, SelectionMap};
use crate::observe::{SelectorEvent, SelectorObserver};
use crate::testid::{self, DisplayContext};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Host callback receiving `(attribute_id, attribute_name, value)`.
pub type ChangeCallback = Box<dyn FnMut(u32, &str, &str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OwnershipMode {
    /// Selection is supplied by the host and read-only to the selector (cart).
    Controlled,
    /// Uncontrolled, starts empty (product page).
    Deferred,
    /// Uncontrolled, starts with the first value of every attribute (catalog card).
    Defaulted,
}

impl OwnershipMode {
    pub fn context(&self) -> DisplayContext {
        match self {
            OwnershipMode::Controlled => DisplayContext::Cart,
            OwnershipMode::Deferred | OwnershipMode::Defaulted => DisplayContext::Product,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, OwnershipMode::Controlled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// Controlled selectors are never user-editable.
    Controlled,
    Disabled,
    /// The clicked attribute or value is not part of this selector.
    UnknownOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SelectOutcome::Applied)
    }
}

/// An option resolved against a selector's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRef {
    pub attribute_id: u32,
    pub attribute_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub display_value: String,
    pub test_id: String,
    pub active: bool,
    pub interactive: bool,
    /// Raw value used as background colour, for swatch attributes.
    pub swatch: Option<String>,
    /// Abbreviated label, for text attributes.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeView {
    pub id: u32,
    pub name: String,
    pub kind: AttributeKind,
    pub test_id: String,
    /// Drawn in the small cart layout.
    pub compact: bool,
    pub options: Vec<OptionView>,
}

/// Read-only handle on a selector's current map.
///
/// Always holds the post-merge state by the time the change callback runs. A controlled
/// selector publishes the host map it mirrors.
#[derive(Debug, Clone, Default)]
pub struct SelectionWatch(Rc<RefCell<SelectionMap>>);

impl SelectionWatch {
    pub fn get(&self) -> SelectionMap {
        self.0.borrow().clone()
    }

    pub fn value_of(&self, attribute_name: &str) -> Option<String> {
        self.0.borrow().value_of(attribute_name).map(str::to_string)
    }

    fn publish(&self, selection: &SelectionMap) {
        *self.0.borrow_mut() = selection.clone();
    }

    fn merge(&self, attribute_id: u32, attribute_name: &str, value: &str) {
        self.0.borrow_mut().merge(attribute_id, attribute_name, value);
    }
}

/// Who holds the selection map. Exactly one side does, decided at mount.
#[derive(Debug, Clone)]
enum Authority {
    /// Mirror of the map last pushed by the host.
    Host(SelectionMap),
    /// The selector's own map.
    Widget(SelectionMap),
}

impl Authority {
    fn map(&self) -> &SelectionMap {
        match self {
            Authority::Host(map) | Authority::Widget(map) => map,
        }
    }
}

/// Picks the first value of every attribute that has one.
pub fn default_selection(attributes: &[AttributeDefinition]) -> SelectionMap {
    let mut selection = SelectionMap::new();
    for attribute in attributes {
        if let Some(first) = attribute.first_value() {
            selection.merge(attribute.id, attribute.name.clone(), first.value.clone());
        }
    }
    selection
}

pub struct SelectorBuilder {
    attributes: Vec<AttributeDefinition>,
    mode: OwnershipMode,
    host_selection: Option<SelectionMap>,
    disabled: bool,
    on_change: Option<ChangeCallback>,
    observer: Option<Box<dyn SelectorObserver>>,
    watch: SelectionWatch,
}

impl SelectorBuilder {
    /// A handle on the map the mounted selector will hold, for use inside `on_change`.
    pub fn watch(&self) -> SelectionWatch {
        self.watch.clone()
    }

    /// The host-owned map. Read only in `Controlled` mode.
    pub fn host_selection(mut self, selection: SelectionMap) -> Self {
        self.host_selection = Some(selection);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u32, &str, &str) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn observer(mut self, observer: Option<Box<dyn SelectorObserver>>) -> Self {
        self.observer = observer;
        self
    }

    pub fn mount(self) -> AttributeSelector {
        let authority = match self.mode {
            OwnershipMode::Controlled => Authority::Host(self.host_selection.unwrap_or_default()),
            OwnershipMode::Deferred => Authority::Widget(SelectionMap::new()),
            OwnershipMode::Defaulted => Authority::Widget(default_selection(&self.attributes)),
        };
        self.watch.publish(authority.map());

        let mut selector = AttributeSelector {
            attributes: self.attributes,
            mode: self.mode,
            authority,
            disabled: self.disabled,
            on_change: self.on_change,
            observer: self.observer,
            watch: self.watch,
        };

        emit(
            &mut selector.observer,
            SelectorEvent::Mounted {
                mode: selector.mode,
                attributes: selector.attributes.len(),
                selected: selector.authority.map().len(),
            },
        );

        if selector.mode == OwnershipMode::Defaulted {
            selector.announce_defaults();
        }

        selector
    }
}

pub struct AttributeSelector {
    attributes: Vec<AttributeDefinition>,
    mode: OwnershipMode,
    authority: Authority,
    disabled: bool,
    on_change: Option<ChangeCallback>,
    observer: Option<Box<dyn SelectorObserver>>,
    watch: SelectionWatch,
}

impl AttributeSelector {
    pub fn builder(attributes: Vec<AttributeDefinition>, mode: OwnershipMode) -> SelectorBuilder {
        SelectorBuilder {
            attributes,
            mode,
            host_selection: None,
            disabled: false,
            on_change: None,
            observer: None,
            watch: SelectionWatch::default(),
        }
    }

    pub fn mode(&self) -> OwnershipMode {
        self.mode
    }

    pub fn context(&self) -> DisplayContext {
        self.mode.context()
    }

    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    /// The map that decides what is drawn as selected: the host mirror when controlled,
    /// the selector's own map otherwise.
    pub fn selection(&self) -> &SelectionMap {
        self.authority.map()
    }

    pub fn watch(&self) -> SelectionWatch {
        self.watch.clone()
    }

    pub fn is_selected(&self, attribute_name: &str, value: &str) -> bool {
        self.selection().is_selected(attribute_name, value)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Merges `{attribute_name: {attribute_id, value}}` and then notifies the host.
    ///
    /// A no-op in `Controlled` mode: the map is untouched and the callback is not invoked.
    pub fn select(
        &mut self,
        attribute_id: u32,
        attribute_name: &str,
        value: &str,
    ) -> SelectOutcome {
        if let Authority::Widget(map) = &mut self.authority {
            map.merge(attribute_id, attribute_name, value);
            self.watch.merge(attribute_id, attribute_name, value);
            emit(
                &mut self.observer,
                SelectorEvent::Selected {
                    attribute_id,
                    attribute_name,
                    value,
                    selection: map,
                },
            );

            if let Some(callback) = self.on_change.as_mut() {
                callback(attribute_id, attribute_name, value);
            }
            return SelectOutcome::Applied;
        }

        self.ignore(IgnoreReason::Controlled, attribute_name, value)
    }

    /// A user click on an option node.
    ///
    /// Never selects in `Controlled` mode or while disabled, and ignores options that are
    /// not part of this selector.
    pub fn click(&mut self, attribute_name: &str, value: &str) -> SelectOutcome {
        if self.mode.is_controlled() {
            return self.ignore(IgnoreReason::Controlled, attribute_name, value);
        }
        if self.disabled {
            return self.ignore(IgnoreReason::Disabled, attribute_name, value);
        }

        let attribute_id = self
            .attributes
            .iter()
            .find(|attr| {
                attr.name == attribute_name && attr.values.iter().any(|v| v.value == value)
            })
            .map(|attr| attr.id);

        match attribute_id {
            Some(id) => self.select(id, attribute_name, value),
            None => self.ignore(IgnoreReason::UnknownOption, attribute_name, value),
        }
    }

    /// Clicks the option whose test identifier matches `test_id`, in either selection state.
    pub fn click_test_id(&mut self, test_id: &str) -> SelectOutcome {
        match self.option_by_test_id(test_id) {
            Some(option) => self.click(&option.attribute_name, &option.value),
            None => self.ignore(IgnoreReason::UnknownOption, "", test_id),
        }
    }

    /// Finds the option whose identifier is exactly `test_id`, selected or not.
    ///
    /// Identifiers as currently drawn win over the other state, so when a value's own text
    /// ends in `selected` the option on screen is the one found.
    pub fn option_by_test_id(&self, test_id: &str) -> Option<OptionRef> {
        self.find_option_id(test_id, true)
            .or_else(|| self.find_option_id(test_id, false))
    }

    fn find_option_id(&self, test_id: &str, as_drawn: bool) -> Option<OptionRef> {
        let context = self.context();
        self.attributes.iter().find_map(|attr| {
            attr.values
                .iter()
                .find(|v| {
                    let active = self.is_selected(&attr.name, &v.value);
                    testid::option_id(context, &attr.name, &v.value, active == as_drawn) == test_id
                })
                .map(|v| OptionRef {
                    attribute_id: attr.id,
                    attribute_name: attr.name.clone(),
                    value: v.value.clone(),
                })
        })
    }

    /// Resolves a loosely written option: the attribute name ignores case, the value may be
    /// given as its identity or its display text (ignoring case).
    pub fn resolve_option(&self, attribute_name: &str, value: &str) -> Option<OptionRef> {
        let attr = self
            .attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(attribute_name))?;

        let found = attr
            .values
            .iter()
            .find(|v| v.value == value)
            .or_else(|| {
                attr.values.iter().find(|v| {
                    v.value.eq_ignore_ascii_case(value)
                        || v.display_value.eq_ignore_ascii_case(value)
                })
            })?;

        Some(OptionRef {
            attribute_id: attr.id,
            attribute_name: attr.name.clone(),
            value: found.value.clone(),
        })
    }

    /// Takes the latest host map. Only controlled selectors follow it; the comparison is by
    /// value, so re-sending an identical map changes nothing. Returns whether the mirror changed.
    pub fn sync_host_selection(&mut self, host_selection: &SelectionMap) -> bool {
        let changed = match &mut self.authority {
            Authority::Host(mirror) if *mirror != *host_selection => {
                *mirror = host_selection.clone();
                self.watch.publish(mirror);
                true
            }
            Authority::Host(_) | Authority::Widget(_) => false,
        };
        emit(&mut self.observer, SelectorEvent::HostSynced { changed });
        changed
    }

    /// Names of attributes that have options but no selection yet, in attribute order.
    pub fn missing_attributes(&self) -> Vec<String> {
        self.attributes
            .iter()
            .filter(|attr| !attr.values.is_empty() && !self.selection().contains(&attr.name))
            .map(|attr| attr.name.clone())
            .collect()
    }

    pub fn render(&self, abbreviator: &dyn SizeAbbreviator) -> Vec<AttributeView> {
        let context = self.context();
        let interactive = !self.mode.is_controlled() && !self.disabled;

        self.attributes
            .iter()
            .map(|attr| {
                let options = attr
                    .values
                    .iter()
                    .map(|v| {
                        let active = self.is_selected(&attr.name, &v.value);
                        OptionView {
                            value: v.value.clone(),
                            display_value: v.display_value.clone(),
                            test_id: testid::option_id(context, &attr.name, &v.value, active),
                            active,
                            interactive,
                            swatch: match attr.kind {
                                AttributeKind::Swatch => Some(v.value.clone()),
                                AttributeKind::Text => None,
                            },
                            label: match attr.kind {
                                AttributeKind::Text => {
                                    Some(abbreviator.abbreviate(&v.display_value))
                                }
                                AttributeKind::Swatch => None,
                            },
                        }
                    })
                    .collect();

                AttributeView {
                    id: attr.id,
                    name: attr.name.clone(),
                    kind: attr.kind,
                    test_id: testid::container_id(context, &attr.name),
                    compact: context == DisplayContext::Cart,
                    options,
                }
            })
            .collect()
    }

    fn announce_defaults(&mut self) {
        let defaults: Vec<(u32, String, String)> = self
            .attributes
            .iter()
            .filter_map(|attr| {
                attr.first_value()
                    .map(|first| (attr.id, attr.name.clone(), first.value.clone()))
            })
            .collect();

        for (id, name, value) in defaults {
            emit(
                &mut self.observer,
                SelectorEvent::Defaulted {
                    attribute_id: id,
                    attribute_name: &name,
                    value: &value,
                },
            );
            if let Some(callback) = self.on_change.as_mut() {
                callback(id, &name, &value);
            }
        }
    }

    fn ignore(&mut self, reason: IgnoreReason, attribute_name: &str, value: &str) -> SelectOutcome {
        emit(
            &mut self.observer,
            SelectorEvent::Ignored {
                reason,
                attribute_name,
                value,
            },
        );
        SelectOutcome::Ignored(reason)
    }
}

impl Drop for AttributeSelector {
    fn drop(&mut self) {
        emit(&mut self.observer, SelectorEvent::Unmounted);
    }
}

fn emit(observer: &mut Option<Box<dyn SelectorObserver>>, event: SelectorEvent<'_>) {
    if let Some(observer) = observer.as_mut() {
        observer.on_event(&event);
    }
}
