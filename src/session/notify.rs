//! Change notification for session fields.
//!
//! Observers are plain closures kept in subscription order. Every setter on
//! the session calls [`ChangeNotifier::notify`] once after the field has
//! been written, synchronously, before the setter returns.

use log::debug;
use std::fmt;

/// Observable fields of the editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Text,
    FileName,
    FontFamily,
    FontSize,
    FontColor,
}

impl Property {
    /// Field name as a UI binding would refer to it.
    pub fn name(&self) -> &'static str {
        match self {
            Property::Text => "Text",
            Property::FileName => "FileName",
            Property::FontFamily => "FontFamily",
            Property::FontSize => "FontSize",
            Property::FontColor => "FontColor",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by `subscribe`, used to remove the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(Property)>;

/// Ordered list of change observers.
#[derive(Default)]
pub(super) struct ChangeNotifier {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: usize,
}

impl ChangeNotifier {
    pub fn subscribe(&mut self, observer: impl FnMut(Property) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    #[cfg(test)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, property: Property) {
        debug!("Property changed: {}", property);
        for (_, observer) in self.observers.iter_mut() {
            observer(property);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
