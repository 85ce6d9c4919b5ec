use std::{fmt, iter::Enumerate, slice};

use serde::Serialize;

use crate::domain::{Item, Position};

/// A read-only snapshot of the inventory for display.
///
/// The listing is either [`Listing::Empty`], which renders as the "no items"
/// message, or a sequence of [`Entry`] values in inventory order. Cloning a
/// listing restarts iteration from the first item.
#[derive(Debug, Clone)]
pub enum Listing<'a> {
    /// The inventory holds no items.
    Empty,
    /// The inventory holds at least one item.
    Items(Entries<'a>),
}

impl<'a> Listing<'a> {
    pub(crate) fn new(items: &'a [Item]) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(Entries::new(items))
        }
    }

    /// Returns `true` if the inventory holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns an iterator over the entries, which is empty for
    /// [`Listing::Empty`].
    #[must_use]
    pub fn entries(&self) -> Entries<'a> {
        match self {
            Self::Empty => Entries::new(&[]),
            Self::Items(entries) => entries.clone(),
        }
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No items in inventory."),
            Self::Items(entries) => {
                for (i, entry) in entries.clone().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{entry}")?;
                }
                Ok(())
            }
        }
    }
}

/// Iterator over the entries of a [`Listing`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Item>>,
}

impl<'a> Entries<'a> {
    fn new(items: &'a [Item]) -> Self {
        Self {
            inner: items.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, item)| Entry::new(index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// One line of a [`Listing`]: an item together with its positional
/// identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    id: usize,
    name: &'a str,
    stock: i64,
}

impl<'a> Entry<'a> {
    fn new(index: usize, item: &'a Item) -> Self {
        Self {
            id: Position::from_index(index).id(),
            name: item.name(),
            stock: item.stock(),
        }
    }

    /// The 1-based identifier of the item.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The name of the item.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The quantity in stock.
    #[must_use]
    pub const fn stock(&self) -> i64 {
        self.stock
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (Stock: {})", self.id, self.name, self.stock)
    }
}
