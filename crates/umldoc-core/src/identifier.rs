//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used for qualified class names. A
//! qualified name is the diagram node identifier, so the same name must always
//! compare equal; interning makes that comparison a symbol comparison.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for qualified-name storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Interned qualified-name identifier.
///
/// Two `Id` values created from the same string are always equal, which makes
/// qualified names usable as map keys and diagram node identifiers without
/// repeated string comparison.
///
/// # Examples
///
/// ```
/// use umldoc_core::identifier::Id;
///
/// // Create identifiers from qualified names
/// let foo = Id::new("com.acme.Foo");
///
/// // Build a qualified name from a package and a simple name
/// let bar = Id::new("com.acme").join(Id::new("Bar"));
/// assert_eq!(bar, "com.acme.Bar");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::identifier::Id;
    ///
    /// let class_id = Id::new("com.acme.Order");
    /// let simple_id = Id::new("Order");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a qualified ID by joining this ID and a child ID with a '.'
    /// separator, as in Java-style package-qualified class names.
    ///
    /// # Arguments
    ///
    /// * `child_id` - The segment to append.
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::identifier::Id;
    ///
    /// let package = Id::new("com.acme");
    /// let class = Id::new("Order");
    /// let qualified = package.join(class);
    /// assert_eq!(qualified, "com.acme.Order");
    /// ```
    pub fn join(&self, child_id: Id) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let parent_str = interner
            .resolve(self.0)
            .expect("Parent ID should exist in interner");
        let child_str = interner
            .resolve(child_id.0)
            .expect("Child ID should exist in interner");
        let qualified_name = format!("{}.{}", parent_str, child_str);
        let symbol = interner.get_or_intern(&qualified_name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::identifier::Id;
    ///
    /// let id: Id = "com.acme.Foo".into();
    /// assert_eq!(id, "com.acme.Foo");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::identifier::Id;
    ///
    /// let id = Id::new("com.acme.Foo");
    /// assert!(id == "com.acme.Foo");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("com.acme.Foo");
        let id2 = Id::new("com.acme.Foo");
        let id3 = Id::new("com.acme.Bar");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "com.acme.Foo");
    }

    #[test]
    fn test_join() {
        let package = Id::new("com.acme");
        let class1 = Id::new("Order");
        let class2 = Id::new("LineItem");

        let qualified1 = package.join(class1);
        let qualified2 = package.join(class2);

        assert_ne!(qualified1, qualified2);
        assert_eq!(qualified1, "com.acme.Order");
        assert_eq!(qualified2, "com.acme.LineItem");
    }

    #[test]
    fn test_deep_join() {
        let com = Id::new("com");
        let acme = Id::new("acme");
        let billing = Id::new("billing");
        let invoice = Id::new("Invoice");

        let level1 = com.join(acme);
        let level2 = level1.join(billing);
        let level3 = level2.join(invoice);

        assert_eq!(level3, "com.acme.billing.Invoice");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("com.acme.Display");
        assert_eq!(format!("{}", id), "com.acme.Display");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "com.acme.From".into();
        let id2 = Id::new("com.acme.From");

        assert_eq!(id1, id2);
        assert_eq!(id1, "com.acme.From");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("com.acme.Key1");
        let id2 = Id::new("com.acme.Key1");
        let id3 = Id::new("com.acme.Key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("com.acme.Shape");

        assert!(id == "com.acme.Shape");
        assert!(id != "com.acme.Other");

        let unqualified = Id::new("Shape");
        assert!(unqualified == "Shape");
        assert!(unqualified != "com.acme.Shape");
    }

    #[test]
    fn test_partial_eq_str_ref() {
        let id = Id::new("com.acme.Component");

        let name1 = String::from("com.acme.Component");
        let name2 = String::from("com.acme.Element");

        assert!(id == name1.as_str());
        assert!(id != name2.as_str());
    }
}
