//! List wrapper for report endpoints.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Serialize;

thread_local! {
    static XML_LAYOUT: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` with the XML list layout enabled on this thread.
///
/// Inside `f`, a map decodes as a root element whose children are the
/// records. Outside it, only sequences (and `null`) are lists.
pub(crate) fn with_xml_layout<R>(f: impl FnOnce() -> R) -> R {
    struct Restore(bool);

    impl Drop for Restore {
        fn drop(&mut self) {
            XML_LAYOUT.with(|layout| layout.set(self.0));
        }
    }

    let _restore = Restore(XML_LAYOUT.with(|layout| layout.replace(true)));
    f()
}

/// A list of report records.
///
/// Decodes from a JSON array or `null`. A JSON object is rejected. The
/// client's XML fallback also accepts a document whose root element holds
/// one child element per record; child element names are not checked.
///
/// # Example
///
/// ```
/// use wildberries_rs::models::{Income, Records};
///
/// let json = r#"[{"incomeId": 1, "number": "A1"}]"#;
/// let incomes: Records<Income> = serde_json::from_str(json).unwrap();
/// assert_eq!(incomes[0].income_id, 1);
///
/// assert!(serde_json::from_str::<Records<Income>>("{}").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Records<T>(pub Vec<T>);

impl<T> Records<T> {
    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Records(Vec::new())
    }
}

impl<T> Deref for Records<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Records<T> {
    fn from(items: Vec<T>) -> Self {
        Records(items)
    }
}

impl<T> IntoIterator for Records<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Records<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Records<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecordsVisitor(PhantomData))
    }
}

struct RecordsVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RecordsVisitor<T> {
    type Value = Records<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of records")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Records(items))
    }

    // XML root element: every child is one record.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        if !XML_LAYOUT.with(Cell::get) {
            return Err(de::Error::invalid_type(de::Unexpected::Map, &self));
        }
        let mut items = Vec::new();
        while let Some((IgnoredAny, item)) = map.next_entry::<IgnoredAny, T>()? {
            items.push(item);
        }
        Ok(Records(items))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Records::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Records::default())
    }
}
