use crate::derive::Tabular;

/// Member name of an entry's key.
pub const KEY_MEMBER: &str = "Key";

/// Member name of an entry's value.
pub const VALUE_MEMBER: &str = "Value";

/// The synthetic record a map entry is encoded as.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_codec::derive::Tabular;
///
/// #[derive(Tabular, Default, Debug, PartialEq)]
/// struct Stock {
///     prices: BTreeMap<String, f32>,
/// }
///
/// let stock = Stock { prices: BTreeMap::from([("tea".into(), 2.5)]) };
/// let text = vc_codec::try_encode(&stock).unwrap();
///
/// assert!(text.contains("prices:\t\"tea\"\t2.5"));
/// assert_eq!(vc_codec::try_decode::<Stock>(&text).unwrap(), stock);
/// ```
#[derive(Tabular, Default, Debug, Clone, PartialEq, Eq)]
#[tabular(type_path = "vc_codec::ops::KeyValue")]
pub struct KeyValue<K, V> {
    #[tabular(rename = "Key")]
    pub key: K,
    #[tabular(rename = "Value")]
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a new entry record.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::Typed;
    use crate::ops::{KEY_MEMBER, KeyValue, VALUE_MEMBER};

    #[test]
    fn member_names() {
        let info = <KeyValue<i32, bool>>::type_info().as_struct().unwrap();
        let names: Vec<_> = info.iter().map(|m| m.name()).collect();
        assert_eq!(names, [KEY_MEMBER, VALUE_MEMBER]);
        assert!(info.member(KEY_MEMBER).unwrap().type_is::<i32>());
    }
}
