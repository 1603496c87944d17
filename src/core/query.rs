use url::form_urlencoded;

/// Builds a query string from `(key, value)` pairs, skipping absent values.
///
/// Keys keep the order they are supplied in. No leading `?` is added and no
/// validation of the values is performed here.
pub fn dynamic_param<I, K, V>(options: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in options {
        if let Some(value) = value {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
    }
    serializer.finish()
}
