/// Short name of `T`: module path and generic arguments stripped.
///
/// `alloc::vec::Vec<app::User>` becomes `Vec`, `&str` becomes `str`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    let last = head.rsplit("::").next().unwrap_or(head);
    last.trim_start_matches('&')
}

/// Key used to wrap a top-level sequence: first character lower-cased,
/// then a plain `s` appended.
pub fn plural_key(element: &str) -> String {
    let mut chars = element.chars();
    match chars.next() {
        Some(first) => first
            .to_lowercase()
            .chain(chars)
            .chain(std::iter::once('s'))
            .collect(),
        None => "s".to_string(),
    }
}
