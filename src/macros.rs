/// Builds a [`Document`](crate::Document) from a JSON-like literal.
///
/// Top-level entries whose value is a `{ ... }` block become sections, any
/// other value becomes a global property. Values are converted with
/// `to_string()`. Entries with an empty name are skipped.
///
/// ```rust
/// use ini_doc::ini;
///
/// let doc = ini!({
///     "name": "demo",
///     "server": { "host": "localhost", "port": 8080 },
/// });
/// assert_eq!(doc.global().value("name"), Some("demo"));
/// assert_eq!(doc.get_key_path("server.port", '.'), Some("8080"));
/// ```
#[macro_export]
macro_rules! ini {
    ({}) => {
        $crate::Document::new()
    };

    ({ $($name:literal : $value:tt),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            $crate::ini!(@entry document, $name, $value);
        )*
        document
    }};

    // Section
    (@entry $doc:ident, $name:literal, { $($key:literal : $value:expr),* $(,)? }) => {{
        $doc.sections_mut().add_section($name).ok();
        if let Some(section) = $doc.section_mut($name) {
            $(
                section.properties_mut().insert($key, &$value.to_string()).ok();
            )*
        }
    }};

    // Global property
    (@entry $doc:ident, $key:literal, $value:expr) => {{
        $doc.global_mut().insert($key, &$value.to_string()).ok();
    }};
}
