/// Creates a single request [`Content`](crate::Content) from a role shorthand.
///
/// ```rust
/// use arix::{Role, arix_content};
///
/// let content = arix_content!(model => "Done.");
/// assert_eq!(content.role, Role::Model);
/// assert_eq!(content.text, "Done.");
/// ```
#[macro_export]
macro_rules! arix_content {
    (user => $text:expr $(,)?) => {
        $crate::Content::new($crate::Role::User, $text)
    };
    (model => $text:expr $(,)?) => {
        $crate::Content::new($crate::Role::Model, $text)
    };
    ($role:ident => $text:expr $(,)?) => {
        compile_error!("unsupported role: use user or model");
    };
}

/// Creates a `Vec<Content>` from role/text pairs.
///
/// ```rust
/// use arix::{Role, arix_contents};
///
/// let contents = arix_contents![
///     user => "Hi",
///     model => "Hello!",
/// ];
///
/// assert_eq!(contents.len(), 2);
/// assert_eq!(contents[1].role, Role::Model);
/// ```
#[macro_export]
macro_rules! arix_contents {
    () => {
        Vec::<$crate::Content>::new()
    };
    ($($role:ident => $text:expr),+ $(,)?) => {
        vec![$($crate::arix_content!($role => $text)),+]
    };
}
