// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! or_dash {
    // Option<impl Display> → its text, or the "--" placeholder
    ($opt:expr) => {
        match $opt {
            Some(v) => v.to_string(),
            None => ::std::string::String::from($crate::config::consts::PLACEHOLDER),
        }
    };
    // Option<T> plus a formatter closure
    ($opt:expr, $fmt:expr) => {
        match $opt {
            Some(v) => ($fmt)(v),
            None => ::std::string::String::from($crate::config::consts::PLACEHOLDER),
        }
    };
}
