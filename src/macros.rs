/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use strformat::{format, value};
///
/// let args = value!({"user": "ada", "roles": ["admin", "dev"], "active": true});
/// assert_eq!(format("%{user}: %{roles}", &[args]), "ada: admin,dev");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // any other expression goes through `From`
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Formats a template with a variadic argument list.
///
/// Each argument is converted with `Value::from`, so the single-array and
/// single-object rules of [`format`](crate::format) apply unchanged.
///
/// ```rust
/// use strformat::sprintf;
///
/// assert_eq!(sprintf!("%s scored %05.1f%%", "Ada", 97.25), "Ada scored 00097.3%");
/// assert_eq!(sprintf!("plain"), "plain");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($template:expr $(,)?) => {
        $crate::format($template, &[])
    };

    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),+])
    };
}
