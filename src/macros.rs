/// Builds a [`Token`](crate::Token) from JSON-like syntax.
///
/// Array elements may be negative numbers, which is how pre-epoch timestamps
/// and negative lengths are written.
///
/// ```rust
/// use serde_datetime::{token, Number, Token};
///
/// assert_eq!(token!(null), Token::Null);
/// assert_eq!(token!(["2000-01-01"]), Token::Array(vec![Token::from("2000-01-01")]));
/// assert_eq!(token!([[]]), Token::Array(vec![Token::Array(vec![])]));
/// assert_eq!(token!([-1]), Token::Array(vec![Token::Number(Number::Integer(-1))]));
/// ```
#[macro_export]
macro_rules! token {
    // Array elements, accumulated one at a time.
    (@items [$($done:expr,)*]) => {
        vec![$($done),*]
    };
    (@items [$($done:expr,)*] - $number:literal $(, $($rest:tt)*)?) => {
        $crate::token!(@items [$($done,)* $crate::Token::from(-$number),] $($($rest)*)?)
    };
    (@items [$($done:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::token!(@items [$($done,)* $crate::token!($next),] $($($rest)*)?)
    };

    (null) => {
        $crate::Token::Null
    };

    ([ $($items:tt)* ]) => {
        $crate::Token::Array($crate::token!(@items [] $($items)*))
    };

    ({}) => {
        $crate::Token::Object($crate::TokenMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Token::Object(
            [$(($key.to_string(), $crate::token!($value))),*]
                .into_iter()
                .collect::<$crate::TokenMap>(),
        )
    };

    // Booleans, strings, numbers and anything else with a `From` impl.
    ($other:expr) => {
        $crate::Token::from($other)
    };
}
