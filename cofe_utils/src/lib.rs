pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use cofe_utils::Apply;
    /// fn reply_to(subject: String, name: Option<&str>) -> String {
    ///     subject.apply_map(name, |slf, name| format!("{slf} ({name})"))
    /// }
    /// assert_eq!(reply_to("Hi".into(), None), "Hi");
    /// assert_eq!(reply_to("Hi".into(), Some("Ada")), "Hi (Ada)");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with() {
        let value = vec![1, 2].with(|v| v.push(3));
        assert_eq!(value, [1, 2, 3]);
    }

    #[test]
    fn apply_map() {
        assert_eq!(1.apply_map(Some(2), |a, b| a + b), 3);
        assert_eq!(1.apply_map(None, |a, b: i32| a + b), 1);
    }

    #[test]
    fn assert_matches_guard() {
        assert_matches!(Some(42), Some(x) if *x == 42);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_mismatch() {
        assert_matches!(None::<i32>, Some(_));
    }
}
