//! Combinators over [`Optional`].
//!
//! Each combinator borrows the container and hands the callable an owned copy
//! of the held value. The callable's shape is fixed by its `FnOnce` bound, so a
//! callable with the wrong arity, parameter type, or return type fails the build
//! at the call site.
//!
//! Wrong arity:
//!
//! ```compile_fail,E0593
//! use optional::{map, present, Optional};
//! let opt: Optional<i32> = present(1).into();
//! let _ = map(&opt, |a: i32, b: i32| a + b);
//! ```
//!
//! Wrong parameter type:
//!
//! ```compile_fail,E0631
//! use optional::{map, present, Optional};
//! let opt: Optional<i32> = present(1).into();
//! let _ = map(&opt, |s: String| s.len());
//! ```
//!
//! Constructing from an inconvertible type:
//!
//! ```compile_fail,E0277
//! use optional::{present, Optional};
//! let _: Optional<i32> = present("one").into();
//! ```

use crate::optional::{Optional, present};

/// Run `action` on a copy of the held value, if any, and return `option` for chaining
///
/// `action` must return `()`; use [`map`] to produce a value.
///
/// ```compile_fail,E0308
/// use optional::{for_each, present, Optional};
/// let opt: Optional<i32> = present(1).into();
/// for_each(&opt, |v: i32| v + 1);
/// ```
pub fn for_each<T, F>(option: &Optional<T>, action: F) -> &Optional<T>
where
    T: Clone,
    F: FnOnce(T),
{
    if let Some(value) = option.as_option() {
        action(value.clone());
    }
    option
}

/// ```
/// use optional::{map, present, Optional};
/// let opt: Optional<String> = present("Hello".to_string()).into();
/// let hello_world = map(&opt, |s| s + " World");
/// assert_eq!(hello_world.get().unwrap(), "Hello World");
/// ```
pub fn map<T, R, F>(option: &Optional<T>, transform: F) -> Optional<R>
where
    T: Clone,
    F: FnOnce(T) -> R,
{
    match option.as_option() {
        Some(value) => present(transform(value.clone())).into(),
        None => Optional::new(),
    }
}

/// Bind `transform` over the held value without nesting containers
///
/// The result is empty if either `option` or the container `transform` returns is empty.
///
/// ```compile_fail,E0308
/// use optional::{flat_map, present, Optional};
/// let opt: Optional<i32> = present(1).into();
/// let _ = flat_map(&opt, |v: i32| v * 2);
/// ```
pub fn flat_map<T, R, F>(option: &Optional<T>, transform: F) -> Optional<R>
where
    T: Clone,
    F: FnOnce(T) -> Optional<R>,
{
    let Some(value) = option.as_option() else {
        return Optional::new();
    };
    transform(value.clone())
}

/// ```compile_fail,E0277
/// use optional::{filter, present, Optional};
/// let opt: Optional<i32> = present(1).into();
/// let _ = filter(&opt, |v: i32| v);
/// ```
pub fn filter<T, B, F>(option: &Optional<T>, predicate: F) -> Optional<T>
where
    T: Clone,
    F: FnOnce(T) -> B,
    B: Into<bool>,
{
    let Some(value) = option.as_option() else {
        return Optional::new();
    };
    let keep: bool = predicate(value.clone()).into();
    if !keep {
        return Optional::new();
    }
    present(value.clone()).into()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::optional::absent;

    fn is_even(v: i32) -> bool {
        v % 2 == 0
    }

    fn over_ten(v: i32) -> Optional<i32> {
        if v > 10 {
            return present(v * 2).into();
        }
        absent().into()
    }

    #[test]
    fn test_for_each() {
        let opt: Optional<i32> = present(7).into();
        let mut seen = vec![];
        let same = for_each(&opt, |v| seen.push(v));
        assert_eq!(seen, [7]);
        assert!(core::ptr::eq(same, &opt));

        let empty: Optional<i32> = absent().into();
        for_each(&empty, |v| seen.push(v));
        assert_eq!(seen, [7]);
    }

    #[test]
    fn test_basic() {
        let opt1: Optional<i32> = present(10).into();
        let mut value = 0;
        for_each(&opt1, |v| value = v);
        assert_eq!(value, 10);

        let even = filter(&opt1, is_even);
        assert_eq!(even.get(), opt1.get());
        assert_eq!(even.get_or_else(0), 10);

        let power_of_2 = filter(&opt1, |v: i32| (v & (v - 1)) == 0);
        assert!(power_of_2.is_empty());
        assert_eq!(power_of_2.get_or_else(-1), -1);

        let opt2: Optional<String> = present(String::from("Hello")).into();
        let hello_world = map(&opt2, |s| s + " World");
        assert_eq!(hello_world.get_or_else(String::new()), "Hello World");
        assert_eq!(opt2.get().unwrap(), "Hello");

        let double: Box<dyn Fn(i32) -> i32> = Box::new(|v| v * 2);
        let opt3: Optional<i32> = present(5).into();
        assert_eq!(map(&opt3, &double).get_or_else(0), 10);

        let opt4: Optional<i32> = absent().into();
        assert!(map(&opt4, &double).is_empty());
        assert_eq!(map(&opt4, &double).get_or_else(-1), -1);
    }

    #[test]
    fn test_map_changes_type() {
        let opt: Optional<Vec<i32>> = present(vec![1, 2, 3, 4, 5]).into();
        let odd = map(&opt, |mut v| {
            v.retain(|x| x % 2 != 0);
            v
        });
        assert_eq!(odd.get().unwrap(), vec![1, 3, 5]);

        let len = map(&opt, |v| v.len());
        assert_eq!(len.get(), Ok(5_usize));

        let empty: Optional<Vec<i32>> = Optional::new();
        assert_eq!(empty.get_or_else(vec![]), Vec::<i32>::new());
        assert!(map(&empty, |v| v.len()).is_empty());
    }

    #[test]
    fn test_flat_map() {
        let opt1: Optional<i32> = absent().into();
        assert!(flat_map(&opt1, over_ten).is_empty());

        let mut opt2: Optional<i32> = present(10).into();
        assert!(flat_map(&opt2, over_ten).is_empty());
        let opt3: Optional<i32> = present(5).into();
        assert!(flat_map(&opt3, over_ten).is_empty());

        opt2.assign(present(20));
        let opt4 = flat_map(&opt2, over_ten);
        assert_eq!(opt4.get(), Ok(40));
        assert_eq!(opt4.get(), over_ten(20).get());
    }

    #[test]
    fn test_filter() {
        let four: Optional<i32> = present(4).into();
        let three: Optional<i32> = present(3).into();
        let none: Optional<i32> = absent().into();
        assert_eq!(filter(&four, is_even).get(), Ok(4));
        assert!(filter(&three, is_even).is_empty());
        assert!(filter(&none, is_even).is_empty());
    }

    #[test]
    fn test_filter_into_bool() {
        struct Verdict(bool);
        impl From<Verdict> for bool {
            fn from(value: Verdict) -> Self {
                value.0
            }
        }
        let opt: Optional<&str> = present("keep").into();
        assert!(filter(&opt, |s| Verdict(s == "keep")).is_present());
        assert!(filter(&opt, |s| Verdict(s.is_empty())).is_empty());
    }

    #[test]
    fn test_chain() {
        let opt: Optional<i32> = present(6).into();
        let mut log = vec![];
        let out = map(
            &filter(for_each(&opt, |v| log.push(v)), is_even),
            |v| v.to_string(),
        );
        assert_eq!(out.get().unwrap(), "6");
        assert_eq!(log, [6]);
    }

    proptest! {
        #[test]
        fn prop_map_present(x in any::<i32>()) {
            let opt: Optional<i32> = present(x).into();
            let f = |v: i32| i64::from(v) * 3;
            prop_assert_eq!(map(&opt, f).get(), Ok(f(x)));
        }

        #[test]
        fn prop_filter_agrees_with_predicate(x in any::<i32>()) {
            let opt: Optional<i32> = present(x).into();
            prop_assert_eq!(filter(&opt, is_even).is_present(), is_even(x));
        }

        #[test]
        fn prop_flat_map_matches_inner(x in -100..100_i32) {
            let opt: Optional<i32> = present(x).into();
            prop_assert_eq!(flat_map(&opt, over_ten), over_ten(x));
        }
    }
}
