use crate::util::real::NearlyEqual;

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_nearly_eq<T: NearlyEqual>(_: &T) {}
pub fn assert_same_type<T>(_: &T, _: &T) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
    ($lhs:expr, $($msg:tt)+) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                format!($($msg)+),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_false {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if value {
            panic!(
                "check failed: {}: !{}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_false;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_ord(&lhs);
        if !(lhs < rhs) {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_ord(&lhs);
        if !(lhs > rhs) {
            panic!(
                "check failed: {}: {} > {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_gt;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_ord(&lhs);
        if !(lhs <= rhs) {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_le;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_ord(&lhs);
        if !(lhs >= rhs) {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_ge;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        if !(lhs == rhs) {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_eq;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        if !(lhs != rhs) {
            panic!(
                "check failed: {}: {} != {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_ne;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_nearly_eq {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_nearly_eq(&lhs);
        if !$crate::util::real::NearlyEqual::nearly_equal(&lhs, &rhs) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_nearly_eq;

/// Like [`check!`], but only evaluated when debug assertions are enabled. Used for preconditions
/// on hot geometry code, which release builds trust.
#[allow(unused_macros)]
#[macro_export]
macro_rules! debug_check {
    ($($args:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::util::assert::check!($($args)+);
        }
    };
}
#[allow(unused_imports)]
pub use debug_check;
