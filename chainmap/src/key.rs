use std::borrow::Cow;

/// Trait for types that can be used as a map key.
///
/// Every key is reduced to its canonical string form before hashing and
/// comparison, so two keys that stringify identically are the same key:
/// `42u32`, `42i64` and `"42"` all address one entry.
///
/// Floats print the way ECMAScript's `Number::toString` does, so `1.0` is
/// `"1"`, `-0.0` is `"0"`, infinities are `"Infinity"`/`"-Infinity"` and
/// magnitudes outside `[1e-6, 1e21)` use exponent form (`"1e+21"`, `"1e-7"`).
pub trait StrKey {
    /// Returns the canonical string form of the key
    fn as_key(&self) -> Cow<'_, str>;
}

impl StrKey for str {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl StrKey for String {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl StrKey for Cow<'_, str> {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: StrKey + ?Sized> StrKey for &T {
    fn as_key(&self) -> Cow<'_, str> {
        (**self).as_key()
    }
}

impl<T: StrKey + ?Sized> StrKey for Box<T> {
    fn as_key(&self) -> Cow<'_, str> {
        (**self).as_key()
    }
}

macro_rules! display_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrKey for $t {
                fn as_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool,
);

macro_rules! float_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrKey for $t {
                fn as_key(&self) -> Cow<'_, str> {
                    let x = *self;
                    if x.is_nan() {
                        return Cow::Borrowed("NaN");
                    }
                    if x.is_infinite() {
                        return Cow::Borrowed(if x > 0.0 { "Infinity" } else { "-Infinity" });
                    }
                    if x == 0.0 {
                        return Cow::Borrowed("0");
                    }
                    let abs = x.abs();
                    if (1e-6..1e21).contains(&abs) {
                        return Cow::Owned(x.to_string());
                    }
                    Cow::Owned(signed_exponent(format!("{x:e}")))
                }
            }
        )*
    };
}

float_key!(f32, f64);

/// `1e21` -> `1e+21`; negative exponents are left alone
fn signed_exponent(formatted: String) -> String {
    if let Some((mantissa, exp)) = formatted.split_once('e') {
        if !exp.starts_with('-') {
            return format!("{mantissa}e+{exp}");
        }
    }
    formatted
}
